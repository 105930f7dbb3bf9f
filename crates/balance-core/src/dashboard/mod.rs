//! Dashboard view model.
//!
//! The [`Dashboard`] owns the session's schedule list and the store it is
//! persisted to. It loads the list from [`SCHEDULES_SLOT`] once, falling back
//! to the built-in list whenever the slot is missing or unusable, and writes
//! the whole list back after every change.
//!
//! The derived views ([`group_by_area`], [`next_pending`],
//! [`completion_ratio`], ...) are plain functions in [`view`] so they can be
//! used without a store.
//!
//! # Examples
//!
//! ```rust
//! use balance_core::dashboard::Dashboard;
//! use balance_core::store::MemoryStore;
//! use jiff::civil::date;
//!
//! let mut dashboard = Dashboard::load(MemoryStore::new(), date(2025, 1, 6));
//! assert_eq!(dashboard.schedules().len(), 5);
//!
//! dashboard.toggle("1")?;
//! assert_eq!(dashboard.summary().completed, 2);
//! # Ok::<(), balance_core::BalanceError>(())
//! ```

pub mod assignment;
pub mod mock;
pub mod view;


use jiff::civil::Date;
use log::{debug, warn};

pub use assignment::AreaAssignment;
pub use view::{
    completed_count, completion_ratio, group_by_area, next_pending, toggle_status, AreaGroup,
    AreaProgress, DailySummary,
};

use crate::{
    error::Result,
    models::Schedule,
    store::{KeyValueStore, SCHEDULES_SLOT},
};

/// Session state behind the daily dashboard.
pub struct Dashboard<S: KeyValueStore> {
    store: S,
    schedules: Vec<Schedule>,
    assignment: AreaAssignment,
    today: Date,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Loads the persisted schedule list, or the built-in one for `today`.
    ///
    /// Never fails: a store error or an unusable blob is logged and the
    /// built-in list is used instead.
    pub fn load(store: S, today: Date) -> Self {
        let schedules = match store.get(SCHEDULES_SLOT) {
            Ok(Some(raw)) => decode_schedules(&raw).unwrap_or_else(|| {
                warn!("Ignoring unreadable '{SCHEDULES_SLOT}' slot, using built-in schedules");
                mock::builtin_schedules(today)
            }),
            Ok(None) => {
                debug!("No persisted schedules, using built-in schedules");
                mock::builtin_schedules(today)
            }
            Err(e) => {
                warn!("Failed to read '{SCHEDULES_SLOT}' slot: {e}");
                mock::builtin_schedules(today)
            }
        };

        Self {
            store,
            schedules,
            assignment: AreaAssignment::builtin(),
            today,
        }
    }

    /// Replaces the schedule-to-area assignment.
    pub fn with_assignment(mut self, assignment: AreaAssignment) -> Self {
        self.assignment = assignment;
        self
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn schedule(&self, id: &str) -> Option<&Schedule> {
        self.schedules.iter().find(|schedule| schedule.id == id)
    }

    pub fn assignment(&self) -> &AreaAssignment {
        &self.assignment
    }

    /// Areas with at least one schedule, in display order.
    pub fn groups(&self) -> Vec<AreaGroup> {
        group_by_area(&self.schedules, &self.assignment)
    }

    pub fn next_pending(&self) -> Option<&Schedule> {
        next_pending(&self.schedules)
    }

    pub fn completion_ratio(&self) -> f64 {
        completion_ratio(&self.schedules)
    }

    pub fn summary(&self) -> DailySummary {
        DailySummary::new(self.today, &self.schedules)
    }

    /// Flips a schedule between done and pending and persists the list.
    ///
    /// Returns `false`, without writing, when no schedule has that ID.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        if self.schedule(id).is_none() {
            debug!("Toggle ignored, no schedule with ID {id}");
            return Ok(false);
        }
        self.schedules = toggle_status(&self.schedules, id);
        self.persist()?;
        Ok(true)
    }

    /// Restores the built-in list and persists it.
    pub fn reset(&mut self) -> Result<()> {
        self.schedules = mock::builtin_schedules(self.today);
        self.persist()
    }

    /// Writes the full list to the store.
    pub fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.schedules)?;
        self.store.set(SCHEDULES_SLOT, &blob)?;
        debug!("Persisted {} schedules", self.schedules.len());
        Ok(())
    }

    /// Gives the store back, e.g. to reopen a dashboard over it.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Decodes a persisted blob; anything but a JSON array of schedules is
/// treated as absent.
fn decode_schedules(raw: &str) -> Option<Vec<Schedule>> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    if !value.is_array() {
        return None;
    }
    serde_json::from_value(value).ok()
}
