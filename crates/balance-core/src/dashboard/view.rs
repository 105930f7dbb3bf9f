//! Derived views over a schedule list.
//!
//! Everything here is a pure function of its inputs; the [`super::Dashboard`]
//! owns the list and calls into these.

use jiff::civil::Date;

use super::AreaAssignment;
use crate::models::{Area, Schedule};

/// Schedules listed under one area, in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaGroup {
    pub area: Area,
    pub schedules: Vec<Schedule>,
}

impl AreaGroup {
    /// Progress card for this area.
    pub fn progress(&self) -> AreaProgress {
        AreaProgress {
            area: self.area,
            completed: completed_count(&self.schedules),
            total: self.schedules.len(),
            next: next_pending(&self.schedules).cloned(),
        }
    }
}

/// Completion counts for one area plus the task to do next.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaProgress {
    pub area: Area,
    pub completed: usize,
    pub total: usize,
    pub next: Option<Schedule>,
}

/// Aggregate progress across the whole list.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: Date,
    pub completed: usize,
    pub total: usize,
    pub ratio: f64,
    pub next: Option<Schedule>,
}

impl DailySummary {
    pub fn new(date: Date, schedules: &[Schedule]) -> Self {
        Self {
            date,
            completed: completed_count(schedules),
            total: schedules.len(),
            ratio: completion_ratio(schedules),
            next: next_pending(schedules).cloned(),
        }
    }
}

/// Partitions schedules by area.
///
/// Only areas with at least one schedule are returned, in [`Area::ALL`]
/// order.
pub fn group_by_area(schedules: &[Schedule], assignment: &AreaAssignment) -> Vec<AreaGroup> {
    Area::ALL
        .into_iter()
        .filter_map(|area| {
            let members: Vec<Schedule> = schedules
                .iter()
                .filter(|schedule| assignment.area_of(&schedule.id) == Some(area))
                .cloned()
                .collect();
            (!members.is_empty()).then_some(AreaGroup {
                area,
                schedules: members,
            })
        })
        .collect()
}

/// First pending schedule by list order.
pub fn next_pending(schedules: &[Schedule]) -> Option<&Schedule> {
    schedules.iter().find(|schedule| schedule.is_pending())
}

/// Returns a copy of the list with `id` flipped between done and pending.
///
/// Skipped or moved schedules and unknown IDs are left as they are.
pub fn toggle_status(schedules: &[Schedule], id: &str) -> Vec<Schedule> {
    schedules
        .iter()
        .map(|schedule| {
            if schedule.id == id {
                schedule.clone().with_status(schedule.status.toggled())
            } else {
                schedule.clone()
            }
        })
        .collect()
}

pub fn completed_count(schedules: &[Schedule]) -> usize {
    schedules.iter().filter(|schedule| schedule.is_done()).count()
}

/// Share of done schedules; an empty list counts as 0.
pub fn completion_ratio(schedules: &[Schedule]) -> f64 {
    if schedules.is_empty() {
        return 0.0;
    }
    completed_count(schedules) as f64 / schedules.len() as f64
}
