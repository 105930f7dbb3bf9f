//! Status and cadence enumerations for tasks and schedules.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of schedule statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleStatus {
    /// Occurrence still to be done
    #[default]
    Pending,

    /// Occurrence completed
    Done,

    /// Occurrence deliberately skipped
    Skipped,

    /// Occurrence moved to another slot
    Moved,
}

impl FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ScheduleStatus::Pending),
            "done" => Ok(ScheduleStatus::Done),
            "skipped" => Ok(ScheduleStatus::Skipped),
            "moved" => Ok(ScheduleStatus::Moved),
            _ => Err(format!("Invalid schedule status: {s}")),
        }
    }
}

impl ScheduleStatus {
    /// Serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "PENDING",
            ScheduleStatus::Done => "DONE",
            ScheduleStatus::Skipped => "SKIPPED",
            ScheduleStatus::Moved => "MOVED",
        }
    }

    /// The status after a quick-complete toggle.
    ///
    /// Only the two actionable states swap; skipped and moved occurrences
    /// are left as they are.
    pub fn toggled(self) -> Self {
        match self {
            ScheduleStatus::Pending => ScheduleStatus::Done,
            ScheduleStatus::Done => ScheduleStatus::Pending,
            ScheduleStatus::Skipped => ScheduleStatus::Skipped,
            ScheduleStatus::Moved => ScheduleStatus::Moved,
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use balance_core::models::ScheduleStatus;
    ///
    /// assert_eq!(ScheduleStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(ScheduleStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ScheduleStatus::Done => "✓ Done",
            ScheduleStatus::Pending => "○ Pending",
            ScheduleStatus::Skipped => "↷ Skipped",
            ScheduleStatus::Moved => "→ Moved",
        }
    }
}

/// How often a task recurs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            _ => Err(format!("Invalid frequency: {s}")),
        }
    }
}

/// Part of the day a task is best done in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PreferredWindow {
    Morning,
    Evening,
    #[default]
    Any,
}

impl PreferredWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredWindow::Morning => "morning",
            PreferredWindow::Evening => "evening",
            PreferredWindow::Any => "any",
        }
    }
}
