//! Schedule model definition.

use jiff::{
    civil::{Date, DateTime, Time},
    tz::TimeZone,
    Timestamp,
};
use serde::{Deserialize, Deserializer, Serialize};

use super::{ScheduleStatus, Task};

/// A single dated occurrence of a [`Task`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Opaque identifier
    pub id: String,

    /// ID of the task this occurrence belongs to
    pub task_id: String,

    /// The task itself, embedded so a persisted list is self-contained
    pub task: Task,

    /// Calendar date of the occurrence, written as `YYYY-MM-DD`
    #[serde(deserialize_with = "deserialize_date")]
    pub date: Date,

    /// Optional concrete start time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Time>,

    /// Optional concrete end time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Time>,

    /// Current status
    pub status: ScheduleStatus,
}

impl Schedule {
    /// Creates a pending occurrence of `task` on `date`.
    pub fn pending(id: impl Into<String>, task: Task, date: Date) -> Self {
        Self {
            id: id.into(),
            task_id: task.id.clone(),
            task,
            date,
            start: None,
            end: None,
            status: ScheduleStatus::Pending,
        }
    }

    /// Returns a copy with the given status.
    pub fn with_status(mut self, status: ScheduleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_done(&self) -> bool {
        self.status == ScheduleStatus::Done
    }

    pub fn is_pending(&self) -> bool {
        self.status == ScheduleStatus::Pending
    }
}

/// Reads a schedule date written either as a civil date or datetime, or as
/// an RFC 3339 instant such as `2025-01-06T08:15:00.000Z`. Instants keep
/// their UTC calendar date.
pub fn parse_date(raw: &str) -> Option<Date> {
    raw.parse::<Date>()
        .ok()
        .or_else(|| raw.parse::<DateTime>().ok().map(|datetime| datetime.date()))
        .or_else(|| {
            raw.parse::<Timestamp>()
                .ok()
                .map(|instant| instant.to_zoned(TimeZone::UTC).date())
        })
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid schedule date: {raw}")))
}
