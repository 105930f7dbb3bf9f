//! Task model definition.

use serde::{Deserialize, Serialize};

use super::{Frequency, PreferredWindow};

/// Template for a recurring activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier
    pub id: String,

    /// Goal this task serves, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,

    /// Short title shown on cards
    pub title: String,

    /// Recurrence cadence
    pub frequency: Frequency,

    /// Duration in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,

    /// Whether this is a fixed, non-negotiable commitment
    #[serde(default)]
    pub anchor: bool,

    /// Optional rationale for doing the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,

    /// Preferred time of day
    #[serde(default)]
    pub preferred_window: PreferredWindow,
}
