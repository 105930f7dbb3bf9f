//! Parameter structures for balance operations.
//!
//! These are interface-agnostic: the CLI builds them from its clap argument
//! types and hands them to [`crate::handlers`]. Keeping them free of
//! framework derives lets another front end reuse the same handlers.

use serde::{Deserialize, Serialize};

use crate::{models::Area, onboarding::WindowPreset};

/// Identifies a single schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleId {
    /// The ID of the schedule to operate on
    pub id: String,
}

/// Answers for a non-interactive onboarding run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingAnswers {
    /// Areas to select, in any order; duplicates are ignored
    pub areas: Vec<Area>,
    /// Priority per area; later entries win
    pub priorities: Vec<(Area, u8)>,
    /// Windows to enable as (day, window) pairs
    pub windows: Vec<(u8, WindowPreset)>,
    /// Start from an empty week instead of weekday mornings and evenings
    pub clear_default_windows: bool,
}
