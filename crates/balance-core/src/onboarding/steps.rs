//! The wizard's transition table.
//!
//! Each row pairs a step with the predicate that must hold before the wizard
//! may leave it and the mutating actions accepted while it is current.

use std::fmt;

use super::{availability::WindowPreset, draft::Draft, draft::MAX_PRIORITY};
use crate::models::Area;

/// Named onboarding steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Welcome,
    AreaSelection,
    PriorityAssignment,
    AvailabilitySelection,
}

impl StepKind {
    pub fn title(&self) -> &'static str {
        match self {
            StepKind::Welcome => "Welcome to Balance",
            StepKind::AreaSelection => "Which areas matter most?",
            StepKind::PriorityAssignment => "Set your priorities",
            StepKind::AvailabilitySelection => "When are you usually free?",
        }
    }

    /// Short field name used when reporting a blocked step.
    pub fn field(&self) -> &'static str {
        match self {
            StepKind::Welcome => "welcome",
            StepKind::AreaSelection => "areas",
            StepKind::PriorityAssignment => "priorities",
            StepKind::AvailabilitySelection => "availability",
        }
    }

    /// What the user has to do before this step can be left.
    pub fn requirement(&self) -> &'static str {
        match self {
            StepKind::Welcome => "nothing to fill in",
            StepKind::AreaSelection => "select at least one area",
            StepKind::PriorityAssignment => "give every selected area a priority",
            StepKind::AvailabilitySelection => "enable at least one time window",
        }
    }
}

/// Kinds of draft mutations, used to express what a step permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    ToggleArea,
    SetPriority,
    ClearPriority,
    ToggleWindow,
}

/// A single mutation of the onboarding draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleArea(Area),
    SetPriority(Area, u8),
    ClearPriority(Area),
    ToggleWindow { day: u8, window: WindowPreset },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ToggleArea(_) => ActionKind::ToggleArea,
            Action::SetPriority(..) => ActionKind::SetPriority,
            Action::ClearPriority(_) => ActionKind::ClearPriority,
            Action::ToggleWindow { .. } => ActionKind::ToggleWindow,
        }
    }

    /// Applies the mutation. Returns `false` if the draft was left untouched.
    pub(crate) fn apply(self, draft: &mut Draft) -> bool {
        match self {
            Action::ToggleArea(area) => {
                if !draft.selected_areas.remove(&area) {
                    draft.selected_areas.insert(area);
                }
                true
            }
            Action::SetPriority(area, value) => {
                draft.priorities.insert(area, value.min(MAX_PRIORITY));
                true
            }
            Action::ClearPriority(area) => draft.priorities.remove(&area).is_some(),
            Action::ToggleWindow { day, window } => draft.availability.toggle(day, window),
        }
    }
}

/// One row of the transition table.
pub struct StepRule {
    pub kind: StepKind,
    pub validate: fn(&Draft) -> bool,
    pub actions: &'static [ActionKind],
}

impl StepRule {
    pub fn permits(&self, action: ActionKind) -> bool {
        self.actions.contains(&action)
    }
}

impl fmt::Debug for StepRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepRule")
            .field("kind", &self.kind)
            .field("actions", &self.actions)
            .finish()
    }
}

/// The onboarding steps in order.
pub static STEPS: [StepRule; 4] = [
    StepRule {
        kind: StepKind::Welcome,
        validate: always,
        actions: &[],
    },
    StepRule {
        kind: StepKind::AreaSelection,
        validate: has_selected_area,
        actions: &[ActionKind::ToggleArea],
    },
    StepRule {
        kind: StepKind::PriorityAssignment,
        validate: every_area_prioritized,
        actions: &[ActionKind::SetPriority, ActionKind::ClearPriority],
    },
    StepRule {
        kind: StepKind::AvailabilitySelection,
        validate: has_any_window,
        actions: &[ActionKind::ToggleWindow],
    },
];

fn always(_: &Draft) -> bool {
    true
}

pub fn has_selected_area(draft: &Draft) -> bool {
    !draft.selected_areas.is_empty()
}

pub fn every_area_prioritized(draft: &Draft) -> bool {
    draft
        .selected_areas
        .iter()
        .all(|area| draft.priorities.contains_key(area))
}

pub fn has_any_window(draft: &Draft) -> bool {
    draft.availability.has_any_window()
}

/// Position of a step within the wizard, e.g. for progress headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepProgress {
    pub step: StepKind,
    /// 1-based position
    pub position: usize,
    pub total: usize,
}

impl StepProgress {
    /// Completion percentage, counting the current step as reached.
    pub fn percent(&self) -> u8 {
        ((self.position * 100) / self.total.max(1)) as u8
    }
}
