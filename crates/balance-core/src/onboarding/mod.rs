//! Onboarding wizard state machine.
//!
//! The wizard walks a fixed sequence of steps (see [`steps::STEPS`]). Moving
//! forward requires the current step's predicate to hold; moving back never
//! does. Draft mutations go through [`Wizard::apply`], which only accepts the
//! actions the current step permits.
//!
//! A blocked advance is not an error: the wizard stays where it is and
//! reports [`Transition::Blocked`], mirroring a disabled "Continue" button.
//!
//! # Examples
//!
//! ```rust
//! use balance_core::models::Area;
//! use balance_core::onboarding::{OnboardingData, Transition, Wizard};
//!
//! let mut result = None;
//! {
//!     let mut wizard = Wizard::new(|data: OnboardingData| result = Some(data));
//!     wizard.advance();
//!     wizard.toggle_area(Area::Sleep);
//!     wizard.advance();
//!     wizard.set_priority(Area::Sleep, 9);
//!     wizard.advance();
//!     assert_eq!(wizard.advance(), Transition::Completed);
//! }
//! assert_eq!(result.unwrap().priorities[&Area::Sleep], 9);
//! ```

pub mod availability;
pub mod draft;
pub mod steps;


use log::debug;

pub use availability::{AvailabilityGrid, WindowPreset, DAYS_PER_WEEK, DAY_NAMES};
pub use draft::{Draft, Intensity, OnboardingData, MAX_PRIORITY};
pub use steps::{Action, ActionKind, StepKind, StepProgress, StepRule, STEPS};

use crate::models::Area;

/// Receives the completion record of a wizard.
pub trait Handoff {
    fn hand_off(&mut self, data: OnboardingData);
}

impl<F> Handoff for F
where
    F: FnMut(OnboardingData),
{
    fn hand_off(&mut self, data: OnboardingData) {
        self(data)
    }
}

/// Outcome of [`Wizard::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved forward; carries the new current step
    Advanced(StepKind),
    /// The current step's predicate does not hold; nothing changed
    Blocked(StepKind),
    /// The last step was passed and the result was handed off
    Completed,
    /// The wizard had already completed; nothing changed
    Finished,
}

/// Linear multi-step onboarding form.
pub struct Wizard<H: Handoff> {
    index: usize,
    draft: Draft,
    handoff: H,
    completed: bool,
}

impl<H: Handoff> Wizard<H> {
    /// Creates a wizard at the first step with the default draft.
    pub fn new(handoff: H) -> Self {
        Self::with_draft(Draft::default(), handoff)
    }

    /// Creates a wizard at the first step with a prepared draft.
    pub fn with_draft(draft: Draft, handoff: H) -> Self {
        Self {
            index: 0,
            draft,
            handoff,
            completed: false,
        }
    }

    pub fn step_index(&self) -> usize {
        self.index
    }

    pub fn step_count(&self) -> usize {
        STEPS.len()
    }

    pub fn current_step(&self) -> StepKind {
        self.rule().kind
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn step_progress(&self) -> StepProgress {
        StepProgress {
            step: self.current_step(),
            position: self.index + 1,
            total: self.step_count(),
        }
    }

    fn rule(&self) -> &'static StepRule {
        &STEPS[self.index]
    }

    fn is_last_step(&self) -> bool {
        self.index + 1 == STEPS.len()
    }

    /// Whether the current step's predicate holds.
    pub fn can_proceed(&self) -> bool {
        !self.completed && (self.rule().validate)(&self.draft)
    }

    /// Moves to the next step, or completes the wizard at the last one.
    pub fn advance(&mut self) -> Transition {
        if self.completed {
            return Transition::Finished;
        }

        let current = self.current_step();
        if !self.can_proceed() {
            debug!("Advance blocked at {current:?}");
            return Transition::Blocked(current);
        }

        if self.is_last_step() {
            self.completed = true;
            debug!("Onboarding completed");
            self.handoff.hand_off(self.draft.to_data());
            return Transition::Completed;
        }

        self.index += 1;
        debug!("Advanced from {current:?} to {:?}", self.current_step());
        Transition::Advanced(self.current_step())
    }

    /// Moves to the previous step. Returns `false` at the first step.
    pub fn retreat(&mut self) -> bool {
        if self.completed || self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Applies a draft mutation if the current step permits it.
    ///
    /// Returns `true` when the draft was changed.
    pub fn apply(&mut self, action: Action) -> bool {
        if self.completed || !self.rule().permits(action.kind()) {
            debug!("Rejected {action:?} at step {:?}", self.current_step());
            return false;
        }
        action.apply(&mut self.draft)
    }

    pub fn toggle_area(&mut self, area: Area) -> bool {
        self.apply(Action::ToggleArea(area))
    }

    /// Sets a priority, clamped to [`MAX_PRIORITY`].
    pub fn set_priority(&mut self, area: Area, value: u8) -> bool {
        self.apply(Action::SetPriority(area, value))
    }

    pub fn clear_priority(&mut self, area: Area) -> bool {
        self.apply(Action::ClearPriority(area))
    }

    pub fn toggle_availability_window(&mut self, day: u8, window: WindowPreset) -> bool {
        self.apply(Action::ToggleWindow { day, window })
    }
}
