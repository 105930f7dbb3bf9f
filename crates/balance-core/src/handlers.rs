//! Handler functions driving the components from front-end parameters.
//!
//! ```text
//! Interface → Handler → Wizard / Dashboard → Store
//! ```
//!
//! Handlers turn the UI-level "nothing happened" outcomes into errors a
//! non-interactive caller can report: a blocked wizard step becomes
//! [`BalanceError::InvalidInput`] and an unknown schedule becomes
//! [`BalanceError::ScheduleNotFound`].

use std::collections::BTreeSet;

use log::debug;

use crate::{
    dashboard::Dashboard,
    error::{BalanceError, Result},
    models::Schedule,
    onboarding::{
        AvailabilityGrid, Draft, Handoff, OnboardingData, StepKind, Transition, Wizard,
    },
    params::{OnboardingAnswers, ScheduleId},
    store::{KeyValueStore, ONBOARDING_SLOT},
};

/// Runs the onboarding wizard to completion with the given answers.
///
/// Each step is filled in through the wizard's own actions and then
/// advanced, so the same predicates gate this path as an interactive one.
///
/// # Errors
///
/// Returns `BalanceError::InvalidInput` naming the first step whose
/// predicate does not hold.
pub fn handle_onboarding(answers: &OnboardingAnswers) -> Result<OnboardingData> {
    let draft = Draft {
        availability: if answers.clear_default_windows {
            AvailabilityGrid::empty()
        } else {
            AvailabilityGrid::weekdays()
        },
        ..Draft::default()
    };

    let mut completed = None;
    let mut wizard = Wizard::with_draft(draft, |data: OnboardingData| completed = Some(data));

    loop {
        let step = wizard.current_step();
        let progress = wizard.step_progress();
        match wizard.advance() {
            Transition::Advanced(next) => {
                debug!("{progress}: {step} done");
                fill_in(&mut wizard, next, answers);
            }
            Transition::Completed | Transition::Finished => break,
            Transition::Blocked(blocked) => {
                return Err(BalanceError::invalid_input(blocked.field())
                    .with_reason(format!("{progress}: {}", blocked.requirement())));
            }
        }
    }
    drop(wizard);

    completed.ok_or_else(|| BalanceError::Configuration {
        message: "Onboarding finished without a result".to_string(),
    })
}

/// Feeds the answers belonging to `step` into the wizard.
fn fill_in<H: Handoff>(wizard: &mut Wizard<H>, step: StepKind, answers: &OnboardingAnswers) {
    match step {
        StepKind::Welcome => {}
        StepKind::AreaSelection => {
            let areas: BTreeSet<_> = answers.areas.iter().copied().collect();
            for area in areas {
                wizard.toggle_area(area);
            }
        }
        StepKind::PriorityAssignment => {
            for (area, priority) in &answers.priorities {
                wizard.set_priority(*area, *priority);
            }
        }
        StepKind::AvailabilitySelection => {
            for (day, window) in &answers.windows {
                if !wizard.draft().availability.is_enabled(*day, *window) {
                    wizard.toggle_availability_window(*day, *window);
                }
            }
        }
    }
}

/// Stores an onboarding result in [`ONBOARDING_SLOT`].
pub fn handle_save_onboarding<S: KeyValueStore>(
    store: &mut S,
    data: &OnboardingData,
) -> Result<()> {
    let blob = serde_json::to_string(data)?;
    store.set(ONBOARDING_SLOT, &blob)
}

/// Loads the stored onboarding result, if there is a readable one.
pub fn handle_load_onboarding<S: KeyValueStore>(store: &S) -> Result<Option<OnboardingData>> {
    Ok(store
        .get(ONBOARDING_SLOT)?
        .and_then(|raw| serde_json::from_str(&raw).ok()))
}

/// Toggles a schedule and returns its new state.
///
/// # Errors
///
/// Returns `BalanceError::ScheduleNotFound` for an unknown ID.
pub fn handle_toggle<S: KeyValueStore>(
    dashboard: &mut Dashboard<S>,
    params: &ScheduleId,
) -> Result<Schedule> {
    if !dashboard.toggle(&params.id)? {
        return Err(BalanceError::ScheduleNotFound {
            id: params.id.clone(),
        });
    }
    dashboard
        .schedule(&params.id)
        .cloned()
        .ok_or_else(|| BalanceError::ScheduleNotFound {
            id: params.id.clone(),
        })
}
