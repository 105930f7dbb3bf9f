//! Command handling and clap argument wrappers.
//!
//! The wrappers keep clap concerns out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Handlers
//! ```
//!
//! Each wrapper converts into its core parameter type with `From`, and
//! [`Cli`] runs the matching handler and renders the result.

use std::str::FromStr;

use anyhow::{Context, Result};
use balance_core::{
    handle_load_onboarding, handle_onboarding, handle_save_onboarding, handle_toggle,
    onboarding::{DAY_NAMES, MAX_PRIORITY},
    Area, AreaGroups, Dashboard, KeyValueStore, OnboardingAnswers, OperationStatus, ScheduleId,
    SqliteStore, WindowPreset,
};
use clap::Args;
use jiff::civil::Date;
use log::debug;

use crate::renderer::TerminalRenderer;

/// Toggle a schedule between done and pending
#[derive(Args)]
pub struct ToggleArgs {
    #[arg(help = "ID of the schedule to toggle, as shown by `balance today`")]
    pub id: String,
}

impl From<ToggleArgs> for ScheduleId {
    fn from(val: ToggleArgs) -> Self {
        ScheduleId { id: val.id }
    }
}

/// Run the onboarding non-interactively
///
/// Every wizard step is checked as if it were filled in by hand: at least
/// one area, a priority for each selected area, and at least one enabled
/// time window. Weekday mornings and evenings start enabled unless
/// --no-default-windows is given; --window only ever enables windows.
#[derive(Args)]
pub struct OnboardArgs {
    #[arg(
        short,
        long = "area",
        value_name = "AREA",
        value_delimiter = ',',
        help = "Area to focus on (body, food, sleep, home, looks, finance, career)"
    )]
    pub areas: Vec<Area>,
    #[arg(
        short,
        long = "priority",
        value_name = "AREA=N",
        help = "Priority from 0 to 10 for a selected area"
    )]
    pub priorities: Vec<PriorityArg>,
    #[arg(
        short,
        long = "window",
        value_name = "DAY:WINDOW",
        help = "Free time window, e.g. sat:morning or 6:night"
    )]
    pub windows: Vec<WindowArg>,
    #[arg(long, help = "Start from an empty week instead of weekday mornings and evenings")]
    pub no_default_windows: bool,
}

impl From<OnboardArgs> for OnboardingAnswers {
    fn from(val: OnboardArgs) -> Self {
        OnboardingAnswers {
            areas: val.areas,
            priorities: val
                .priorities
                .into_iter()
                .map(|p| (p.area, p.value))
                .collect(),
            windows: val.windows.into_iter().map(|w| (w.day, w.window)).collect(),
            clear_default_windows: val.no_default_windows,
        }
    }
}

/// `AREA=N` as given to `--priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityArg {
    pub area: Area,
    pub value: u8,
}

impl FromStr for PriorityArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (area, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected AREA=N, got '{s}'"))?;
        let value: u8 = value
            .trim()
            .parse()
            .map_err(|_| format!("Invalid priority '{value}'"))?;
        if value > MAX_PRIORITY {
            return Err(format!(
                "Priority must be between 0 and {MAX_PRIORITY}, got {value}"
            ));
        }
        Ok(PriorityArg {
            area: area.trim().parse()?,
            value,
        })
    }
}

/// `DAY:WINDOW` as given to `--window`. Days are 0 (Sunday) to 6 or names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowArg {
    pub day: u8,
    pub window: WindowPreset,
}

impl FromStr for WindowArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, window) = s
            .split_once(':')
            .ok_or_else(|| format!("Expected DAY:WINDOW, got '{s}'"))?;
        Ok(WindowArg {
            day: parse_day(day.trim())?,
            window: window.trim().parse()?,
        })
    }
}

fn parse_day(s: &str) -> Result<u8, String> {
    if let Ok(day) = s.parse::<u8>() {
        return if usize::from(day) < DAY_NAMES.len() {
            Ok(day)
        } else {
            Err(format!("Day must be between 0 and 6, got {day}"))
        };
    }

    let lower = s.to_ascii_lowercase();
    if lower.len() < 3 {
        return Err(format!("Invalid day: {s}"));
    }
    DAY_NAMES
        .iter()
        .position(|name| lower.starts_with(&name.to_ascii_lowercase()))
        .map(|day| day as u8)
        .ok_or_else(|| format!("Invalid day: {s}"))
}

/// Runs commands against one store and renders their output.
pub struct Cli {
    store: SqliteStore,
    renderer: TerminalRenderer,
    today: Date,
}

impl Cli {
    pub fn new(store: SqliteStore, renderer: TerminalRenderer, today: Date) -> Self {
        Self {
            store,
            renderer,
            today,
        }
    }

    pub fn today(&mut self) -> Result<()> {
        let dashboard = Dashboard::load(&mut self.store, self.today);
        self.renderer.render(&today_markdown(&dashboard))
    }

    pub fn toggle(&mut self, args: ToggleArgs) -> Result<()> {
        let params = ScheduleId::from(args);
        let mut dashboard = Dashboard::load(&mut self.store, self.today);
        let schedule = handle_toggle(&mut dashboard, &params)
            .with_context(|| format!("Failed to toggle schedule {}", params.id))?;

        let state = if schedule.is_done() { "done" } else { "pending" };
        let status =
            OperationStatus::saved(format!("Marked '{}' as {state}", schedule.task.title));
        self.renderer
            .render(&format!("{status}\n{}", today_markdown(&dashboard)))
    }

    pub fn next(&mut self) -> Result<()> {
        let dashboard = Dashboard::load(&mut self.store, self.today);
        let output = match dashboard.next_pending() {
            Some(schedule) => format!("# Do now\n\n{schedule}"),
            None => OperationStatus::nothing("You're clear for now").to_string(),
        };
        self.renderer.render(&output)
    }

    pub fn reset(&mut self) -> Result<()> {
        let mut dashboard = Dashboard::load(&mut self.store, self.today);
        dashboard
            .reset()
            .context("Failed to restore today's schedules")?;

        let status = OperationStatus::saved("Restored today's schedules");
        self.renderer
            .render(&format!("{status}\n{}", today_markdown(&dashboard)))
    }

    pub fn onboard(&mut self, args: OnboardArgs) -> Result<()> {
        let answers = OnboardingAnswers::from(args);
        debug!("Onboarding with {answers:?}");

        let data = handle_onboarding(&answers).context("Onboarding is incomplete")?;
        handle_save_onboarding(&mut self.store, &data)
            .context("Failed to save the onboarding result")?;

        let status = OperationStatus::saved("Saved your onboarding");
        self.renderer.render(&format!("{status}\n{data}"))
    }

    pub fn profile(&self) -> Result<()> {
        let output = match handle_load_onboarding(&self.store)? {
            Some(data) => data.to_string(),
            None => OperationStatus::nothing(
                "No onboarding saved yet. Run `balance onboard` to set one up.",
            )
            .to_string(),
        };
        self.renderer.render(&output)
    }
}

fn today_markdown<S: KeyValueStore>(dashboard: &Dashboard<S>) -> String {
    format!("{}\n{}", dashboard.summary(), AreaGroups(dashboard.groups()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_arg() {
        let arg: PriorityArg = "body=7".parse().unwrap();
        assert_eq!(arg.area, Area::Body);
        assert_eq!(arg.value, 7);

        let arg: PriorityArg = "FOOD = 3".parse().unwrap();
        assert_eq!(arg.area, Area::Nutrition);

        assert!("body".parse::<PriorityArg>().is_err());
        assert!("body=high".parse::<PriorityArg>().is_err());
        assert_eq!(
            "body=42".parse::<PriorityArg>(),
            Err("Priority must be between 0 and 10, got 42".to_string())
        );
        assert_eq!("body=10".parse::<PriorityArg>().map(|p| p.value), Ok(10));
        assert_eq!("body=0".parse::<PriorityArg>().map(|p| p.value), Ok(0));
        assert!("gym=3".parse::<PriorityArg>().is_err());
    }

    #[test]
    fn test_window_arg() {
        let arg: WindowArg = "6:night".parse().unwrap();
        assert_eq!((arg.day, arg.window), (6, WindowPreset::Night));

        let arg: WindowArg = "Monday:Morning".parse().unwrap();
        assert_eq!((arg.day, arg.window), (1, WindowPreset::Morning));

        let arg: WindowArg = "sun:lunch".parse().unwrap();
        assert_eq!(arg.day, 0);

        assert!("7:night".parse::<WindowArg>().is_err());
        assert!("mo:night".parse::<WindowArg>().is_err());
        assert!("mon:brunch".parse::<WindowArg>().is_err());
        assert!("mon".parse::<WindowArg>().is_err());
    }

    #[test]
    fn test_onboard_args_into_answers() {
        let args = OnboardArgs {
            areas: vec![Area::Sleep],
            priorities: vec![PriorityArg {
                area: Area::Sleep,
                value: 8,
            }],
            windows: vec![WindowArg {
                day: 2,
                window: WindowPreset::Lunch,
            }],
            no_default_windows: true,
        };
        let answers = OnboardingAnswers::from(args);
        assert_eq!(answers.priorities, vec![(Area::Sleep, 8)]);
        assert_eq!(answers.windows, vec![(2, WindowPreset::Lunch)]);
        assert!(answers.clear_default_windows);
    }
}
