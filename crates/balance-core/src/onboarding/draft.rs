//! Onboarding draft state and the record handed off on completion.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::availability::{AvailabilityGrid, WindowPreset, DAYS_PER_WEEK};
use crate::models::Area;

/// Highest priority an area can be given.
pub const MAX_PRIORITY: u8 = 10;

/// Answers collected so far, owned by the wizard until hand-off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Areas the user wants to focus on
    pub selected_areas: BTreeSet<Area>,

    /// Priority per area in `0..=MAX_PRIORITY`
    pub priorities: BTreeMap<Area, u8>,

    /// Weekly availability
    pub availability: AvailabilityGrid,
}

impl Draft {
    /// Packages the draft into the completion record.
    ///
    /// Priorities of areas that were deselected after being prioritized are
    /// dropped.
    pub fn to_data(&self) -> OnboardingData {
        let priorities = self
            .priorities
            .iter()
            .filter(|(area, _)| self.selected_areas.contains(area))
            .map(|(area, priority)| (*area, *priority))
            .collect();

        OnboardingData {
            selected_areas: self.selected_areas.iter().copied().collect(),
            priorities,
            weekly_minutes: 0,
            intensity: Intensity::default(),
            availabilities: self.availability.flatten(),
        }
    }
}

/// How aggressively a plan should use the available time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum Intensity {
    Minimal,
    #[default]
    Moderate,
    Aggressive,
}

impl Intensity {
    pub fn level(&self) -> u8 {
        match self {
            Intensity::Minimal => 1,
            Intensity::Moderate => 2,
            Intensity::Aggressive => 3,
        }
    }

    /// Share of the available time a plan at this intensity may claim.
    pub fn utilization(&self) -> f64 {
        match self {
            Intensity::Minimal => 0.35,
            Intensity::Moderate => 0.5,
            Intensity::Aggressive => 0.75,
        }
    }

    /// Minutes a plan may claim out of `available_minutes`, rounded to the nearest minute.
    pub fn budget_minutes(&self, available_minutes: u32) -> u32 {
        (f64::from(available_minutes) * self.utilization()).round() as u32
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.level()
    }
}

impl TryFrom<u8> for Intensity {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Intensity::Minimal),
            2 => Ok(Intensity::Moderate),
            3 => Ok(Intensity::Aggressive),
            _ => Err(format!("Invalid intensity level: {level}")),
        }
    }
}

/// Result of a completed onboarding, handed to the caller exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    /// Selected areas in display order
    pub selected_areas: Vec<Area>,

    /// Priority for each selected area
    pub priorities: BTreeMap<Area, u8>,

    /// Reserved; not computed during onboarding
    pub weekly_minutes: u32,

    /// Reserved; always the baseline during onboarding
    pub intensity: Intensity,

    /// Enabled windows as `"{day}:{windowKey}"`
    pub availabilities: Vec<String>,
}

impl OnboardingData {
    /// Decodes the flattened availability back into (day, window) pairs.
    ///
    /// Entries that do not parse are skipped.
    pub fn enabled_windows(&self) -> Vec<(u8, WindowPreset)> {
        self.availabilities
            .iter()
            .filter_map(|entry| {
                let (day, key) = entry.split_once(':')?;
                let day: u8 = day.parse().ok()?;
                let window: WindowPreset = key.parse().ok()?;
                (day < DAYS_PER_WEEK).then_some((day, window))
            })
            .collect()
    }

    /// Minutes covered by the enabled windows.
    pub fn available_minutes(&self) -> u32 {
        self.enabled_windows()
            .iter()
            .map(|(_, window)| window.minutes())
            .sum()
    }
}
