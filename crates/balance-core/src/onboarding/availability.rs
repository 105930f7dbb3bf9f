//! Weekly availability made of fixed time-window presets.

use std::str::FromStr;

use jiff::civil::{time, Time};
use serde::{Deserialize, Serialize};

/// Number of days in the availability grid (0 = Sunday).
pub const DAYS_PER_WEEK: u8 = 7;

/// Number of window presets offered per day.
pub const PRESETS_PER_DAY: usize = 4;

/// Short day names indexed by day of week.
pub const DAY_NAMES: [&str; DAYS_PER_WEEK as usize] =
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Named clock-time range offered during availability selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WindowPreset {
    Morning,
    Lunch,
    Evening,
    Night,
}

impl WindowPreset {
    /// Every preset in display order.
    pub const ALL: [WindowPreset; PRESETS_PER_DAY] = [
        WindowPreset::Morning,
        WindowPreset::Lunch,
        WindowPreset::Evening,
        WindowPreset::Night,
    ];

    /// Key used in flattened availability strings.
    pub fn key(&self) -> &'static str {
        match self {
            WindowPreset::Morning => "morning",
            WindowPreset::Lunch => "lunch",
            WindowPreset::Evening => "evening",
            WindowPreset::Night => "night",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindowPreset::Morning => "Morning (6–9 AM)",
            WindowPreset::Lunch => "Lunch (12–2 PM)",
            WindowPreset::Evening => "Evening (6–9 PM)",
            WindowPreset::Night => "Night (9–11 PM)",
        }
    }

    pub fn start(&self) -> Time {
        match self {
            WindowPreset::Morning => time(6, 0, 0, 0),
            WindowPreset::Lunch => time(12, 0, 0, 0),
            WindowPreset::Evening => time(18, 0, 0, 0),
            WindowPreset::Night => time(21, 0, 0, 0),
        }
    }

    pub fn end(&self) -> Time {
        match self {
            WindowPreset::Morning => time(9, 0, 0, 0),
            WindowPreset::Lunch => time(14, 0, 0, 0),
            WindowPreset::Evening => time(21, 0, 0, 0),
            WindowPreset::Night => time(23, 0, 0, 0),
        }
    }

    /// Length of the window in minutes.
    pub fn minutes(&self) -> u32 {
        let to_minutes = |t: Time| i32::from(t.hour()) * 60 + i32::from(t.minute());
        (to_minutes(self.end()) - to_minutes(self.start())).unsigned_abs()
    }

    fn slot(&self) -> usize {
        match self {
            WindowPreset::Morning => 0,
            WindowPreset::Lunch => 1,
            WindowPreset::Evening => 2,
            WindowPreset::Night => 3,
        }
    }
}

impl FromStr for WindowPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(WindowPreset::Morning),
            "lunch" => Ok(WindowPreset::Lunch),
            "evening" => Ok(WindowPreset::Evening),
            "night" => Ok(WindowPreset::Night),
            _ => Err(format!("Invalid time window: {s}")),
        }
    }
}

/// Enabled flags for every (day, preset) pair of a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityGrid {
    days: [[bool; PRESETS_PER_DAY]; DAYS_PER_WEEK as usize],
}

impl AvailabilityGrid {
    /// A grid with every window disabled.
    pub fn empty() -> Self {
        Self {
            days: [[false; PRESETS_PER_DAY]; DAYS_PER_WEEK as usize],
        }
    }

    /// Weekday mornings and evenings, the starting point offered to users.
    pub fn weekdays() -> Self {
        let mut grid = Self::empty();
        for day in 1..=5 {
            grid.set(day, WindowPreset::Morning, true);
            grid.set(day, WindowPreset::Evening, true);
        }
        grid
    }

    /// Whether the window is enabled. Days outside the week are never enabled.
    pub fn is_enabled(&self, day: u8, window: WindowPreset) -> bool {
        self.days
            .get(usize::from(day))
            .is_some_and(|windows| windows[window.slot()])
    }

    /// Flips one (day, window) pair. Returns `false` for an invalid day.
    pub fn toggle(&mut self, day: u8, window: WindowPreset) -> bool {
        match self.days.get_mut(usize::from(day)) {
            Some(windows) => {
                windows[window.slot()] = !windows[window.slot()];
                true
            }
            None => false,
        }
    }

    fn set(&mut self, day: u8, window: WindowPreset, enabled: bool) {
        if let Some(windows) = self.days.get_mut(usize::from(day)) {
            windows[window.slot()] = enabled;
        }
    }

    pub fn has_any_window(&self) -> bool {
        self.days.iter().flatten().any(|enabled| *enabled)
    }

    /// Enabled pairs, ordered by day then preset.
    pub fn enabled_pairs(&self) -> impl Iterator<Item = (u8, WindowPreset)> + '_ {
        (0..DAYS_PER_WEEK).flat_map(move |day| {
            WindowPreset::ALL
                .into_iter()
                .filter(move |window| self.is_enabled(day, *window))
                .map(move |window| (day, window))
        })
    }

    /// Enabled pairs encoded as `"{day}:{windowKey}"`.
    pub fn flatten(&self) -> Vec<String> {
        self.enabled_pairs()
            .map(|(day, window)| format!("{day}:{}", window.key()))
            .collect()
    }

    /// Total minutes covered by all enabled windows.
    pub fn available_minutes(&self) -> u32 {
        self.enabled_pairs().map(|(_, window)| window.minutes()).sum()
    }
}

impl Default for AvailabilityGrid {
    fn default() -> Self {
        Self::weekdays()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_minutes() {
        assert_eq!(WindowPreset::Morning.minutes(), 180);
        assert_eq!(WindowPreset::Lunch.minutes(), 120);
        assert_eq!(WindowPreset::Evening.minutes(), 180);
        assert_eq!(WindowPreset::Night.minutes(), 120);
    }

    #[test]
    fn test_weekdays_default() {
        let grid = AvailabilityGrid::default();
        assert!(!grid.is_enabled(0, WindowPreset::Morning));
        assert!(grid.is_enabled(1, WindowPreset::Morning));
        assert!(grid.is_enabled(5, WindowPreset::Evening));
        assert!(!grid.is_enabled(3, WindowPreset::Lunch));
        assert!(!grid.is_enabled(6, WindowPreset::Evening));
        assert_eq!(grid.enabled_pairs().count(), 10);
        assert_eq!(grid.available_minutes(), 10 * 180);
    }

    #[test]
    fn test_toggle_rejects_invalid_day() {
        let mut grid = AvailabilityGrid::empty();
        assert!(!grid.toggle(7, WindowPreset::Night));
        assert!(!grid.has_any_window());
        assert!(!grid.is_enabled(7, WindowPreset::Night));
    }

    #[test]
    fn test_flatten_orders_by_day_then_preset() {
        let mut grid = AvailabilityGrid::empty();
        grid.toggle(3, WindowPreset::Night);
        grid.toggle(0, WindowPreset::Lunch);
        grid.toggle(3, WindowPreset::Morning);
        assert_eq!(grid.flatten(), vec!["0:lunch", "3:morning", "3:night"]);
    }

    #[test]
    fn test_window_parsing() {
        assert_eq!("Evening".parse::<WindowPreset>(), Ok(WindowPreset::Evening));
        assert!("dawn".parse::<WindowPreset>().is_err());
    }
}
