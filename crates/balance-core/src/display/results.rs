//! Display implementations for dashboard views and the onboarding result.

use std::fmt;

use super::datetime::DayHeading;
use crate::{
    dashboard::{AreaProgress, DailySummary},
    onboarding::{OnboardingData, DAY_NAMES},
};

impl fmt::Display for AreaProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({}/{})", self.area, self.completed, self.total)?;
        writeln!(f)?;
        match &self.next {
            Some(next) => writeln!(
                f,
                "Next: {}. **{}** · {} min",
                next.id, next.task.title, next.task.duration_minutes
            ),
            None => writeln!(f, "All done for today!"),
        }
    }
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Today")?;
        writeln!(f)?;
        writeln!(f, "{}", DayHeading(&self.date))?;
        writeln!(f)?;
        writeln!(
            f,
            "- Completed: {}/{} ({:.0}%)",
            self.completed,
            self.total,
            self.ratio * 100.0
        )?;
        match &self.next {
            Some(next) => writeln!(
                f,
                "- Do now: {}. {} • {}m",
                next.id, next.task.title, next.task.duration_minutes
            ),
            None => writeln!(f, "- You're clear for now"),
        }
    }
}

impl fmt::Display for OnboardingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Your focus")?;
        writeln!(f)?;
        for area in &self.selected_areas {
            match self.priorities.get(area) {
                Some(priority) => writeln!(f, "- {area}: priority {priority}")?,
                None => writeln!(f, "- {area}")?,
            }
        }

        writeln!(f, "\n## Availability")?;
        writeln!(f)?;
        let windows = self.enabled_windows();
        for (day, name) in DAY_NAMES.iter().enumerate() {
            let labels: Vec<&str> = windows
                .iter()
                .filter(|(d, _)| usize::from(*d) == day)
                .map(|(_, window)| window.label())
                .collect();
            if !labels.is_empty() {
                writeln!(f, "- {name}: {}", labels.join(", "))?;
            }
        }

        let available = self.available_minutes();
        writeln!(f)?;
        writeln!(f, "- Available: {available} min/week")?;
        writeln!(
            f,
            "- Intensity: {} (about {} min/week for routines)",
            self.intensity,
            self.intensity.budget_minutes(available)
        )
    }
}
