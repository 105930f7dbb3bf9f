//! Display implementations for domain models.

use std::fmt;

use crate::{
    models::{Area, Frequency, PreferredWindow, Schedule, ScheduleStatus, Task},
    onboarding::{Intensity, StepKind, StepProgress, WindowPreset},
};

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PreferredWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WindowPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intensity::Minimal => "minimal",
            Intensity::Moderate => "moderate",
            Intensity::Aggressive => "aggressive",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for StepProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {} of {} · {}% complete",
            self.position,
            self.total,
            self.percent()
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** · {} min · {}", self.title, self.duration_minutes, self.frequency)?;
        if self.anchor {
            write!(f, " · anchor")?;
        }
        Ok(())
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}. {} ({})", self.id, self.task, self.status.with_icon())?;
        if let (Some(start), Some(end)) = (self.start, self.end) {
            write!(
                f,
                " {}–{}",
                start.strftime("%H:%M"),
                end.strftime("%H:%M")
            )?;
        }
        writeln!(f)?;
        if let Some(why) = &self.task.why {
            writeln!(f, "  - Why: {why}")?;
        }
        Ok(())
    }
}
