//! Mapping from schedules to the area they are shown under.

use std::collections::BTreeMap;

use crate::models::Area;

/// Caller-supplied assignment of schedule IDs to areas.
///
/// Schedules without an entry count towards totals but are not listed under
/// any area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaAssignment {
    areas: BTreeMap<String, Area>,
}

impl AreaAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assignment matching the built-in schedule list.
    pub fn builtin() -> Self {
        [
            ("1", Area::Body),
            ("2", Area::Body),
            ("3", Area::Nutrition),
            ("4", Area::Home),
            ("5", Area::Appearance),
        ]
        .into_iter()
        .collect()
    }

    /// Assigns a schedule to an area, replacing any earlier assignment.
    pub fn assign(&mut self, schedule_id: impl Into<String>, area: Area) {
        self.areas.insert(schedule_id.into(), area);
    }

    pub fn area_of(&self, schedule_id: &str) -> Option<Area> {
        self.areas.get(schedule_id).copied()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Area)> for AreaAssignment {
    fn from_iter<I: IntoIterator<Item = (S, Area)>>(iter: I) -> Self {
        Self {
            areas: iter
                .into_iter()
                .map(|(id, area)| (id.into(), area))
                .collect(),
        }
    }
}
