//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::dashboard::AreaGroup;

/// Newtype wrapper for displaying the dashboard's area cards.
///
/// ```rust
/// use balance_core::dashboard::{group_by_area, mock, AreaAssignment};
/// use balance_core::display::AreaGroups;
/// use jiff::civil::date;
///
/// let schedules = mock::builtin_schedules(date(2025, 1, 6));
/// let groups = AreaGroups(group_by_area(&schedules, &AreaAssignment::builtin()));
/// assert!(groups.to_string().contains("## Body & Health (1/2)"));
/// ```
pub struct AreaGroups(pub Vec<AreaGroup>);

impl AreaGroups {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AreaGroup> {
        self.0.iter()
    }
}

impl IntoIterator for AreaGroups {
    type Item = AreaGroup;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for AreaGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No schedules for today.");
        }
        for (i, group) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", group.progress())?;
        }
        Ok(())
    }
}
