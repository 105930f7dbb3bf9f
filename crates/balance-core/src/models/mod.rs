//! Data models for areas, tasks and schedules.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping formatting out of the data types.
//!
//! # Examples
//!
//! ```rust
//! use balance_core::models::{Area, ScheduleStatus};
//!
//! assert_eq!(Area::Nutrition.code(), "FOOD");
//! assert_eq!("looks".parse::<Area>(), Ok(Area::Appearance));
//! assert_eq!(ScheduleStatus::Done.toggled(), ScheduleStatus::Pending);
//! ```

pub mod area;
pub mod schedule;
pub mod status;
pub mod task;

#[cfg(test)]
mod tests;

pub use area::Area;
pub use schedule::Schedule;
pub use status::{Frequency, PreferredWindow, ScheduleStatus};
pub use task::Task;
