//! Core library for the Balance habit planner.
//!
//! This crate provides the two interactive components of the planner and the
//! storage they persist to:
//!
//! - **Onboarding** ([`onboarding`]): a linear wizard that collects focus
//!   areas, priorities and weekly availability, and hands the result off once
//! - **Dashboard** ([`dashboard`]): today's schedules grouped by life area,
//!   with progress, the next pending item and done/pending toggling
//! - **Storage** ([`store`]): string-keyed blob slots behind the
//!   [`KeyValueStore`] trait, backed by SQLite or memory
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] as markdown, and the wrappers
//! in [`display`] format collections and summaries. The CLI renders that
//! markdown to the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use balance_core::{Dashboard, MemoryStore, ScheduleStatus};
//! use jiff::civil::date;
//!
//! let mut dashboard = Dashboard::load(MemoryStore::new(), date(2025, 1, 6));
//! let next = dashboard.next_pending().map(|s| s.id.clone());
//! assert_eq!(next.as_deref(), Some("1"));
//!
//! dashboard.toggle("1")?;
//! assert_eq!(dashboard.schedules()[0].status, ScheduleStatus::Done);
//! println!("{}", dashboard.summary());
//! # Ok::<(), balance_core::BalanceError>(())
//! ```

pub mod dashboard;
pub mod display;
pub mod error;
pub mod handlers;
pub mod models;
pub mod onboarding;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use dashboard::{AreaAssignment, Dashboard, DailySummary};
pub use display::{AreaGroups, DayHeading, OperationStatus};
pub use error::{BalanceError, Result};
pub use handlers::{
    handle_load_onboarding, handle_onboarding, handle_save_onboarding, handle_toggle,
};
pub use models::{Area, Frequency, PreferredWindow, Schedule, ScheduleStatus, Task};
pub use onboarding::{Intensity, OnboardingData, Transition, WindowPreset, Wizard};
pub use params::{OnboardingAnswers, ScheduleId};
pub use store::{
    KeyValueStore, MemoryStore, SqliteStore, StoreBuilder, ONBOARDING_SLOT, SCHEDULES_SLOT,
};
