//! Display formatting for models, views and operation results.
//!
//! Everything formats as markdown so the CLI can hand the output straight to
//! its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Models & Views  │    │ Display impls & │    │   Formatted     │
//! │ (Schedule, ...) │───▶│ newtype wrappers│───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: Collection wrapper types ([`AreaGroups`])
//! - [`results`]: Daily summary, area cards and onboarding results
//! - [`status`]: One-line command outcomes
//! - [`datetime`]: Date formatting utilities
//!
//! ```rust
//! use balance_core::display::OperationStatus;
//!
//! let status = OperationStatus::saved("Marked 'Drink 2L water' as done");
//! assert!(status.to_string().starts_with("✓ Marked"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::AreaGroups;
pub use datetime::DayHeading;
pub use status::OperationStatus;
