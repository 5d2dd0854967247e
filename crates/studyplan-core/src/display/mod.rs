//! Display formatting for tasks, plans, profiles and summaries.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation results get newtype wrappers so the same data
//! can be shown differently by context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (StudyTask, ...)│───▶│ (DayPlan, ...)  │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Day and whole-plan views (DayPlan, PlanOverview)
//! - [`status`]: One-line results of writes (OperationStatus)
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod models;
pub mod status;

pub use collections::{DayPlan, PlanOverview};
pub use status::OperationStatus;
