//! Plan generation building blocks.
//!
//! ```text
//! topics ─▶ estimator ─▶ total minutes ─▶ distributor ─▶ daily shares
//!    │                                                      │
//!    └──────────────────────▶ allocator ◀───────────────────┘
//!                                │
//!                                ▼
//!                         dated study tasks
//! ```
//!
//! All three stages are pure functions; persistence and logging happen in
//! [`crate::planner`].

pub mod allocator;
pub mod distributor;
pub mod estimator;

pub use allocator::allocate;
pub use distributor::distribute;
pub use estimator::{estimate, estimate_topics, BASE_DURATION_MINUTES, DIFFICULTY_STEP_MINUTES};
