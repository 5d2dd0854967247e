//! High-level planner API for profiles, syllabi, plans and progress.
//!
//! The [`Planner`] is the single entry point used by interfaces. It owns the
//! data directory, runs file work on the blocking thread pool, and serializes
//! every write so that a plan regeneration and a status update can never
//! interleave and lose one another's changes.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Planner     │    │    schedule     │    │      Store      │
//! │ (plan_ops, ...) │───▶│ (estimate,      │    │  (JSON files)   │
//! │                 │    │  distribute,    │    │                 │
//! │                 │───▶│  allocate)      │    │                 │
//! │                 │─────────────────────────▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Plan generation, daily views and status updates
//! - [`profile_ops`]: Profile and syllabus intake
//! - [`progress_ops`]: Progress summaries
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use studyplan_core::{params::GeneratePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_data_dir(Some("/tmp/studyplan"))
//!     .build()
//!     .await?;
//!
//! let tasks = planner.generate_plan(&GeneratePlan::default()).await?;
//! println!("Planned {} tasks", tasks.len());
//! # Ok(())
//! # }
//! ```

use jiff::{civil::Date, Zoned};
use tokio::{sync::Mutex, task};

use crate::{error::Result, store::Store};

pub mod builder;
pub mod plan_ops;
pub mod profile_ops;
pub mod progress_ops;

pub use builder::PlannerBuilder;

/// Main planner interface.
pub struct Planner {
    pub(crate) store: Store,
    write_lock: Mutex<()>,
}

impl Planner {
    /// Creates a new planner over an opened store.
    pub(crate) fn new(store: Store) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Directory holding the plan, profile and syllabus files.
    pub fn data_dir(&self) -> &std::path::Path {
        self.store.root()
    }

    /// Runs a store operation on the blocking pool.
    pub(crate) async fn run_blocking<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Store) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        task::spawn_blocking(move || f(&store)).await?
    }

    /// Runs a store operation that writes, holding the planner's write lock.
    pub(crate) async fn run_exclusive<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Store) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let _guard = self.write_lock.lock().await;
        self.run_blocking(f).await
    }
}

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}
