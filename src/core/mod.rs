//! Run orchestration around the scoring core.

pub mod runtime;
pub mod scheduler;

pub use runtime::SnapshotRuntime;
pub use scheduler::SnapshotScheduler;
