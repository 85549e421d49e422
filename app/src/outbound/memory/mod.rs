//! Process-local task storage.

mod latency;
mod task_store;

pub use self::latency::{LatencyProfile, StoreOperation};
pub use self::task_store::{InMemoryTaskStore, seed_tasks};
