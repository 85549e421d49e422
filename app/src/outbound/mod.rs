//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the process-local task store with simulated network latency
//!
//! Adapters are thin translators between domain types and their backing
//! representation. They contain no business logic.

pub mod memory;
