//! Server-rendered todo application.
//!
//! The crate is split the hexagonal way: `domain` owns tasks and the
//! repository port, `outbound` adapts the port to an in-memory store,
//! `routing` holds the framework-free route table, loaders and navigation,
//! and `inbound::http` renders pages with Actix.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod routing;
#[cfg(test)]
mod test_support;

pub use domain::TraceId;
pub use middleware::Trace;
