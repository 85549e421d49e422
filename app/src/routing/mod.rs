//! Framework-agnostic routing contract.
//!
//! Purpose: describe the route table, validate search parameters, resolve
//! navigation intents and run loaders with per-route caching and pending
//! timing. The HTTP adapter drives these; nothing here depends on a web
//! framework.

mod cache;
mod history;
mod loaders;
pub mod navigation;
mod pending;
mod route;
mod search;

pub use self::cache::LoaderCache;
pub use self::history::{HISTORY_BUDGET_BYTES, HISTORY_CAPACITY, MAX_ENTRY_BYTES, NavigationHistory};
pub use self::loaders::RouteLoaders;
pub use self::navigation::NavigationTarget;
pub use self::pending::{PendingLoad, PendingPolicy, Raced};
pub use self::route::{AppRoute, Crumb};
pub use self::search::{RawListSearch, TodoListSearch};
