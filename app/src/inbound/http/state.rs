//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they only depend on
//! the routing contract and remain testable without a live store.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::TaskRepository;
use crate::domain::TaskService;
use crate::routing::RouteLoaders;

/// Dependency bundle for page handlers.
#[derive(Clone)]
pub struct HttpState {
    pub loaders: Arc<RouteLoaders>,
}

impl HttpState {
    /// Wire loaders over a repository.
    pub fn new(repository: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
        let service = TaskService::new(repository);
        Self {
            loaders: Arc::new(RouteLoaders::new(service, clock)),
        }
    }

    /// Use-cases for mutation handlers.
    pub fn tasks(&self) -> &TaskService {
        self.loaders.tasks()
    }
}
