//! Domain primitives, ports and use-cases.
//!
//! Purpose: define the task entity, the list query layer and the storage
//! port. Nothing here knows about HTTP, sessions or the in-memory adapter.
//!
//! Public surface:
//! - Task, TaskId, TaskTitle, NewTask, TaskPatch: the entity and its inputs.
//! - TaskFilter, TaskQuery, filter_tasks: list filtering.
//! - TaskService: use-cases over the [`ports::TaskRepository`] port.
//! - Error, ErrorCode: transport-agnostic failures.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod query;
pub mod task;
pub mod task_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::query::{TaskFilter, TaskQuery, UnknownTaskFilter, filter_tasks};
pub use self::task::{NewTask, Task, TaskId, TaskPatch, TaskTitle, TaskValidationError};
pub use self::task_service::TaskService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
