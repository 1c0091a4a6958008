//! Core domain models and board logic for Taskboard.
//!
//! Everything in this crate is pure: no I/O, no DOM, no HTTP. The web
//! client layers the store adapters and rendering on top of these types.

pub mod clock;
pub mod draft;
pub mod id;
pub mod seq;
pub mod task;

pub use clock::{Clock, SystemClock};
pub use draft::{DraftError, TaskDraft};
pub use id::{IdSource, UuidIdSource};
pub use seq::RequestSeq;
pub use task::{Board, Bucket, Category, Task, TaskId, TaskRepository};
