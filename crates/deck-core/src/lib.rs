//! # deck-core
//!
//! Core types shared across all Taskdeck crates:
//! - Entity structs for the server-owned resources (users, projects, tasks)
//! - Status enums with state machine transitions
//! - Cross-cutting error types
//!
//! Entities mirror the server's wire format; the client caches and displays
//! them but never validates their contents beyond deserialization.

pub mod entities;
pub mod enums;
pub mod errors;

pub use entities::{Project, Task, User};
pub use enums::TaskStatus;
pub use errors::CoreError;
