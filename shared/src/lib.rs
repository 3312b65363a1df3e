//! Shared types for the lesson booking system
//!
//! Wire and domain models used by both the HTTP client and the
//! booking engine.

pub mod models;

// Re-exports
pub use models::{Lesson, Order, OrderAck, OrderLine, SpaceUpdate};
pub use serde::{Deserialize, Serialize};
