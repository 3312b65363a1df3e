//! Data models
//!
//! Shared between the lessons API client and the booking engine.
//! All lesson IDs are `i64`.

pub mod lesson;
pub mod order;

// Re-exports
pub use lesson::*;
pub use order::*;
