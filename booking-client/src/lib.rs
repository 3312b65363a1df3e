//! Booking Client - HTTP client for the lessons API
//!
//! Provides network-based HTTP calls to the lessons catalog and order
//! endpoints, plus the [`LessonsApi`] trait the booking engine consumes.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::LessonsApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{Lesson, Order, OrderAck, OrderLine, SpaceUpdate};
