//! Booking Engine - client-side cart/inventory state engine
//!
//! Keeps a local shopping cart synchronized with a remote catalog of
//! bookable lessons, validates checkout input, and commits purchases
//! through a two-phase protocol (create order, then reconcile inventory).
//!
//! All state lives in one [`BookingEngine`] record; a UI layer observes it
//! through accessors and mutates it only through the engine's operations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod engine;
pub mod error;
pub mod sort;
pub mod submission;

pub use cart::{Cart, CartEntry};
pub use catalog::Catalog;
pub use checkout::{CheckoutForm, is_name_valid, is_phone_valid};
pub use engine::BookingEngine;
pub use error::{EngineError, EngineResult};
pub use sort::{SortDirection, SortField, sort_lessons};
pub use submission::{SubmissionFailure, SubmissionState};

// Re-export shared types for convenience
pub use shared::{Lesson, Order, OrderLine};
