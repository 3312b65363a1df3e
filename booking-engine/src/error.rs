//! Engine error types

use booking_client::ClientError;
use thiserror::Error;

/// Engine error type
///
/// Catalog fetch failures are logged and swallowed by the engine (the
/// prior list stays visible), so only submission-path failures surface
/// through this type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Order creation (POST) was rejected; nothing was mutated
    #[error("order creation failed: {0}")]
    OrderCreation(#[source] ClientError),

    /// One or more inventory updates (PUT) were rejected in phase two
    #[error("inventory update failed for lessons {failed:?}")]
    InventoryUpdate { failed: Vec<i64> },

    /// Checkout form invalid or cart empty
    #[error("checkout is not ready for submission")]
    CheckoutIncomplete,

    /// A submission is already in flight
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
