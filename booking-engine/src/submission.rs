//! Order submission state machine
//!
//! `Idle -> Submitting -> {Committed, Failed}`; `Committed`/`Failed` return
//! to `Idle` when acknowledged. Failure persists until the next action;
//! the UI layer owns any fixed-delay auto-clear of the success state.

/// Why a submission attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// The order POST was rejected; no state was mutated
    OrderCreation,
    /// One or more inventory PUTs were rejected after the order was created
    InventoryUpdate { failed: Vec<i64> },
}

/// Current submission status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Committed,
    Failed(SubmissionFailure),
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, SubmissionState::Committed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SubmissionState::Failed(_))
    }
}
