//! Booking engine state record and operations
//!
//! Owns the catalog, cart, checkout form, and submission state. All
//! mutation goes through the methods here; a UI layer observes through
//! the accessors. Single-owner `&mut` access is the concurrency model -
//! callers embedding the engine in a parallel runtime wrap it in a lock.

use std::collections::BTreeMap;
use std::sync::Arc;

use booking_client::LessonsApi;
use futures::future;
use shared::{Lesson, Order, OrderLine};

use crate::cart::{Cart, CartEntry};
use crate::catalog::Catalog;
use crate::checkout::CheckoutForm;
use crate::error::{EngineError, EngineResult};
use crate::sort::{SortDirection, SortField, sort_lessons};
use crate::submission::{SubmissionFailure, SubmissionState};

/// Client-side cart/inventory state engine
pub struct BookingEngine {
    api: Arc<dyn LessonsApi>,
    catalog: Catalog,
    cart: Cart,
    checkout: CheckoutForm,
    submission: SubmissionState,
}

impl BookingEngine {
    pub fn new(api: Arc<dyn LessonsApi>) -> Self {
        Self {
            api,
            catalog: Catalog::new(),
            cart: Cart::new(),
            checkout: CheckoutForm::default(),
            submission: SubmissionState::Idle,
        }
    }

    // ========== Catalog Store ==========

    /// Fetch the full catalog and replace the in-memory list.
    ///
    /// On failure the prior list stays as-is and the error is logged, not
    /// surfaced. Returns whether the list was refreshed.
    pub async fn load_all(&mut self) -> bool {
        self.clear_submission_status();
        self.refresh_catalog().await
    }

    /// Fetch a server-filtered catalog for `query` and replace the list.
    ///
    /// The server result is authoritative and may overwrite locally
    /// decremented `space` values. An empty query falls back to
    /// [`load_all`](Self::load_all).
    pub async fn search(&mut self, query: &str) -> bool {
        if query.is_empty() {
            return self.load_all().await;
        }

        self.clear_submission_status();
        match self.api.search_lessons(query).await {
            Ok(lessons) => {
                self.catalog.replace(lessons);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, query, "search failed; keeping previous catalog");
                false
            }
        }
    }

    pub fn lessons(&self) -> &[Lesson] {
        self.catalog.lessons()
    }

    /// Presentation order for the current catalog; never mutates it.
    pub fn sorted_lessons(&self, field: SortField, direction: SortDirection) -> Vec<Lesson> {
        sort_lessons(self.catalog.lessons(), field, direction)
    }

    pub fn image_url(&self, name: &str) -> String {
        self.api.image_url(name)
    }

    // ========== Cart Reservation Manager ==========

    /// Reserve one unit of `lesson_id`: append a cart entry and decrement
    /// the lesson's space as one step. No-op (returns false) when the
    /// lesson is unknown or has no space left.
    pub fn add_to_cart(&mut self, lesson_id: i64) -> bool {
        let Some(lesson) = self.catalog.find_mut(lesson_id) else {
            return false;
        };
        if lesson.space == 0 {
            return false;
        }

        lesson.space -= 1;
        let entry = CartEntry::from_lesson(lesson);
        self.cart.push(entry);
        true
    }

    /// Release the reservation at `position`: restore the lesson's space
    /// and drop the entry. If a refresh removed the lesson from the
    /// catalog the restoration is skipped but the entry still goes.
    pub fn remove_from_cart(&mut self, position: usize) -> bool {
        let Some(entry) = self.cart.remove(position) else {
            return false;
        };

        match self.catalog.find_mut(entry.lesson_id) {
            Some(lesson) => lesson.space += 1,
            None => {
                tracing::debug!(
                    lesson_id = entry.lesson_id,
                    "lesson no longer in catalog; space not restored"
                );
            }
        }
        true
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    pub fn quantity_by_lesson(&self) -> BTreeMap<i64, u32> {
        self.cart.quantity_by_lesson()
    }

    // ========== Checkout ==========

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.checkout.name = name.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.checkout.phone = phone.into();
    }

    pub fn checkout(&self) -> &CheckoutForm {
        &self.checkout
    }

    /// Both form fields valid and at least one reservation in the cart.
    pub fn is_checkout_enabled(&self) -> bool {
        self.checkout.is_valid() && !self.cart.is_empty()
    }

    // ========== Order Submission Coordinator ==========

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Acknowledge a committed/failed submission, returning to idle.
    pub fn acknowledge(&mut self) {
        if !self.submission.is_submitting() {
            self.submission = SubmissionState::Idle;
        }
    }

    /// Commit the cart through the two-phase protocol.
    ///
    /// Phase one POSTs the aggregated order; a rejection aborts with no
    /// state touched. Phase two PUTs the locally-tracked space for every
    /// distinct lesson in the cart, all calls in flight concurrently, and
    /// inspects each result. Only when every update lands is the cart
    /// cleared and the state committed; otherwise the cart stays visible
    /// and the attempt is marked failed. Either way the catalog is
    /// refreshed afterwards to reconcile drift. No retries; a new attempt
    /// needs a new user action.
    pub async fn submit_order(&mut self) -> EngineResult<()> {
        if self.submission.is_submitting() {
            return Err(EngineError::AlreadySubmitting);
        }
        if !self.is_checkout_enabled() {
            return Err(EngineError::CheckoutIncomplete);
        }

        self.submission = SubmissionState::Submitting;

        let order = self.build_order();
        if let Err(e) = self.api.create_order(&order).await {
            tracing::warn!(error = %e, "order creation rejected; cart left untouched");
            self.submission = SubmissionState::Failed(SubmissionFailure::OrderCreation);
            return Err(EngineError::OrderCreation(e));
        }

        // Space values were already decremented by add_to_cart, so pushing
        // the current catalog values reconciles the purchase.
        let mut updates: Vec<(i64, u32)> = Vec::new();
        for id in self.cart.quantity_by_lesson().into_keys() {
            match self.catalog.find(id) {
                Some(lesson) => updates.push((id, lesson.space)),
                None => {
                    tracing::debug!(
                        lesson_id = id,
                        "lesson no longer in catalog; skipping inventory update"
                    );
                }
            }
        }

        let api = &self.api;
        let results = future::join_all(updates.into_iter().map(|(id, space)| async move {
            (id, api.update_space(id, space).await)
        }))
        .await;

        let failed: Vec<i64> = results
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!(lesson_id = id, error = %e, "inventory update rejected");
                    Some(id)
                }
            })
            .collect();

        if failed.is_empty() {
            self.cart.clear();
            self.checkout.clear();
            self.submission = SubmissionState::Committed;
            self.refresh_catalog().await;
            Ok(())
        } else {
            // The order was created but some space values did not land.
            // There is no client-side rollback; keep the cart visible and
            // resync from the server.
            self.submission = SubmissionState::Failed(SubmissionFailure::InventoryUpdate {
                failed: failed.clone(),
            });
            self.refresh_catalog().await;
            Err(EngineError::InventoryUpdate { failed })
        }
    }

    /// Aggregate the cart into the order payload: one line per distinct
    /// lesson, quantity = entry count for that lesson.
    fn build_order(&self) -> Order {
        let mut lines: BTreeMap<i64, OrderLine> = BTreeMap::new();
        for entry in self.cart.entries() {
            lines
                .entry(entry.lesson_id)
                .and_modify(|line| line.quantity += 1)
                .or_insert_with(|| OrderLine {
                    id: entry.lesson_id,
                    topic: entry.topic.clone(),
                    price: entry.price,
                    quantity: 1,
                });
        }

        Order {
            name: self.checkout.name.clone(),
            phone: self.checkout.phone.clone(),
            lessons: lines.into_values().collect(),
        }
    }

    /// Replace the catalog from the server without touching submission
    /// state (used both by public loads and post-commit reconciliation).
    async fn refresh_catalog(&mut self) -> bool {
        match self.api.fetch_lessons().await {
            Ok(lessons) => {
                self.catalog.replace(lessons);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog fetch failed; keeping previous list");
                false
            }
        }
    }

    /// The visible dataset is changing; drop any pending result message.
    fn clear_submission_status(&mut self) {
        if !self.submission.is_submitting() {
            self.submission = SubmissionState::Idle;
        }
    }
}
