//! Lessons API trait
//!
//! The seam between the booking engine and the network. The engine only
//! talks to this trait; tests substitute a recording mock.

use async_trait::async_trait;

use crate::ClientResult;
use shared::{Lesson, Order, OrderAck};

/// REST surface of the lessons backend
#[async_trait]
pub trait LessonsApi: Send + Sync {
    /// `GET /lessons` - full catalog
    async fn fetch_lessons(&self) -> ClientResult<Vec<Lesson>>;

    /// `GET /search?q=<text>` - server-filtered catalog
    async fn search_lessons(&self, query: &str) -> ClientResult<Vec<Lesson>>;

    /// `POST /orders` - create an order
    async fn create_order(&self, order: &Order) -> ClientResult<OrderAck>;

    /// `PUT /lessons/:id` - set a lesson's remaining space
    async fn update_space(&self, lesson_id: i64, space: u32) -> ClientResult<()>;

    /// `GET /images/:name` - URL construction only, never fetched here
    fn image_url(&self, name: &str) -> String;
}
