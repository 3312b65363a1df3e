//! Lesson Model

use serde::{Deserialize, Serialize};

/// Catalog entry for a bookable lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub topic: String,
    pub subject: String,
    pub location: String,
    pub price: f64,
    /// Remaining bookable units as last known to the client
    pub space: u32,
    /// Image file name, resolved against `/images/:name`
    pub image: String,
}

/// Inventory update payload (`PUT /lessons/:id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceUpdate {
    pub space: u32,
}
