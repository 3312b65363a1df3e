//! Order Model

use serde::{Deserialize, Serialize};

/// Order creation payload (`POST /orders`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub name: String,
    pub phone: String,
    pub lessons: Vec<OrderLine>,
}

/// One aggregated order line
///
/// `quantity` is the number of cart entries sharing this lesson id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i64,
    pub topic: String,
    pub price: f64,
    pub quantity: u32,
}

/// Order acknowledgment returned by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderAck {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
