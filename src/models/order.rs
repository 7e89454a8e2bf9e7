use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status labels with special meaning in the lifecycle. Anything else is
/// stored verbatim; clients pass arbitrary intermediate labels and only the
/// terminal value changes the order's membership.
pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_ACCEPTED: &str = "ACCEPTED";
pub const STATUS_DELIVERED: &str = "DELIVERED";

/// One synthetic delivery job. Lives in exactly one of the feed's three
/// containers at any time: open pool, active set, or history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedOrder {
    pub id: String,
    pub customer_name: String,
    pub address: String,
    pub customer_phone: String,
    pub items: Vec<String>,
    pub restaurant_name: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub delivery_partner_id: Option<i64>,
    /// Monotonic insertion sequence; keeps the pending listing in generation
    /// order even though the pool itself is unordered.
    #[serde(skip)]
    pub seq: u64,
}

impl SimulatedOrder {
    pub fn is_pending(&self) -> bool {
        self.delivery_partner_id.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderStatusUpdateRequest {
    pub status: String,
}
