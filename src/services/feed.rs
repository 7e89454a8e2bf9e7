//! The simulated order feed.
//!
//! Three containers, one order id in exactly one of them at any time:
//! the open pool (pending, unclaimed), the active set (claimed, in
//! progress), and per-partner history (delivered, read-only). Claiming is
//! resolved by a single atomic remove against the open pool, so exactly one
//! of any number of racing accept calls wins.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::error::FeedError;
use crate::models::order::{
    SimulatedOrder, STATUS_ACCEPTED, STATUS_DELIVERED, STATUS_PENDING,
};
use crate::services::fake_data;

pub struct OrderFeedService {
    open_pool: DashMap<String, SimulatedOrder>,
    active: DashMap<String, SimulatedOrder>,
    history: DashMap<i64, Vec<SimulatedOrder>>,
    next_seq: AtomicU64,
}

impl OrderFeedService {
    pub fn new() -> Self {
        Self {
            open_pool: DashMap::new(),
            active: DashMap::new(),
            history: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Generate one synthetic pending order and add it to the open pool.
    /// Always succeeds.
    pub fn generate(&self) -> SimulatedOrder {
        let order = SimulatedOrder {
            id: Uuid::new_v4().to_string(),
            customer_name: fake_data::random_customer(),
            address: fake_data::random_address(),
            customer_phone: fake_data::random_phone(),
            items: fake_data::random_items(),
            restaurant_name: fake_data::random_restaurant(),
            timestamp: chrono::Utc::now(),
            status: STATUS_PENDING.to_string(),
            delivery_partner_id: None,
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
        };

        tracing::debug!(order_id = %order.id, restaurant = %order.restaurant_name, "generated order");
        self.open_pool.insert(order.id.clone(), order.clone());
        order
    }

    /// Unclaimed orders in generation order.
    pub fn pending_orders(&self) -> Vec<SimulatedOrder> {
        let mut orders: Vec<SimulatedOrder> =
            self.open_pool.iter().map(|e| e.value().clone()).collect();
        orders.sort_by_key(|o| o.seq);
        orders
    }

    /// Claim a pending order for `partner_id`. The remove from the open pool
    /// is the atomicity gate: with concurrent accepts for the same id, only
    /// the caller whose remove returns the order proceeds.
    pub fn accept(&self, order_id: &str, partner_id: i64) -> Result<SimulatedOrder, FeedError> {
        let (_, mut order) = self
            .open_pool
            .remove(order_id)
            .ok_or(FeedError::NotFound)?;

        order.delivery_partner_id = Some(partner_id);
        order.status = STATUS_ACCEPTED.to_string();
        self.active.insert(order.id.clone(), order.clone());

        tracing::info!(order_id = %order.id, partner_id, "order accepted");
        Ok(order)
    }

    /// Drop a pending order from the feed. No declined-by record is kept and
    /// the order is not requeued; any partner may reject any pending order.
    pub fn reject(&self, order_id: &str, partner_id: i64) -> Result<(), FeedError> {
        self.open_pool
            .remove(order_id)
            .map(|_| {
                tracing::info!(order_id, partner_id, "order rejected");
            })
            .ok_or(FeedError::NotFound)
    }

    /// Advance an active order's status. Only the assigned partner may do
    /// this; the status string itself is stored verbatim. Reaching the
    /// terminal value (compared case-insensitively) archives the order into
    /// the partner's history.
    pub fn update_status(
        &self,
        order_id: &str,
        new_status: &str,
        partner_id: i64,
    ) -> Result<(), FeedError> {
        // The entry handle holds the shard lock, so the ownership check and
        // the mutation (or removal) are a single atomic step per id.
        match self.active.entry(order_id.to_string()) {
            Entry::Vacant(_) => Err(FeedError::NotFound),
            Entry::Occupied(mut occupied) => {
                if occupied.get().delivery_partner_id != Some(partner_id) {
                    return Err(FeedError::NotOwner);
                }

                occupied.get_mut().status = new_status.to_string();

                if new_status.eq_ignore_ascii_case(STATUS_DELIVERED) {
                    let (_, order) = occupied.remove_entry();
                    tracing::info!(order_id, partner_id, "order delivered, archiving");
                    self.history.entry(partner_id).or_default().push(order);
                } else {
                    tracing::info!(order_id, partner_id, status = new_status, "order status updated");
                }

                Ok(())
            }
        }
    }

    /// Look an order up by id, active set first, then the open pool.
    /// Archived orders are only reachable through history.
    pub fn order_by_id(&self, order_id: &str) -> Result<SimulatedOrder, FeedError> {
        if let Some(order) = self.active.get(order_id) {
            return Ok(order.value().clone());
        }

        self.open_pool
            .get(order_id)
            .map(|o| o.value().clone())
            .ok_or(FeedError::NotFound)
    }

    /// Delivered orders for one partner, in archival order.
    pub fn history_for(&self, partner_id: i64) -> Vec<SimulatedOrder> {
        self.history
            .get(&partner_id)
            .map(|orders| orders.value().clone())
            .unwrap_or_default()
    }

    /// Demo reset: empties the open pool and active set. History survives.
    pub fn clear(&self) {
        self.open_pool.clear();
        self.active.clear();
    }
}

impl Default for OrderFeedService {
    fn default() -> Self {
        Self::new()
    }
}
