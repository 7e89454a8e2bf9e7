//! In-memory store for delivery feedback. Volatile like the feed itself.

use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::feedback::{Feedback, FeedbackRequest};

pub struct FeedbackService {
    entries: RwLock<Vec<Feedback>>,
}

impl FeedbackService {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn submit(&self, request: FeedbackRequest, partner_id: i64) -> Feedback {
        let feedback = Feedback {
            id: Uuid::new_v4().to_string(),
            order_id: request.order_id,
            rating: request.rating,
            feedback: request.feedback,
            delivery_partner_id: partner_id,
        };

        self.entries.write().push(feedback.clone());
        feedback
    }

    pub fn for_partner(&self, partner_id: i64) -> Vec<Feedback> {
        self.entries
            .read()
            .iter()
            .filter(|f| f.delivery_partner_id == partner_id)
            .cloned()
            .collect()
    }
}

impl Default for FeedbackService {
    fn default() -> Self {
        Self::new()
    }
}
