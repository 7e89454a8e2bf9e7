use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub order_id: String,
    pub rating: i32,
    pub feedback: Option<String>,
    pub delivery_partner_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub order_id: String,
    pub rating: i32,
    #[serde(rename = "comments")]
    pub feedback: Option<String>,
}
