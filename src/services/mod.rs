pub mod fake_data;
pub mod feed;
pub mod feedback;

use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub feed: feed::OrderFeedService,
    pub feedback: feedback::FeedbackService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            feed: feed::OrderFeedService::new(),
            feedback: feedback::FeedbackService::new(),
        }
    }
}
