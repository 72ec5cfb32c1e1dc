use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::review::domain::Review;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewView {
    pub movie_rank: Option<u32>,
    pub review_text: String,
    pub rating: u8,
    pub timestamp: DateTime<Utc>,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            movie_rank: review.movie_rank(),
            review_text: review.review_text().to_string(),
            rating: review.rating(),
            timestamp: review.timestamp(),
        }
    }
}
