use std::sync::Arc;

use super::dto::ReviewView;
use crate::modules::catalog::domain::MovieRepository;
use crate::modules::review::domain::{Review, ReviewRepository};
use crate::modules::user::domain::UserRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
    movie_repo: Arc<dyn MovieRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl ReviewService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        movie_repo: Arc<dyn MovieRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            review_repo,
            movie_repo,
            user_repo,
        }
    }

    /// Record a review by `username` of the movie with `rank`.
    ///
    /// Fails with `MovieNotFound` / `UserNotFound` before anything is stored.
    pub async fn add_review(
        &self,
        rank: u32,
        review_text: &str,
        rating: u8,
        username: &str,
    ) -> AppResult<ReviewView> {
        log_debug!(
            "Adding review of movie {} by {} (rating: {})",
            rank,
            username,
            rating
        );

        let movie = self
            .movie_repo
            .get_movie(rank)
            .await?
            .ok_or(AppError::MovieNotFound(rank))?;

        let user = self
            .user_repo
            .get_user(username)
            .await?
            .ok_or_else(|| AppError::UserNotFound(username.to_string()))?;

        Validator::validate_review_text(review_text)?;
        let review = Review::new(Some(movie), review_text, rating)?;
        let view = ReviewView::from(&review);

        self.review_repo.add_review(review).await?;

        log_info!("Stored review of movie {} by {}", rank, user.username());
        Ok(view)
    }

    pub async fn all_reviews(&self) -> AppResult<Vec<ReviewView>> {
        let reviews = self.review_repo.reviews().await?;
        Ok(reviews.iter().map(ReviewView::from).collect())
    }
}
