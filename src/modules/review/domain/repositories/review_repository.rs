use async_trait::async_trait;

use crate::modules::review::domain::entities::Review;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Store a review. A review with no movie fails with `RepositoryError`
    /// and leaves the store untouched.
    async fn add_review(&self, review: Review) -> AppResult<()>;

    async fn reviews(&self) -> AppResult<Vec<Review>>;
}
