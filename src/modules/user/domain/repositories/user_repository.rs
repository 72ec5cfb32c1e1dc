use async_trait::async_trait;

use crate::modules::user::domain::entities::User;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `ValidationError` if the username is already stored
    async fn add_user(&self, user: User) -> AppResult<()>;

    /// Case-insensitive lookup; `None` if no such user
    async fn get_user(&self, username: &str) -> AppResult<Option<User>>;
}
