use std::sync::Arc;

use super::dto::UserView;
use crate::modules::user::domain::{User, UserRepository};
use crate::modules::user::infrastructure::hash_password;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::log_info;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Create an account with a hashed password. Usernames are unique
    /// regardless of case.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<UserView> {
        Validator::validate_username(username)?;
        Validator::validate_password(password)?;

        // Early exit before hashing; the repository re-checks on insert
        if self.user_repo.get_user(username).await?.is_some() {
            return Err(AppError::ValidationError(
                "Your username is already taken - please supply another".to_string(),
            ));
        }

        let user = User::new(username, &hash_password(password)?)?;
        let view = UserView::from(&user);
        self.user_repo.add_user(user).await?;

        log_info!("Registered user {}", view.username);
        Ok(view)
    }

    pub async fn get_user(&self, username: &str) -> AppResult<UserView> {
        let user = self
            .user_repo
            .get_user(username)
            .await?
            .ok_or_else(|| AppError::UserNotFound(username.to_string()))?;

        Ok(UserView::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::domain::repositories::user_repository::MockUserRepository;

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut users = MockUserRepository::new();
        users.expect_get_user().returning(|_| Ok(None));
        users
            .expect_add_user()
            .times(1)
            .withf(|user| user.username() == "smar387" && user.password_hash() != "smar387PWord")
            .returning(|_| Ok(()));
        let service = UserService::new(Arc::new(users));

        let view = service.register("SMAR387", "smar387PWord").await.unwrap();
        assert_eq!(view.username, "smar387");
        assert_eq!(view.reviews, 0);
    }

    #[tokio::test]
    async fn test_register_rejects_taken_username() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_user()
            .returning(|name| Ok(Some(User::new(name, "hash").unwrap())));
        users.expect_add_user().never();
        let service = UserService::new(Arc::new(users));

        let err = service.register("smar387", "smar387PWord").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(ref msg) if msg.contains("already taken")));
    }

    #[tokio::test]
    async fn test_register_rejects_weak_credentials() {
        let mut users = MockUserRepository::new();
        users.expect_get_user().never();
        users.expect_add_user().never();
        let service = UserService::new(Arc::new(users));

        assert!(service.register("ab", "smar387PWord").await.is_err());
        assert!(service.register("smar387", "password").await.is_err());
        assert!(service.register("smar387", "Sh0rt").await.is_err());
    }

    #[tokio::test]
    async fn test_get_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_get_user().returning(|_| Ok(None));
        let service = UserService::new(Arc::new(users));

        let err = service.get_user("nobody").await.unwrap_err();
        assert!(matches!(err, AppError::UserNotFound(_)));
    }
}
