use serde::{Deserialize, Serialize};

use crate::modules::user::domain::User;

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub username: String,
    pub reviews: usize,
    pub watched_movies: usize,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            reviews: user.reviews().len(),
            watched_movies: user.watched_movies().len(),
        }
    }
}
