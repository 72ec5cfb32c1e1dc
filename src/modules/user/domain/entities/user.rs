use serde::Serialize;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::modules::catalog::domain::Movie;
use crate::modules::review::domain::Review;
use crate::shared::errors::{AppError, AppResult};

/// Lower-cased, trimmed form used for storing and looking up usernames
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    username: String,
    #[serde(skip_serializing)]
    password_hash: String,
    watched_movies: Vec<Arc<Movie>>,
    reviews: Vec<Review>,
}

impl User {
    pub fn new(username: &str, password_hash: &str) -> AppResult<Self> {
        let username = normalize_username(username);
        if username.is_empty() {
            return Err(AppError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }
        if password_hash.is_empty() {
            return Err(AppError::ValidationError(
                "Password hash cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            username,
            password_hash: password_hash.to_string(),
            watched_movies: Vec::new(),
            reviews: Vec::new(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn watched_movies(&self) -> &[Arc<Movie>] {
        &self.watched_movies
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn watch_movie(&mut self, movie: Arc<Movie>) {
        self.watched_movies.push(movie);
    }

    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}

impl PartialOrd for User {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for User {
    fn cmp(&self, other: &Self) -> Ordering {
        self.username.cmp(&other.username)
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}
