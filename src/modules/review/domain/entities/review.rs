use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::modules::catalog::domain::Movie;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A user's review of a movie.
///
/// A review can be built without a movie, but the repository refuses to store one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    movie: Option<Arc<Movie>>,
    review_text: String,
    rating: u8,
    timestamp: DateTime<Utc>,
}

impl Review {
    pub fn new(movie: Option<Arc<Movie>>, review_text: &str, rating: u8) -> AppResult<Self> {
        Validator::validate_review_rating(rating)?;
        Ok(Self {
            movie,
            review_text: review_text.trim().to_string(),
            rating,
            timestamp: Utc::now(),
        })
    }

    pub fn movie(&self) -> Option<&Arc<Movie>> {
        self.movie.as_ref()
    }

    pub fn movie_rank(&self) -> Option<u32> {
        self.movie.as_ref().and_then(|m| m.rank())
    }

    pub fn review_text(&self) -> &str {
        &self.review_text
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_for(&self, movie: &Movie) -> bool {
        self.movie.as_deref() == Some(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moana() -> Arc<Movie> {
        let mut movie = Movie::new("Moana", 2016).unwrap();
        movie.set_rank(5);
        Arc::new(movie)
    }

    #[test]
    fn test_rating_range() {
        assert!(Review::new(Some(moana()), "Great", 0).is_err());
        assert!(Review::new(Some(moana()), "Great", 11).is_err());
        assert_eq!(Review::new(Some(moana()), "Great", 10).unwrap().rating(), 10);
    }

    #[test]
    fn test_links_movie() {
        let review = Review::new(Some(moana()), "  Lovely songs. ", 8).unwrap();
        assert_eq!(review.review_text(), "Lovely songs.");
        assert_eq!(review.movie_rank(), Some(5));
        assert!(review.is_for(&Movie::new("Moana", 2016).unwrap()));
        assert!(!review.is_for(&Movie::new("Sing", 2016).unwrap()));
    }

    #[test]
    fn test_review_without_movie_is_constructible() {
        let review = Review::new(None, "Orphan", 5).unwrap();
        assert!(review.movie().is_none());
        assert_eq!(review.movie_rank(), None);
    }
}
