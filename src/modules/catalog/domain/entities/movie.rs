use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use super::{Actor, Director, Genre};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// A catalog movie.
///
/// Identity is `(title, release_year)`. The rank is the dataset's primary key
/// and is assigned after construction by the loader.
///
/// Deserialize through `MovieView` and `Movie::try_from`, which re-run the
/// field validation.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    rank: Option<u32>,
    title: String,
    release_year: u16,
    description: String,
    director: Director,
    actors: Vec<Actor>,
    genres: Vec<Genre>,
    runtime_minutes: u32,
    rating: Option<f32>,
}

impl Movie {
    pub fn new(title: &str, release_year: u16) -> AppResult<Self> {
        Validator::validate_movie_title(title)?;
        Validator::validate_release_year(release_year)?;

        Ok(Self {
            rank: None,
            title: title.trim().to_string(),
            release_year,
            description: String::new(),
            director: Director::default(),
            actors: Vec::new(),
            genres: Vec::new(),
            runtime_minutes: 0,
            rating: None,
        })
    }

    pub fn rank(&self) -> Option<u32> {
        self.rank
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_year(&self) -> u16 {
        self.release_year
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn director(&self) -> &Director {
        &self.director
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Zero until a runtime has been set
    pub fn runtime_minutes(&self) -> u32 {
        self.runtime_minutes
    }

    pub fn rating(&self) -> Option<f32> {
        self.rating
    }

    pub fn set_rank(&mut self, rank: u32) {
        self.rank = Some(rank);
    }

    pub fn set_title(&mut self, title: &str) -> AppResult<()> {
        Validator::validate_movie_title(title)?;
        self.title = title.trim().to_string();
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.trim().to_string();
    }

    pub fn set_director(&mut self, director: Director) {
        self.director = director;
    }

    pub fn set_actors(&mut self, actors: Vec<Actor>) {
        self.actors = actors;
    }

    pub fn set_genres(&mut self, genres: Vec<Genre>) {
        self.genres = genres;
    }

    pub fn set_runtime_minutes(&mut self, minutes: u32) -> AppResult<()> {
        Validator::validate_runtime(minutes)?;
        self.runtime_minutes = minutes;
        Ok(())
    }

    pub fn set_rating(&mut self, rating: Option<f32>) -> AppResult<()> {
        if let Some(score) = rating {
            if !score.is_finite() {
                return Err(AppError::ValidationError(
                    "Rating must be a finite number".to_string(),
                ));
            }
            Validator::validate_score(score)?;
        }
        self.rating = rating;
        Ok(())
    }

    pub fn has_genre(&self, genre: &Genre) -> bool {
        self.genres.contains(genre)
    }

    /// Genres as an order-independent set
    pub fn genre_set(&self) -> BTreeSet<&Genre> {
        self.genres.iter().collect()
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.release_year == other.release_year
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.release_year.hash(state);
    }
}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then(self.release_year.cmp(&other.release_year))
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.release_year)
    }
}
