use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::domain::{Genre, Movie};
use crate::modules::user::domain::User;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub const DEFAULT_WATCHLIST_NAME: &str = "New Watchlist";
pub const RECOMMENDATIONS_NAME: &str = "Movie Recommendations";

/// Field a watchlist can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchListSort {
    Title,
    Year,
    Runtime,
}

impl std::fmt::Display for WatchListSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchListSort::Title => write!(f, "title"),
            WatchListSort::Year => write!(f, "year"),
            WatchListSort::Runtime => write!(f, "runtime"),
        }
    }
}

impl std::str::FromStr for WatchListSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(WatchListSort::Title),
            "year" => Ok(WatchListSort::Year),
            "runtime" => Ok(WatchListSort::Runtime),
            _ => Err(format!("Invalid watchlist sort: {}", s)),
        }
    }
}

/// A named, ordered, duplicate-free list of movies owned by one user
#[derive(Debug, Clone, Serialize)]
pub struct WatchList {
    id: Uuid,
    owner: String,
    name: String,
    movies: Vec<Arc<Movie>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WatchList {
    /// A blank name falls back to "New Watchlist".
    pub fn new(owner: &User, name: &str) -> Self {
        let name = name.trim();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner: owner.username().to_string(),
            name: if name.is_empty() {
                DEFAULT_WATCHLIST_NAME.to_string()
            } else {
                name.to_string()
            },
            movies: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Username of the owning user
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn is_owned_by(&self, user: &User) -> bool {
        self.owner == user.username()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn movies(&self) -> &[Arc<Movie>] {
        &self.movies
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Movie>> {
        self.movies.iter()
    }

    pub fn contains(&self, movie: &Movie) -> bool {
        self.movies.iter().any(|m| m.as_ref() == movie)
    }

    /// Append `movie`; no-op returning false if it is already listed.
    pub fn add_movie(&mut self, movie: Arc<Movie>) -> bool {
        if self.contains(&movie) {
            return false;
        }
        self.movies.push(movie);
        self.updated_at = Utc::now();
        true
    }

    /// Remove `movie`; no-op returning false if it is not listed.
    pub fn remove_movie(&mut self, movie: &Movie) -> bool {
        let original_len = self.movies.len();
        self.movies.retain(|m| m.as_ref() != movie);

        if self.movies.len() < original_len {
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    pub fn select_movie_to_watch(&self, index: usize) -> Option<&Arc<Movie>> {
        self.movies.get(index)
    }

    pub fn size(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn first_movie(&self) -> Option<&Arc<Movie>> {
        self.movies.first()
    }

    pub fn clear(&mut self) {
        self.movies.clear();
        self.updated_at = Utc::now();
    }

    /// Copy the movies into a new default-named list owned by `user`.
    pub fn share(&self, user: &User) -> WatchList {
        let mut shared = WatchList::new(user, "");
        for movie in &self.movies {
            shared.add_movie(Arc::clone(movie));
        }
        shared
    }

    pub fn sort_by_title(&self) -> Vec<Arc<Movie>> {
        self.sorted_by(WatchListSort::Title)
    }

    pub fn sort_by_year(&self) -> Vec<Arc<Movie>> {
        self.sorted_by(WatchListSort::Year)
    }

    pub fn sort_by_runtime(&self) -> Vec<Arc<Movie>> {
        self.sorted_by(WatchListSort::Runtime)
    }

    /// A sorted copy of the movies; the list itself keeps its order.
    /// Ties keep their list order.
    pub fn sorted_by(&self, key: WatchListSort) -> Vec<Arc<Movie>> {
        let mut sorted = self.movies.clone();
        match key {
            WatchListSort::Title => sorted.sort_by(|a, b| a.title().cmp(b.title())),
            WatchListSort::Year => sorted.sort_by_key(|m| m.release_year()),
            WatchListSort::Runtime => sorted.sort_by_key(|m| m.runtime_minutes()),
        }
        sorted
    }

    pub fn rename(&mut self, new_name: &str) -> AppResult<()> {
        Validator::validate_watchlist_name(new_name)?;
        self.name = new_name.trim().to_string();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Build a "Movie Recommendations" list for the same owner holding every
    /// candidate whose genre set equals the genre set of a listed movie.
    pub fn recommend_from<I>(&self, candidates: I) -> AppResult<WatchList>
    where
        I: IntoIterator<Item = Arc<Movie>>,
    {
        if self.movies.is_empty() {
            return Err(AppError::ValidationError(
                "No new recommendations".to_string(),
            ));
        }

        let wanted: Vec<BTreeSet<&Genre>> = self.movies.iter().map(|m| m.genre_set()).collect();

        let mut recommendations = self.empty_copy(RECOMMENDATIONS_NAME);
        for candidate in candidates {
            let genres = candidate.genre_set();
            if wanted.iter().any(|set| *set == genres) {
                recommendations.add_movie(candidate);
            }
        }
        Ok(recommendations)
    }

    fn empty_copy(&self, name: &str) -> WatchList {
        let now = Utc::now();
        WatchList {
            id: Uuid::new_v4(),
            owner: self.owner.clone(),
            name: name.to_string(),
            movies: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Two lists are the same list when they share owner and name
impl PartialEq for WatchList {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.name == other.name
    }
}

impl Eq for WatchList {}

impl Hash for WatchList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.name.hash(state);
    }
}

impl<'a> IntoIterator for &'a WatchList {
    type Item = &'a Arc<Movie>;
    type IntoIter = std::slice::Iter<'a, Arc<Movie>>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}
