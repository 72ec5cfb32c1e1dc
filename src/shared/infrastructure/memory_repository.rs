//! Process-lifetime, in-memory store for every entity kind.
//!
//! All state lives behind one `RwLock`, so each operation sees and leaves a
//! consistent snapshot. Movie lookup by rank goes through a direct index;
//! every other lookup is a linear scan returning the first match.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::modules::catalog::domain::{Actor, Director, Genre, Movie, MovieRepository};
use crate::modules::review::domain::{Review, ReviewRepository};
use crate::modules::user::domain::entities::normalize_username;
use crate::modules::user::domain::{User, UserRepository};
use crate::modules::watchlist::domain::{WatchList, WatchListRepository};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Default)]
struct CatalogState {
    movies: Vec<Arc<Movie>>,
    movie_index: HashMap<u32, Arc<Movie>>,
    genres: Vec<Genre>,
    directors: Vec<Director>,
    actors: Vec<Actor>,
    reviews: Vec<Review>,
    users: Vec<User>,
    watchlists: Vec<WatchList>,
}

#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: RwLock<CatalogState>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry counts for diagnostics: (movies, reviews, users, watchlists)
    pub async fn stats(&self) -> (usize, usize, usize, usize) {
        let state = self.state.read().await;
        (
            state.movies.len(),
            state.reviews.len(),
            state.users.len(),
            state.watchlists.len(),
        )
    }
}

#[async_trait]
impl MovieRepository for MemoryRepository {
    async fn add_movie(&self, movie: Movie) -> AppResult<Arc<Movie>> {
        let rank = movie.rank().ok_or_else(|| {
            AppError::InvalidInput(format!("Movie '{}' has no rank", movie))
        })?;

        let mut state = self.state.write().await;
        if state.movie_index.contains_key(&rank) {
            return Err(AppError::ValidationError(format!(
                "A movie with rank {} already exists",
                rank
            )));
        }

        let movie = Arc::new(movie);
        state.movies.push(Arc::clone(&movie));
        state.movie_index.insert(rank, Arc::clone(&movie));
        Ok(movie)
    }

    async fn get_movie(&self, rank: u32) -> AppResult<Option<Arc<Movie>>> {
        let state = self.state.read().await;
        Ok(state.movie_index.get(&rank).cloned())
    }

    async fn number_of_movies(&self) -> AppResult<usize> {
        Ok(self.state.read().await.movies.len())
    }

    async fn first_movie(&self) -> AppResult<Option<Arc<Movie>>> {
        Ok(self.state.read().await.movies.first().cloned())
    }

    async fn last_movie(&self) -> AppResult<Option<Arc<Movie>>> {
        Ok(self.state.read().await.movies.last().cloned())
    }

    async fn movie_ranks(&self) -> AppResult<Vec<u32>> {
        let state = self.state.read().await;
        Ok(state.movies.iter().filter_map(|m| m.rank()).collect())
    }

    async fn movies_by_rank(&self, ranks: &[u32]) -> AppResult<Vec<Arc<Movie>>> {
        let state = self.state.read().await;
        let movies: Vec<Arc<Movie>> = ranks
            .iter()
            .filter_map(|rank| state.movie_index.get(rank).cloned())
            .collect();
        debug!(requested = ranks.len(), found = movies.len(), "movies by rank");
        Ok(movies)
    }

    async fn movie_ranks_for_genre(&self, genre_name: &str) -> AppResult<Vec<u32>> {
        let state = self.state.read().await;
        let genre = match state.genres.iter().find(|g| g.name() == Some(genre_name)) {
            Some(genre) => genre,
            None => {
                debug!(genre = genre_name, "unknown genre");
                return Ok(Vec::new());
            }
        };

        Ok(state
            .movies
            .iter()
            .filter(|m| m.has_genre(genre))
            .filter_map(|m| m.rank())
            .collect())
    }

    async fn add_genre(&self, genre: Genre) -> AppResult<()> {
        self.state.write().await.genres.push(genre);
        Ok(())
    }

    async fn genres(&self) -> AppResult<Vec<Genre>> {
        Ok(self.state.read().await.genres.clone())
    }

    async fn add_director(&self, director: Director) -> AppResult<()> {
        self.state.write().await.directors.push(director);
        Ok(())
    }

    async fn get_director(&self, full_name: &str) -> AppResult<Option<Director>> {
        let state = self.state.read().await;
        Ok(state
            .directors
            .iter()
            .find(|d| d.full_name() == Some(full_name))
            .cloned())
    }

    async fn add_actor(&self, actor: Actor) -> AppResult<()> {
        self.state.write().await.actors.push(actor);
        Ok(())
    }

    async fn get_actor(&self, full_name: &str) -> AppResult<Option<Actor>> {
        let state = self.state.read().await;
        Ok(state
            .actors
            .iter()
            .find(|a| a.full_name() == Some(full_name))
            .cloned())
    }
}

#[async_trait]
impl ReviewRepository for MemoryRepository {
    async fn add_review(&self, review: Review) -> AppResult<()> {
        if review.movie().is_none() {
            return Err(AppError::RepositoryError(
                "Review is not linked to a movie".to_string(),
            ));
        }
        let mut state = self.state.write().await;
        state.reviews.push(review);
        debug!(total = state.reviews.len(), "review added");
        Ok(())
    }

    async fn reviews(&self) -> AppResult<Vec<Review>> {
        Ok(self.state.read().await.reviews.clone())
    }
}

#[async_trait]
impl UserRepository for MemoryRepository {
    async fn add_user(&self, user: User) -> AppResult<()> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.username() == user.username()) {
            return Err(AppError::ValidationError(
                "Your username is already taken - please supply another".to_string(),
            ));
        }
        info!(username = user.username(), "user added");
        state.users.push(user);
        Ok(())
    }

    async fn get_user(&self, username: &str) -> AppResult<Option<User>> {
        let username = normalize_username(username);
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .find(|u| u.username() == username)
            .cloned())
    }
}

#[async_trait]
impl WatchListRepository for MemoryRepository {
    async fn add_watchlist(&self, watchlist: WatchList) -> AppResult<()> {
        self.state.write().await.watchlists.push(watchlist);
        Ok(())
    }

    async fn add_watchlist_if_unique(&self, watchlist: WatchList) -> AppResult<()> {
        let mut state = self.state.write().await;
        let taken = state
            .watchlists
            .iter()
            .any(|w| w.owner() == watchlist.owner() && w.name() == watchlist.name());
        if taken {
            return Err(AppError::ValidationError(format!(
                "You already have a watchlist named '{}'",
                watchlist.name()
            )));
        }
        state.watchlists.push(watchlist);
        Ok(())
    }

    async fn get_watchlist(&self, id: Uuid) -> AppResult<Option<WatchList>> {
        let state = self.state.read().await;
        Ok(state.watchlists.iter().find(|w| w.id() == id).cloned())
    }

    async fn update_watchlist(&self, watchlist: WatchList) -> AppResult<()> {
        let mut state = self.state.write().await;
        let id = watchlist.id();
        *stored_watchlist(&mut state, id)? = watchlist;
        Ok(())
    }

    async fn add_movie_to_watchlist(&self, id: Uuid, movie: Arc<Movie>) -> AppResult<bool> {
        let mut state = self.state.write().await;
        let added = stored_watchlist(&mut state, id)?.add_movie(movie);
        debug!(watchlist = %id, added, "movie added to watchlist");
        Ok(added)
    }

    async fn remove_movie_from_watchlist(&self, id: Uuid, movie: Arc<Movie>) -> AppResult<bool> {
        let mut state = self.state.write().await;
        let removed = stored_watchlist(&mut state, id)?.remove_movie(&movie);
        debug!(watchlist = %id, removed, "movie removed from watchlist");
        Ok(removed)
    }

    async fn rename_watchlist(&self, id: Uuid, new_name: &str) -> AppResult<WatchList> {
        let mut state = self.state.write().await;
        let watchlist = stored_watchlist(&mut state, id)?;
        watchlist.rename(new_name)?;
        Ok(watchlist.clone())
    }

    async fn watchlists_for_user(&self, username: &str) -> AppResult<Vec<WatchList>> {
        let username = normalize_username(username);
        let state = self.state.read().await;
        Ok(state
            .watchlists
            .iter()
            .filter(|w| w.owner() == username)
            .cloned()
            .collect())
    }
}

fn stored_watchlist(state: &mut CatalogState, id: Uuid) -> AppResult<&mut WatchList> {
    state
        .watchlists
        .iter_mut()
        .find(|w| w.id() == id)
        .ok_or_else(|| AppError::NotFound(format!("Watchlist with ID {} not found", id)))
}
