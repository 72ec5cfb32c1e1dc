use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::domain::Movie;
use crate::modules::watchlist::domain::entities::WatchList;
use crate::shared::errors::AppResult;

/// Every mutating operation applies its check and its change in one step.
/// Operations on an unknown id fail with `NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WatchListRepository: Send + Sync {
    async fn add_watchlist(&self, watchlist: WatchList) -> AppResult<()>;

    /// Store `watchlist` unless its owner already has one with the same name
    /// (`ValidationError`)
    async fn add_watchlist_if_unique(&self, watchlist: WatchList) -> AppResult<()>;

    async fn get_watchlist(&self, id: Uuid) -> AppResult<Option<WatchList>>;

    /// Replace a stored watchlist with the same id
    async fn update_watchlist(&self, watchlist: WatchList) -> AppResult<()>;

    /// `false` if the movie was already listed
    async fn add_movie_to_watchlist(&self, id: Uuid, movie: Arc<Movie>) -> AppResult<bool>;

    /// `false` if the movie was not listed
    async fn remove_movie_from_watchlist(&self, id: Uuid, movie: Arc<Movie>) -> AppResult<bool>;

    /// Returns the renamed list
    async fn rename_watchlist(&self, id: Uuid, new_name: &str) -> AppResult<WatchList>;

    /// Every watchlist owned by `username`, in insertion order; empty if none
    async fn watchlists_for_user(&self, username: &str) -> AppResult<Vec<WatchList>>;
}
