use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::domain::entities::{Actor, Director, Genre, Movie};
use crate::shared::errors::AppResult;

/// Port for the movie catalog: movies keyed by rank plus the shared
/// director, actor and genre entities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Add a ranked movie. Fails if the movie has no rank or the rank is taken.
    async fn add_movie(&self, movie: Movie) -> AppResult<Arc<Movie>>;

    /// O(1) lookup by rank
    async fn get_movie(&self, rank: u32) -> AppResult<Option<Arc<Movie>>>;

    async fn number_of_movies(&self) -> AppResult<usize>;

    /// First movie in dataset order, if any
    async fn first_movie(&self) -> AppResult<Option<Arc<Movie>>>;

    /// Last movie in dataset order, if any
    async fn last_movie(&self) -> AppResult<Option<Arc<Movie>>>;

    /// All ranks in dataset order
    async fn movie_ranks(&self) -> AppResult<Vec<u32>>;

    /// Movies for the given ranks, in input order. Unknown ranks are skipped.
    async fn movies_by_rank(&self, ranks: &[u32]) -> AppResult<Vec<Arc<Movie>>>;

    /// Ranks of movies tagged with `genre_name`; empty if the genre is unknown.
    async fn movie_ranks_for_genre(&self, genre_name: &str) -> AppResult<Vec<u32>>;

    async fn add_genre(&self, genre: Genre) -> AppResult<()>;
    async fn genres(&self) -> AppResult<Vec<Genre>>;

    async fn add_director(&self, director: Director) -> AppResult<()>;
    async fn get_director(&self, full_name: &str) -> AppResult<Option<Director>>;

    async fn add_actor(&self, actor: Actor) -> AppResult<()>;
    async fn get_actor(&self, full_name: &str) -> AppResult<Option<Actor>>;
}
