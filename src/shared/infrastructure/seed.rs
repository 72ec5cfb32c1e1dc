//! Startup population of the in-memory store.

use std::sync::Arc;

use super::memory_repository::MemoryRepository;
use crate::modules::catalog::domain::MovieRepository;
use crate::modules::catalog::infrastructure::MovieCsvReader;
use crate::modules::review::domain::{Review, ReviewRepository};
use crate::modules::user::domain::{User, UserRepository};
use crate::modules::user::infrastructure::hash_password;
use crate::modules::watchlist::domain::{WatchList, WatchListRepository};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_info, log_warn};

pub const DEMO_USERNAME: &str = "smar387";
pub const DEMO_PASSWORD: &str = "smar387PWord";
pub const DEMO_WATCHLIST: &str = "To-Watch";
const DEMO_WATCHLIST_RANKS: [u32; 5] = [1, 2, 3, 4, 5];

/// Load the configured dataset into `repo`, then add the demo account when
/// `seed_demo_data` is set.
pub async fn populate(config: &AppConfig, repo: &MemoryRepository) -> AppResult<()> {
    let dataset = MovieCsvReader::load(config.dataset_path())
        .await
        .inspect_err(|e| LogContext::error_with_context(e, "Loading movie dataset"))?;
    dataset.load_into(repo).await?;

    if config.seed_demo_data {
        seed_demo_data(repo).await?;
    }

    let (movies, reviews, users, watchlists) = repo.stats().await;
    log_info!(
        "Repository ready: {} movies, {} reviews, {} users, {} watchlists",
        movies,
        reviews,
        users,
        watchlists
    );
    Ok(())
}

async fn seed_demo_data(repo: &MemoryRepository) -> AppResult<()> {
    let top_movie = repo
        .get_movie(1)
        .await?
        .ok_or(AppError::MovieNotFound(1))?;

    let mut user = User::new(DEMO_USERNAME, &hash_password(DEMO_PASSWORD)?)?;
    let review = Review::new(Some(Arc::clone(&top_movie)), "Best Movie Ever!", 10)?;
    user.add_review(review.clone());
    user.watch_movie(top_movie);

    let mut watchlist = WatchList::new(&user, DEMO_WATCHLIST);
    let listed = repo.movies_by_rank(&DEMO_WATCHLIST_RANKS).await?;
    if listed.len() < DEMO_WATCHLIST_RANKS.len() {
        log_warn!(
            "Dataset holds only {} of the demo watchlist movies",
            listed.len()
        );
    }
    for movie in listed {
        watchlist.add_movie(movie);
    }

    repo.add_user(user).await?;
    repo.add_review(review).await?;
    repo.add_watchlist(watchlist).await?;
    Ok(())
}
