pub mod modules;
pub mod shared;

use modules::{
    catalog::{application::service::MovieService, MovieRepository},
    review::{application::service::ReviewService, ReviewRepository},
    user::{application::service::UserService, UserRepository},
    watchlist::{application::service::WatchListService, WatchListRepository},
};
use shared::{infrastructure::seed, AppConfig, MemoryRepository};
use std::sync::Arc;

use shared::errors::AppResult;

/// Every service wired to the one shared in-memory repository
pub struct AppServices {
    pub repository: Arc<MemoryRepository>,
    pub movies: Arc<MovieService>,
    pub reviews: Arc<ReviewService>,
    pub users: Arc<UserService>,
    pub watchlists: Arc<WatchListService>,
}

/// Populate a fresh repository from `config` and build the services on top of it.
pub async fn bootstrap(config: &AppConfig) -> AppResult<AppServices> {
    let repository = Arc::new(MemoryRepository::new());
    seed::populate(config, &repository).await?;

    // MemoryRepository implements every port; cast once per trait object
    let movie_repo: Arc<dyn MovieRepository> = repository.clone();
    let review_repo: Arc<dyn ReviewRepository> = repository.clone();
    let user_repo: Arc<dyn UserRepository> = repository.clone();
    let watchlist_repo: Arc<dyn WatchListRepository> = repository.clone();

    let movies = Arc::new(MovieService::new(
        Arc::clone(&movie_repo),
        Arc::clone(&review_repo),
    ));
    let reviews = Arc::new(ReviewService::new(
        Arc::clone(&review_repo),
        Arc::clone(&movie_repo),
        Arc::clone(&user_repo),
    ));
    let users = Arc::new(UserService::new(Arc::clone(&user_repo)));
    let watchlists = Arc::new(WatchListService::new(
        watchlist_repo,
        movie_repo,
        user_repo,
    ));

    Ok(AppServices {
        repository,
        movies,
        reviews,
        users,
        watchlists,
    })
}
