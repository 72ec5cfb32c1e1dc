use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use super::dto::WatchListView;
use crate::modules::catalog::application::dto::MovieView;
use crate::modules::catalog::domain::{Movie, MovieRepository};
use crate::modules::catalog::infrastructure::MovieCsvReader;
use crate::modules::user::domain::{User, UserRepository};
use crate::modules::watchlist::domain::{WatchList, WatchListRepository, WatchListSort};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

pub struct WatchListService {
    watchlist_repo: Arc<dyn WatchListRepository>,
    movie_repo: Arc<dyn MovieRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl WatchListService {
    pub fn new(
        watchlist_repo: Arc<dyn WatchListRepository>,
        movie_repo: Arc<dyn MovieRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            watchlist_repo,
            movie_repo,
            user_repo,
        }
    }

    /// A blank `name` gives the default watchlist name. Names are unique per owner.
    pub async fn create_watchlist(&self, username: &str, name: &str) -> AppResult<WatchListView> {
        if !name.trim().is_empty() {
            Validator::validate_watchlist_name(name)?;
        }
        let owner = self.find_user(username).await?;
        let watchlist = WatchList::new(&owner, name);

        let view = WatchListView::from(&watchlist);
        self.watchlist_repo.add_watchlist_if_unique(watchlist).await?;
        log_info!("Created watchlist '{}' for {}", view.name, view.owner);
        Ok(view)
    }

    pub async fn get_watchlist(&self, id: Uuid) -> AppResult<WatchListView> {
        let watchlist = self.find_watchlist(id).await?;
        Ok(WatchListView::from(&watchlist))
    }

    pub async fn watchlists_for_user(&self, username: &str) -> AppResult<Vec<WatchListView>> {
        let owner = self.find_user(username).await?;
        let watchlists = self.watchlist_repo.watchlists_for_user(owner.username()).await?;
        Ok(watchlists.iter().map(WatchListView::from).collect())
    }

    /// Returns `false` when the movie was already on the list.
    pub async fn add_movie(&self, id: Uuid, rank: u32) -> AppResult<bool> {
        let movie = self.find_movie(rank).await?;
        let added = self.watchlist_repo.add_movie_to_watchlist(id, movie).await?;
        log_debug!("Add movie {} to watchlist {}: {}", rank, id, added);
        Ok(added)
    }

    /// Returns `false` when the movie was not on the list.
    pub async fn remove_movie(&self, id: Uuid, rank: u32) -> AppResult<bool> {
        let movie = self.find_movie(rank).await?;
        let removed = self
            .watchlist_repo
            .remove_movie_from_watchlist(id, movie)
            .await?;
        log_debug!("Remove movie {} from watchlist {}: {}", rank, id, removed);
        Ok(removed)
    }

    pub async fn rename(&self, id: Uuid, new_name: &str) -> AppResult<WatchListView> {
        let watchlist = self.watchlist_repo.rename_watchlist(id, new_name).await?;
        Ok(WatchListView::from(&watchlist))
    }

    /// Store a copy of the list owned by `username`; the source list is untouched.
    pub async fn share(&self, id: Uuid, username: &str) -> AppResult<WatchListView> {
        let source = self.find_watchlist(id).await?;
        let recipient = self.find_user(username).await?;

        let shared = source.share(&recipient);
        let view = WatchListView::from(&shared);
        self.watchlist_repo.add_watchlist(shared).await?;
        log_info!(
            "Shared watchlist '{}' from {} with {}",
            source.name(),
            source.owner(),
            recipient.username()
        );
        Ok(view)
    }

    pub async fn sorted(&self, id: Uuid, key: WatchListSort) -> AppResult<Vec<MovieView>> {
        let watchlist = self.find_watchlist(id).await?;
        Ok(watchlist.sorted_by(key).iter().map(MovieView::from).collect())
    }

    /// Match the list against the dataset at `dataset_path`. The result is not
    /// stored.
    pub async fn recommendations<P: AsRef<Path>>(
        &self,
        id: Uuid,
        dataset_path: P,
    ) -> AppResult<WatchListView> {
        let watchlist = self.find_watchlist(id).await?;

        let dataset = MovieCsvReader::load(dataset_path.as_ref().to_path_buf()).await?;

        let recommendations =
            watchlist.recommend_from(dataset.movies.into_iter().map(Arc::new))?;
        log_debug!(
            "Found {} recommendations for watchlist {}",
            recommendations.size(),
            id
        );
        Ok(WatchListView::from(&recommendations))
    }

    async fn find_watchlist(&self, id: Uuid) -> AppResult<WatchList> {
        self.watchlist_repo
            .get_watchlist(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Watchlist with ID {} not found", id)))
    }

    async fn find_movie(&self, rank: u32) -> AppResult<Arc<Movie>> {
        self.movie_repo
            .get_movie(rank)
            .await?
            .ok_or(AppError::MovieNotFound(rank))
    }

    async fn find_user(&self, username: &str) -> AppResult<User> {
        self.user_repo
            .get_user(username)
            .await?
            .ok_or_else(|| AppError::UserNotFound(username.to_string()))
    }
}
