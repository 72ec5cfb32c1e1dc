use rand::seq::SliceRandom;
use std::sync::Arc;

use super::dto::{FeaturedMovieView, MovieView};
use crate::modules::catalog::domain::MovieRepository;
use crate::modules::review::application::dto::ReviewView;
use crate::modules::review::domain::ReviewRepository;
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::log_debug;

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    review_repo: Arc<dyn ReviewRepository>,
}

impl MovieService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        review_repo: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            movie_repo,
            review_repo,
        }
    }

    pub async fn get_movie(&self, rank: u32) -> AppResult<MovieView> {
        let movie = self
            .movie_repo
            .get_movie(rank)
            .await?
            .ok_or(AppError::MovieNotFound(rank))?;

        Ok(MovieView::from(&movie))
    }

    pub async fn first_movie(&self) -> AppResult<Option<MovieView>> {
        let movie = self.movie_repo.first_movie().await?;
        Ok(movie.as_ref().map(MovieView::from))
    }

    pub async fn last_movie(&self) -> AppResult<Option<MovieView>> {
        let movie = self.movie_repo.last_movie().await?;
        Ok(movie.as_ref().map(MovieView::from))
    }

    pub async fn movie_ranks_for_genre(&self, genre_name: &str) -> AppResult<Vec<u32>> {
        self.movie_repo.movie_ranks_for_genre(genre_name).await
    }

    pub async fn movies_by_rank(&self, ranks: &[u32]) -> AppResult<Vec<MovieView>> {
        let movies = self.movie_repo.movies_by_rank(ranks).await?;
        Ok(movies.iter().map(MovieView::from).collect())
    }

    /// Reviews of the movie with `rank`, in the order they were written
    pub async fn reviews_for_movie(&self, rank: u32) -> AppResult<Vec<ReviewView>> {
        let movie = self
            .movie_repo
            .get_movie(rank)
            .await?
            .ok_or(AppError::MovieNotFound(rank))?;

        let reviews = self.review_repo.reviews().await?;
        Ok(reviews
            .iter()
            .filter(|review| review.is_for(&movie))
            .map(ReviewView::from)
            .collect())
    }

    /// One page of the whole catalog in rank order
    pub async fn browse_by_rank(
        &self,
        params: PaginationParams,
    ) -> AppResult<PaginatedResult<MovieView>> {
        let ranks = self.movie_repo.movie_ranks().await?;
        let page = self.page_of(&ranks, &params).await?;
        LogContext::browse_operation(None, params.page, page.items.len());
        Ok(page)
    }

    /// One page of the movies tagged with `genre_name`; an unknown genre
    /// yields an empty page.
    pub async fn browse_by_genre(
        &self,
        genre_name: &str,
        params: PaginationParams,
    ) -> AppResult<PaginatedResult<MovieView>> {
        let ranks = self.movie_repo.movie_ranks_for_genre(genre_name).await?;
        let page = self.page_of(&ranks, &params).await?;
        LogContext::browse_operation(Some(genre_name), params.page, page.items.len());
        Ok(page)
    }

    pub async fn genre_names(&self) -> AppResult<Vec<String>> {
        let genres = self.movie_repo.genres().await?;
        Ok(genres
            .iter()
            .filter_map(|genre| genre.name().map(str::to_string))
            .collect())
    }

    /// Up to `quantity` distinct movies picked at random. At least one movie is
    /// always left out, so a catalog of n movies yields at most n - 1.
    pub async fn featured_movies(&self, quantity: usize) -> AppResult<Vec<FeaturedMovieView>> {
        let ranks = self.movie_repo.movie_ranks().await?;
        let quantity = quantity.min(ranks.len().saturating_sub(1));

        let picked: Vec<u32> = {
            let mut rng = rand::thread_rng();
            ranks.choose_multiple(&mut rng, quantity).copied().collect()
        };
        log_debug!("Featuring movies {:?}", picked);

        let movies = self.movie_repo.movies_by_rank(&picked).await?;
        Ok(movies
            .iter()
            .map(|movie| FeaturedMovieView::from(movie.as_ref()))
            .collect())
    }

    async fn page_of(
        &self,
        ranks: &[u32],
        params: &PaginationParams,
    ) -> AppResult<PaginatedResult<MovieView>> {
        let window = params.window(ranks);
        let movies = self.movie_repo.movies_by_rank(window).await?;
        let items = movies.iter().map(MovieView::from).collect();
        Ok(PaginatedResult::new(items, ranks.len() as u64, params))
    }
}
