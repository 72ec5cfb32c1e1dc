//! Display-ready flattenings of catalog entities.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::modules::catalog::domain::{Actor, Director, Genre, Movie};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorView {
    pub director_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub actor_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreView {
    pub genre_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieView {
    pub rank: Option<u32>,
    pub title: String,
    pub release_year: u16,
    pub description: String,
    pub director: DirectorView,
    pub actors: Vec<ActorView>,
    pub genres: Vec<GenreView>,
    pub runtime_minutes: u32,
    pub rating: Option<f32>,
}

/// Short form used for the featured-movie sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedMovieView {
    pub rank: Option<u32>,
    pub title: String,
    pub release_year: u16,
    pub description: String,
}

impl From<&Director> for DirectorView {
    fn from(director: &Director) -> Self {
        Self {
            director_name: director.full_name().map(str::to_string),
        }
    }
}

impl From<&Actor> for ActorView {
    fn from(actor: &Actor) -> Self {
        Self {
            actor_name: actor.full_name().map(str::to_string),
        }
    }
}

impl From<&Genre> for GenreView {
    fn from(genre: &Genre) -> Self {
        Self {
            genre_name: genre.name().map(str::to_string),
        }
    }
}

impl From<&Movie> for MovieView {
    fn from(movie: &Movie) -> Self {
        Self {
            rank: movie.rank(),
            title: movie.title().to_string(),
            release_year: movie.release_year(),
            description: movie.description().to_string(),
            director: DirectorView::from(movie.director()),
            actors: movie.actors().iter().map(ActorView::from).collect(),
            genres: movie.genres().iter().map(GenreView::from).collect(),
            runtime_minutes: movie.runtime_minutes(),
            rating: movie.rating(),
        }
    }
}

impl From<&Arc<Movie>> for MovieView {
    fn from(movie: &Arc<Movie>) -> Self {
        MovieView::from(movie.as_ref())
    }
}

impl From<&Movie> for FeaturedMovieView {
    fn from(movie: &Movie) -> Self {
        Self {
            rank: movie.rank(),
            title: movie.title().to_string(),
            release_year: movie.release_year(),
            description: movie.description().to_string(),
        }
    }
}

impl TryFrom<DirectorView> for Director {
    type Error = AppError;

    fn try_from(view: DirectorView) -> AppResult<Self> {
        match view.director_name {
            Some(name) => Director::try_new(&name),
            None => Ok(Director::default()),
        }
    }
}

impl TryFrom<ActorView> for Actor {
    type Error = AppError;

    fn try_from(view: ActorView) -> AppResult<Self> {
        match view.actor_name {
            Some(name) => Actor::try_new(&name),
            None => Ok(Actor::default()),
        }
    }
}

impl TryFrom<GenreView> for Genre {
    type Error = AppError;

    fn try_from(view: GenreView) -> AppResult<Self> {
        match view.genre_name {
            Some(name) => Genre::try_new(&name),
            None => Ok(Genre::default()),
        }
    }
}

/// Rebuild a movie from its view, re-running every field validation
impl TryFrom<MovieView> for Movie {
    type Error = AppError;

    fn try_from(view: MovieView) -> AppResult<Self> {
        let mut movie = Movie::new(&view.title, view.release_year)?;
        if let Some(rank) = view.rank {
            movie.set_rank(rank);
        }
        movie.set_description(&view.description);
        movie.set_director(Director::try_from(view.director)?);
        movie.set_actors(
            view.actors
                .into_iter()
                .map(Actor::try_from)
                .collect::<AppResult<Vec<_>>>()?,
        );
        movie.set_genres(
            view.genres
                .into_iter()
                .map(Genre::try_from)
                .collect::<AppResult<Vec<_>>>()?,
        );
        // zero means "never set"
        if view.runtime_minutes > 0 {
            movie.set_runtime_minutes(view.runtime_minutes)?;
        }
        movie.set_rating(view.rating)?;
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        let mut movie = Movie::new("Passengers", 2016).unwrap();
        movie.set_rank(10);
        movie.set_description("A spacecraft traveling to a distant colony planet.");
        movie.set_director(Director::try_new("Morten Tyldum").unwrap());
        movie.set_actors(vec![
            Actor::try_new("Jennifer Lawrence").unwrap(),
            Actor::try_new("Chris Pratt").unwrap(),
        ]);
        movie.set_genres(vec![Genre::try_new("Adventure").unwrap()]);
        movie.set_runtime_minutes(116).unwrap();
        movie.set_rating(Some(7.0)).unwrap();
        movie
    }

    #[test]
    fn test_movie_view_keys() {
        let json = serde_json::to_value(MovieView::from(&sample())).unwrap();

        assert_eq!(json["rank"], 10);
        assert_eq!(json["title"], "Passengers");
        assert_eq!(json["release_year"], 2016);
        assert_eq!(json["director"]["director_name"], "Morten Tyldum");
        assert_eq!(json["actors"][1]["actor_name"], "Chris Pratt");
        assert_eq!(json["genres"][0]["genre_name"], "Adventure");
        assert_eq!(json["runtime_minutes"], 116);
        assert_eq!(json["rating"], 7.0);
    }

    #[test]
    fn test_view_rebuilds_equal_movie() {
        let original = sample();
        let rebuilt = Movie::try_from(MovieView::from(&original)).unwrap();

        assert_eq!(rebuilt, original);
        assert_eq!(rebuilt.rank(), Some(10));
        assert_eq!(rebuilt.director(), original.director());
        assert_eq!(rebuilt.actors(), original.actors());
        assert_eq!(rebuilt.runtime_minutes(), 116);
    }

    #[test]
    fn test_invalid_view_is_rejected() {
        let mut view = MovieView::from(&sample());
        view.rating = Some(12.5);
        assert!(Movie::try_from(view).is_err());
    }
}
