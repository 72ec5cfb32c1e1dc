/// Test data factories using builder pattern
///
/// Movies, users and dataset rows with sensible defaults
use cinelist_lib::modules::catalog::domain::{Actor, Director, Genre, Movie};
use std::sync::Arc;

pub const CSV_HEADER: &str = "Rank,Title,Genre,Description,Director,Actors,Year,Runtime (Minutes),Rating,Votes,Revenue (Millions),Metascore";

pub struct MovieFactory {
    rank: u32,
    title: String,
    year: u16,
    description: String,
    director: Option<String>,
    actors: Vec<String>,
    genres: Vec<String>,
    runtime_minutes: u32,
    rating: Option<f32>,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            rank: 1,
            title: "Test Movie".to_string(),
            year: 2016,
            description: "A test movie".to_string(),
            director: None,
            actors: Vec::new(),
            genres: Vec::new(),
            runtime_minutes: 100,
            rating: None,
        }
    }
}

impl MovieFactory {
    pub fn new(rank: u32, title: &str) -> Self {
        Self {
            rank,
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_director(mut self, director: &str) -> Self {
        self.director = Some(director.to_string());
        self
    }

    pub fn with_actors(mut self, actors: &[&str]) -> Self {
        self.actors = actors.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_runtime(mut self, minutes: u32) -> Self {
        self.runtime_minutes = minutes;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn build(self) -> Movie {
        let mut movie = Movie::new(&self.title, self.year).expect("valid factory movie");
        movie.set_rank(self.rank);
        movie.set_description(&self.description);
        if let Some(director) = &self.director {
            movie.set_director(Director::try_new(director).unwrap());
        }
        movie.set_actors(self.actors.iter().map(|a| Actor::try_new(a).unwrap()).collect());
        movie.set_genres(self.genres.iter().map(|g| Genre::try_new(g).unwrap()).collect());
        movie.set_runtime_minutes(self.runtime_minutes).unwrap();
        movie.set_rating(self.rating).unwrap();
        movie
    }

    pub fn build_arc(self) -> Arc<Movie> {
        Arc::new(self.build())
    }

    /// The movie as one dataset row, matching `CSV_HEADER`
    pub fn to_csv_row(&self) -> String {
        let rating = self
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        format!(
            "{},{},\"{}\",\"{}\",{},\"{}\",{},{},{},1000,10.5,70",
            self.rank,
            self.title,
            self.genres.join(","),
            self.description,
            self.director.clone().unwrap_or_default(),
            self.actors.join(", "),
            self.year,
            self.runtime_minutes,
            rating
        )
    }
}

/// The three-row sample used across the integration tests. Director, genre
/// and actor values repeat between rows.
pub fn sample_movies() -> Vec<MovieFactory> {
    vec![
        MovieFactory::new(1, "Guardians of the Galaxy")
            .with_year(2014)
            .with_genres(&["Action", "Adventure", "Sci-Fi"])
            .with_director("James Gunn")
            .with_actors(&["Chris Pratt", "Vin Diesel", "Bradley Cooper", "Zoe Saldana"])
            .with_runtime(121)
            .with_rating(8.1),
        MovieFactory::new(2, "Prometheus")
            .with_year(2012)
            .with_genres(&["Adventure", "Mystery", "Sci-Fi"])
            .with_director("Ridley Scott")
            .with_actors(&["Noomi Rapace", "Logan Marshall-Green", "Michael Fassbender"])
            .with_runtime(124)
            .with_rating(7.0),
        MovieFactory::new(3, "The Martian")
            .with_year(2015)
            .with_genres(&["Adventure", "Drama", "Sci-Fi"])
            .with_director("Ridley Scott")
            .with_actors(&["Matt Damon", "Jessica Chastain", "Chris Pratt"])
            .with_runtime(144),
    ]
}
