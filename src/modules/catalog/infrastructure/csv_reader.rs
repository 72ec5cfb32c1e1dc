//! Movie dataset loader.
//!
//! Reads the flat movie file (one row per movie) into `Movie` values and the
//! de-duplicated director, genre and actor sets.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::hash::Hash;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::modules::catalog::domain::{Actor, Director, Genre, Movie, MovieRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// Marker used by the dataset for a missing rating
pub const RATING_NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Deserialize)]
struct MovieRecord {
    #[serde(rename = "Rank")]
    rank: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Director")]
    director: String,
    #[serde(rename = "Actors")]
    actors: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Runtime (Minutes)")]
    runtime: String,
    #[serde(rename = "Rating")]
    rating: String,
}

/// Everything parsed out of one dataset file
#[derive(Debug, Clone, Default)]
pub struct MovieDataset {
    pub movies: Vec<Movie>,
    pub directors: Vec<Director>,
    pub genres: Vec<Genre>,
    pub actors: Vec<Actor>,
}

impl MovieDataset {
    /// Push every movie and shared entity into `repo`.
    pub async fn load_into(self, repo: &dyn MovieRepository) -> AppResult<()> {
        LogContext::repo_operation("load", "movies", Some(self.movies.len()));
        for movie in self.movies {
            repo.add_movie(movie).await?;
        }
        for genre in self.genres {
            repo.add_genre(genre).await?;
        }
        for director in self.directors {
            repo.add_director(director).await?;
        }
        for actor in self.actors {
            repo.add_actor(actor).await?;
        }
        Ok(())
    }
}

/// Keeps the first instance of each distinct entity, in first-seen order
struct Registry<T> {
    seen: HashSet<T>,
    ordered: Vec<T>,
}

impl<T: Clone + Eq + Hash> Registry<T> {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            ordered: Vec::new(),
        }
    }

    fn intern(&mut self, value: T) -> T {
        if let Some(existing) = self.seen.get(&value) {
            return existing.clone();
        }
        self.seen.insert(value.clone());
        self.ordered.push(value.clone());
        value
    }

    fn into_vec(self) -> Vec<T> {
        self.ordered
    }
}

pub struct MovieCsvReader;

impl MovieCsvReader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> AppResult<MovieDataset> {
        let path = path.as_ref();
        let timer = TimedOperation::new("dataset load");
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;

        LogContext::dataset_loaded(
            &path.display().to_string(),
            dataset.movies.len(),
            dataset.directors.len(),
            dataset.genres.len(),
            dataset.actors.len(),
        );
        timer.finish_with_info(&format!("{} movies", dataset.movies.len()));
        Ok(dataset)
    }

    /// `from_path` run on the blocking thread pool
    pub async fn load(path: PathBuf) -> AppResult<MovieDataset> {
        tokio::task::spawn_blocking(move || Self::from_path(path))
            .await
            .map_err(|e| AppError::InternalError(format!("Dataset load task failed: {}", e)))?
    }

    /// Parse a dataset from any reader. The whole load fails on the first bad row.
    pub fn from_reader<R: Read>(source: R) -> AppResult<MovieDataset> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::None)
            .from_reader(source);

        let mut directors = Registry::new();
        let mut genres = Registry::new();
        let mut actors = Registry::new();
        let mut movies = Vec::new();

        for (index, result) in reader.deserialize::<MovieRecord>().enumerate() {
            let record = result?;
            // header is line 1
            let line = index + 2;
            let movie = Self::build_movie(record, line, &mut directors, &mut genres, &mut actors)?;
            movies.push(movie);
        }

        Ok(MovieDataset {
            movies,
            directors: directors.into_vec(),
            genres: genres.into_vec(),
            actors: actors.into_vec(),
        })
    }

    fn build_movie(
        record: MovieRecord,
        line: usize,
        directors: &mut Registry<Director>,
        genres: &mut Registry<Genre>,
        actors: &mut Registry<Actor>,
    ) -> AppResult<Movie> {
        let rank: u32 = parse_field(&record.rank, "Rank", line)?;
        let year: u16 = parse_field(&record.year, "Year", line)?;
        let runtime: u32 = parse_field(&record.runtime, "Runtime (Minutes)", line)?;
        let rating = parse_rating(&record.rating, line)?;

        let mut movie = Movie::new(&record.title, year).map_err(|e| row_error(line, e))?;
        movie.set_rank(rank);
        movie.set_description(&record.description);
        movie
            .set_runtime_minutes(runtime)
            .map_err(|e| row_error(line, e))?;
        movie.set_rating(rating).map_err(|e| row_error(line, e))?;

        if !record.director.trim().is_empty() {
            let director = Director::try_new(&record.director)?;
            movie.set_director(directors.intern(director));
        }

        let movie_genres = split_names(&record.genre)
            .map(|name| Genre::try_new(name).map(|g| genres.intern(g)))
            .collect::<AppResult<Vec<_>>>()?;
        movie.set_genres(movie_genres);

        let movie_actors = split_names(&record.actors)
            .map(|name| Actor::try_new(name).map(|a| actors.intern(a)))
            .collect::<AppResult<Vec<_>>>()?;
        movie.set_actors(movie_actors);

        Ok(movie)
    }
}

fn split_names(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|name| !name.is_empty())
}

fn parse_field<T: std::str::FromStr>(raw: &str, column: &str, line: usize) -> AppResult<T> {
    raw.trim().parse::<T>().map_err(|_| {
        AppError::DatasetError(format!(
            "line {}: column '{}' is not a valid number: '{}'",
            line, column, raw
        ))
    })
}

fn parse_rating(raw: &str, line: usize) -> AppResult<Option<f32>> {
    let raw = raw.trim();
    if raw == RATING_NOT_AVAILABLE {
        return Ok(None);
    }
    parse_field::<f32>(raw, "Rating", line).map(Some)
}

fn row_error(line: usize, err: AppError) -> AppError {
    AppError::DatasetError(format!("line {}: {}", line, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Rank,Title,Genre,Description,Director,Actors,Year,Runtime (Minutes),Rating,Votes";

    fn csv(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn test_parses_row_fields() {
        let data = csv(&[
            r#"1,Guardians of the Galaxy,"Action,Adventure,Sci-Fi",A group of intergalactic criminals.,James Gunn,"Chris Pratt, Vin Diesel, Bradley Cooper",2014,121,8.1,757074"#,
        ]);
        let dataset = MovieCsvReader::from_reader(data.as_bytes()).unwrap();

        assert_eq!(dataset.movies.len(), 1);
        let movie = &dataset.movies[0];
        assert_eq!(movie.rank(), Some(1));
        assert_eq!(movie.title(), "Guardians of the Galaxy");
        assert_eq!(movie.release_year(), 2014);
        assert_eq!(movie.runtime_minutes(), 121);
        assert_eq!(movie.rating(), Some(8.1));
        assert_eq!(movie.director().full_name(), Some("James Gunn"));
        assert_eq!(movie.genres().len(), 3);
        assert_eq!(movie.actors()[1].full_name(), Some("Vin Diesel"));
        assert_eq!(movie.description(), "A group of intergalactic criminals.");
    }

    #[test]
    fn test_not_available_rating_is_absent() {
        let data = csv(&[r#"7,La La Land,"Comedy,Drama",Jazz.,Damien Chazelle,"Ryan Gosling",2016,128,N/A,1"#]);
        let dataset = MovieCsvReader::from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.movies[0].rating(), None);
    }

    #[test]
    fn test_malformed_numbers_fail_the_load() {
        for row in [
            r#"x,Split,Horror,Desc,M. Night Shyamalan,James McAvoy,2016,117,7.3,1"#,
            r#"3,Split,Horror,Desc,M. Night Shyamalan,James McAvoy,twenty,117,7.3,1"#,
            r#"3,Split,Horror,Desc,M. Night Shyamalan,James McAvoy,2016,,7.3,1"#,
            r#"3,Split,Horror,Desc,M. Night Shyamalan,James McAvoy,2016,117,great,1"#,
        ] {
            let err = MovieCsvReader::from_reader(csv(&[row]).as_bytes()).unwrap_err();
            assert!(matches!(err, AppError::DatasetError(_)), "row {row} gave {err:?}");
        }
    }

    #[test]
    fn test_zero_runtime_names_the_line() {
        let data = csv(&[
            r#"1,Sing,Animation,Desc,Christophe Lourdelet,Matthew McConaughey,2016,108,7.2,1"#,
            r#"2,Split,Horror,Desc,M. Night Shyamalan,James McAvoy,2016,0,7.3,1"#,
        ]);
        match MovieCsvReader::from_reader(data.as_bytes()).unwrap_err() {
            AppError::DatasetError(msg) => assert!(msg.starts_with("line 3:"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_blank_subfields_are_skipped() {
        let data = csv(&[r#"4,Prometheus,"Adventure,,Mystery, ",Desc,,"Noomi Rapace,,",2012,124,7.0,1"#]);
        let dataset = MovieCsvReader::from_reader(data.as_bytes()).unwrap();
        let movie = &dataset.movies[0];

        assert_eq!(movie.genres().len(), 2);
        assert_eq!(movie.actors().len(), 1);
        assert!(!movie.director().is_named());
        assert!(dataset.directors.is_empty());
    }
}
