//! Runtime configuration read from the environment (and an optional `.env` file).

use std::env;
use std::path::PathBuf;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub const DEFAULT_DATASET_FILE: &str = "Data1000Movies.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the movie dataset
    pub data_path: PathBuf,
    pub dataset_file: String,
    pub movies_per_page: u32,
    pub featured_movies: usize,
    /// Seed the demo user, review and watchlist after loading the dataset
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data"),
            dataset_file: DEFAULT_DATASET_FILE.to_string(),
            movies_per_page: 3,
            featured_movies: 3,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read `CINELIST_*` variables over the defaults.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by `from_env` and tests)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_path = lookup("CINELIST_DATA_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let dataset_file = lookup("CINELIST_DATASET_FILE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.dataset_file);

        let movies_per_page = match lookup("CINELIST_MOVIES_PER_PAGE") {
            Some(raw) => parse_number::<u32>("CINELIST_MOVIES_PER_PAGE", &raw)?,
            None => defaults.movies_per_page,
        };
        Validator::validate_pagination(1, movies_per_page).map_err(|e| {
            AppError::InvalidInput(format!("CINELIST_MOVIES_PER_PAGE: {}", e))
        })?;

        let featured_movies = match lookup("CINELIST_FEATURED_MOVIES") {
            Some(raw) => parse_number::<usize>("CINELIST_FEATURED_MOVIES", &raw)?,
            None => defaults.featured_movies,
        };

        let seed_demo_data = match lookup("CINELIST_SEED_DEMO_DATA") {
            Some(raw) => parse_bool("CINELIST_SEED_DEMO_DATA", &raw)?,
            None => defaults.seed_demo_data,
        };

        Ok(Self {
            data_path,
            dataset_file,
            movies_per_page,
            featured_movies,
            seed_demo_data,
        })
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.data_path.join(&self.dataset_file)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::InvalidInput(format!("{} must be a number, got '{}'", key, raw)))
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::InvalidInput(format!(
            "{} must be a boolean, got '{}'",
            key, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dataset_path(), PathBuf::from("data/Data1000Movies.csv"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CINELIST_DATA_PATH", "/srv/movies"),
            ("CINELIST_DATASET_FILE", "sample.csv"),
            ("CINELIST_MOVIES_PER_PAGE", "10"),
            ("CINELIST_FEATURED_MOVIES", "5"),
            ("CINELIST_SEED_DEMO_DATA", "off"),
        ]))
        .unwrap();

        assert_eq!(config.dataset_path(), PathBuf::from("/srv/movies/sample.csv"));
        assert_eq!(config.movies_per_page, 10);
        assert_eq!(config.featured_movies, 5);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("CINELIST_MOVIES_PER_PAGE", "three")]))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("CINELIST_MOVIES_PER_PAGE", "0")]))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("CINELIST_SEED_DEMO_DATA", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_page_size_above_limit_names_the_key() {
        let err = AppConfig::from_lookup(lookup_from(&[("CINELIST_MOVIES_PER_PAGE", "101")]))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(ref msg) if msg.starts_with("CINELIST_MOVIES_PER_PAGE")));

        let config = AppConfig::from_lookup(lookup_from(&[("CINELIST_MOVIES_PER_PAGE", "100")])).unwrap();
        assert_eq!(config.movies_per_page, 100);
    }
}
