/// Test helper functions and service builders
use super::factories::{sample_movies, MovieFactory, CSV_HEADER};
use cinelist_lib::shared::AppConfig;
use cinelist_lib::{bootstrap, AppServices};
use std::io::Write;
use tempfile::TempDir;

pub const DATASET_FILE: &str = "movies.csv";

/// Dataset written to a temporary directory that lives as long as the value
pub struct TestDataset {
    pub dir: TempDir,
}

impl TestDataset {
    pub fn write(movies: &[MovieFactory]) -> Self {
        let rows: Vec<String> = movies.iter().map(MovieFactory::to_csv_row).collect();
        Self::write_raw(&rows)
    }

    pub fn write_raw(rows: &[String]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut file = std::fs::File::create(dir.path().join(DATASET_FILE)).expect("create dataset");
        writeln!(file, "{}", CSV_HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        Self { dir }
    }

    pub fn sample() -> Self {
        Self::write(&sample_movies())
    }

    pub fn path(&self) -> std::path::PathBuf {
        self.dir.path().join(DATASET_FILE)
    }

    pub fn config(&self, seed_demo_data: bool) -> AppConfig {
        AppConfig {
            data_path: self.dir.path().to_path_buf(),
            dataset_file: DATASET_FILE.to_string(),
            seed_demo_data,
            ..AppConfig::default()
        }
    }
}

/// Bootstrapped services over `dataset`
pub async fn build_test_services(dataset: &TestDataset, seed_demo_data: bool) -> AppServices {
    bootstrap(&dataset.config(seed_demo_data))
        .await
        .expect("bootstrap over test dataset")
}
