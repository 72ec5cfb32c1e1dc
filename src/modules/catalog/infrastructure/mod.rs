pub mod csv_reader;

pub use csv_reader::{MovieCsvReader, MovieDataset, RATING_NOT_AVAILABLE};
