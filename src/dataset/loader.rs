use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;

use crate::domain::{MovieRecord, RatingRecord};
use crate::errors::{load_context, DashboardError};

pub fn load_ratings(path: &Path) -> Result<Vec<RatingRecord>> {
    let ratings = read_csv(path).with_context(|| load_context("ratings", path))?;
    info!("Loaded {} ratings from {}", ratings.len(), path.display());
    Ok(ratings)
}

pub fn load_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let movies = read_csv(path).with_context(|| load_context("movies", path))?;
    info!("Loaded {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DashboardError> {
    let to_error = |source: csv::Error| DashboardError::DataFile {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(to_error)?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(to_error)
}
