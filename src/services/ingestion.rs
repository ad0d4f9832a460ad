use anyhow::Result;
use log::info;

use crate::config::settings::DataSettings;
use crate::dataset::{self, Dataset};

pub struct IngestionService {
    data: DataSettings,
}

impl IngestionService {
    pub fn new(data: DataSettings) -> Self {
        Self { data }
    }

    pub fn run(&self) -> Result<Dataset> {
        info!("=== Loading Movie Data ===");

        // Step 1: Read both files
        let ratings = dataset::load_ratings(&self.data.ratings_path)?;
        let movies = dataset::load_movies(&self.data.movies_path)?;

        // Step 2: Join and derive matrix and aggregates
        let dataset = Dataset::from_records(ratings, movies);

        info!("=== Loading Complete ===");
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_run_loads_and_joins() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join("ratings.csv"),
            "userId,movieId,rating,timestamp\n\
             1,1,4.0,964982703\n\
             2,1,3.0,964982931\n\
             2,7,5.0,964982931\n",
        )?;
        fs::write(
            dir.path().join("movies.csv"),
            "movieId,title,genres\n1,Toy Story (1995),Adventure|Animation|Children\n",
        )?;

        let dataset = IngestionService::new(DataSettings::in_dir(dir.path())).run()?;

        assert_eq!(dataset.ratings().len(), 2);
        assert_eq!(dataset.dropped_ratings(), 1);
        assert_eq!(dataset.title_stats("Toy Story (1995)").map(|s| s.avg_rating), Some(3.5));
        Ok(())
    }

    #[test]
    fn test_run_fails_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let result = IngestionService::new(DataSettings::in_dir(dir.path())).run();
        assert!(result.is_err());
    }
}
