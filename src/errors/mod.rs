use std::path::PathBuf;

use thiserror::Error;

/// Conditions the CLI and API branch on. Everything else travels as `anyhow::Error`.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to read data file {path}: {source}")]
    DataFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Movie '{0}' was not found in the ratings matrix")]
    MovieNotFound(String),

    #[error("User {0} has no ratings")]
    UserNotFound(u32),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DashboardError {
    /// Lookup misses are reported as warnings rather than failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DashboardError::MovieNotFound(_) | DashboardError::UserNotFound(_)
        )
    }
}

/// Add context to data file errors
pub fn load_context(kind: &str, path: &std::path::Path) -> String {
    format!("Failed to load {} from: {}", kind, path.display())
}

/// Find a `DashboardError` anywhere in an anyhow chain
pub fn find_dashboard_error(err: &anyhow::Error) -> Option<&DashboardError> {
    err.chain().find_map(|cause| cause.downcast_ref::<DashboardError>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_dashboard_error_found_through_context() {
        let result: anyhow::Result<()> = Err(DashboardError::MovieNotFound("Heat (1995)".into()))
            .context("Failed to build recommendations");

        let err = result.unwrap_err();
        let found = find_dashboard_error(&err).expect("dashboard error in chain");

        assert!(found.is_not_found());
        assert_eq!(
            found.to_string(),
            "Movie 'Heat (1995)' was not found in the ratings matrix"
        );
    }

    #[test]
    fn test_invalid_parameter_is_not_a_lookup_miss() {
        let err = DashboardError::InvalidParameter("page must be positive".into());
        assert!(!err.is_not_found());
    }
}
