//! Initial roster loading.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::Employee;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read roster '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse roster '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a JSON array of employee records from `path`.
pub fn load_roster(path: &Path) -> Result<Vec<Employee>, SeedError> {
    let content = fs::read_to_string(path).map_err(|e| SeedError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let roster: Vec<Employee> =
        serde_json::from_str(&content).map_err(|e| SeedError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %path.display(), count = roster.len(), "roster loaded");
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_array_of_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(
            &path,
            r#"[{
                "id": 1,
                "firstName": "Ahmet",
                "lastName": "Sourtimes",
                "dateOfEmployment": "2022-09-23",
                "dateOfBirth": "1990-01-01",
                "phoneNumber": "5321234567",
                "email": "ahmet@sourtimes.org",
                "department": "Analytics",
                "position": "Junior"
            }]"#,
        )
        .unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id.as_str(), "1");
        assert_eq!(roster[0].last_name, "Sourtimes");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let err = load_roster(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SeedError::ReadError { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn malformed_record_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, r#"[{"id": "1"}]"#).unwrap();
        assert!(matches!(
            load_roster(&path),
            Err(SeedError::ParseError { .. })
        ));
    }
}
