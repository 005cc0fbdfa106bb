use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::errors::InitError;

/// One historical career move.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransitionRecord {
    pub current_role: String,
    pub years_experience: f64,
    pub education_level: String,
    #[serde(rename = "current_salary_LPA")]
    pub current_salary: f64,
    pub next_role: String,
    #[serde(rename = "predicted_salary_LPA")]
    pub predicted_salary: f64,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub skills_to_learn: String,
}

/// Loads the historical transitions CSV. An empty file is an error.
pub fn load_transitions(path: &Path) -> Result<Vec<TransitionRecord>, InitError> {
    let file = File::open(path).map_err(|source| InitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_transitions(file, path)?;
    info!(
        "Loaded {} career transitions from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parses transitions from any reader; `origin` is only used in errors.
pub fn read_transitions<R: Read>(
    reader: R,
    origin: &Path,
) -> Result<Vec<TransitionRecord>, InitError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = csv_reader
        .deserialize()
        .collect::<Result<Vec<TransitionRecord>, _>>()
        .map_err(|source| InitError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;

    if records.is_empty() {
        return Err(InitError::Empty(format!(
            "career dataset {}",
            origin.display()
        )));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::fixtures::TRANSITIONS_CSV;

    #[test]
    fn test_reads_fixture() {
        let records = read_transitions(TRANSITIONS_CSV.as_bytes(), Path::new("fixture")).unwrap();
        assert_eq!(records.len(), 7);
        let first = &records[0];
        assert_eq!(first.current_role, "Software Engineer");
        assert_eq!(first.next_role, "Full Stack Developer");
        assert_eq!(first.current_salary, 8.0);
        assert_eq!(first.predicted_salary, 14.0);
        assert_eq!(first.skills_to_learn, "react, node.js, docker");
    }

    #[test]
    fn test_blank_skill_columns_become_empty() {
        let records = read_transitions(TRANSITIONS_CSV.as_bytes(), Path::new("fixture")).unwrap();
        let help_desk = records
            .iter()
            .find(|r| r.current_role == "Help Desk Technician")
            .unwrap();
        assert_eq!(help_desk.skills_to_learn, "");
    }

    #[test]
    fn test_header_only_is_empty_error() {
        let csv = "current_role,years_experience,education_level,current_salary_LPA,next_role,predicted_salary_LPA,skills,skills_to_learn\n";
        let err = read_transitions(csv.as_bytes(), Path::new("empty.csv")).unwrap_err();
        assert!(matches!(err, InitError::Empty(_)));
    }

    #[test]
    fn test_non_numeric_salary_is_malformed() {
        let csv = "current_role,years_experience,education_level,current_salary_LPA,next_role,predicted_salary_LPA,skills,skills_to_learn\n\
                   Software Engineer,3,Bachelors,lots,DevOps Engineer,18,,\n";
        let err = read_transitions(csv.as_bytes(), Path::new("bad.csv")).unwrap_err();
        assert!(matches!(err, InitError::Csv { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_transitions(Path::new("/nonexistent/career.csv")).unwrap_err();
        assert!(matches!(err, InitError::Io { .. }));
    }
}
