use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Column, Dataset, Record, CLASSIFIER_SCORE};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why the input table could not be turned into a [`Dataset`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error("CSV missing column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("CSV row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV row {row}: '{value}' is not a valid ClassifierScore")]
    Score { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the patient table from a CSV file.
///
/// The header must name all nine schema columns (any order); extra columns
/// are kept in [`Dataset::column_names`] and the raw rows. `ClassifierScore`
/// is parsed when present; a blank score cell reads as NaN.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Same as [`load_csv`] for any byte source.
pub fn load_reader<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    let column_names: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let missing: Vec<String> = Column::ALL
        .iter()
        .map(|c| c.name())
        .filter(|name| !column_names.iter().any(|h| h == name))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let score_idx = column_names.iter().position(|h| h == CLASSIFIER_SCORE);

    let mut records = Vec::new();
    let mut rows = Vec::new();
    let mut scores = score_idx.map(|_| Vec::new());

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|source| LoadError::Row { row, source })?;
        let record: Record = raw
            .deserialize(Some(&headers))
            .map_err(|source| LoadError::Row { row, source })?;

        if let (Some(idx), Some(scores)) = (score_idx, scores.as_mut()) {
            scores.push(parse_score(raw.get(idx).unwrap_or(""), row)?);
        }

        records.push(record);
        rows.push(raw);
    }

    Ok(Dataset::new(records, rows, column_names, scores))
}

/// Missing scores are NaN, as in the upstream export.
fn parse_score(cell: &str, row: usize) -> Result<f64, LoadError> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>().map_err(|_| LoadError::Score {
        row,
        value: cell.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Age,Gender,BMI,Smoking,GeneticRisk,PhysicalActivity,AlcoholIntake,CancerHistory,Diagnosis";

    #[test]
    fn test_load_reader_parses_rows() {
        let text = format!(
            "{HEADER}\n58,1,16.085,0,1,8.146,4.148,1,1\n71,0,30.828,0,1,9.361,3.519,0,0\n"
        );
        let ds = load_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_names().len(), 9);
        let first = &ds.records()[0];
        assert_eq!(first.age, 58);
        assert_eq!(first.gender, 1);
        assert!((first.bmi - 16.085).abs() < 1e-9);
        assert_eq!(first.diagnosis, 1);
        assert!(ds.classifier_scores().is_none());
    }

    #[test]
    fn test_load_reader_accepts_any_column_order() {
        let text = "Diagnosis,Age,Gender,BMI,Smoking,GeneticRisk,PhysicalActivity,AlcoholIntake,CancerHistory\n\
                    1,40,0,22.5,1,2,3.0,1.0,0\n";
        let ds = load_reader(text.as_bytes()).unwrap();
        let r = &ds.records()[0];
        assert_eq!(r.diagnosis, 1);
        assert_eq!(r.age, 40);
        assert_eq!(r.genetic_risk, 2);
        assert_eq!(ds.column_names()[0], "Diagnosis");
    }

    #[test]
    fn test_load_reader_reads_classifier_score() {
        let text = format!("{HEADER},ClassifierScore\n58,1,16.0,0,1,8.1,4.1,1,1,0.91\n30,0,20.0,1,0,2.0,1.0,0,0,0.12\n");
        let ds = load_reader(text.as_bytes()).unwrap();
        assert!(ds.has_column(CLASSIFIER_SCORE));
        assert_eq!(ds.classifier_scores(), Some(&[0.91, 0.12][..]));
    }

    #[test]
    fn test_load_reader_blank_score_is_nan() {
        let text = format!("{HEADER},ClassifierScore\n58,1,16.0,0,1,8.1,4.1,1,1,0.91\n30,0,20.0,1,0,2.0,1.0,0,0,\n");
        let ds = load_reader(text.as_bytes()).unwrap();
        let scores = ds.classifier_scores().unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0], 0.91);
        assert!(scores[1].is_nan());
    }

    #[test]
    fn test_load_reader_keeps_extra_columns_in_file_order() {
        let text = "PatientId,Age,Gender,BMI,Smoking,GeneticRisk,PhysicalActivity,AlcoholIntake,CancerHistory,Diagnosis,Site\n\
                    P-001,58,1,16.0,0,1,8.1,4.1,1,1,north\n\
                    P-002,30,0,20.0,1,0,2.0,1.0,0,0,south\n";
        let ds = load_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_names().len(), 11);
        assert_eq!(ds.column_names()[0], "PatientId");
        assert_eq!(ds.column_names()[10], "Site");
        assert!(ds.has_column("Site"));
        assert!(ds.classifier_scores().is_none());
        assert_eq!(ds.records()[1].age, 30);

        let row = &ds.rows()[1];
        assert_eq!(row.len(), 11);
        assert_eq!(row.get(0), Some("P-002"));
        assert_eq!(row.get(10), Some("south"));
    }

    #[test]
    fn test_load_reader_reports_missing_columns() {
        let text = "Age,Gender,Smoking\n1,0,0\n";
        match load_reader(text.as_bytes()) {
            Err(LoadError::MissingColumns(cols)) => {
                assert_eq!(cols.len(), 6);
                assert!(cols.contains(&"BMI".to_string()));
                assert!(cols.contains(&"Diagnosis".to_string()));
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_load_reader_reports_bad_row() {
        let text = format!("{HEADER}\n58,1,16.0,0,1,8.1,4.1,1,1\n58,1,abc,0,1,8.1,4.1,1,1\n");
        match load_reader(text.as_bytes()) {
            Err(LoadError::Row { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_reader_reports_bad_score() {
        let text = format!("{HEADER},ClassifierScore\n58,1,16.0,0,1,8.1,4.1,1,1,high\n");
        match load_reader(text.as_bytes()) {
            Err(LoadError::Score { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "high");
            }
            other => panic!("expected Score error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_csv_missing_file() {
        let err = load_csv(Path::new("no/such/dir/patients.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("patients.csv"));
    }
}
