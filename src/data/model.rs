use csv::StringRecord;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Column – the fixed schema of the input table
// ---------------------------------------------------------------------------

/// One of the nine columns every input file must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Age,
    Gender,
    Bmi,
    Smoking,
    GeneticRisk,
    PhysicalActivity,
    AlcoholIntake,
    CancerHistory,
    Diagnosis,
}

impl Column {
    /// Schema order, as written by the upstream export.
    pub const ALL: [Column; 9] = [
        Column::Age,
        Column::Gender,
        Column::Bmi,
        Column::Smoking,
        Column::GeneticRisk,
        Column::PhysicalActivity,
        Column::AlcoholIntake,
        Column::CancerHistory,
        Column::Diagnosis,
    ];

    /// Header name in the CSV file.
    pub fn name(self) -> &'static str {
        match self {
            Column::Age => "Age",
            Column::Gender => "Gender",
            Column::Bmi => "BMI",
            Column::Smoking => "Smoking",
            Column::GeneticRisk => "GeneticRisk",
            Column::PhysicalActivity => "PhysicalActivity",
            Column::AlcoholIntake => "AlcoholIntake",
            Column::CancerHistory => "CancerHistory",
            Column::Diagnosis => "Diagnosis",
        }
    }
}

/// Optional column holding the output of an external classifier.
pub const CLASSIFIER_SCORE: &str = "ClassifierScore";

// ---------------------------------------------------------------------------
// Flag – the discrete (binary / categorical) columns
// ---------------------------------------------------------------------------

/// Binary columns that pages count or group on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// 0 = Male, 1 = Female.
    Gender,
    Smoking,
    CancerHistory,
    /// 0 = No Cancer, 1 = Cancer.
    Diagnosis,
}

// ---------------------------------------------------------------------------
// Record – one patient
// ---------------------------------------------------------------------------

/// A single patient (one row of the source table).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Gender")]
    pub gender: u8,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Smoking")]
    pub smoking: u8,
    #[serde(rename = "GeneticRisk")]
    pub genetic_risk: u8,
    /// Hours per week.
    #[serde(rename = "PhysicalActivity")]
    pub physical_activity: f64,
    /// Units per week.
    #[serde(rename = "AlcoholIntake")]
    pub alcohol_intake: f64,
    #[serde(rename = "CancerHistory")]
    pub cancer_history: u8,
    #[serde(rename = "Diagnosis")]
    pub diagnosis: u8,
}

impl Record {
    /// Value of a discrete column.
    pub fn flag(&self, flag: Flag) -> u8 {
        match flag {
            Flag::Gender => self.gender,
            Flag::Smoking => self.smoking,
            Flag::CancerHistory => self.cancer_history,
            Flag::Diagnosis => self.diagnosis,
        }
    }

    /// Display text for every schema column, in [`Column::ALL`] order.
    pub fn cells(&self) -> [String; 9] {
        [
            self.age.to_string(),
            self.gender.to_string(),
            format!("{:.6}", self.bmi),
            self.smoking.to_string(),
            self.genetic_risk.to_string(),
            format!("{:.6}", self.physical_activity),
            format!("{:.6}", self.alcohol_intake),
            self.cancer_history.to_string(),
            self.diagnosis.to_string(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table. Built once by the loader and only read afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    /// Source cells per record, aligned with `column_names`.
    rows: Vec<StringRecord>,
    /// Header names in file order (may include extra columns).
    column_names: Vec<String>,
    /// Present only when the file carries a `ClassifierScore` column.
    classifier_scores: Option<Vec<f64>>,
}

impl Dataset {
    pub fn new(
        records: Vec<Record>,
        rows: Vec<StringRecord>,
        column_names: Vec<String>,
        classifier_scores: Option<Vec<f64>>,
    ) -> Self {
        Dataset {
            records,
            rows,
            column_names,
            classifier_scores,
        }
    }

    /// Build a dataset with exactly the nine schema columns.
    pub fn from_records(records: Vec<Record>) -> Self {
        let column_names = Column::ALL.iter().map(|c| c.name().to_string()).collect();
        let rows = records
            .iter()
            .map(|r| StringRecord::from(r.cells().to_vec()))
            .collect();
        Dataset::new(records, rows, column_names, None)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Raw cells of every record, in file column order.
    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    /// Classifier output per record, if the input carried it.
    pub fn classifier_scores(&self) -> Option<&[f64]> {
        self.classifier_scores.as_deref()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a record with the given discrete values and neutral numerics.
    pub(crate) fn record(gender: u8, smoking: u8, history: u8, diagnosis: u8) -> Record {
        Record {
            age: 50,
            gender,
            bmi: 25.0,
            smoking,
            genetic_risk: 0,
            physical_activity: 5.0,
            alcohol_intake: 2.5,
            cancer_history: history,
            diagnosis,
        }
    }

    #[test]
    fn test_flag_reads_matching_field() {
        let r = record(1, 0, 1, 0);
        assert_eq!(r.flag(Flag::Gender), 1);
        assert_eq!(r.flag(Flag::Smoking), 0);
        assert_eq!(r.flag(Flag::CancerHistory), 1);
        assert_eq!(r.flag(Flag::Diagnosis), 0);
    }

    #[test]
    fn test_from_records_has_schema_columns_only() {
        let ds = Dataset::from_records(vec![record(0, 0, 0, 0)]);
        assert_eq!(ds.column_names().len(), 9);
        assert!(ds.has_column("BMI"));
        assert!(!ds.has_column(CLASSIFIER_SCORE));
        assert!(ds.classifier_scores().is_none());
        assert_eq!(ds.rows().len(), 1);
        assert_eq!(ds.rows()[0].get(2), Some("25.000000"));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
        assert!(ds.rows().is_empty());
    }

    #[test]
    fn test_cells_follow_schema_order() {
        let cells = record(1, 1, 0, 1).cells();
        assert_eq!(cells[0], "50");
        assert_eq!(cells[1], "1");
        assert_eq!(cells[2], "25.000000");
        assert_eq!(cells[8], "1");
    }
}
