use crate::color;
use crate::data::model::{Dataset, Flag, CLASSIFIER_SCORE};
use crate::data::stats::{self, Histogram, KDE_CUT, KDE_GRID};

use super::view::{Axes, BarChart, BarItem, DensityChart, HistogramChart, HistogramSeries, PageView};

// ---------------------------------------------------------------------------
// Narrative text
// ---------------------------------------------------------------------------
//
// Observations made on the 1500-patient release of the dataset. They are not
// recomputed from whatever file is loaded.

pub const SMOKING_NOTE: &str = "It looks like smoking has impact to cancer risk: \
    from P(Cancer|No smoking) = 30.5 % up to P(Cancer|Smoking) = 55.2 %. \
    Be careful, smoking increases the risk of cancer by 25 %!";

pub const GENDER_NOTE: &str = "We have uniform gender distribution. \
    But women are 24.2 % more likely to develop cancer: \
    P(Cancer|Female) - P(Cancer|Male) = 24.2%";

pub const BMI_NOTE: &str = "An increase in BMI above 25 significantly raises the risk of cancer. \
    P(Cancer|BMI > 26) > 43 %, P(Cancer|BMI ≤ 26) < 25 %";

pub const CLASSIFIER_MISSING: &str = "Column 'ClassifierScore' not found in the dataset.";

const ABOUT: &str = "This dataset contains medical and lifestyle information for 1500 patients, \
    designed to predict the presence of cancer based on various features. \
    The dataset is structured to provide a realistic challenge for predictive modeling in the medical domain.";

const STRUCTURE: [&str; 9] = [
    "Age: Integer values representing the patient's age, ranging from 20 to 80.",
    "Gender: Binary values representing gender, where 0 indicates Male and 1 indicates Female.",
    "BMI: Continuous values representing Body Mass Index, ranging from 15 to 40.",
    "Smoking: Binary values indicating smoking status, where 0 means No and 1 means Yes.",
    "GeneticRisk: Categorical values representing genetic risk levels for cancer, with 0 indicating Low, 1 indicating Medium, and 2 indicating High.",
    "PhysicalActivity: Continuous values representing the number of hours per week spent on physical activities, ranging from 0 to 10.",
    "AlcoholIntake: Continuous values representing the number of alcohol units consumed per week, ranging from 0 to 5.",
    "CancerHistory: Binary values indicating whether the patient has a personal history of cancer, where 0 means No and 1 means Yes.",
    "Diagnosis: Binary values indicating the cancer diagnosis status, where 0 indicates No Cancer and 1 indicates Cancer.",
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Bar chart over the value counts of a discrete column, one tick label per
/// value (`labels[v]`, falling back to the number itself).
fn count_bars(dataset: &Dataset, flag: Flag, labels: &[&str], axes: Axes) -> BarChart {
    let counts = stats::value_counts(dataset, flag);
    let palette = color::generate_palette(counts.len());
    let bars = counts
        .into_iter()
        .zip(palette)
        .map(|((key, n), color)| BarItem {
            key,
            label: labels
                .get(key as usize)
                .map(|l| l.to_string())
                .unwrap_or_else(|| key.to_string()),
            value: n as f64,
            color,
        })
        .collect();
    BarChart { axes, bars }
}

// ---------------------------------------------------------------------------
// Render routines
// ---------------------------------------------------------------------------

pub fn home(_dataset: &Dataset, out: &mut PageView) {
    out.header("Home");
    out.text("About Data");
    out.text(ABOUT);
    out.subheader("Dataset Structure");
    out.bullets(STRUCTURE);
}

pub fn cancer_count(dataset: &Dataset, out: &mut PageView) {
    out.header("Number of People With Cancer vs No Cancer");

    let diagnoses = |value: u8| -> Vec<f64> {
        stats::select(dataset, Flag::Diagnosis, value)
            .iter()
            .map(|r| r.diagnosis as f64)
            .collect()
    };

    out.histogram(HistogramChart {
        axes: Axes::new(
            "Number of People With and Without Cancer",
            "Diagnosis (0: No Cancer, 1: Cancer)",
            "Number of People",
        ),
        series: vec![
            HistogramSeries {
                name: "No Cancer".to_string(),
                histogram: Histogram::compute(&diagnoses(0), 2),
                color: color::skyblue(),
            },
            HistogramSeries {
                name: "Cancer".to_string(),
                histogram: Histogram::compute(&diagnoses(1), 2),
                color: color::salmon(),
            },
        ],
        density: None,
    });

    out.text(SMOKING_NOTE);
}

pub fn diagnoses_ratio_by_gender(dataset: &Dataset, out: &mut PageView) {
    out.header("Positive Diagnoses Ratio by Gender");

    let ratios = stats::group_mean(dataset, Flag::Gender, Flag::Diagnosis);
    let palette = color::generate_palette(ratios.len());
    let bars = ratios
        .into_iter()
        .zip(palette)
        .map(|((key, ratio), color)| BarItem {
            key,
            label: key.to_string(),
            value: ratio,
            color,
        })
        .collect();

    out.bar(BarChart {
        axes: Axes::new(
            "Positive Diagnoses Ratio by Gender",
            "Gender (0: Male, 1: Female)",
            "Positive Diagnoses Ratio",
        ),
        bars,
    });

    out.text(GENDER_NOTE);
}

pub fn gender_count(dataset: &Dataset, out: &mut PageView) {
    out.header("Number of Male and Female");
    out.bar(count_bars(
        dataset,
        Flag::Gender,
        &["Male", "Female"],
        Axes::new("Number of Male and Female", "Gender (0: Male, 1: Female)", "Count"),
    ));
}

pub fn bmi_for_cancer_patients(dataset: &Dataset, out: &mut PageView) {
    out.header("BMI of People With Cancer");

    let bmi: Vec<f64> = stats::select(dataset, Flag::Diagnosis, 1)
        .iter()
        .map(|r| r.bmi)
        .collect();
    let histogram = Histogram::compute(&bmi, 20);
    // The overlay stops at the observed BMI range.
    let curve = stats::kde(&bmi, KDE_GRID, 0.0);
    let density = stats::scale_density(&curve, bmi.len(), histogram.bin_width());

    out.histogram(HistogramChart {
        axes: Axes::new("BMI Distribution of People With Cancer", "BMI", "Count"),
        series: vec![HistogramSeries {
            name: "BMI".to_string(),
            histogram,
            color: color::skyblue(),
        }],
        density: Some(density),
    });

    out.text(BMI_NOTE);
}

pub fn smoking_count(dataset: &Dataset, out: &mut PageView) {
    out.header("Number of People Smoking");
    out.bar(count_bars(
        dataset,
        Flag::Smoking,
        &["No Smoking", "Smoking"],
        Axes::new("Number of People Smoking", "Smoking Status (0: No, 1: Yes)", "Count"),
    ));
}

pub fn cancer_history_count(dataset: &Dataset, out: &mut PageView) {
    out.header("Cancer History");
    out.bar(count_bars(
        dataset,
        Flag::CancerHistory,
        &["No Cancer History", "Cancer History"],
        Axes::new("Cancer History of People", "Cancer History (0: No, 1: Yes)", "Count"),
    ));
}

pub fn classifier_plot(dataset: &Dataset, out: &mut PageView) {
    out.header("Classifier Output Plot");

    if !dataset.has_column(CLASSIFIER_SCORE) {
        out.text(CLASSIFIER_MISSING);
        return;
    }

    let scores = dataset.classifier_scores().unwrap_or_default();
    out.density(DensityChart {
        axes: Axes::new("Distribution of Classifier Output", "Classifier Score", "Density"),
        name: "Classifier Output".to_string(),
        curve: stats::kde(scores, KDE_GRID, KDE_CUT),
        color: color::skyblue(),
        fill: true,
    });
}
