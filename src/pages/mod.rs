//! Dashboard pages: the fixed menu of views and the routine behind each.
//!
//! A page is rendered once per selection into a [`PageView`], a list of
//! text and chart descriptions that the UI layer draws every frame.

pub mod render;
pub mod view;

use crate::data::model::Dataset;

pub use view::{Block, PageView};

// ---------------------------------------------------------------------------
// Page – one selectable view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    CancerCount,
    DiagnosesRatioByGender,
    GenderCount,
    BmiForCancerPatients,
    SmokingCount,
    CancerHistoryCount,
    ClassifierPlot,
}

impl Page {
    /// Menu order.
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::CancerCount,
        Page::DiagnosesRatioByGender,
        Page::GenderCount,
        Page::BmiForCancerPatients,
        Page::SmokingCount,
        Page::CancerHistoryCount,
        Page::ClassifierPlot,
    ];

    /// Text shown in the sidebar menu.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::CancerCount => "Number of People With Cancer vs No Cancer",
            Page::DiagnosesRatioByGender => "Positive Diagnoses Ratio",
            Page::GenderCount => "Number of Male and Female",
            Page::BmiForCancerPatients => "BMI of People With Cancer",
            Page::SmokingCount => "Number of People Smoking",
            Page::CancerHistoryCount => "Cancer History",
            Page::ClassifierPlot => "Classifier Plot",
        }
    }

    /// Look up the page behind a menu label.
    pub fn from_label(label: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Run this page's routine against the dataset.
    pub fn render(self, dataset: &Dataset) -> PageView {
        let routine: fn(&Dataset, &mut PageView) = match self {
            Page::Home => render::home,
            Page::CancerCount => render::cancer_count,
            Page::DiagnosesRatioByGender => render::diagnoses_ratio_by_gender,
            Page::GenderCount => render::gender_count,
            Page::BmiForCancerPatients => render::bmi_for_cancer_patients,
            Page::SmokingCount => render::smoking_count,
            Page::CancerHistoryCount => render::cancer_history_count,
            Page::ClassifierPlot => render::classifier_plot,
        };
        let mut view = PageView::default();
        routine(dataset, &mut view);
        view
    }
}
