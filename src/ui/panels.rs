use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::Dataset;
use crate::pages::Page;
use crate::state::AppState;
use crate::ui::table;

pub const TITLE: &str = "Cancer Prediction Dataset";

const AUTHORS: &str = "Submitted by: Rosalie Tagud and Dhanica Shelly Ganibe";

const INTRO: &str = "The nature of this data is Predicting Cancer Risk from Medical and Lifestyle Data \
    and Disclaimer this dataset has been preprocessed and cleaned to ensure that users can focus on the \
    most critical aspects of their analysis. The preprocessing steps were designed to eliminate noise and \
    irrelevant information, allowing you to concentrate on developing and fine-tuning your predictive models.";

// ---------------------------------------------------------------------------
// Left side panel – page selector
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data Visualization");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ui.strong("Select Data");
    let current = state.page.label();
    egui::ComboBox::from_id_salt("select_data")
        .selected_text(current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for label in Page::ALL.map(Page::label) {
                if ui.selectable_label(current == label, label).clicked() {
                    state.select_label(label);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Dataset overview (top of the central panel)
// ---------------------------------------------------------------------------

/// Title, introduction, raw table and column list shown above every page.
pub fn overview(ui: &mut Ui, dataset: &Dataset) {
    ui.heading(RichText::new(TITLE).size(26.0).strong());
    ui.label(AUTHORS);
    ui.add_space(4.0);
    ui.label(INTRO);
    ui.add_space(8.0);

    egui::CollapsingHeader::new(RichText::new("Dataset").strong())
        .id_salt("dataset_table")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            table::dataset_table(ui, dataset);
        });

    ui.label(format!("Column Names: {:?}", dataset.column_names()));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} columns",
                ds.len(),
                ds.column_names().len()
            ));
        }

        if let Some(msg) = &state.load_error {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
