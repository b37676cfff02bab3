use eframe::egui::{self, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::Dataset;

const ROW_HEIGHT: f32 = 18.0;
const MAX_TABLE_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Raw dataset table
// ---------------------------------------------------------------------------

/// Show every record as read from the file, one row per patient, with a row
/// index column. Columns keep their file order, extra columns included.
pub fn dataset_table(ui: &mut Ui, dataset: &Dataset) {
    let headers = dataset.column_names();
    let rows = dataset.rows();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(TableColumn::auto().at_least(40.0))
        .columns(TableColumn::auto().at_least(60.0), headers.len())
        .max_scroll_height(MAX_TABLE_HEIGHT)
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("#");
            });
            for name in headers {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let idx = row.index();
                let cells = &rows[idx];
                row.col(|ui: &mut Ui| {
                    ui.label(idx.to_string());
                });
                for i in 0..headers.len() {
                    let cell = cells.get(i).unwrap_or_default();
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
