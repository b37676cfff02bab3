use eframe::egui::{self, ScrollArea};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: page selector ----
        egui::SidePanel::left("page_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: overview + selected page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(dataset) = &self.state.dataset else {
                let msg = self.state.load_error.as_deref().unwrap_or("No dataset loaded.");
                plot::error_message(ui, msg);
                return;
            };

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::overview(ui, dataset);
                    ui.separator();
                    plot::page_view(ui, &self.state.view);
                });
        });
    }
}
