use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

use crate::pages::view::{self, Axes, DensityChart, HistogramChart};
use crate::pages::{Block, PageView};

const PLOT_HEIGHT: f32 = 360.0;

/// Title line above a chart, then the plot widget configured for its axes.
fn titled_plot(ui: &mut Ui, id: usize, axes: &Axes) -> Plot<'static> {
    ui.label(RichText::new(&axes.title).strong().size(15.0));
    Plot::new(("page_plot", id))
        .height(PLOT_HEIGHT)
        .x_axis_label(axes.x_label.clone())
        .y_axis_label(axes.y_label.clone())
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
}

// ---------------------------------------------------------------------------
// Page content (central panel)
// ---------------------------------------------------------------------------

/// Draw every block of a rendered page, top to bottom.
pub fn page_view(ui: &mut Ui, view: &PageView) {
    for (i, block) in view.blocks.iter().enumerate() {
        match block {
            Block::Header(text) => {
                ui.heading(text);
            }
            Block::Subheader(text) => {
                ui.add_space(4.0);
                ui.strong(text);
            }
            Block::Text(text) => {
                ui.label(text);
            }
            Block::Bullets(items) => {
                for item in items {
                    ui.label(format!("•  {item}"));
                }
            }
            Block::Histogram(chart) => histogram(ui, i, chart),
            Block::Bar(chart) => bar(ui, i, chart),
            Block::Density(chart) => density(ui, i, chart),
        }
        ui.add_space(6.0);
    }
}

// ---------------------------------------------------------------------------
// Chart kinds
// ---------------------------------------------------------------------------

fn histogram(ui: &mut Ui, id: usize, chart: &HistogramChart) {
    titled_plot(ui, id, &chart.axes)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let h = &series.histogram;
                let width = h.bin_width();
                let bars: Vec<Bar> = h
                    .counts
                    .iter()
                    .enumerate()
                    .map(|(i, &n)| Bar::new(h.center(i), n as f64).width(width))
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&series.name)
                        .color(series.color.gamma_multiply(0.8)),
                );
            }
            if let Some(curve) = &chart.density {
                let color = chart
                    .series
                    .first()
                    .map(|s| s.color)
                    .unwrap_or(Color32::LIGHT_BLUE);
                plot_ui.line(
                    Line::new(PlotPoints::from(curve.clone()))
                        .color(color)
                        .width(2.0),
                );
            }
        });
}

fn bar(ui: &mut Ui, id: usize, chart: &view::BarChart) {
    let ticks: Vec<String> = chart.bars.iter().map(|b| b.label.clone()).collect();
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Bar::new(i as f64, item.value)
                .width(0.8)
                .name(&item.label)
                .fill(item.color)
        })
        .collect();

    titled_plot(ui, id, &chart.axes)
        .x_axis_formatter(move |mark: GridMark, _range| {
            let pos = mark.value.round();
            if (mark.value - pos).abs() > 1e-6 || pos < 0.0 {
                return String::new();
            }
            ticks.get(pos as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn density(ui: &mut Ui, id: usize, chart: &DensityChart) {
    let mut line = Line::new(PlotPoints::from(chart.curve.clone()))
        .name(&chart.name)
        .color(chart.color)
        .width(2.0);
    if chart.fill {
        line = line.fill(0.0);
    }
    titled_plot(ui, id, &chart.axes)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

/// Red message filling the panel.
pub fn error_message(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new(message).color(Color32::RED).size(16.0));
    });
}
