use eframe::egui::Color32;

use crate::data::stats::Histogram;

// ---------------------------------------------------------------------------
// Chart descriptions
// ---------------------------------------------------------------------------

/// Shared chart decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Axes {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Axes {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }
}

/// One binned sample drawn as adjacent bars.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub name: String,
    pub histogram: Histogram,
    pub color: Color32,
}

/// Overlapping histograms, optionally with a density line on top.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramChart {
    pub axes: Axes,
    pub series: Vec<HistogramSeries>,
    /// `[x, y]` points already scaled to the histogram's count axis.
    pub density: Option<Vec<[f64; 2]>>,
}

/// One category of a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    /// Raw column value the bar stands for.
    pub key: u8,
    /// Tick label shown under the bar.
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub axes: Axes,
    pub bars: Vec<BarItem>,
}

/// A single density curve.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityChart {
    pub axes: Axes,
    pub name: String,
    pub curve: Vec<[f64; 2]>,
    pub color: Color32,
    pub fill: bool,
}

// ---------------------------------------------------------------------------
// PageView – what one render call produces
// ---------------------------------------------------------------------------

/// One element of a rendered page, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Header(String),
    Subheader(String),
    Text(String),
    Bullets(Vec<String>),
    Histogram(HistogramChart),
    Bar(BarChart),
    Density(DensityChart),
}

impl Block {
    pub fn is_chart(&self) -> bool {
        matches!(self, Block::Histogram(_) | Block::Bar(_) | Block::Density(_))
    }
}

/// The output channel of a render routine: text and chart descriptions
/// appended in the order they should appear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub blocks: Vec<Block>,
}

impl PageView {
    pub fn header(&mut self, text: &str) {
        self.blocks.push(Block::Header(text.to_string()));
    }

    pub fn subheader(&mut self, text: &str) {
        self.blocks.push(Block::Subheader(text.to_string()));
    }

    pub fn text(&mut self, text: &str) {
        self.blocks.push(Block::Text(text.to_string()));
    }

    pub fn bullets<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks
            .push(Block::Bullets(items.into_iter().map(Into::into).collect()));
    }

    pub fn histogram(&mut self, chart: HistogramChart) {
        self.blocks.push(Block::Histogram(chart));
    }

    pub fn bar(&mut self, chart: BarChart) {
        self.blocks.push(Block::Bar(chart));
    }

    pub fn density(&mut self, chart: DensityChart) {
        self.blocks.push(Block::Density(chart));
    }

    /// Number of chart blocks (histogram, bar, density).
    pub fn chart_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_chart()).count()
    }
}

#[cfg(test)]
impl PageView {
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Header(h) => Some(h.as_str()),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Text(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn bar_charts(&self) -> impl Iterator<Item = &BarChart> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Bar(c) => Some(c),
            _ => None,
        })
    }

    pub fn histogram_charts(&self) -> impl Iterator<Item = &HistogramChart> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Histogram(c) => Some(c),
            _ => None,
        })
    }

    pub fn density_charts(&self) -> impl Iterator<Item = &DensityChart> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Density(c) => Some(c),
            _ => None,
        })
    }
}
