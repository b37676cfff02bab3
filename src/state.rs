use crate::data::loader::LoadError;
use crate::data::model::Dataset;
use crate::pages::{Page, PageView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None when loading failed).
    pub dataset: Option<Dataset>,

    /// Load failure shown instead of the dashboard.
    pub load_error: Option<String>,

    /// Page currently selected in the sidebar.
    pub page: Page,

    /// Output of the last render of `page`.
    pub view: PageView,
}

impl AppState {
    /// Build the session from the startup load outcome.
    pub fn new(loaded: Result<Dataset, LoadError>) -> Self {
        match loaded {
            Ok(dataset) => {
                if dataset.is_empty() {
                    log::warn!("Dataset has no records; every page will be blank");
                }
                let page = Page::default();
                let view = page.render(&dataset);
                Self {
                    dataset: Some(dataset),
                    load_error: None,
                    page,
                    view,
                }
            }
            Err(e) => Self {
                dataset: None,
                load_error: Some(format!("Error: {e}")),
                page: Page::default(),
                view: PageView::default(),
            },
        }
    }

    /// Switch to the page shown under `label` in the menu. Returns false
    /// for a label no page carries.
    pub fn select_label(&mut self, label: &str) -> bool {
        match Page::from_label(label) {
            Some(page) => {
                self.select_page(page);
                true
            }
            None => {
                log::warn!("No page named '{label}'");
                false
            }
        }
    }

    /// Switch to `page`, rendering it once. Re-selecting the current page
    /// keeps the cached view.
    pub fn select_page(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        self.page = page;
        if let Some(ds) = &self.dataset {
            self.view = page.render(ds);
            log::debug!(
                "Rendered page '{}' ({} chart(s))",
                page.label(),
                self.view.chart_count()
            );
        }
    }
}
