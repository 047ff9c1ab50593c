use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::cache::DatasetCache;
use crate::data::filter::{BrandFilter, filtered_indices};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// View and statistic selectors
// ---------------------------------------------------------------------------

/// The six dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Statistics,
    PriceByModel,
    BrandFrequency,
    DpiTrend,
    PriceByCategory,
    CountByCategory,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Statistics,
        View::PriceByModel,
        View::BrandFrequency,
        View::DpiTrend,
        View::PriceByCategory,
        View::CountByCategory,
    ];

    /// Tab label.
    pub fn title(&self) -> &'static str {
        match self {
            View::Statistics => "Statistics",
            View::PriceByModel => "Price by model",
            View::BrandFrequency => "Brand frequency",
            View::DpiTrend => "DPI vs price",
            View::PriceByCategory => "Price by category",
            View::CountByCategory => "Count by category",
        }
    }

    /// Whether this view honours the brand filter. The frequency, trend and
    /// category views always describe the full dataset.
    pub fn uses_filter(&self) -> bool {
        matches!(self, View::Statistics | View::PriceByModel)
    }
}

/// Which central tendency statistic the Statistics view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatKind {
    #[default]
    Mean,
    Median,
    Mode,
}

impl StatKind {
    pub const ALL: [StatKind; 3] = [StatKind::Mean, StatKind::Median, StatKind::Mode];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Mean => "Mean",
            StatKind::Median => "Median",
            StatKind::Mode => "Mode",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Session cache of loaded datasets, keyed by source path.
    pub cache: DatasetCache,

    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Arc<Dataset>>,

    /// Source path of the loaded dataset.
    pub source: Option<PathBuf>,

    /// Active brand filter.
    pub filter: BrandFilter,

    /// Indices of records passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// Currently shown view (tab).
    pub view: View,

    /// Statistic selector for the Statistics view.
    pub stat_kind: StatKind,

    /// Chart colours for brands and categories.
    pub brand_colors: ColorMap,
    pub category_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cache: DatasetCache::new(),
            dataset: None,
            source: None,
            filter: BrandFilter::All,
            visible_indices: Vec::new(),
            view: View::default(),
            stat_kind: StatKind::default(),
            brand_colors: ColorMap::default(),
            category_colors: ColorMap::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Load (or fetch from cache) the dataset at `path` and make it current.
    /// Resets the filter, since brand lists differ between files.
    pub fn load_dataset(&mut self, path: &Path) {
        match self.cache.get_or_load(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} listings ({} brands, {} categories) from {}",
                    dataset.len(),
                    dataset.brands.len(),
                    dataset.categories.len(),
                    path.display()
                );
                self.brand_colors = ColorMap::new(&dataset.brands);
                self.category_colors = ColorMap::new(&dataset.categories);
                self.filter = BrandFilter::All;
                self.visible_indices = (0..dataset.len()).collect();
                self.dataset = Some(dataset);
                self.source = Some(path.to_path_buf());
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Change the brand filter and recompute the visible indices.
    pub fn set_filter(&mut self, filter: BrandFilter) {
        self.filter = filter;
        self.refilter();
    }

    /// Recompute `visible_indices` from the current filter.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filter);
        }
    }

    /// Records passing the current filter, in file order.
    pub fn visible_records(&self) -> Vec<crate::data::model::Record> {
        match &self.dataset {
            Some(ds) => self
                .visible_indices
                .iter()
                .map(|&i| ds.records[i].clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Prices of the records passing the current filter.
    pub fn visible_prices(&self) -> Vec<f64> {
        match &self.dataset {
            Some(ds) => self
                .visible_indices
                .iter()
                .map(|&i| ds.records[i].price)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn state_with_dataset() -> AppState {
        let records = vec![
            Record {
                brand: "Logitech".to_string(),
                model: "G203".to_string(),
                price: 129.9,
                dpi: 8000,
                category: "wired".to_string(),
            },
            Record {
                brand: "Razer".to_string(),
                model: "Viper".to_string(),
                price: 349.0,
                dpi: 20000,
                category: "wireless".to_string(),
            },
        ];
        let mut state = AppState::default();
        state.dataset = Some(Arc::new(Dataset::from_records(records)));
        state.visible_indices = vec![0, 1];
        state
    }

    #[test]
    fn set_filter_recomputes_visible_indices() {
        let mut state = state_with_dataset();
        state.set_filter(BrandFilter::Brand("Razer".to_string()));
        assert_eq!(state.visible_indices, vec![1]);
        assert_eq!(state.visible_prices(), vec![349.0]);

        state.set_filter(BrandFilter::All);
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn unmatched_filter_leaves_no_visible_records() {
        let mut state = state_with_dataset();
        state.set_filter(BrandFilter::Brand("NonexistentBrand".to_string()));
        assert!(state.visible_records().is_empty());
        assert!(state.visible_prices().is_empty());
    }
}
