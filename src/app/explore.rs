use crate::config::types::CatalogConfig;
use crate::domain::filter::{FilterState, PriceRange, SortKey, derive_view};
use crate::domain::listing::{Hotel, sample_hotels};
use crate::ports::recommendations::RecommendationSource;

/// State behind the catalog screen: a working set of hotels plus the
/// user's filter choices. The visible list is recomputed synchronously
/// from those two inputs whenever either changes.
pub struct CatalogScreen {
    static_base: Vec<Hotel>,
    base: Vec<Hotel>,
    filter: FilterState,
    /// What "no filters" means for this screen. Clearing returns here,
    /// so configured price bounds survive a reset.
    baseline: FilterState,
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self::with_catalog(sample_hotels())
    }

    pub fn with_catalog(catalog: Vec<Hotel>) -> Self {
        Self {
            static_base: catalog.clone(),
            base: catalog,
            filter: FilterState::default(),
            baseline: FilterState::default(),
        }
    }

    /// Sample catalog with the widest price bounds taken from configuration
    /// instead of the built-in cap.
    pub fn with_config(config: &CatalogConfig) -> Self {
        let mut screen = Self::new();
        let bounds = PriceRange::new(config.price_min, config.price_max);
        screen.baseline.price = bounds;
        screen.filter.price = bounds;
        screen
    }

    /// Union the recommendation feed ahead of the static catalog. A failed
    /// or empty fetch leaves the current working set untouched; the screen
    /// still renders from the static catalog.
    pub async fn load_recommended(&mut self, source: &dyn RecommendationSource) {
        match source.fetch_recommended().await {
            Ok(recommended) if !recommended.is_empty() => {
                tracing::debug!("Merging {} recommended listings", recommended.len());
                let mut combined = recommended;
                combined.extend(self.static_base.iter().cloned());
                self.base = combined;
            }
            Ok(_) => {}
            Err(err) => tracing::warn!("Recommendation fetch failed: {err}"),
        }
    }

    /// The derived, displayable subset. Pure recomputation on every call.
    pub fn visible(&self) -> Vec<Hotel> {
        derive_view(&self.base, &self.filter)
    }

    pub fn base(&self) -> &[Hotel] {
        &self.base
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    // Discrete user actions, each replacing one field of the filter state.

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.filter.toggle_sort(key);
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.filter.set_price_range(range);
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.filter.set_min_rating(min_rating);
    }

    pub fn clear_filters(&mut self) {
        self.filter = self.baseline.clone();
    }

    /// Whether anything deviates from this screen's baseline (drives the
    /// Clear button).
    pub fn filters_active(&self) -> bool {
        self.filter != self.baseline
    }
}

impl Default for CatalogScreen {
    fn default() -> Self {
        Self::new()
    }
}
