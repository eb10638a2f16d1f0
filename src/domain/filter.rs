use serde::{Deserialize, Serialize};

use super::listing::Hotel;

/// Default upper price bound, matching the widest preset.
pub const PRICE_CAP: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    None,
    Price,
    Rating,
    Name,
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The fixed presets the filter panel offers. These are deliberately
    /// hardcoded buckets rather than a free-form range widget.
    pub fn budget() -> Self {
        Self::new(0.0, 200.0)
    }

    pub fn mid() -> Self {
        Self::new(200.0, 500.0)
    }

    pub fn all() -> Self {
        Self::new(0.0, PRICE_CAP)
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::all()
    }
}

/// The complete set of user-chosen search/sort/filter parameters. Fully
/// determines the derived view; there is no hidden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterState {
    pub query: String,
    pub sort: SortKey,
    pub price: PriceRange,
    pub min_rating: f64,
}

impl FilterState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Selecting the already-active key toggles sorting back off.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = if self.sort == key { SortKey::None } else { key };
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.price = range;
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.min_rating = min_rating;
    }

    /// One atomic reset to defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether anything deviates from the defaults (drives the Clear button).
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// Derive the displayed subset and ordering from a base list and a filter
/// state. Pure: never mutates `base`, returns a fresh list. The output is
/// always a subset of the input by id, in base order unless a sort key is
/// set (sorts are stable, so ties keep base order).
pub fn derive_view(base: &[Hotel], state: &FilterState) -> Vec<Hotel> {
    let query = state.query.trim().to_lowercase();

    let mut view: Vec<Hotel> = base
        .iter()
        .filter(|hotel| {
            query.is_empty()
                || hotel.name.to_lowercase().contains(&query)
                || hotel.location.to_lowercase().contains(&query)
        })
        .filter(|hotel| state.price.contains(hotel.price_per_night))
        .filter(|hotel| state.min_rating <= 0.0 || hotel.rating >= state.min_rating)
        .cloned()
        .collect();

    match state.sort {
        SortKey::Price => view.sort_by(|a, b| a.price_per_night.total_cmp(&b.price_per_night)),
        SortKey::Rating => view.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Name => view.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::None => {}
    }

    view
}
