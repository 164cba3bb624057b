//! The catalog filter/sort engine.
//!
//! `apply` is a pure function of the catalog and a [`FilterSpec`]; the
//! storefront holds one spec value per catalog view and replaces it wholesale
//! on every interaction, so recomputation is driven by a single memo.

use crate::data::CatalogSnapshot;
use crate::product::{Fit, Product, WeatherRating};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sort order
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortBy {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortBy {
    /// Stable id used as the `<select>` option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Featured => "featured",
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
            SortBy::RatingDesc => "rating-desc",
        }
    }

    pub fn parse(value: &str) -> Option<SortBy> {
        match value {
            "featured" => Some(SortBy::Featured),
            "price-asc" => Some(SortBy::PriceAsc),
            "price-desc" => Some(SortBy::PriceDesc),
            "rating-desc" => Some(SortBy::RatingDesc),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Featured => "Featured",
            SortBy::PriceAsc => "Price: Low to high",
            SortBy::PriceDesc => "Price: High to low",
            SortBy::RatingDesc => "Highest rated",
        }
    }
}

// ============================================================================
// Filter specification
// ============================================================================

/// The complete set of user-chosen criteria for the catalog view.
///
/// Empty selection sets mean "no restriction", not "match nothing". The UI
/// keeps `min_price <= max_price` by clamping whichever bound moved last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search_text: String,
    pub categories: Vec<String>,
    pub materials: Vec<String>,
    pub fits: Vec<Fit>,
    pub weather_ratings: Vec<WeatherRating>,
    pub min_price: u32,
    pub max_price: u32,
    pub minimum_rating: f64,
    pub in_stock_only: bool,
    pub sort_by: SortBy,
}

impl FilterSpec {
    /// The unrestricted spec for a given catalog snapshot: full price range,
    /// no selections, rating floor 0, featured order.
    pub fn default_for(snapshot: &CatalogSnapshot) -> Self {
        Self {
            search_text: String::new(),
            categories: Vec::new(),
            materials: Vec::new(),
            fits: Vec::new(),
            weather_ratings: Vec::new(),
            min_price: snapshot.price_min,
            max_price: snapshot.price_max,
            minimum_rating: 0.0,
            in_stock_only: false,
            sort_by: SortBy::Featured,
        }
    }

    /// Number of criteria that differ from the unrestricted defaults, shown
    /// as a badge on the mobile filter toggle.
    pub fn restriction_count(&self, snapshot: &CatalogSnapshot) -> usize {
        let mut count = 0;
        if !self.search_text.trim().is_empty() {
            count += 1;
        }
        count += [
            !self.categories.is_empty(),
            !self.materials.is_empty(),
            !self.fits.is_empty(),
            !self.weather_ratings.is_empty(),
            self.min_price > snapshot.price_min || self.max_price < snapshot.price_max,
            self.minimum_rating > 0.0,
            self.in_stock_only,
        ]
        .iter()
        .filter(|active| **active)
        .count();
        count
    }

    fn matches(&self, product: &Product) -> bool {
        let query = self.search_text.trim().to_lowercase();
        let matches_query = query.is_empty()
            || product.name.to_lowercase().contains(&query)
            || product.category.to_lowercase().contains(&query);
        let matches_category =
            self.categories.is_empty() || self.categories.contains(&product.category);
        let matches_material =
            self.materials.is_empty() || self.materials.contains(&product.material);
        let matches_fit = self.fits.is_empty() || self.fits.contains(&product.fit);
        let matches_weather =
            self.weather_ratings.is_empty() || self.weather_ratings.contains(&product.weather);
        let matches_price = product.price >= self.min_price && product.price <= self.max_price;
        let matches_rating = product.rating >= self.minimum_rating;
        let matches_stock = !self.in_stock_only || product.in_stock;

        matches_query
            && matches_category
            && matches_material
            && matches_fit
            && matches_weather
            && matches_price
            && matches_rating
            && matches_stock
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Filter the catalog by `spec` and order the result by `spec.sort_by`.
///
/// Featured keeps original catalog order; the other orders use a stable sort,
/// so equal keys keep their relative catalog positions. An empty result is
/// valid output, not an error.
pub fn apply<'a>(catalog: &'a [Product], spec: &FilterSpec) -> Vec<&'a Product> {
    let mut matching: Vec<&Product> = catalog
        .iter()
        .filter(|product| spec.matches(product))
        .collect();

    match spec.sort_by {
        SortBy::Featured => {}
        SortBy::PriceAsc => matching.sort_by(|a, b| a.price.cmp(&b.price)),
        SortBy::PriceDesc => matching.sort_by(|a, b| b.price.cmp(&a.price)),
        SortBy::RatingDesc => matching.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    matching
}

/// Toggle `value` in a selection set: remove it when present, append it
/// otherwise. Shared by every multi-select filter group.
pub fn toggle_selection<T: PartialEq + Clone>(current: &[T], value: &T) -> Vec<T> {
    if current.contains(value) {
        current
            .iter()
            .filter(|item| *item != value)
            .cloned()
            .collect()
    } else {
        let mut next = current.to_vec();
        next.push(value.clone());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{catalog, snapshot};
    use crate::product::{ProductId, Section};

    fn unrestricted() -> FilterSpec {
        FilterSpec::default_for(snapshot())
    }

    fn sample(id: u32, price: u32, rating: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Sample {id}"),
            category: "Patio Furniture".to_string(),
            material: "Ripstop Polyester".to_string(),
            fit: Fit::Universal,
            weather: WeatherRating::Mild,
            price,
            rating,
            section: Section::Value,
            in_stock: true,
            images: vec!["sample.jpg".to_string()],
        }
    }

    #[test]
    fn default_spec_returns_full_catalog_in_order() {
        let result = apply(catalog(), &unrestricted());

        assert_eq!(result.len(), catalog().len());
        for (got, expected) in result.iter().zip(catalog()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn search_matches_name_and_category_case_insensitively() {
        let mut spec = unrestricted();
        spec.search_text = "BRAAI".to_string();

        let result = apply(catalog(), &spec);
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| {
            p.name.to_lowercase().contains("braai") || p.category.to_lowercase().contains("braai")
        }));
    }

    #[test]
    fn conjunction_narrows_monotonically() {
        let mut narrowed = unrestricted();
        narrowed.categories = vec!["Gas Braai".to_string()];
        narrowed.in_stock_only = true;

        let mut wider = narrowed.clone();
        wider.categories = Vec::new();

        let narrow_ids: Vec<ProductId> = apply(catalog(), &narrowed).iter().map(|p| p.id).collect();
        let wide_ids: Vec<ProductId> = apply(catalog(), &wider).iter().map(|p| p.id).collect();

        assert!(narrow_ids.iter().all(|id| wide_ids.contains(id)));
        assert!(narrow_ids.len() < wide_ids.len());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let mut spec = unrestricted();
        spec.min_price = 42;
        spec.max_price = 42;

        let result = apply(catalog(), &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId(12));
    }

    #[test]
    fn stock_filter_drops_out_of_stock() {
        let mut spec = unrestricted();
        spec.in_stock_only = true;

        let result = apply(catalog(), &spec);
        assert!(result.iter().all(|p| p.in_stock));
        assert_eq!(result.len(), catalog().len() - 2);
    }

    #[test]
    fn price_sorts_reverse_each_other_for_distinct_prices() {
        let spec_asc = FilterSpec {
            sort_by: SortBy::PriceAsc,
            ..unrestricted()
        };
        let spec_desc = FilterSpec {
            sort_by: SortBy::PriceDesc,
            ..unrestricted()
        };

        // Catalog prices are pairwise distinct, so desc must be exactly
        // reversed asc.
        let asc: Vec<ProductId> = apply(catalog(), &spec_asc).iter().map(|p| p.id).collect();
        let mut desc: Vec<ProductId> = apply(catalog(), &spec_desc).iter().map(|p| p.id).collect();
        desc.reverse();

        assert_eq!(asc, desc);
    }

    #[test]
    fn equal_price_keeps_catalog_order() {
        let items = vec![sample(1, 50, 4.0), sample(2, 40, 4.2), sample(3, 50, 4.4)];
        let spec = FilterSpec {
            sort_by: SortBy::PriceAsc,
            ..unrestricted()
        };

        let result = apply(&items, &spec);
        let ids: Vec<u32> = result.iter().map(|p| p.id.value()).collect();
        // 40 first, then the two 50s in original relative order.
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn rating_desc_keeps_ties_stable() {
        let spec = FilterSpec {
            sort_by: SortBy::RatingDesc,
            ..unrestricted()
        };

        let result = apply(catalog(), &spec);
        for window in result.windows(2) {
            assert!(window[0].rating >= window[1].rating);
            if window[0].rating == window[1].rating {
                // Stable sort: catalog order preserved within a tie.
                assert!(window[0].id.value() < window[1].id.value());
            }
        }
    }

    #[test]
    fn over_restricted_spec_yields_empty_result() {
        let mut spec = unrestricted();
        spec.minimum_rating = 5.0;

        assert!(apply(catalog(), &spec).is_empty());
    }

    #[test]
    fn toggle_selection_round_trips() {
        let base = vec!["Gas Braai".to_string(), "Fire Pit".to_string()];
        let value = "Lounge Set".to_string();

        let added = toggle_selection(&base, &value);
        assert_eq!(added.len(), 3);
        assert!(added.contains(&value));

        let removed = toggle_selection(&added, &value);
        assert_eq!(removed, base);
    }

    #[test]
    fn toggle_selection_removes_existing() {
        let base = vec![Fit::Universal, Fit::Custom];
        let next = toggle_selection(&base, &Fit::Universal);
        assert_eq!(next, vec![Fit::Custom]);
    }

    #[test]
    fn sort_ids_round_trip() {
        for sort in [
            SortBy::Featured,
            SortBy::PriceAsc,
            SortBy::PriceDesc,
            SortBy::RatingDesc,
        ] {
            assert_eq!(SortBy::parse(sort.as_str()), Some(sort));
        }
        assert_eq!(SortBy::parse("newest"), None);
    }

    #[test]
    fn restriction_count_tracks_non_defaults() {
        let snap = snapshot();
        let mut spec = unrestricted();
        assert_eq!(spec.restriction_count(snap), 0);

        spec.search_text = "patio".to_string();
        spec.fits = vec![Fit::Custom];
        spec.in_stock_only = true;
        spec.max_price = snap.price_max - 1;
        assert_eq!(spec.restriction_count(snap), 4);

        // Sort order alone is not a restriction.
        spec = unrestricted();
        spec.sort_by = SortBy::PriceDesc;
        assert_eq!(spec.restriction_count(snap), 0);
    }
}
