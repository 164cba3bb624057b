//! The static catalog: 18 cover products, the three home-page sections, and
//! the option snapshot derived from them once at startup.

use crate::product::{Fit, Product, ProductId, Section, WeatherRating};
use once_cell::sync::Lazy;

/// Placeholder shown when a product or hero image fails to load.
pub const IMAGE_FALLBACK: &str =
    "https://placehold.co/1200x900/e2e8f0/0f172a?text=CoverGard+Example";

pub const HERO_IMAGE: &str = "https://picsum.photos/seed/covergard-hero/1400/1000";

/// External asset convention: seeded picsum URLs per product and image index.
fn product_images(id: u32, count: usize) -> Vec<String> {
    (0..count)
        .map(|index| {
            format!("https://picsum.photos/seed/covergard-product-{id}-{index}/1200/900")
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: &str,
    material: &str,
    fit: Fit,
    weather: WeatherRating,
    price: u32,
    rating: f64,
    section: Section,
    in_stock: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        material: material.to_string(),
        fit,
        weather,
        price,
        rating,
        section,
        in_stock,
        images: product_images(id, 3),
    }
}

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    use Fit::{Custom, Universal};
    use Section::{Featured, New, Value};
    use WeatherRating::{AllWeather, Extreme, Mild};

    vec![
        product(
            1,
            "PatioGuard Premium L-Set Cover",
            "Patio Furniture",
            "Solution-Dyed Polyester",
            Custom,
            Extreme,
            189,
            4.9,
            Featured,
            true,
        ),
        product(
            2,
            "StormShield 4 Burner Gas Braai Cover",
            "Gas Braai",
            "PVC-Coated Oxford",
            Custom,
            AllWeather,
            119,
            4.8,
            Featured,
            true,
        ),
        product(
            3,
            "RattanSafe Outdoor Lounge Cover",
            "Lounge Set",
            "Ripstop Polyester",
            Universal,
            AllWeather,
            98,
            4.6,
            Featured,
            true,
        ),
        product(
            4,
            "Braai Pro Cart Cover",
            "Gas Braai",
            "Solution-Dyed Polyester",
            Universal,
            Extreme,
            142,
            4.7,
            Featured,
            false,
        ),
        product(
            5,
            "Deck Dining 8-Seater Shield",
            "Outdoor Dining",
            "PVC-Coated Oxford",
            Custom,
            Extreme,
            176,
            4.8,
            New,
            true,
        ),
        product(
            6,
            "Pergola Sofa Slip Cover",
            "Patio Furniture",
            "Ripstop Polyester",
            Custom,
            AllWeather,
            155,
            4.5,
            New,
            true,
        ),
        product(
            7,
            "Compact Braai Weekend Cover",
            "Gas Braai",
            "PVC-Coated Oxford",
            Universal,
            Mild,
            79,
            4.3,
            New,
            true,
        ),
        product(
            8,
            "Fire Pit Ring Defender",
            "Fire Pit",
            "Solution-Dyed Polyester",
            Universal,
            AllWeather,
            88,
            4.4,
            New,
            true,
        ),
        product(
            9,
            "Garden Bench Everyday Cover",
            "Garden Bench",
            "Ripstop Polyester",
            Universal,
            Mild,
            49,
            4.1,
            Value,
            true,
        ),
        product(
            10,
            "Twin Chair Cover Set",
            "Patio Furniture",
            "PVC-Coated Oxford",
            Universal,
            AllWeather,
            57,
            4.2,
            Value,
            true,
        ),
        product(
            11,
            "Entry Braai Basic Shell",
            "Gas Braai",
            "Ripstop Polyester",
            Universal,
            Mild,
            45,
            3.9,
            Value,
            true,
        ),
        product(
            12,
            "Stackable Stool Pack Cover",
            "Outdoor Dining",
            "Solution-Dyed Polyester",
            Universal,
            Mild,
            42,
            4.0,
            Value,
            false,
        ),
        product(
            13,
            "Courtyard Sofa Full-Length Cover",
            "Patio Furniture",
            "Solution-Dyed Polyester",
            Custom,
            AllWeather,
            164,
            4.7,
            Featured,
            true,
        ),
        product(
            14,
            "Braai Master Deluxe Hood Cover",
            "Gas Braai",
            "PVC-Coated Oxford",
            Custom,
            Extreme,
            136,
            4.8,
            Featured,
            true,
        ),
        product(
            15,
            "Outdoor Bistro Set Weather Cover",
            "Outdoor Dining",
            "Ripstop Polyester",
            Universal,
            AllWeather,
            93,
            4.4,
            New,
            true,
        ),
        product(
            16,
            "Patio Corner Lounge Shield",
            "Lounge Set",
            "Solution-Dyed Polyester",
            Custom,
            Extreme,
            172,
            4.7,
            New,
            true,
        ),
        product(
            17,
            "Braai Compact Everyday Cover",
            "Gas Braai",
            "Ripstop Polyester",
            Universal,
            Mild,
            52,
            4.1,
            Value,
            true,
        ),
        product(
            18,
            "Garden Chair Duo Protection Set",
            "Patio Furniture",
            "PVC-Coated Oxford",
            Universal,
            Mild,
            47,
            4.0,
            Value,
            true,
        ),
    ]
});

/// Read-only view of the full catalog, in canonical ("featured") order.
pub fn catalog() -> &'static [Product] {
    &PRODUCTS
}

// ============================================================================
// Sections
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMeta {
    pub section: Section,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SECTION_META: [SectionMeta; 3] = [
    SectionMeta {
        section: Section::Featured,
        title: "Featured For This Season",
        description: "Best-selling covers for patios, braais, and outdoor lounges.",
    },
    SectionMeta {
        section: Section::New,
        title: "New Arrivals",
        description: "Fresh stock with improved seams and UV-resistant coatings.",
    },
    SectionMeta {
        section: Section::Value,
        title: "Everyday Value",
        description: "Strong everyday protection at practical prices.",
    },
];

// ============================================================================
// Derived snapshot
// ============================================================================

/// Option lists and price bounds derived from the catalog. Computed once and
/// treated as part of the read-only catalog, never per render.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub categories: Vec<String>,
    pub materials: Vec<String>,
    pub fits: Vec<Fit>,
    pub weather_ratings: Vec<WeatherRating>,
    pub price_min: u32,
    pub price_max: u32,
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, value: T) {
    if !list.contains(&value) {
        list.push(value);
    }
}

static SNAPSHOT: Lazy<CatalogSnapshot> = Lazy::new(|| {
    let mut categories = Vec::new();
    let mut materials = Vec::new();
    let mut fits = Vec::new();
    let mut weather_ratings = Vec::new();
    let mut price_min = u32::MAX;
    let mut price_max = 0;

    for product in catalog() {
        push_unique(&mut categories, product.category.clone());
        push_unique(&mut materials, product.material.clone());
        push_unique(&mut fits, product.fit);
        push_unique(&mut weather_ratings, product.weather);
        price_min = price_min.min(product.price);
        price_max = price_max.max(product.price);
    }

    CatalogSnapshot {
        categories,
        materials,
        fits,
        weather_ratings,
        price_min,
        price_max,
    }
});

pub fn snapshot() -> &'static CatalogSnapshot {
    &SNAPSHOT
}

// ============================================================================
// Lookup
// ============================================================================

pub fn product_by_id(id: ProductId) -> Option<&'static Product> {
    catalog().iter().find(|product| product.id == id)
}

/// Up to four catalog neighbours sharing a category or a section with the
/// given product, excluding the product itself, in catalog order.
pub fn related_products(product: &Product) -> Vec<&'static Product> {
    catalog()
        .iter()
        .filter(|candidate| {
            candidate.id != product.id
                && (candidate.category == product.category || candidate.section == product.section)
        })
        .take(4)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_data_invariants() {
        let products = catalog();
        assert_eq!(products.len(), 18);

        for product in products {
            assert!(!product.images.is_empty());
            assert!((0.0..=5.0).contains(&product.rating));
            assert!(product.primary_image().is_some());
        }

        // Ids are unique.
        for (index, product) in products.iter().enumerate() {
            assert!(
                !products[index + 1..].iter().any(|p| p.id == product.id),
                "duplicate id {}",
                product.id
            );
        }
    }

    #[test]
    fn snapshot_lists_are_ordered_unique() {
        let snap = snapshot();

        assert_eq!(
            snap.categories,
            vec![
                "Patio Furniture",
                "Gas Braai",
                "Lounge Set",
                "Outdoor Dining",
                "Fire Pit",
                "Garden Bench",
            ]
        );
        assert_eq!(
            snap.materials,
            vec![
                "Solution-Dyed Polyester",
                "PVC-Coated Oxford",
                "Ripstop Polyester",
            ]
        );
        assert_eq!(snap.fits, vec![Fit::Custom, Fit::Universal]);
        assert_eq!(
            snap.weather_ratings,
            vec![
                WeatherRating::Extreme,
                WeatherRating::AllWeather,
                WeatherRating::Mild,
            ]
        );
    }

    #[test]
    fn snapshot_price_bounds_match_extremes() {
        let snap = snapshot();
        assert_eq!(snap.price_min, 42);
        assert_eq!(snap.price_max, 189);
    }

    #[test]
    fn lookup_by_id() {
        let found = product_by_id(ProductId(4)).expect("id 4 exists");
        assert_eq!(found.name, "Braai Pro Cart Cover");
        assert!(product_by_id(ProductId(9999)).is_none());
    }

    #[test]
    fn related_products_cap_and_exclude_self() {
        let base = product_by_id(ProductId(1)).unwrap();
        let related = related_products(base);

        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|p| p.id != base.id));
        assert!(related
            .iter()
            .all(|p| p.category == base.category || p.section == base.section));
        // First-match order from the catalog.
        assert_eq!(related[0].id, ProductId(2));
    }

    #[test]
    fn related_products_for_sparse_category() {
        // Fire Pit has a single product; relatives come from its section.
        let base = product_by_id(ProductId(8)).unwrap();
        let related = related_products(base);

        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.id != base.id));
        assert!(related.iter().all(|p| p.section == base.section));
    }
}
