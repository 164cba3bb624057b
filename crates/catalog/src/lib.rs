//! Contracts layer for the CoverGard storefront.
//!
//! Everything in this crate is pure and host-testable: the static product
//! catalog, the derived option snapshot, the filter/sort engine, cart
//! arithmetic, and the special-request form contract. No DOM, no I/O.

pub mod cart;
pub mod data;
pub mod filter;
pub mod product;
pub mod special;

pub use cart::{CartLine, CartTotals};
pub use data::{
    catalog, product_by_id, related_products, snapshot, CatalogSnapshot, SectionMeta, HERO_IMAGE,
    IMAGE_FALLBACK, SECTION_META,
};
pub use filter::{apply, toggle_selection, FilterSpec, SortBy};
pub use product::{Fit, Product, ProductId, Section, WeatherRating};
pub use special::{
    SpecialRequest, SPECIAL_COLOR_OPTIONS, SPECIAL_COVER_OPTIONS, SPECIAL_FABRIC_OPTIONS,
};
