use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Parse a route segment into an id. Non-numeric input is a not-found
    /// signal for the caller, never an error that escapes the page.
    pub fn parse(segment: &str) -> Option<Self> {
        segment.trim().parse::<u32>().ok().map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// How a cover sits on the furniture it protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fit {
    Universal,
    Custom,
}

impl Fit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fit::Universal => "Universal",
            Fit::Custom => "Custom",
        }
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather grade a cover is rated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherRating {
    Mild,
    AllWeather,
    Extreme,
}

impl WeatherRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherRating::Mild => "Mild",
            WeatherRating::AllWeather => "All-Weather",
            WeatherRating::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for WeatherRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Home-page grouping bucket. Every product belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Featured,
    New,
    Value,
}

impl Section {
    /// Stable id used in element ids and anchors.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Featured => "featured",
            Section::New => "new",
            Section::Value => "value",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Product
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub material: String,
    pub fit: Fit,
    pub weather: WeatherRating,
    pub price: u32,
    pub rating: f64,
    pub section: Section,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    pub images: Vec<String>,
}

impl Product {
    /// First image is the default display image. The catalog guarantees a
    /// non-empty image list, but callers still get an `Option` rather than
    /// a panic path.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In Stock"
        } else {
            "Pre-Order"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_product_id_from_route_segment() {
        assert_eq!(ProductId::parse("7"), Some(ProductId(7)));
        assert_eq!(ProductId::parse(" 12 "), Some(ProductId(12)));
        assert_eq!(ProductId::parse("braai"), None);
        assert_eq!(ProductId::parse("-3"), None);
        assert_eq!(ProductId::parse(""), None);
    }

    #[test]
    fn enum_display_forms() {
        assert_eq!(Fit::Universal.as_str(), "Universal");
        assert_eq!(WeatherRating::AllWeather.as_str(), "All-Weather");
        assert_eq!(Section::Featured.id(), "featured");
        assert_eq!(Section::Value.to_string(), "value");
    }
}
