//! Custom-cover special request: form contract and its option lists.
//!
//! The request is never sent anywhere; the storefront echoes it back as a
//! confirmation string and logs the structured value.

use serde::{Deserialize, Serialize};

pub const SPECIAL_FABRIC_OPTIONS: [&str; 4] = [
    "Ripstop Polyester",
    "PVC-Coated Oxford",
    "Solution-Dyed Polyester",
    "Marine Canvas",
];

pub const SPECIAL_COLOR_OPTIONS: [&str; 5] =
    ["Charcoal", "Forest Green", "Sandstone", "Navy", "Stone Grey"];

pub const SPECIAL_COVER_OPTIONS: [&str; 5] = [
    "Patio Furniture Cover",
    "Gas Braai Cover",
    "Outdoor Dining Set Cover",
    "Fire Pit Cover",
    "Custom Shape Cover",
];

/// Measurements and preferences for a bespoke cover quote. Dimensions are
/// kept as entered (cm); the browser's numeric inputs do the validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialRequest {
    pub length: String,
    pub height: String,
    pub width: String,
    pub fabric: String,
    pub color: String,
    #[serde(rename = "coverOption")]
    pub cover_option: String,
}

impl Default for SpecialRequest {
    fn default() -> Self {
        Self {
            length: String::new(),
            height: String::new(),
            width: String::new(),
            fabric: SPECIAL_FABRIC_OPTIONS[0].to_string(),
            color: SPECIAL_COLOR_OPTIONS[0].to_string(),
            cover_option: SPECIAL_COVER_OPTIONS[0].to_string(),
        }
    }
}

impl SpecialRequest {
    /// Confirmation line echoed after submit.
    pub fn confirmation(&self) -> String {
        format!(
            "Special request captured for {}: {} x {} x {} cm.",
            self.cover_option, self.length, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_take_first_options() {
        let request = SpecialRequest::default();
        assert_eq!(request.fabric, "Ripstop Polyester");
        assert_eq!(request.color, "Charcoal");
        assert_eq!(request.cover_option, "Patio Furniture Cover");
        assert!(request.length.is_empty());
    }

    #[test]
    fn confirmation_echoes_dimensions_in_l_w_h_order() {
        let request = SpecialRequest {
            length: "210".to_string(),
            height: "95".to_string(),
            width: "140".to_string(),
            ..SpecialRequest::default()
        };

        assert_eq!(
            request.confirmation(),
            "Special request captured for Patio Furniture Cover: 210 x 140 x 95 cm."
        );
    }
}
