//! Cart lines and order arithmetic.

use crate::data::product_by_id;
use crate::product::ProductId;
use serde::{Deserialize, Serialize};

/// Free delivery at and above this subtotal, flat fee below it.
pub const FREE_DELIVERY_THRESHOLD: f64 = 100.0;
pub const FLAT_DELIVERY_FEE: f64 = 15.0;
pub const VAT_RATE: f64 = 0.15;

/// One cart entry. Quantity stays >= 1; removal deletes the line instead of
/// zeroing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity: quantity.max(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub vat: f64,
    pub total: f64,
}

impl CartTotals {
    /// Sum the lines whose product still resolves in the catalog; stale ids
    /// contribute nothing. Rounding happens only at display time.
    pub fn compute(lines: &[CartLine]) -> Self {
        let subtotal: f64 = lines
            .iter()
            .filter_map(|line| {
                product_by_id(line.product_id)
                    .map(|product| f64::from(product.price) * f64::from(line.quantity))
            })
            .sum();

        let delivery_fee = if subtotal >= FREE_DELIVERY_THRESHOLD {
            0.0
        } else {
            FLAT_DELIVERY_FEE
        };
        let vat = subtotal * VAT_RATE;

        Self {
            subtotal,
            delivery_fee,
            vat,
            total: subtotal + delivery_fee + vat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn worked_example_totals() {
        // 189 x 2 + 142 x 1 + 79 x 3 = 757
        let lines = vec![
            CartLine::new(ProductId(1), 2),
            CartLine::new(ProductId(4), 1),
            CartLine::new(ProductId(7), 3),
        ];

        let totals = CartTotals::compute(&lines);
        assert!(close(totals.subtotal, 757.0));
        assert!(close(totals.delivery_fee, 0.0));
        assert!(close(totals.vat, 113.55));
        assert!(close(totals.total, 870.55));
    }

    #[test]
    fn small_order_pays_flat_delivery() {
        // 45 x 1 = 45, below the free-delivery threshold.
        let lines = vec![CartLine::new(ProductId(11), 1)];

        let totals = CartTotals::compute(&lines);
        assert!(close(totals.subtotal, 45.0));
        assert!(close(totals.delivery_fee, FLAT_DELIVERY_FEE));
        assert!(close(totals.total, 45.0 + 15.0 + 45.0 * 0.15));
    }

    #[test]
    fn threshold_boundary() {
        // 49 x 2 = 98, just under the threshold: still pays delivery.
        let totals = CartTotals::compute(&[CartLine::new(ProductId(9), 2)]);
        assert!(close(totals.delivery_fee, FLAT_DELIVERY_FEE));

        // 57 x 2 = 114, at or above: free.
        let totals = CartTotals::compute(&[CartLine::new(ProductId(10), 2)]);
        assert!(close(totals.delivery_fee, 0.0));
    }

    #[test]
    fn unresolvable_lines_contribute_nothing() {
        let lines = vec![
            CartLine::new(ProductId(9999), 5),
            CartLine::new(ProductId(11), 1),
        ];

        let totals = CartTotals::compute(&lines);
        assert!(close(totals.subtotal, 45.0));
    }

    #[test]
    fn empty_cart_is_all_zero_except_delivery() {
        // An empty cart never renders totals, but compute stays total anyway.
        let totals = CartTotals::compute(&[]);
        assert!(close(totals.subtotal, 0.0));
        assert!(close(totals.vat, 0.0));
        assert!(close(totals.delivery_fee, FLAT_DELIVERY_FEE));
    }

    #[test]
    fn quantity_floor_is_one() {
        let line = CartLine::new(ProductId(1), 0);
        assert_eq!(line.quantity, 1);
    }
}
