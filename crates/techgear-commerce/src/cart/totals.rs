//! Derived cart totals.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Snapshot of the cart's derived aggregates.
///
/// Computed on demand by [`CartStore::totals`](crate::cart::CartStore::totals);
/// the store never keeps one around.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of quantities.
    pub total_items: u64,
    /// Number of distinct lines.
    pub distinct_lines: usize,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Per-line breakdown in cart order.
    pub lines: Vec<LineTotal>,
}

impl CartTotals {
    /// Badge text for the navigation cart icon, `None` when the cart is empty.
    pub fn badge(&self) -> Option<String> {
        match self.total_items {
            0 => None,
            n => Some(n.to_string()),
        }
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price * quantity
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn totals(items: u64) -> CartTotals {
        CartTotals {
            total_items: items,
            distinct_lines: 1,
            subtotal: Money::zero(Currency::USD),
            lines: vec![],
        }
    }

    #[test]
    fn test_badge() {
        assert_eq!(totals(0).badge(), None);
        assert_eq!(totals(7).badge().as_deref(), Some("7"));
        assert_eq!(totals(150).badge().as_deref(), Some("150"));
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(totals(2)).unwrap();
        assert_eq!(json["total_items"], 2);
        assert_eq!(json["subtotal"]["currency"], "USD");
    }
}
