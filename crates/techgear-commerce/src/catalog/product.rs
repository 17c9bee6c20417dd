//! Product records.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product or review can carry.
pub const MAX_RATING: f32 = 5.0;

/// A product in the showcase catalog.
///
/// Products are fixture data: read-only once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Money,
    /// Compare-at price, shown struck through when higher than `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Image reference.
    pub image: String,
    /// Category label.
    pub category: String,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Promotional badge (e.g., "NEW", "SALE").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Create a product with the required fields; the rest start empty.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            category: String::new(),
            rating: 0.0,
            review_count: 0,
            badge: None,
            description: None,
        }
    }

    /// Set the compare-at price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set rating and review count. The rating is clamped to 0..=5.
    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating.clamp(0.0, MAX_RATING);
        self.review_count = review_count;
        self
    }

    /// Set the promotional badge.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the product is discounted against its original price.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percentage().is_some()
    }

    /// Rounded percentage off the original price, if discounted.
    pub fn discount_percentage(&self) -> Option<u8> {
        self.original_price
            .as_ref()
            .and_then(|original| self.price.percent_off(original))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_builder() {
        let p = Product::new("mouse-x", "Mouse X", usd(4999))
            .with_category("Mice")
            .with_rating(4.8, 120)
            .with_badge("NEW");

        assert_eq!(p.id.as_str(), "mouse-x");
        assert_eq!(p.category, "Mice");
        assert_eq!(p.review_count, 120);
        assert_eq!(p.badge.as_deref(), Some("NEW"));
    }

    #[test]
    fn test_rating_is_clamped() {
        let p = Product::new("a", "A", usd(100)).with_rating(7.5, 1);
        assert_eq!(p.rating, MAX_RATING);
    }

    #[test]
    fn test_sale_detection() {
        let regular = Product::new("a", "A", usd(5000));
        assert!(!regular.is_on_sale());

        let sale = Product::new("b", "B", usd(7500)).with_original_price(usd(10000));
        assert!(sale.is_on_sale());
        assert_eq!(sale.discount_percentage(), Some(25));

        // An original price below the current one is not a discount.
        let odd = Product::new("c", "C", usd(5000)).with_original_price(usd(4000));
        assert!(!odd.is_on_sale());
    }
}
