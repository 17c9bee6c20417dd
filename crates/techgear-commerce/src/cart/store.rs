//! Cart store and cart line types.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cart::{CartTotals, LineTotal};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Single source of truth for what is in the cart and whether the cart
/// panel is open.
///
/// Every UI region that shows cart state reads from one `CartStore` and
/// every mutation goes through its operations. Invariants:
///
/// - at most one line per product id
/// - every line has a quantity of at least 1
/// - lines keep the order in which their product was first added
///
/// No operation can fail. Edge inputs (unknown ids, non-positive
/// quantities) are no-ops or removals, never errors.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    currency: Currency,
    open: bool,
}

impl CartStore {
    /// Create an empty, closed cart that totals in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
            open: false,
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with quantity 1. Returns the line's quantity after the add.
    ///
    /// The product must be priced in the cart's currency; products from a
    /// [`Catalog`](crate::catalog::Catalog) built in that currency always
    /// are. A product in any other currency is ignored and 0 is returned.
    pub fn add(&mut self, product: Arc<Product>) -> u32 {
        if product.price.currency != self.currency {
            warn!(
                product_id = %product.id,
                product_currency = %product.price.currency,
                cart_currency = %self.currency,
                "ignored product priced in a different currency"
            );
            return 0;
        }

        if let Some(line) = self.line_mut(product.id.as_str()) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(product_id = %line.product.id, quantity = line.quantity, "cart line incremented");
            return line.quantity;
        }

        debug!(product_id = %product.id, "cart line added");
        self.lines.push(CartLine {
            product,
            quantity: 1,
        });
        1
    }

    /// Remove the line for a product. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|line| line.product.id.as_str() != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(product_id, "cart line removed");
        }
        removed
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero or below removes the line. For a product that is
    /// not in the cart this does nothing; only [`add`](Self::add) creates
    /// lines. Returns whether the cart changed.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.line_mut(product_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                debug!(product_id, quantity, "cart line quantity set");
                true
            }
            _ => false,
        }
    }

    /// Raise a line's quantity by one, through [`set_quantity`](Self::set_quantity).
    pub fn increment(&mut self, product_id: &str) -> bool {
        match self.quantity_of(product_id) {
            Some(q) => self.set_quantity(product_id, i64::from(q) + 1),
            None => false,
        }
    }

    /// Lower a line's quantity by one. Decrementing from 1 removes the line.
    pub fn decrement(&mut self, product_id: &str) -> bool {
        match self.quantity_of(product_id) {
            Some(q) => self.set_quantity(product_id, i64::from(q) - 1),
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            debug!(lines = self.lines.len(), "cart cleared");
        }
        self.lines.clear();
    }

    /// Set the cart panel visibility.
    pub fn set_visible(&mut self, open: bool) {
        self.open = open;
    }

    /// Flip the cart panel visibility and return the new state.
    pub fn toggle_visible(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Whether the cart panel is open.
    pub fn is_visible(&self) -> bool {
        self.open
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a product, if present.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| line.product.id.as_str() == product_id)
    }

    /// Quantity of a product in the cart, if present.
    pub fn quantity_of(&self, product_id: &str) -> Option<u32> {
        self.line(product_id).map(CartLine::quantity)
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of unit price times quantity, priced at the products' current prices.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, line| {
                acc.saturating_add(&line.total())
            })
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency the subtotal is expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Snapshot of the derived aggregates.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_items: self.total_items(),
            distinct_lines: self.lines.len(),
            subtotal: self.subtotal(),
            lines: self
                .lines
                .iter()
                .map(|line| LineTotal {
                    product_id: line.product_id().clone(),
                    name: line.product.name.clone(),
                    unit_price: line.product.price,
                    quantity: line.quantity,
                    total: line.total(),
                })
                .collect(),
        }
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id.as_str() == product_id)
    }
}

/// One entry in the cart: a product and how many of it.
///
/// Lines are only created and changed by [`CartStore`], so the quantity
/// seen here is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Arc<Product>,
    quantity: u32,
}

impl CartLine {
    /// The product this line refers to.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Product id, the line's key.
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity at the product's current price.
    pub fn total(&self) -> Money {
        self.product
            .price
            .saturating_multiply(i64::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cents: i64) -> Arc<Product> {
        Arc::new(Product::new(id, format!("Product {}", id), Money::new(cents, Currency::USD)))
    }

    #[test]
    fn test_new_cart_is_empty_and_closed() {
        let cart = CartStore::new(Currency::USD);
        assert!(cart.is_empty());
        assert!(!cart.is_visible());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), Money::zero(Currency::USD));
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = CartStore::new(Currency::USD);
        let a = product("a", 5000);

        assert_eq!(cart.add(a.clone()), 1);
        assert_eq!(cart.add(a), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of("a"), Some(2));
    }

    #[test]
    fn test_lines_keep_first_add_order() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(product("b", 100));
        cart.add(product("a", 100));
        cart.add(product("b", 100));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id().as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(product("a", 100));

        assert!(!cart.remove("missing"));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_set_quantity_zero_or_below_removes() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(product("a", 100));
        cart.add(product("b", 100));

        assert!(cart.set_quantity("a", 0));
        assert!(cart.set_quantity("b", -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_on_absent_line_is_noop() {
        let mut cart = CartStore::new(Currency::USD);
        assert!(!cart.set_quantity("ghost", 4));
        assert!(!cart.set_quantity("ghost", 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_from_one_removes() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(product("a", 100));

        assert!(cart.decrement("a"));
        assert!(cart.line("a").is_none());
        // Incrementing a removed line must not bring it back.
        assert!(!cart.increment("a"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_uses_unit_price_times_quantity() {
        let mut cart = CartStore::new(Currency::USD);
        let a = product("a", 1000);
        cart.add(a.clone());
        cart.add(a);
        cart.add(product("b", 2000));

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal().amount_cents, 4000);
    }

    #[test]
    fn test_foreign_currency_product_is_ignored() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(product("a", 500));
        let euro = Arc::new(Product::new("e", "Euro", Money::new(10000, Currency::EUR)));
        let yen = Arc::new(Product::new("y", "Yen", Money::new(500, Currency::JPY)));

        assert_eq!(cart.add(euro), 0);
        assert_eq!(cart.add(yen), 0);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.subtotal().display(), "$5.00");
    }

    #[test]
    fn test_visibility() {
        let mut cart = CartStore::new(Currency::USD);
        cart.set_visible(true);
        assert!(cart.is_visible());
        assert!(!cart.toggle_visible());
        assert!(!cart.is_visible());
    }

    #[test]
    fn test_huge_quantity_saturates() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(product("a", 100));
        assert!(cart.set_quantity("a", i64::MAX));
        assert_eq!(cart.quantity_of("a"), Some(u32::MAX));
        assert_eq!(cart.add(product("a", 100)), u32::MAX);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(product("a", 100));
        cart.set_visible(true);
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.is_visible());
    }
}
