//! Product catalog module.
//!
//! Contains the read-only product and category records and the
//! [`Catalog`] that hands out shared references to them.

mod category;
mod product;

pub use category::Category;
pub use product::{Product, MAX_RATING};

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Static catalog of products and categories.
///
/// Products are stored behind `Arc` so cart lines can point at the same
/// record the catalog holds instead of copying it.
///
/// Every price in a catalog is in the catalog's currency.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    currency: Currency,
    products: Vec<Arc<Product>>,
    index: HashMap<ProductId, usize>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog priced in `currency`, rejecting duplicate product
    /// ids and any price in another currency.
    pub fn new(
        currency: Currency,
        products: Vec<Product>,
        categories: Vec<Category>,
    ) -> Result<Self, CommerceError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            ensure_currency(currency, &product.price)?;
            if let Some(original) = &product.original_price {
                ensure_currency(currency, original)?;
            }
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }

        Ok(Self {
            currency,
            products: products.into_iter().map(Arc::new).collect(),
            index,
            categories,
        })
    }

    /// Currency every price is expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All products in fixture order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// The first `count` products, as shown in the featured grid.
    pub fn featured(&self, count: usize) -> &[Arc<Product>] {
        &self.products[..count.min(self.products.len())]
    }

    /// All categories in fixture order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Arc<Product>> {
        self.index.get(id).map(|&position| &self.products[position])
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn ensure_currency(expected: Currency, price: &Money) -> Result<(), CommerceError> {
    if price.currency != expected {
        return Err(CommerceError::CurrencyMismatch {
            expected: expected.code().to_string(),
            got: price.currency.code().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, id.to_uppercase(), Money::new(1000, Currency::USD))
    }

    fn catalog(products: Vec<Product>) -> Result<Catalog, CommerceError> {
        Catalog::new(Currency::USD, products, vec![])
    }

    #[test]
    fn test_lookup() {
        let catalog = catalog(vec![product("a"), product("b")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.currency(), Currency::USD);
        assert_eq!(catalog.product("b").unwrap().name, "B");
        assert!(catalog.product("zzz").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = catalog(vec![product("a"), product("a")]).unwrap_err();
        assert_eq!(err, CommerceError::DuplicateProduct("a".to_string()));
    }

    #[test]
    fn test_mixed_currencies_rejected() {
        let euro = Product::new("e", "Euro", Money::new(10000, Currency::EUR));
        let err = catalog(vec![product("a"), euro]).unwrap_err();
        assert_eq!(
            err,
            CommerceError::CurrencyMismatch {
                expected: "USD".to_string(),
                got: "EUR".to_string(),
            }
        );

        let yen_original = product("b").with_original_price(Money::new(500, Currency::JPY));
        assert!(matches!(
            catalog(vec![yen_original]),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_featured_is_bounded() {
        let catalog = catalog(vec![product("a"), product("b"), product("c")]).unwrap();
        assert_eq!(catalog.featured(2).len(), 2);
        assert_eq!(catalog.featured(10).len(), 3);
    }

    #[test]
    fn test_lookups_share_the_same_record() {
        let catalog = catalog(vec![product("a")]).unwrap();
        let first = catalog.product("a").unwrap();
        let second = catalog.product("a").unwrap();
        assert!(Arc::ptr_eq(first, second));
    }
}
