//! Commerce domain types for the TechGear storefront.
//!
//! This crate provides the pieces of the storefront that carry real state:
//!
//! - **Catalog**: read-only product and category records
//! - **Cart**: the cart store with derived totals and panel visibility
//! - **Money**: cents-based amounts with currency
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use techgear_commerce::prelude::*;
//!
//! let headset = Arc::new(Product::new(
//!     "headset-pro",
//!     "Pro Gaming Headset",
//!     Money::from_decimal(50.0, Currency::USD),
//! ));
//!
//! let mut cart = CartStore::new(Currency::USD);
//! cart.add(headset.clone());
//! cart.add(headset);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.subtotal().display(), "$100.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{CartLine, CartStore, CartTotals, LineTotal};
}
