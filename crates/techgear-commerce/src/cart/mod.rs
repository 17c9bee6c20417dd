//! Shopping cart module.
//!
//! Contains the cart store, its lines, and the derived totals snapshot.

mod store;
mod totals;

pub use store::{CartLine, CartStore};
pub use totals::{CartTotals, LineTotal};
