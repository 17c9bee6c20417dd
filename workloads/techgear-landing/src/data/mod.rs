//! Static storefront content: the product catalog and the editorial blocks
//! around it.

mod catalog;
mod content;

pub use catalog::*;
pub use content::*;
