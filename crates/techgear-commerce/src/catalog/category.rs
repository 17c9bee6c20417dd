//! Category records for the "browse by category" grid.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Category image reference.
    pub image: String,
    /// Number of products advertised for this category.
    pub product_count: u32,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        image: impl Into<String>,
        product_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            product_count,
        }
    }

    /// Label shown above the category name (e.g., "48 Products").
    pub fn count_label(&self) -> String {
        match self.product_count {
            1 => "1 Product".to_string(),
            n => format!("{} Products", n),
        }
    }
}
