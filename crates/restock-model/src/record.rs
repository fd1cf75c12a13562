//! Input rows: one store's sales and stock for one product variant.

use serde::{Deserialize, Serialize};

/// Sales and stock counts for a single store and product variant.
///
/// Quantities are already normalized: missing or malformed values were
/// coerced to zero before the record was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreVariantRecord {
    pub store: String,
    pub product_code: String,
    pub product_name: String,
    pub color_code: String,
    pub color_name: String,
    pub size: String,
    /// Net units sold over the reporting period.
    pub sales: u32,
    /// Units on hand.
    pub stock: u32,
}

impl StoreVariantRecord {
    pub fn new(store: impl Into<String>, key: &VariantKey, sales: u32, stock: u32) -> Self {
        Self {
            store: store.into(),
            product_code: key.product_code.clone(),
            product_name: key.product_name.clone(),
            color_code: key.color_code.clone(),
            color_name: key.color_name.clone(),
            size: key.size.clone(),
            sales,
            stock,
        }
    }

    /// Grouping key for this row.
    pub fn variant_key(&self) -> VariantKey {
        VariantKey {
            product_code: self.product_code.clone(),
            product_name: self.product_name.clone(),
            color_code: self.color_code.clone(),
            color_name: self.color_name.clone(),
            size: self.size.clone(),
        }
    }
}

/// Identity of a product variant: product, color, and size.
///
/// Ordering is lexicographic over the fields in declaration order, which
/// fixes the order in which variant groups are allocated.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    pub product_code: String,
    pub product_name: String,
    pub color_code: String,
    pub color_name: String,
    pub size: String,
}

impl VariantKey {
    pub fn new(
        product_code: impl Into<String>,
        product_name: impl Into<String>,
        color_code: impl Into<String>,
        color_name: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            product_name: product_name.into(),
            color_code: color_code.into(),
            color_name: color_name.into(),
            size: size.into(),
        }
    }
}

impl std::fmt::Display for VariantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.product_code, self.color_code, self.size)
    }
}
