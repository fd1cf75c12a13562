use serde::{Deserialize, Serialize};

use crate::record::VariantKey;

/// Output column headers, in export order.
pub const TRANSFER_COLUMNS: [&str; 8] = [
    "Gönderen mağaza",
    "Ürün kodu",
    "Ürün adı",
    "Renk kodu",
    "Renk adı",
    "Beden",
    "Gönderilen adet",
    "Alan mağaza",
];

/// A single shipment of one variant from one store to another.
///
/// `from_store` never equals `to_store` and `quantity` is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferLine {
    pub from_store: String,
    pub product_code: String,
    pub product_name: String,
    pub color_code: String,
    pub color_name: String,
    pub size: String,
    pub quantity: u32,
    pub to_store: String,
}

impl TransferLine {
    pub fn new(
        from_store: impl Into<String>,
        to_store: impl Into<String>,
        key: &VariantKey,
        quantity: u32,
    ) -> Self {
        Self {
            from_store: from_store.into(),
            product_code: key.product_code.clone(),
            product_name: key.product_name.clone(),
            color_code: key.color_code.clone(),
            color_name: key.color_name.clone(),
            size: key.size.clone(),
            quantity,
            to_store: to_store.into(),
        }
    }

    pub fn variant_key(&self) -> VariantKey {
        VariantKey {
            product_code: self.product_code.clone(),
            product_name: self.product_name.clone(),
            color_code: self.color_code.clone(),
            color_name: self.color_name.clone(),
            size: self.size.clone(),
        }
    }

    /// Row values in [`TRANSFER_COLUMNS`] order.
    pub fn to_row(&self) -> [String; 8] {
        [
            self.from_store.clone(),
            self.product_code.clone(),
            self.product_name.clone(),
            self.color_code.clone(),
            self.color_name.clone(),
            self.size.clone(),
            self.quantity.to_string(),
            self.to_store.clone(),
        ]
    }
}
