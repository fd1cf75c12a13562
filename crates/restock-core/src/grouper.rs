use std::collections::BTreeMap;

use restock_model::{StoreVariantRecord, VariantKey};

/// Rows sharing one product/color/size key, in input order.
#[derive(Debug, Clone)]
pub struct VariantGroup<'a> {
    pub key: VariantKey,
    pub rows: Vec<&'a StoreVariantRecord>,
}

/// Partition records by variant key.
///
/// Groups come out in key order; rows with empty key fields still form a
/// group of their own.
pub fn group_by_variant(
    records: &[StoreVariantRecord],
) -> impl Iterator<Item = VariantGroup<'_>> {
    let mut groups: BTreeMap<VariantKey, Vec<&StoreVariantRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.variant_key()).or_default().push(record);
    }
    groups
        .into_iter()
        .map(|(key, rows)| VariantGroup { key, rows })
}
