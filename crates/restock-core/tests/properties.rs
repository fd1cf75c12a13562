//! Invariants that must hold for any input.

use std::collections::{BTreeMap, HashMap};

use proptest::prelude::*;
use restock_core::{allocate, send_capacity};
use restock_model::{AllocationConfig, StoreVariantRecord, VariantKey};

const STORES: [&str; 5] = [
    "Internet Mağaza",
    "Caddebostan Mağaza",
    "Alsancak Mağaza",
    "Kadıköy Mağaza",
    "Nişantaşı Mağaza",
];
const PRODUCTS: [&str; 3] = ["SKU1", "SKU2", "SKU3"];
const SIZES: [&str; 3] = ["S", "M", "L"];

fn records_strategy() -> impl Strategy<Value = Vec<StoreVariantRecord>> {
    let cell = (0..STORES.len(), 0..PRODUCTS.len(), 0..SIZES.len());
    prop::collection::btree_map(cell, (0u32..12, 0u32..16), 0..40).prop_map(|cells| {
        cells
            .into_iter()
            .map(|((store, product, size), (sales, stock))| {
                StoreVariantRecord::new(
                    STORES[store],
                    &VariantKey::new(PRODUCTS[product], "Tee", "001", "Black", SIZES[size]),
                    sales,
                    stock,
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn lines_are_well_formed(records in records_strategy()) {
        let config = AllocationConfig::default();
        let allocation = allocate(&records, &config);
        for line in &allocation.lines {
            prop_assert_ne!(&line.from_store, &line.to_store);
            prop_assert_ne!(line.from_store.as_str(), config.never_sender_store.as_str());
            prop_assert!(line.quantity > 0);
            prop_assert!(line.quantity <= config.max_per_line);
        }
    }

    #[test]
    fn capped_receiver_stays_within_limit(records in records_strategy()) {
        let config = AllocationConfig::default();
        let allocation = allocate(&records, &config);
        let mut received: HashMap<&str, u32> = HashMap::new();
        for line in &allocation.lines {
            if line.to_store == config.capped_receiver_store {
                *received.entry(line.product_code.as_str()).or_insert(0) += line.quantity;
            }
        }
        for total in received.values() {
            prop_assert!(*total <= config.capped_receiver_limit);
        }
    }

    #[test]
    fn suppliers_never_exceed_capacity(records in records_strategy()) {
        let config = AllocationConfig::default();
        let allocation = allocate(&records, &config);
        let mut shipped: BTreeMap<(VariantKey, String), u32> = BTreeMap::new();
        for line in &allocation.lines {
            *shipped
                .entry((line.variant_key(), line.from_store.clone()))
                .or_insert(0) += line.quantity;
        }
        for ((key, store), total) in shipped {
            let record = records
                .iter()
                .find(|r| r.variant_key() == key && r.store == store)
                .expect("sender row present");
            prop_assert!(total <= send_capacity(record));
        }
    }

    #[test]
    fn stocked_fulfillment_store_blocks_its_variant(records in records_strategy()) {
        let config = AllocationConfig::default();
        let allocation = allocate(&records, &config);
        for record in &records {
            if record.store == config.never_sender_store
                && record.stock >= config.never_sender_skip_stock
            {
                let key = record.variant_key();
                prop_assert!(allocation.lines.iter().all(|line| line.variant_key() != key));
            }
        }
    }

    #[test]
    fn receivers_never_exceed_need(records in records_strategy()) {
        let config = AllocationConfig::default();
        let allocation = allocate(&records, &config);
        let mut received: BTreeMap<(VariantKey, String), u32> = BTreeMap::new();
        for line in &allocation.lines {
            *received
                .entry((line.variant_key(), line.to_store.clone()))
                .or_insert(0) += line.quantity;
        }
        for ((key, store), total) in received {
            let record = records
                .iter()
                .find(|r| r.variant_key() == key && r.store == store)
                .expect("receiver row present");
            prop_assert!(total <= restock_core::receive_need(record, &config));
        }
    }

    #[test]
    fn allocation_is_deterministic(records in records_strategy()) {
        let config = AllocationConfig::default();
        prop_assert_eq!(allocate(&records, &config).lines, allocate(&records, &config).lines);
    }
}
