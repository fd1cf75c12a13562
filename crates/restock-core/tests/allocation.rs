//! End-to-end allocation scenarios.

use restock_core::allocate;
use restock_model::{AllocationConfig, StoreVariantRecord, TransferLine, VariantKey};

fn variant(product: &str, size: &str) -> VariantKey {
    VariantKey::new(product, "Basic Tee", "001", "Black", size)
}

fn row(store: &str, key: &VariantKey, sales: u32, stock: u32) -> StoreVariantRecord {
    StoreVariantRecord::new(store, key, sales, stock)
}

fn summary(lines: &[TransferLine]) -> Vec<(&str, &str, u32)> {
    lines
        .iter()
        .map(|line| (line.from_store.as_str(), line.to_store.as_str(), line.quantity))
        .collect()
}

#[test]
fn stocked_out_store_is_filled_from_several_suppliers() {
    let key = variant("SKU1", "M");
    let records = vec![
        row("A", &key, 5, 0),
        row("B", &key, 0, 20),
        row("C", &key, 0, 20),
        row("D", &key, 0, 20),
    ];
    let allocation = allocate(&records, &AllocationConfig::default());
    assert_eq!(
        summary(&allocation.lines),
        vec![("B", "A", 4), ("C", "A", 4), ("D", "A", 2)]
    );
    assert_eq!(allocation.stats.units, 10);
}

#[test]
fn single_supplier_sends_one_capped_line() {
    let key = variant("SKU1", "M");
    let records = vec![row("A", &key, 5, 0), row("B", &key, 0, 20)];
    let allocation = allocate(&records, &AllocationConfig::default());
    assert_eq!(summary(&allocation.lines), vec![("B", "A", 4)]);
}

#[test]
fn capped_receiver_total_spans_sizes() {
    let small = variant("SKU1", "S");
    let medium = variant("SKU1", "M");
    let records = vec![
        row("Caddebostan Mağaza", &small, 5, 0),
        row("B", &small, 0, 20),
        row("Caddebostan Mağaza", &medium, 5, 0),
        row("B", &medium, 0, 20),
    ];
    let allocation = allocate(&records, &AllocationConfig::default());
    let received: u32 = allocation
        .lines
        .iter()
        .filter(|line| line.to_store == "Caddebostan Mağaza" && line.product_code == "SKU1")
        .map(|line| line.quantity)
        .sum();
    assert_eq!(received, 3);
    // "M" sorts before "S", so the medium variant takes the whole allowance.
    assert_eq!(allocation.lines.len(), 1);
    assert_eq!(allocation.lines[0].size, "M");
}

#[test]
fn capped_receiver_limit_is_per_product() {
    let first = variant("SKU1", "M");
    let second = variant("SKU2", "M");
    let records = vec![
        row("Caddebostan Mağaza", &first, 5, 0),
        row("B", &first, 0, 20),
        row("Caddebostan Mağaza", &second, 5, 0),
        row("B", &second, 0, 20),
    ];
    let allocation = allocate(&records, &AllocationConfig::default());
    assert_eq!(
        summary(&allocation.lines),
        vec![("B", "Caddebostan Mağaza", 3), ("B", "Caddebostan Mağaza", 3)]
    );
}

#[test]
fn stocked_fulfillment_store_blocks_variant() {
    let key = variant("SKU1", "M");
    let records = vec![
        row("Internet Mağaza", &key, 0, 15),
        row("A", &key, 5, 1),
        row("B", &key, 0, 20),
    ];
    let allocation = allocate(&records, &AllocationConfig::default());
    assert!(allocation.is_empty());
    assert_eq!(allocation.stats.skipped_never_sender, 1);
}

#[test]
fn fulfillment_store_below_threshold_never_sends() {
    let key = variant("SKU1", "M");
    let records = vec![row("Internet Mağaza", &key, 0, 9), row("A", &key, 3, 0)];
    let allocation = allocate(&records, &AllocationConfig::default());
    assert!(allocation.is_empty());
    assert_eq!(allocation.stats.without_suppliers, 1);
}

#[test]
fn balanced_stock_produces_no_lines() {
    let key = variant("SKU1", "M");
    let records = vec![
        row("A", &key, 3, 4),
        row("B", &key, 5, 9),
        row("C", &key, 0, 6),
    ];
    let allocation = allocate(&records, &AllocationConfig::default());
    assert!(allocation.is_empty());
    assert_eq!(allocation.stats.without_receivers, 1);
}

#[test]
fn supplier_capacity_is_not_returned() {
    let key = variant("SKU1", "M");
    let records = vec![
        row("B", &key, 4, 1),
        row("A", &key, 5, 0),
        row("S", &key, 0, 6),
    ];
    let allocation = allocate(&records, &AllocationConfig::default());
    assert_eq!(summary(&allocation.lines), vec![("S", "A", 4), ("S", "B", 2)]);
}

#[test]
fn lines_follow_variant_order() {
    let later = variant("SKU2", "M");
    let earlier = variant("SKU1", "M");
    let records = vec![
        row("A", &later, 2, 0),
        row("B", &later, 0, 5),
        row("A", &earlier, 2, 0),
        row("B", &earlier, 0, 5),
    ];
    let allocation = allocate(&records, &AllocationConfig::default());
    let codes: Vec<&str> = allocation
        .lines
        .iter()
        .map(|line| line.product_code.as_str())
        .collect();
    assert_eq!(codes, vec!["SKU1", "SKU2"]);
}

#[test]
fn custom_store_identities_are_respected() {
    let key = variant("SKU1", "M");
    let config = AllocationConfig::default()
        .with_never_sender("Web")
        .with_capped_receiver("Outlet")
        .with_capped_receiver_limit(1)
        .with_max_per_line(10);
    let records = vec![
        row("Web", &key, 0, 5),
        row("Outlet", &key, 4, 0),
        row("A", &key, 6, 0),
        row("B", &key, 0, 30),
    ];
    let allocation = allocate(&records, &config);
    assert_eq!(
        summary(&allocation.lines),
        vec![("B", "A", 10), ("B", "Outlet", 1)]
    );
}

#[test]
fn thresholds_are_configurable() {
    let tee = variant("SKU1", "M");
    let blocked = variant("SKU2", "M");
    let config = AllocationConfig::new()
        .with_never_sender_skip_stock(3)
        .with_receive_stock_ceiling(6)
        .with_zero_stock_multiplier(3);
    let records = vec![
        row("Internet Mağaza", &tee, 0, 2),
        row("A", &tee, 9, 5),
        row("C", &tee, 2, 0),
        row("B", &tee, 0, 30),
        // Below the default threshold of 10, but at the lowered one.
        row("Internet Mağaza", &blocked, 0, 3),
        row("A", &blocked, 5, 0),
        row("B", &blocked, 0, 20),
    ];
    let allocation = allocate(&records, &config);
    // A (stock 5) only qualifies under the raised ceiling.
    assert_eq!(summary(&allocation.lines), vec![("B", "C", 4), ("B", "A", 4)]);
    assert_eq!(allocation.stats.skipped_never_sender, 1);

    let defaults = allocate(&records, &AllocationConfig::default());
    assert_eq!(defaults.stats.skipped_never_sender, 0);
    let to_a: Vec<&str> = defaults
        .lines
        .iter()
        .filter(|line| line.to_store == "A")
        .map(|line| line.product_code.as_str())
        .collect();
    assert_eq!(to_a, vec!["SKU2"]);
}

#[test]
fn duplicate_supplier_rows_share_capacity() {
    let key = variant("SKU1", "M");
    let records = vec![
        row("A", &key, 5, 0),
        row("B", &key, 0, 2),
        row("B", &key, 0, 6),
    ];
    let allocation = allocate(&records, &AllocationConfig::default());
    // The row with 6 ranks first, the row with 2 last; the last one seeds B's counter.
    assert_eq!(summary(&allocation.lines), vec![("B", "A", 2)]);
}

#[test]
fn exhausted_capped_receiver_leaves_supplier_capacity() {
    let medium = variant("SKU1", "M");
    let small = variant("SKU1", "S");
    let records = vec![
        row("Caddebostan Mağaza", &medium, 5, 0),
        row("B", &medium, 0, 20),
        row("Caddebostan Mağaza", &small, 5, 0),
        row("X", &small, 2, 0),
        row("B", &small, 0, 4),
    ];
    let allocation = allocate(&records, &AllocationConfig::default());
    // In the "S" group the capped store ranks first but has no headroom left,
    // so all four units stay available for X.
    assert_eq!(
        summary(&allocation.lines),
        vec![("B", "Caddebostan Mağaza", 3), ("B", "X", 4)]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let key = variant("SKU1", "M");
    let other = variant("SKU3", "XL");
    let records = vec![
        row("A", &key, 5, 0),
        row("B", &key, 0, 7),
        row("C", &key, 1, 9),
        row("A", &other, 3, 1),
        row("C", &other, 0, 4),
    ];
    let config = AllocationConfig::default();
    let first = allocate(&records, &config);
    let second = allocate(&records, &config);
    assert_eq!(first.lines, second.lines);
    assert_eq!(first.stats, second.stats);
}
