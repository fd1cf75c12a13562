use std::fs;

use insta::assert_snapshot;
use restock_model::{TransferLine, VariantKey};
use restock_report::{transfers_to_csv_string, transfers_to_frame, write_transfers_csv};
use tempfile::TempDir;

fn sample_lines() -> Vec<TransferLine> {
    let tee = VariantKey::new("SKU1", "Basic Tee", "001", "Siyah", "M");
    let jeans = VariantKey::new("SKU9", "Slim, Dark", "014", "Lacivert", "32");
    vec![
        TransferLine::new("Alsancak Mağaza", "Kadıköy Mağaza", &tee, 4),
        TransferLine::new("Nişantaşı Mağaza", "Kadıköy Mağaza", &tee, 2),
        TransferLine::new("Alsancak Mağaza", "Caddebostan Mağaza", &jeans, 3),
    ]
}

#[test]
fn csv_export_matches_expected_layout() {
    let csv = transfers_to_csv_string(&sample_lines()).expect("render csv");
    assert_snapshot!(csv, @r#"
    Gönderen mağaza,Ürün kodu,Ürün adı,Renk kodu,Renk adı,Beden,Gönderilen adet,Alan mağaza
    Alsancak Mağaza,SKU1,Basic Tee,001,Siyah,M,4,Kadıköy Mağaza
    Nişantaşı Mağaza,SKU1,Basic Tee,001,Siyah,M,2,Kadıköy Mağaza
    Alsancak Mağaza,SKU9,"Slim, Dark",014,Lacivert,32,3,Caddebostan Mağaza
    "#);
}

#[test]
fn empty_plan_still_has_header() {
    let csv = transfers_to_csv_string(&[]).expect("render csv");
    assert_eq!(
        csv,
        "Gönderen mağaza,Ürün kodu,Ürün adı,Renk kodu,Renk adı,Beden,Gönderilen adet,Alan mağaza\n"
    );
}

#[test]
fn writes_plan_to_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("transfers.csv");
    write_transfers_csv(&path, &sample_lines()).expect("write csv");
    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(contents.lines().count(), 4);
}

#[test]
fn frame_and_csv_share_layout() {
    let lines = sample_lines();
    let csv = transfers_to_csv_string(&lines).expect("render csv");
    let df = transfers_to_frame(&lines).expect("frame");

    let header: Vec<&str> = csv.lines().next().expect("header").split(',').collect();
    let names: Vec<&str> = df.get_column_names().iter().map(|name| name.as_str()).collect();
    assert_eq!(names, header);
    assert_eq!(df.height(), csv.lines().count() - 1);
}
