use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_malformed_orders_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = common::write_lab_catalog(dir.path()).unwrap();

    let mut orders = NamedTempFile::new().unwrap();
    writeln!(orders, "order, items, coupon, balance").unwrap();
    writeln!(orders, "1, SKU1:1, , 500").unwrap();
    // Missing quantity
    writeln!(orders, "2, SKU1, , 500").unwrap();
    // Zero quantity
    writeln!(orders, "3, SKU2:0, , 500").unwrap();
    // Balance is not a number
    writeln!(orders, "4, SKU2:1, , lots").unwrap();
    writeln!(orders, "5, SKU2:1, , 200").unwrap();

    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.arg(orders.path())
        .arg("--stock")
        .arg(&catalog.stock)
        .arg("--prices")
        .arg(&catalog.prices);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("skipping malformed order"))
        .stdout(predicate::str::contains("1,charged,500,500,"))
        .stdout(predicate::str::contains("5,charged,200,200,"))
        .stdout(predicate::str::contains("\n2,").not())
        .stdout(predicate::str::contains("\n3,").not())
        .stdout(predicate::str::contains("\n4,").not());
}

#[test]
fn test_unpriced_sku_is_reported_as_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = common::write_lab_catalog(dir.path()).unwrap();
    std::fs::write(&catalog.stock, "sku,available\nSKU1,3\nSKU9,4\n").unwrap();

    let mut orders = NamedTempFile::new().unwrap();
    writeln!(orders, "order,items,coupon,balance").unwrap();
    writeln!(orders, "1,SKU1:1 SKU9:1,,10000").unwrap();
    writeln!(orders, "2,SKU1:1,,10000").unwrap();

    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.arg(orders.path())
        .arg("--stock")
        .arg(&catalog.stock)
        .arg("--prices")
        .arg(&catalog.prices);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,unpriced_item,,,No price for SKU9"))
        .stdout(predicate::str::contains("2,charged,500,500,"));
}

#[test]
fn test_stock_is_checked_before_price_at_cli() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = common::write_lab_catalog(dir.path()).unwrap();

    let mut orders = NamedTempFile::new().unwrap();
    writeln!(orders, "order,items,coupon,balance").unwrap();
    writeln!(orders, "1,SKU1:5 SKU9:1,,10000").unwrap();

    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.arg(orders.path())
        .arg("--stock")
        .arg(&catalog.stock)
        .arg("--prices")
        .arg(&catalog.prices);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,out_of_stock,,,"))
        .stdout(predicate::str::contains("unpriced_item").not());
}

#[test]
fn test_missing_stock_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = common::write_lab_catalog(dir.path()).unwrap();

    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.arg("tests/fixtures/orders.csv")
        .arg("--stock")
        .arg(dir.path().join("missing.csv"))
        .arg("--prices")
        .arg(&catalog.prices);

    cmd.assert().failure();
}

#[test]
fn test_invalid_price_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = common::write_lab_catalog(dir.path()).unwrap();
    std::fs::write(&catalog.prices, "{\"SKU1\": \"five\"}").unwrap();

    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.arg("tests/fixtures/orders.csv")
        .arg("--stock")
        .arg(&catalog.stock)
        .arg("--prices")
        .arg(&catalog.prices);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}
