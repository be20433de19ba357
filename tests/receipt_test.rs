//! Receipt records, mock history and summaries.

mod common;

use chrono::{TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use zonix::format::{format_datetime, format_inr};
use zonix::receipt::mock::{generate_mock_receipts, generate_mock_receipts_with};
use zonix::receipt::{
    Receipt, ReceiptCalculator, ReceiptStatus, ReceiptSummary, TradeType, calculate_receipt,
    filter_by_status, filter_by_type,
};

const RECEIPT_JSON: &str = include_str!("fixtures/receipt.json");
const TAMPERED_RECEIPT_JSON: &str = include_str!("fixtures/receipt_tampered.json");

#[test]
fn fixture_receipt_deserializes() {
    let receipt: Receipt =
        serde_json::from_str(RECEIPT_JSON).expect("Failed to deserialize receipt");

    assert_eq!(receipt.id, "rcpt_0042");
    assert_eq!(receipt.receipt_id, "ZNX-2026-MGX3K2P1Q7ZA");
    assert_eq!(
        receipt.timestamp,
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 15, 0).unwrap()
    );
    assert_eq!(receipt.user_id, "usr_demo_001");
    assert_eq!(receipt.tpe, TradeType::Buy);
    assert_eq!(receipt.token_symbol, "SOL");
    assert_eq!(receipt.quantity, 120);
    assert_eq!(receipt.price_per_unit, dec!(234.50));
    assert_eq!(receipt.profit_loss, dec!(1000));
    assert_eq!(receipt.calculation.trade_value, dec!(28140.00));
    assert_eq!(receipt.calculation.final_payable, dec!(66.50));
    assert!(!receipt.calculation.rebate_applied);
    assert_eq!(receipt.status, ReceiptStatus::Completed);
}

#[test]
fn fixture_receipt_is_consistent() {
    let receipt: Receipt = serde_json::from_str(RECEIPT_JSON).unwrap();
    assert!(receipt.is_consistent(&ReceiptCalculator::default()));
}

#[test]
fn tampered_fixture_is_detected() {
    // Loss trade stored with the full fee and no rebate.
    let receipt: Receipt = serde_json::from_str(TAMPERED_RECEIPT_JSON).unwrap();
    assert_eq!(receipt.tpe, TradeType::Sell);
    assert_eq!(receipt.status, ReceiptStatus::Failed);
    assert!(!receipt.is_consistent(&ReceiptCalculator::default()));
}

#[test]
fn receipt_round_trips_through_json() {
    let receipt = common::settle(3, dec!(999.99), dec!(-12.34));
    let json = serde_json::to_string(&receipt).unwrap();
    let back: Receipt = serde_json::from_str(&json).unwrap();
    assert_eq!(back, receipt);
}

#[test]
fn every_mock_receipt_matches_the_calculator() {
    let receipts = generate_mock_receipts(200, &common::demo_owner()).unwrap();
    assert_eq!(receipts.len(), 200);

    for r in &receipts {
        let expected = calculate_receipt(r.quantity, r.price_per_unit, r.profit_loss).unwrap();
        assert_eq!(r.calculation.trade_fee, expected.trade_fee);
        assert_eq!(r.calculation.commission, expected.commission);
        assert_eq!(r.calculation.gst, expected.gst);
        assert_eq!(r.calculation.final_payable, expected.final_payable);
        assert_eq!(r.calculation.rebate_applied, expected.rebate_applied);
        assert_eq!(r.user_name, "Demo Trader");
        assert!(r.receipt_id.starts_with("ZNX-"));
    }
}

#[test]
fn mock_receipts_sorted_newest_first() {
    let receipts = generate_mock_receipts(50, &common::demo_owner()).unwrap();
    assert!(receipts.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[test]
fn summary_matches_filtered_completed_receipts() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(2026);
    let receipts = generate_mock_receipts_with(&mut rng, now, 80, &common::demo_owner()).unwrap();

    let summary = ReceiptSummary::from_receipts(&receipts);
    let completed = filter_by_status(&receipts, ReceiptStatus::Completed);

    assert_eq!(summary.count(), receipts.len());
    assert_eq!(summary.completed, completed.len());
    assert_eq!(
        summary.pending,
        filter_by_status(&receipts, ReceiptStatus::Pending).len()
    );
    assert_eq!(
        summary.total_payable,
        completed
            .iter()
            .map(|r| r.calculation.final_payable)
            .sum::<Decimal>()
    );
    assert_eq!(
        summary.rebates_applied,
        completed.iter().filter(|r| r.calculation.rebate_applied).count()
    );
}

#[test]
fn filter_by_type_partitions_history() {
    let mut rng = StdRng::seed_from_u64(11);
    let receipts =
        generate_mock_receipts_with(&mut rng, Utc::now(), 30, &common::demo_owner()).unwrap();

    let buys = filter_by_type(&receipts, TradeType::Buy);
    let sells = filter_by_type(&receipts, TradeType::Sell);
    assert_eq!(buys.len() + sells.len(), receipts.len());
    assert!(buys.iter().all(|r| r.tpe == TradeType::Buy));
}

#[test]
fn receipt_display_strings() {
    let receipt: Receipt = serde_json::from_str(RECEIPT_JSON).unwrap();
    assert_eq!(format_datetime(receipt.timestamp), "19 Oct 2026, 03:45 pm");
    assert_eq!(format_inr(receipt.calculation.trade_value), "₹28,140.00");
    assert_eq!(format_inr(receipt.calculation.final_payable), "₹66.50");
}
