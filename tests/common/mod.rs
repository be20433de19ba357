//! Shared test utilities and constants.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use zonix::receipt::{
    Receipt, ReceiptCalculator, ReceiptOwner, ReceiptStatus, TradeSettlement, TradeType,
};

/// Owner used by every fixture receipt.
pub fn demo_owner() -> ReceiptOwner {
    ReceiptOwner {
        user_id: "usr_demo_001".to_string(),
        user_name: "Demo Trader".to_string(),
    }
}

/// Settles a BTC buy with the given inputs through the default calculator.
pub fn settle(quantity: u32, price_per_unit: Decimal, profit_loss: Decimal) -> Receipt {
    let trade = TradeSettlement {
        id: "rcpt_test".to_string(),
        receipt_id: "ZNX-2026-TEST0000".to_string(),
        timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 10, 15, 0).unwrap(),
        tpe: TradeType::Buy,
        token_name: "Bitcoin".to_string(),
        token_symbol: "BTC".to_string(),
        quantity,
        price_per_unit,
        profit_loss,
        status: ReceiptStatus::Completed,
    };
    Receipt::settle(&ReceiptCalculator::default(), &demo_owner(), trade)
        .expect("fixture trade should settle")
}
