//! Smart receipts for settled trades.
//!
//! The [`calculator`] turns trade inputs into a fee breakdown; [`model`]
//! holds the records built from it; [`id`], [`mock`] and [`summary`] are
//! the collaborators the receipt screens use.

pub mod calculator;
pub mod id;
pub mod mock;
pub mod model;
pub mod summary;

pub use calculator::{
    CalculationError, FeeSchedule, ReceiptCalculation, ReceiptCalculator, calculate_receipt,
};
pub use model::{Receipt, ReceiptOwner, ReceiptStatus, TradeSettlement, TradeType};
pub use summary::ReceiptSummary;

/// Receipts for one trade direction, in their original order.
pub fn filter_by_type(receipts: &[Receipt], tpe: TradeType) -> Vec<&Receipt> {
    receipts.iter().filter(|r| r.tpe == tpe).collect()
}

/// Receipts with the given status, in their original order.
pub fn filter_by_status(receipts: &[Receipt], status: ReceiptStatus) -> Vec<&Receipt> {
    receipts.iter().filter(|r| r.status == status).collect()
}
