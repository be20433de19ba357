//! Aggregates over a receipt history.

use rust_decimal::Decimal;
use serde::Serialize;

use super::model::{Receipt, ReceiptStatus};

/// Totals shown above the receipt history.
///
/// Money totals cover completed receipts only; pending and failed trades
/// are counted but not charged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSummary {
    pub completed: usize,
    pub pending: usize,
    pub failed: usize,
    /// Completed receipts that received the loss rebate.
    pub rebates_applied: usize,
    pub total_trade_value: Decimal,
    pub total_trade_fees: Decimal,
    pub total_commission: Decimal,
    pub total_gst: Decimal,
    pub total_payable: Decimal,
}

impl ReceiptSummary {
    /// Folds a slice of receipts into a summary.
    pub fn from_receipts(receipts: &[Receipt]) -> Self {
        receipts.iter().fold(Self::default(), |mut acc, r| {
            match r.status {
                ReceiptStatus::Pending => acc.pending += 1,
                ReceiptStatus::Failed => acc.failed += 1,
                ReceiptStatus::Completed => {
                    let calc = &r.calculation;
                    acc.completed += 1;
                    if calc.rebate_applied {
                        acc.rebates_applied += 1;
                    }
                    acc.total_trade_value += calc.trade_value;
                    acc.total_trade_fees += calc.trade_fee;
                    acc.total_commission += calc.commission;
                    acc.total_gst += calc.gst;
                    acc.total_payable += calc.final_payable;
                }
            }
            acc
        })
    }

    /// Total number of receipts folded in.
    #[must_use]
    pub fn count(&self) -> usize {
        self.completed + self.pending + self.failed
    }
}
