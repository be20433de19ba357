//! Receipt records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::{CalculationError, ReceiptCalculation, ReceiptCalculator};

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeType {
    Buy,
    Sell,
}

impl TradeType {
    /// Returns the wire-format name (`"BUY"` / `"SELL"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Buy => "BUY",
            TradeType::Sell => "SELL",
        }
    }
}

/// Settlement status of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Completed,
    Pending,
    Failed,
}

impl ReceiptStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiptStatus::Completed => "completed",
            ReceiptStatus::Pending => "pending",
            ReceiptStatus::Failed => "failed",
        }
    }
}

/// Account that owns a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptOwner {
    pub user_id: String,
    pub user_name: String,
}

/// Asset traded on a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Everything needed to settle one trade into a [`Receipt`].
#[derive(Debug, Clone)]
pub struct TradeSettlement {
    pub id: String,
    pub receipt_id: String,
    pub timestamp: DateTime<Utc>,
    pub tpe: TradeType,
    pub token_name: String,
    pub token_symbol: String,
    pub quantity: u32,
    pub price_per_unit: Decimal,
    pub profit_loss: Decimal,
    pub status: ReceiptStatus,
}

/// Historical record of a settled trade with its fee breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: String,
    pub receipt_id: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub user_name: String,
    /// Trade direction (wire name: `"type"`).
    #[serde(rename = "type")]
    pub tpe: TradeType,
    pub token_name: String,
    pub token_symbol: String,
    pub quantity: u32,
    pub price_per_unit: Decimal,
    pub profit_loss: Decimal,
    #[serde(flatten)]
    pub calculation: ReceiptCalculation,
    pub status: ReceiptStatus,
}

impl Receipt {
    /// Settles a trade into a receipt, running the calculator on its inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`CalculationError`] if the quantity or price is rejected.
    pub fn settle(
        calculator: &ReceiptCalculator,
        owner: &ReceiptOwner,
        trade: TradeSettlement,
    ) -> Result<Self, CalculationError> {
        let calculation =
            calculator.calculate(trade.quantity, trade.price_per_unit, trade.profit_loss)?;

        Ok(Self {
            id: trade.id,
            receipt_id: trade.receipt_id,
            timestamp: trade.timestamp,
            user_id: owner.user_id.clone(),
            user_name: owner.user_name.clone(),
            tpe: trade.tpe,
            token_name: trade.token_name,
            token_symbol: trade.token_symbol,
            quantity: trade.quantity,
            price_per_unit: trade.price_per_unit,
            profit_loss: trade.profit_loss,
            calculation,
            status: trade.status,
        })
    }

    /// Re-runs the calculator and checks the stored breakdown still matches.
    ///
    /// Receipts read back from storage may have been edited by hand; this
    /// is the check for that. Inputs the calculator rejects, including
    /// amounts out of range, make the receipt inconsistent.
    #[must_use]
    pub fn is_consistent(&self, calculator: &ReceiptCalculator) -> bool {
        calculator
            .calculate(self.quantity, self.price_per_unit, self.profit_loss)
            .is_ok_and(|calc| calc == self.calculation)
    }

    /// Returns true if the trade closed at a profit.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.profit_loss > Decimal::ZERO
    }
}
