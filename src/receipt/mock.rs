//! Synthetic receipt history for demo screens.
//!
//! Every generated receipt is settled through the real calculator, so the
//! stored breakdown always matches its own trade inputs.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use tracing::debug;

use super::calculator::{CalculationError, ReceiptCalculator};
use super::id::generate_receipt_id_with;
use super::model::{Receipt, ReceiptOwner, ReceiptStatus, Token, TradeSettlement, TradeType};

/// Tokens the generator picks from.
pub const MOCK_TOKENS: [Token; 8] = [
    Token { name: "Bitcoin", symbol: "BTC" },
    Token { name: "Ethereum", symbol: "ETH" },
    Token { name: "Solana", symbol: "SOL" },
    Token { name: "Polygon", symbol: "MATIC" },
    Token { name: "Cardano", symbol: "ADA" },
    Token { name: "Ripple", symbol: "XRP" },
    Token { name: "Dogecoin", symbol: "DOGE" },
    Token { name: "Chainlink", symbol: "LINK" },
];

const MAX_QUANTITY: u32 = 500;
/// Unit price bounds in paise (10.00 ..= 5000.00).
const PRICE_RANGE_PAISE: (i64, i64) = (1_000, 500_000);
/// Profit/loss bounds in paise (-5000.00 ..= 5000.00).
const PNL_RANGE_PAISE: (i64, i64) = (-500_000, 500_000);
/// How far back generated timestamps may reach.
const HISTORY_WINDOW_SECS: i64 = 30 * 24 * 60 * 60;

/// Generates `count` receipts for `owner`, newest first.
///
/// # Errors
///
/// Only fails if the calculator rejects a generated trade, which the
/// generator's input ranges rule out.
pub fn generate_mock_receipts(
    count: usize,
    owner: &ReceiptOwner,
) -> Result<Vec<Receipt>, CalculationError> {
    generate_mock_receipts_with(&mut rand::thread_rng(), Utc::now(), count, owner)
}

/// Generates `count` receipts using the given random source and clock.
///
/// # Errors
///
/// See [`generate_mock_receipts`].
pub fn generate_mock_receipts_with<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
    owner: &ReceiptOwner,
) -> Result<Vec<Receipt>, CalculationError> {
    let calculator = ReceiptCalculator::default();
    let mut receipts = Vec::with_capacity(count);

    for n in 0..count {
        let token = MOCK_TOKENS.choose(rng).copied().unwrap_or(MOCK_TOKENS[0]);
        let timestamp = now - Duration::seconds(rng.gen_range(0..HISTORY_WINDOW_SECS));
        let tpe = if rng.gen_bool(0.5) {
            TradeType::Buy
        } else {
            TradeType::Sell
        };

        let trade = TradeSettlement {
            id: format!("rcpt_{:04}", n + 1),
            receipt_id: generate_receipt_id_with(rng, timestamp),
            timestamp,
            tpe,
            token_name: token.name.to_string(),
            token_symbol: token.symbol.to_string(),
            quantity: rng.gen_range(1..=MAX_QUANTITY),
            price_per_unit: Decimal::new(
                rng.gen_range(PRICE_RANGE_PAISE.0..=PRICE_RANGE_PAISE.1),
                2,
            ),
            profit_loss: Decimal::new(rng.gen_range(PNL_RANGE_PAISE.0..=PNL_RANGE_PAISE.1), 2),
            status: random_status(rng),
        };

        receipts.push(Receipt::settle(&calculator, owner, trade)?);
    }

    receipts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    debug!(count = receipts.len(), user = %owner.user_id, "generated mock receipts");

    Ok(receipts)
}

/// Mostly completed, with the occasional pending or failed trade.
fn random_status<R: Rng + ?Sized>(rng: &mut R) -> ReceiptStatus {
    match rng.gen_range(0..10) {
        0 => ReceiptStatus::Pending,
        1 => ReceiptStatus::Failed,
        _ => ReceiptStatus::Completed,
    }
}
