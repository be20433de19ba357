//! Trade receipt fee calculator.
//!
//! Turns a trade's quantity, unit price and realized profit/loss into a
//! breakdown of trade fee, commission, GST and the final payable amount.
//!
//! Rules (default [`FeeSchedule`]):
//! - flat trade fee of 50
//! - 0.75% commission on profit only
//! - losing (or break-even) trades get a 10% rebate on the trade fee
//! - 18% GST on the trade fee after any rebate

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Flat fee charged on every trade.
pub const BASE_TRADE_FEE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Share of the trade fee waived on losing trades (10%).
pub const LOSS_REBATE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Commission charged on realized profit (0.75%).
pub const COMMISSION_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 4);

/// Goods and services tax applied to the trade fee (18%).
pub const GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Number of fractional digits kept on every monetary output.
const DECIMAL_PLACES: u32 = 2;

/// Reason trade inputs were rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    #[error("quantity must be positive, got {quantity}")]
    InvalidQuantity { quantity: u32 },
    #[error("price per unit must be positive, got {price}")]
    InvalidPrice { price: Decimal },
    /// An intermediate or output amount overflowed, or has too many
    /// integer digits to carry two decimal places.
    #[error("amount out of range for a two decimal money value")]
    AmountOutOfRange,
}

/// Fee/tax breakdown for a single trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "python", pyo3::pyclass(frozen, get_all, from_py_object))]
pub struct ReceiptCalculation {
    pub trade_value: Decimal,
    pub trade_fee: Decimal,
    pub commission: Decimal,
    pub gst: Decimal,
    pub final_payable: Decimal,
    /// True when the trade was not profitable and the fee rebate applied.
    pub rebate_applied: bool,
}

/// Rates used by [`ReceiptCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub base_fee: Decimal,
    pub loss_rebate_rate: Decimal,
    pub commission_rate: Decimal,
    pub gst_rate: Decimal,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            base_fee: BASE_TRADE_FEE,
            loss_rebate_rate: LOSS_REBATE_RATE,
            commission_rate: COMMISSION_RATE,
            gst_rate: GST_RATE,
        }
    }
}

/// Computes receipt breakdowns against a fixed [`FeeSchedule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptCalculator {
    schedule: FeeSchedule,
}

impl ReceiptCalculator {
    /// Creates a calculator for the given schedule.
    #[must_use]
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    /// Computes the fee breakdown for one trade.
    ///
    /// A `profit_loss` of zero counts as a loss and receives the rebate.
    /// The final payable is summed from the unrounded components and
    /// rounded once, like every other output field.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidQuantity`] for a zero quantity
    /// and [`CalculationError::InvalidPrice`] for a price that is zero or
    /// negative. Returns [`CalculationError::AmountOutOfRange`] when an
    /// amount overflows or cannot be held at two decimal places.
    pub fn calculate(
        &self,
        quantity: u32,
        price_per_unit: Decimal,
        profit_loss: Decimal,
    ) -> Result<ReceiptCalculation, CalculationError> {
        if quantity == 0 {
            return Err(CalculationError::InvalidQuantity { quantity });
        }
        if price_per_unit <= Decimal::ZERO {
            return Err(CalculationError::InvalidPrice {
                price: price_per_unit,
            });
        }

        let schedule = &self.schedule;
        let trade_value = Decimal::from(quantity)
            .checked_mul(price_per_unit)
            .ok_or(CalculationError::AmountOutOfRange)?;

        let (trade_fee, commission, rebate_applied) = if profit_loss > Decimal::ZERO {
            let commission = schedule
                .commission_rate
                .checked_mul(profit_loss)
                .ok_or(CalculationError::AmountOutOfRange)?;
            (schedule.base_fee, commission, false)
        } else {
            let rebate = schedule
                .loss_rebate_rate
                .checked_mul(schedule.base_fee)
                .ok_or(CalculationError::AmountOutOfRange)?;
            let fee = schedule
                .base_fee
                .checked_sub(rebate)
                .ok_or(CalculationError::AmountOutOfRange)?;
            (fee, Decimal::ZERO, true)
        };

        let gst = schedule
            .gst_rate
            .checked_mul(trade_fee)
            .ok_or(CalculationError::AmountOutOfRange)?;
        let final_payable = trade_fee
            .checked_add(commission)
            .and_then(|v| v.checked_add(gst))
            .ok_or(CalculationError::AmountOutOfRange)?;

        Ok(ReceiptCalculation {
            trade_value: round_money(trade_value)?,
            trade_fee: round_money(trade_fee)?,
            commission: round_money(commission)?,
            gst: round_money(gst)?,
            final_payable: round_money(final_payable)?,
            rebate_applied,
        })
    }
}

/// Computes a receipt breakdown with the default [`FeeSchedule`].
///
/// # Errors
///
/// See [`ReceiptCalculator::calculate`].
pub fn calculate_receipt(
    quantity: u32,
    price_per_unit: Decimal,
    profit_loss: Decimal,
) -> Result<ReceiptCalculation, CalculationError> {
    ReceiptCalculator::default().calculate(quantity, price_per_unit, profit_loss)
}

/// Rounds half away from zero and pins the scale to exactly two digits.
///
/// `rescale` keeps a lower scale when the mantissa has no room for two
/// fraction digits, so such values are rejected rather than emitted short.
fn round_money(value: Decimal) -> Result<Decimal, CalculationError> {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    if rounded.scale() != DECIMAL_PLACES {
        return Err(CalculationError::AmountOutOfRange);
    }
    Ok(rounded)
}
