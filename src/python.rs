//! PyO3 Python module definition.
//!
//! Exposes the receipt calculator and rupee formatter so Python tooling
//! can price trades with the same rules as the app.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rust_decimal::Decimal;

use crate::receipt::calculator::{self, ReceiptCalculation};

/// Computes the fee breakdown for one trade.
///
/// Raises `ValueError` for a zero quantity or a non-positive price.
#[pyfunction]
fn calculate_receipt(
    quantity: u32,
    price_per_unit: Decimal,
    profit_loss: Decimal,
) -> PyResult<ReceiptCalculation> {
    calculator::calculate_receipt(quantity, price_per_unit, profit_loss)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Formats an amount as Indian Rupees.
#[pyfunction]
fn format_inr(amount: Decimal) -> String {
    crate::format::format_inr(amount)
}

#[pymodule]
fn zonix(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ReceiptCalculation>()?;
    m.add_function(wrap_pyfunction!(calculate_receipt, m)?)?;
    m.add_function(wrap_pyfunction!(format_inr, m)?)?;
    Ok(())
}
