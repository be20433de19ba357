//! ZONIX trade receipt engine.
//!
//! Computes the fee, commission, GST and rebate breakdown shown on a
//! settled trade's smart receipt, together with the receipt records,
//! formatting, demo data and user settings the receipt screens rely on.

pub mod config;
pub mod error;
pub mod format;
#[cfg(feature = "python")]
mod python;
pub mod receipt;
pub mod settings;

pub use error::{Result, ZonixError};
