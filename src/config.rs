//! Application configuration loaded from environment variables.
//!
//! - `ZONIX_USE_MOCK_DATA`: serve generated receipts (`true`/`false`,
//!   `1`/`0`; default `true`). There is no live backend yet.
//! - `ZONIX_MOCK_RECEIPT_COUNT`: number of receipts to generate (default 25)
//! - `ZONIX_USER_ID` / `ZONIX_USER_NAME`: account shown on receipts
//! - `ZONIX_SETTINGS_PATH`: settings file (default `zonix-settings.json`)

use std::path::PathBuf;

use crate::ZonixError;
use crate::receipt::ReceiptOwner;

const DEFAULT_MOCK_RECEIPT_COUNT: usize = 25;
const DEFAULT_USER_ID: &str = "usr_demo_001";
const DEFAULT_USER_NAME: &str = "Demo Trader";
const DEFAULT_SETTINGS_PATH: &str = "zonix-settings.json";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub receipts: ReceiptsConfig,
    pub settings_path: PathBuf,
}

/// Receipt history configuration.
#[derive(Debug)]
pub struct ReceiptsConfig {
    pub use_mock_data: bool,
    pub mock_receipt_count: usize,
    pub user_id: String,
    pub user_name: String,
}

impl ReceiptsConfig {
    /// Account the configured receipts belong to.
    pub fn owner(&self) -> ReceiptOwner {
        ReceiptOwner {
            user_id: self.user_id.clone(),
            user_name: self.user_name.clone(),
        }
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`ZonixError::Config`] if `ZONIX_USE_MOCK_DATA` is not a
/// boolean or `ZONIX_MOCK_RECEIPT_COUNT` is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let use_mock_data = match non_empty_var("ZONIX_USE_MOCK_DATA") {
        Some(raw) => parse_bool("ZONIX_USE_MOCK_DATA", &raw)?,
        None => true,
    };

    let mock_receipt_count = match non_empty_var("ZONIX_MOCK_RECEIPT_COUNT") {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(ZonixError::Config(format!(
                    "ZONIX_MOCK_RECEIPT_COUNT must be a positive integer, got {raw:?}"
                )));
            }
        },
        None => DEFAULT_MOCK_RECEIPT_COUNT,
    };

    let user_id = non_empty_var("ZONIX_USER_ID").unwrap_or_else(|| DEFAULT_USER_ID.to_string());
    let user_name =
        non_empty_var("ZONIX_USER_NAME").unwrap_or_else(|| DEFAULT_USER_NAME.to_string());
    let settings_path = non_empty_var("ZONIX_SETTINGS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

    Ok(AppConfig {
        receipts: ReceiptsConfig {
            use_mock_data,
            mock_receipt_count,
            user_id,
            user_name,
        },
        settings_path,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn parse_bool(name: &str, raw: &str) -> crate::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ZonixError::Config(format!(
            "{name} must be true/false or 1/0, got {raw:?}"
        ))),
    }
}
