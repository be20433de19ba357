//! User settings, grouped per domain.
//!
//! Each screen of the settings page owns one typed struct. The
//! [`SettingsStore`] loads them once at startup, hands out reads on demand
//! and writes the file back whenever an update passes validation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::Result;
use crate::error::ZonixError;

/// Shortest allowed idle session timeout, in minutes.
pub const MIN_SESSION_TIMEOUT_MINUTES: u32 = 5;
/// Longest allowed idle session timeout, in minutes.
pub const MAX_SESSION_TIMEOUT_MINUTES: u32 = 120;

/// A settings update that would leave the account in an invalid state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("display name must not be empty")]
    EmptyDisplayName,
    #[error("session timeout must be between 5 and 120 minutes, got {minutes}")]
    SessionTimeoutOutOfRange { minutes: u32 },
    #[error("UPI is the default payment method but no UPI ID is set")]
    MissingUpiId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

/// Second factor used at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoFactorMethod {
    Sms,
    #[default]
    Authenticator,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Upi,
    NetBanking,
    #[default]
    Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub display_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub language: Language,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            display_name: "Demo Trader".to_string(),
            email: None,
            phone: None,
            language: Language::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub two_factor_method: TwoFactorMethod,
    /// Email/SMS alert on every new login.
    pub login_alerts: bool,
    pub session_timeout_minutes: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_enabled: false,
            two_factor_method: TwoFactorMethod::default(),
            login_alerts: true,
            session_timeout_minutes: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSettings {
    pub default_method: PaymentMethod,
    pub upi_id: Option<String>,
    /// Pay receipt amounts automatically at settlement.
    pub auto_settle: bool,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            default_method: PaymentMethod::default(),
            upi_id: None,
            auto_settle: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub price_alerts: bool,
    pub trade_confirmations: bool,
    pub receipt_emails: bool,
    pub newsletter: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            price_alerts: true,
            trade_confirmations: true,
            receipt_emails: true,
            newsletter: false,
        }
    }
}

/// All user settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile: ProfileSettings,
    pub security: SecuritySettings,
    pub payments: PaymentSettings,
    pub notifications: NotificationSettings,
}

impl Settings {
    /// Checks cross-field rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`SettingsError`] found.
    pub fn validate(&self) -> std::result::Result<(), SettingsError> {
        if self.profile.display_name.trim().is_empty() {
            return Err(SettingsError::EmptyDisplayName);
        }

        let minutes = self.security.session_timeout_minutes;
        if !(MIN_SESSION_TIMEOUT_MINUTES..=MAX_SESSION_TIMEOUT_MINUTES).contains(&minutes) {
            return Err(SettingsError::SessionTimeoutOutOfRange { minutes });
        }

        let upi_missing = self
            .payments
            .upi_id
            .as_deref()
            .is_none_or(|id| id.trim().is_empty());
        if self.payments.default_method == PaymentMethod::Upi && upi_missing {
            return Err(SettingsError::MissingUpiId);
        }

        Ok(())
    }
}

/// File-backed owner of the current [`Settings`].
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Loads settings from `path`, falling back to defaults if the file
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ZonixError::Io`] if the file exists but cannot be read,
    /// [`ZonixError::Json`] if it is malformed, and
    /// [`ZonixError::Settings`] if its contents fail validation.
    pub fn init(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let settings = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                ZonixError::Io(format!("failed to read {}: {e}", path.display()))
            })?;
            let settings: Settings = serde_json::from_str(&contents)?;
            settings.validate()?;
            info!(path = %path.display(), "loaded settings");
            settings
        } else {
            debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        };

        Ok(Self { path, settings })
    }

    /// Returns the current settings.
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `change` to a copy of the settings, validates it and persists
    /// it. On any error the in-memory and on-disk settings are left as they
    /// were.
    ///
    /// # Errors
    ///
    /// Returns [`ZonixError::Settings`] if the result fails validation, or
    /// an I/O or JSON error if writing the file fails.
    pub fn update<F>(&mut self, change: F) -> Result<&Settings>
    where
        F: FnOnce(&mut Settings),
    {
        let mut next = self.settings.clone();
        change(&mut next);

        if let Err(e) = next.validate() {
            warn!(error = %e, "rejected settings update");
            return Err(e.into());
        }

        self.persist(&next)?;
        self.settings = next;
        Ok(&self.settings)
    }

    /// Writes to a sibling temp file then renames it over the target.
    fn persist(&self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string_pretty(settings)?;
        let tmp = self.path.with_extension("json.tmp");

        std::fs::write(&tmp, json)
            .map_err(|e| ZonixError::Io(format!("failed to write {}: {e}", tmp.display())))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            ZonixError::Io(format!(
                "failed to move {} to {}: {e}",
                tmp.display(),
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn rejects_blank_display_name() {
        let mut settings = Settings::default();
        settings.profile.display_name = "   ".to_string();
        assert_eq!(settings.validate(), Err(SettingsError::EmptyDisplayName));
    }

    #[test]
    fn rejects_session_timeout_outside_range() {
        let mut settings = Settings::default();
        settings.security.session_timeout_minutes = 4;
        assert_eq!(
            settings.validate(),
            Err(SettingsError::SessionTimeoutOutOfRange { minutes: 4 })
        );

        settings.security.session_timeout_minutes = 121;
        assert!(settings.validate().is_err());

        settings.security.session_timeout_minutes = 120;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn upi_default_needs_upi_id() {
        let mut settings = Settings::default();
        settings.payments.default_method = PaymentMethod::Upi;
        assert_eq!(settings.validate(), Err(SettingsError::MissingUpiId));

        settings.payments.upi_id = Some("asha@okbank".to_string());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{ "security": { "two_factor_enabled": true } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(settings.security.two_factor_enabled);
        assert_eq!(settings.security.session_timeout_minutes, 30);
        assert_eq!(settings.profile, ProfileSettings::default());
    }

    #[test]
    fn enums_use_wire_names() {
        let json = r#"{
            "profile": { "display_name": "Asha", "language": "hindi" },
            "security": { "two_factor_method": "sms" },
            "payments": { "default_method": "net_banking" }
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.profile.language, Language::Hindi);
        assert_eq!(settings.security.two_factor_method, TwoFactorMethod::Sms);
        assert_eq!(settings.payments.default_method, PaymentMethod::NetBanking);
    }
}
