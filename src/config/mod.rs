//! Layered console configuration loaded once at startup.
//!
//! Sources, highest priority last:
//!
//! 1. Built-in defaults
//! 2. `repair-desk.toml` in the working directory
//! 3. Environment variables with the `REPAIR_DESK_` prefix
//!
//! Nested sections are separated by `__`, so `REPAIR_DESK_ENDPOINT__SCRIPT_URL`
//! maps to `endpoint.script_url`. The resulting [`ConsoleConfig`] is passed by
//! reference into the gateway and services; nothing reads the environment
//! after startup.

mod error;

pub use error::ConfigError;

use chrono::FixedOffset;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::sheet::domain::{ColumnBase, FolderId, SheetName};
use crate::workflow::domain::SheetKind;

/// File merged over the defaults when present.
pub const CONFIG_FILE: &str = "repair-desk.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "REPAIR_DESK_";

const SECONDS_PER_MINUTE: i32 = 60;

/// Root configuration object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Remote endpoint settings.
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Sheet names per backing sheet.
    #[serde(default)]
    pub sheets: SheetsConfig,
    /// Access-control settings.
    #[serde(default)]
    pub access: AccessConfig,
    /// Completion stamp settings.
    #[serde(default)]
    pub stamps: StampConfig,
}

/// Remote spreadsheet endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Deployed script URL serving reads and mutations.
    #[serde(default)]
    pub script_url: String,
    /// Folder receiving uploaded attachments.
    #[serde(default)]
    pub folder_id: String,
    /// Bound on every remote call, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Column numbering expected by the update action.
    #[serde(default)]
    pub column_base: ColumnBase,
}

const fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            script_url: String::new(),
            folder_id: String::new(),
            timeout_ms: default_timeout_ms(),
            column_base: ColumnBase::default(),
        }
    }
}

impl EndpointConfig {
    /// Returns `true` when a script URL has been supplied.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.script_url.trim().is_empty()
    }

    /// Returns the per-call bound as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the upload folder.
    #[must_use]
    pub fn folder(&self) -> FolderId {
        FolderId::new(self.folder_id.as_str())
    }
}

/// Names of the backing sheets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SheetsConfig {
    /// Repair pipeline sheet.
    #[serde(default = "default_repair_system")]
    pub repair_system: String,
    /// Service ticket sheet.
    #[serde(default = "default_service")]
    pub service: String,
    /// Payment ledger sheet.
    #[serde(default = "default_payment_ledger")]
    pub payment_ledger: String,
}

fn default_repair_system() -> String {
    "Repair System".to_owned()
}

fn default_service() -> String {
    "Service".to_owned()
}

fn default_payment_ledger() -> String {
    "Repair FMS Advance Payment".to_owned()
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            repair_system: default_repair_system(),
            service: default_service(),
            payment_ledger: default_payment_ledger(),
        }
    }
}

impl SheetsConfig {
    /// Resolves the configured sheet name for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the configured name is
    /// blank.
    pub fn name_for(&self, kind: SheetKind) -> Result<SheetName, ConfigError> {
        let (field, raw) = match kind {
            SheetKind::RepairSystem => ("sheets.repair_system", &self.repair_system),
            SheetKind::Service => ("sheets.service", &self.service),
            SheetKind::PaymentLedger => ("sheets.payment_ledger", &self.payment_ledger),
        };
        SheetName::new(raw.as_str()).map_err(|err| ConfigError::invalid(field, err.to_string()))
    }
}

/// Access-control settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccessConfig {
    /// Role that sees every record and opens every page.
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
}

fn default_admin_role() -> String {
    "admin".to_owned()
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            admin_role: default_admin_role(),
        }
    }
}

/// Completion stamp settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StampConfig {
    /// Offset applied to the clock before formatting stamps.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

const fn default_utc_offset_minutes() -> i32 {
    330
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

impl StampConfig {
    /// Returns the configured offset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the offset lies outside
    /// ±24 hours.
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ConfigError::invalid(
                    "stamps.utc_offset_minutes",
                    format!("{} is not a valid UTC offset", self.utc_offset_minutes),
                )
            })
    }
}

impl ConsoleConfig {
    /// Loads configuration from defaults, the TOML file and the environment.
    ///
    /// Does not read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed, or
    /// any error raised by [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!(error = %err, "no .env file loaded");
        }
        Self::load()
    }

    /// Builds the provider chain without extracting it.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks startup preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no script URL is set, or
    /// [`ConfigError::InvalidValue`] for a zero timeout, a blank sheet or
    /// admin role name, or an out-of-range stamp offset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.endpoint.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "endpoint".to_owned(),
            });
        }
        if self.endpoint.timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "endpoint.timeout_ms",
                "must be greater than zero",
            ));
        }
        for kind in SheetKind::ALL {
            self.sheets.name_for(kind)?;
        }
        if self.access.admin_role.trim().is_empty() {
            return Err(ConfigError::invalid("access.admin_role", "must not be empty"));
        }
        self.stamps.offset()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
