//! Resolved runtime settings shared by the workflow services.

use crate::config::{ConfigError, ConsoleConfig};
use crate::sheet::domain::{FolderId, SheetName};
use crate::sheet::ports::{SheetGatewayError, SheetGatewayResult};
use crate::workflow::domain::SheetKind;
use chrono::FixedOffset;
use std::future::Future;
use std::time::Duration;

/// Settings derived once from [`ConsoleConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskSettings {
    repair_system: SheetName,
    service: SheetName,
    payment_ledger: SheetName,
    folder: FolderId,
    timeout_ms: u64,
    offset: FixedOffset,
    admin_role: String,
}

impl DeskSettings {
    /// Resolves sheet names, stamp offset and timeout from `config`.
    ///
    /// The endpoint URL is not required here; adapters check it themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a blank sheet name, a zero
    /// timeout or an out-of-range offset.
    pub fn from_config(config: &ConsoleConfig) -> Result<Self, ConfigError> {
        if config.endpoint.timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "endpoint.timeout_ms",
                "must be greater than zero",
            ));
        }
        Ok(Self {
            repair_system: config.sheets.name_for(SheetKind::RepairSystem)?,
            service: config.sheets.name_for(SheetKind::Service)?,
            payment_ledger: config.sheets.name_for(SheetKind::PaymentLedger)?,
            folder: config.endpoint.folder(),
            timeout_ms: config.endpoint.timeout_ms,
            offset: config.stamps.offset()?,
            admin_role: config.access.admin_role.trim().to_owned(),
        })
    }

    /// Returns the configured name of `kind`.
    #[must_use]
    pub const fn sheet(&self, kind: SheetKind) -> &SheetName {
        match kind {
            SheetKind::RepairSystem => &self.repair_system,
            SheetKind::Service => &self.service,
            SheetKind::PaymentLedger => &self.payment_ledger,
        }
    }

    /// Returns the upload folder.
    #[must_use]
    pub const fn folder(&self) -> &FolderId {
        &self.folder
    }

    /// Returns the per-call bound.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the stamp offset.
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the role that bypasses ownership filtering.
    #[must_use]
    pub fn admin_role(&self) -> &str {
        &self.admin_role
    }

    /// Awaits `call`, failing with [`SheetGatewayError::Timeout`] once the
    /// configured bound elapses.
    pub(crate) async fn bounded<T>(
        &self,
        operation: &str,
        call: impl Future<Output = SheetGatewayResult<T>>,
    ) -> SheetGatewayResult<T> {
        tokio::time::timeout(self.timeout(), call)
            .await
            .unwrap_or_else(|_| {
                Err(SheetGatewayError::Timeout {
                    operation: operation.to_owned(),
                    timeout_ms: self.timeout_ms,
                })
            })
    }
}
