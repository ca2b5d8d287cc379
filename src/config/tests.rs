//! Tests for layered configuration loading.

use super::{ConfigError, ConsoleConfig, StampConfig};
use crate::sheet::domain::ColumnBase;
use crate::workflow::domain::SheetKind;
use figment::Jail;
use rstest::rstest;

fn load_in_jail() -> Result<ConsoleConfig, figment::Error> {
    ConsoleConfig::load().map_err(|err| figment::Error::from(err.to_string()))
}

#[rstest]
fn defaults_match_the_deployed_workbook() {
    let config = ConsoleConfig::default();

    assert_eq!(config.sheets.repair_system, "Repair System");
    assert_eq!(config.sheets.payment_ledger, "Repair FMS Advance Payment");
    assert_eq!(config.access.admin_role, "admin");
    assert_eq!(config.stamps.utc_offset_minutes, 330);
    assert_eq!(config.endpoint.column_base, ColumnBase::One);
    assert_eq!(config.endpoint.timeout_ms, 30_000);
}

#[rstest]
fn missing_script_url_is_a_startup_failure() {
    let result = ConsoleConfig::default().validate();

    assert!(matches!(
        result,
        Err(ConfigError::NotConfigured { ref section }) if section == "endpoint"
    ));
}

#[rstest]
fn toml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "repair-desk.toml",
            r#"
            [endpoint]
            script_url = "https://script.example/exec"
            folder_id = "folder-1"
            column_base = "zero"

            [sheets]
            service = "Service 2025"
            "#,
        )?;

        let config = load_in_jail()?;

        assert_eq!(config.endpoint.script_url, "https://script.example/exec");
        assert_eq!(config.endpoint.folder().as_str(), "folder-1");
        assert_eq!(config.endpoint.column_base, ColumnBase::Zero);
        assert_eq!(config.sheets.service, "Service 2025");
        assert_eq!(config.sheets.repair_system, "Repair System");
        Ok(())
    });
}

#[rstest]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "repair-desk.toml",
            r#"
            [endpoint]
            script_url = "https://script.example/file"
            timeout_ms = 5000
            "#,
        )?;
        jail.set_env("REPAIR_DESK_ENDPOINT__SCRIPT_URL", "https://script.example/env");
        jail.set_env("REPAIR_DESK_STAMPS__UTC_OFFSET_MINUTES", "0");

        let config = load_in_jail()?;

        assert_eq!(config.endpoint.script_url, "https://script.example/env");
        assert_eq!(config.endpoint.timeout_ms, 5000);
        assert_eq!(config.stamps.utc_offset_minutes, 0);
        Ok(())
    });
}

#[rstest]
fn zero_timeout_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("REPAIR_DESK_ENDPOINT__SCRIPT_URL", "https://script.example/exec");
        jail.set_env("REPAIR_DESK_ENDPOINT__TIMEOUT_MS", "0");

        let result = ConsoleConfig::load();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "endpoint.timeout_ms"
        ));
        Ok(())
    });
}

#[rstest]
fn blank_sheet_name_is_rejected() {
    let mut config = ConsoleConfig::default();
    config.endpoint.script_url = "https://script.example/exec".to_owned();
    config.sheets.payment_ledger = "   ".to_owned();

    let result = config.validate();

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref field, .. }) if field == "sheets.payment_ledger"
    ));
}

#[rstest]
#[case(330, 19_800)]
#[case(0, 0)]
#[case(-300, -18_000)]
fn stamp_offset_converts_minutes(#[case] minutes: i32, #[case] seconds: i32) {
    let stamps = StampConfig {
        utc_offset_minutes: minutes,
    };

    let offset = stamps.offset().expect("offset should be valid");

    assert_eq!(offset.local_minus_utc(), seconds);
}

#[rstest]
fn out_of_range_offset_is_rejected() {
    let stamps = StampConfig {
        utc_offset_minutes: 24 * 60,
    };

    assert!(stamps.offset().is_err());
}

#[rstest]
fn sheet_names_resolve_per_kind() {
    let config = ConsoleConfig::default();

    let name = config
        .sheets
        .name_for(SheetKind::PaymentLedger)
        .expect("default name should be valid");

    assert_eq!(name.as_str(), "Repair FMS Advance Payment");
}
