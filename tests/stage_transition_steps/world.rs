//! Shared world state for stage transition BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use repair_desk::{
    config::ConsoleConfig,
    sheet::{adapters::memory::InMemorySheetGateway, domain::RawRow},
    workflow::{
        domain::{FieldName, SheetKind, TaskRecord, row_from_fields, schema_for},
        services::{Completion, DeskSettings, StageDesk, TransitionError},
    },
};
use rstest::fixture;

/// Desk type used by the BDD world.
pub type TestDesk = StageDesk<InMemorySheetGateway, DefaultClock>;

/// Scenario world for stage transition behaviour tests.
pub struct StageTransitionWorld {
    pub gateway: Arc<InMemorySheetGateway>,
    pub settings: Arc<DeskSettings>,
    pub desk: TestDesk,
    pub subject: Option<TaskRecord>,
    pub last_result: Option<Result<Completion, TransitionError>>,
}

impl StageTransitionWorld {
    /// Creates a world over an empty in-memory workbook.
    ///
    /// # Panics
    ///
    /// Panics when the default settings or shipped schemas are invalid.
    #[must_use]
    pub fn new() -> Self {
        let settings = Arc::new(
            DeskSettings::from_config(&ConsoleConfig::default()).expect("default settings"),
        );
        let gateway = Arc::new(InMemorySheetGateway::new());
        for kind in SheetKind::ALL {
            seed(&gateway, &settings, kind, &[]);
        }
        let desk = StageDesk::new(
            Arc::clone(&gateway),
            Arc::new(DefaultClock),
            Arc::clone(&settings),
        )
        .expect("shipped schemas are valid");

        Self {
            gateway,
            settings,
            desk,
            subject: None,
            last_result: None,
        }
    }
}

impl Default for StageTransitionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StageTransitionWorld {
    StageTransitionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Replaces a sheet with its header block followed by `records`.
///
/// # Panics
///
/// Panics when a field does not belong to the sheet's schema.
pub fn seed(
    gateway: &InMemorySheetGateway,
    settings: &DeskSettings,
    kind: SheetKind,
    records: &[Vec<(FieldName, String)>],
) {
    let schema = schema_for(kind);
    let mut rows: Vec<RawRow> = (1..schema.header_rows())
        .map(|_| RawRow::from_texts(["meta"]))
        .collect();
    rows.push(RawRow::from_texts(
        (0..schema.required_width()).map(|column| format!("col {column}")),
    ));
    for values in records {
        rows.push(
            row_from_fields(schema, values)
                .expect("fields belong to the schema")
                .to_raw_row(),
        );
    }
    gateway
        .seed_sheet(settings.sheet(kind), rows)
        .expect("seeding should succeed");
}
