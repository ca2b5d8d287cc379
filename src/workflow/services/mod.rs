//! Service layer orchestrating sheet reads and stage transitions.

mod desk;
mod executor;
mod reader;
mod settings;

pub use desk::{Completion, StageDesk};
pub use executor::{AppliedTransition, TransitionError, TransitionExecutor, TransitionResult};
pub use reader::{BoardError, BoardResult, SheetReader};
pub use settings::DeskSettings;
