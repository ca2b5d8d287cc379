//! Domain values exchanged with the spreadsheet API.
//!
//! Cells arrive as loosely typed JSON scalars and leave as plain text. Row
//! positions and column indices are kept as distinct newtypes so a read-side
//! index can never be passed where a write-side position is expected.

mod cell;
mod error;
mod ids;
mod upload;

pub use cell::{CellValue, RawRow, RowData};
pub use error::SheetDomainError;
pub use ids::{CellAddress, ColumnBase, ColumnIndex, FolderId, RowPosition, SheetName};
pub use upload::{FileUpload, UploadedFileUrl};
