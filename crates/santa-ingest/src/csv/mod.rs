//! CSV reading utilities.

mod header;
mod reader;

pub use header::{HeaderMode, is_header_row};
pub use reader::{COLUMN_COUNT, RawRow, open_file, read_rows};
