//! Secret Santa data ingestion.
//!
//! Loads the roster and the previous round's assignments from CSV files in
//! the exchange layout `name, email, secretChildName, secretChildEmail`.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use santa_ingest::{read_history, read_roster};
//!
//! let roster = read_roster(Path::new("employees.csv"))?;
//! let history = read_history(Path::new("SecretSantaAssignments.csv"))?;
//! ```

pub mod csv;
mod error;
mod options;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === Options ===
pub use options::IngestOptions;

// === CSV Reading ===
pub use crate::csv::{HeaderMode, RawRow, read_rows};

// === Loaders ===
pub use records::{
    read_history, read_history_from_reader, read_history_with_options, read_roster,
    read_roster_from_reader, read_roster_with_options,
};
