//! Header row detection.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::reader::RawRow;

/// How the first row of a file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Skip the first row when it looks like column names.
    #[default]
    Auto,
    /// Always skip the first row.
    Present,
    /// The first row is data.
    Absent,
}

impl HeaderMode {
    /// Whether `first` should be skipped under this mode.
    pub fn skips(self, first: &RawRow) -> bool {
        match self {
            Self::Auto => {
                let header = is_header_row(first);
                if !header && first.cell(1).is_some_and(|email| !email.contains('@')) {
                    warn!(
                        line = first.line,
                        "first row kept as data but its email column has no '@'; pass --header present if it is a header"
                    );
                }
                header
            }
            Self::Present => true,
            Self::Absent => false,
        }
    }
}

/// Accepted names per column, compared ignoring ASCII case.
const COLUMN_NAMES: [&[&str]; 4] = [
    &["name"],
    &["email", "e-mail"],
    &["secretchildname"],
    &["secretchildemail"],
];

/// Returns true if the row reads like the exchange column headers.
///
/// Any column holding one of its known names is enough, so a file with a
/// custom first column such as `Full Name` is still detected by its other
/// columns.
pub fn is_header_row(row: &RawRow) -> bool {
    COLUMN_NAMES.iter().enumerate().any(|(index, names)| {
        row.cell(index)
            .is_some_and(|value| names.iter().any(|name| value.eq_ignore_ascii_case(name)))
    })
}
