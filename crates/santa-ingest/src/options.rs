use serde::{Deserialize, Serialize};

use crate::csv::HeaderMode;

/// Options for loading roster and history files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    pub header: HeaderMode,
}

impl IngestOptions {
    #[must_use]
    pub fn with_header(mut self, header: HeaderMode) -> Self {
        self.header = header;
        self
    }
}
