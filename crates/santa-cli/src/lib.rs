//! CLI library components for the Secret Santa matcher.

pub mod logging;
pub mod pipeline;
pub mod types;
