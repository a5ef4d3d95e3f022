//! CLI library components for the audit report mapper.

pub mod logging;
pub mod pipeline;
