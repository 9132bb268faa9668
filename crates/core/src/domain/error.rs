use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Network steps of a single report run, in execution order.
/// Validation failures are reported as [`ReportError::Config`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStage {
    ReadingHeader,
    Fetching,
    Appending,
}

impl Display for ReportStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let stage = match self {
            ReportStage::ReadingHeader => "reading header",
            ReportStage::Fetching => "fetching metrics",
            ReportStage::Appending => "appending rows",
        };
        write!(f, "{}", stage)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A required field of the report definition or time window is empty.
    #[error("config error: required field `{field}` is empty")]
    Config { field: &'static str },
    /// A network call, the telemetry response or the sheet append failed.
    #[error("transport error while {stage}")]
    Transport { stage: ReportStage },
}

impl ReportError {
    pub fn config(field: &'static str) -> Self {
        ReportError::Config { field }
    }

    pub fn transport(stage: ReportStage) -> Self {
        ReportError::Transport { stage }
    }
}
