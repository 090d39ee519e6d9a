use chrono::{NaiveDate, NaiveTime};
use derive_more::Display;

/// Validation failures over a supplied punch batch. All of these are
/// local data-quality problems; nothing here is retryable and the
/// engine never repairs input on its own.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineError {
    #[display(fmt = "malformed duration '{}': expected HH:mm", text)]
    MalformedDuration { text: String },

    #[display(fmt = "cannot format negative duration ({} minutes)", minutes)]
    InvalidDuration { minutes: i64 },

    #[display(fmt = "punches for {} are not sorted by time of day (index {})", data, index)]
    UnsortedPunches { data: NaiveDate, index: usize },

    #[display(
        fmt = "open punch sequence on {}: ENTRADA at {} (index {}) has no matching SAIDA",
        data,
        hora,
        index
    )]
    OpenPunchSequence {
        data: NaiveDate,
        index: usize,
        hora: NaiveTime,
    },

    #[display(fmt = "punch direction violation on {} at index {}", data, index)]
    PunchDirectionViolation { data: NaiveDate, index: usize },

    #[display(
        fmt = "day {} belongs to employee '{}' but the timesheet is bound to '{}'",
        data,
        found,
        expected
    )]
    EmployeeMismatch {
        data: NaiveDate,
        expected: String,
        found: String,
    },
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Calendar date the failure refers to, when the variant carries one.
    pub fn data(&self) -> Option<NaiveDate> {
        match self {
            Self::UnsortedPunches { data, .. }
            | Self::OpenPunchSequence { data, .. }
            | Self::PunchDirectionViolation { data, .. }
            | Self::EmployeeMismatch { data, .. } => Some(*data),
            Self::MalformedDuration { .. } | Self::InvalidDuration { .. } => None,
        }
    }

    /// Zero-based index of the offending punch within its day, when known.
    pub fn punch_index(&self) -> Option<usize> {
        match self {
            Self::UnsortedPunches { index, .. }
            | Self::OpenPunchSequence { index, .. }
            | Self::PunchDirectionViolation { index, .. } => Some(*index),
            _ => None,
        }
    }
}
