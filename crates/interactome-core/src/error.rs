//! Error taxonomy for the analysis pipeline.
//!
//! Two layers, following the split between machine-readable codes and
//! typed errors:
//!
//! - [`ErrorCode`]: stable `E####` identifiers with a short message and
//!   an optional remediation hint, for agent/tool consumption.
//! - [`CoreError`]: the typed error returned at library seams. Every
//!   variant maps to exactly one [`ErrorCode`].
//!
//! Note that "no interactions survived filtering" is deliberately *not*
//! here — it is a valid terminal outcome modeled by
//! [`crate::filter::FilterOutcome::Empty`], not a failure.

use std::fmt;
use std::io;

/// Machine-readable error codes for agent-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnsupportedInputShape,
    MalformedRecord,
    InputRead,
    ConfigParseError,
    UnknownLabel,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnsupportedInputShape => "E1001",
            Self::MalformedRecord => "E1002",
            Self::InputRead => "E1003",
            Self::ConfigParseError => "E1004",
            Self::UnknownLabel => "E2001",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnsupportedInputShape => "Could not identify two endpoint columns",
            Self::MalformedRecord => "Malformed input row",
            Self::InputRead => "Input file read error",
            Self::ConfigParseError => "Config file parse error",
            Self::UnknownLabel => "Label not present in the graph",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::UnsupportedInputShape => Some(
                "Name the endpoint columns explicitly with --col-a/--col-b, or use headers containing 'protein' or 'node'.",
            ),
            Self::MalformedRecord => {
                Some("Fix the row, or rerun with --on-malformed skip to drop bad rows.")
            }
            Self::InputRead => Some("Check the path exists and is a readable .tsv or .csv file."),
            Self::ConfigParseError => Some("Fix syntax in the TOML config file and retry."),
            Self::UnknownLabel => Some("Run `ppi neighbors <FILE>` to list the labels in the graph."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors surfaced by the core pipeline.
///
/// These are structural: bad input shape, bad rows, unreadable files.
/// Nothing here is retryable — the input is static and recomputation
/// would fail identically.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Fewer than two endpoint columns could be identified in the input.
    #[error("could not identify two endpoint columns (found: {found:?})")]
    UnsupportedInputShape {
        /// Candidate headers that were considered, for diagnostics.
        found: Vec<String>,
    },

    /// A single row failed to parse under the fail-fast record policy.
    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord {
        /// 1-based data-row number (header row excluded).
        row: usize,
        /// What was wrong: missing endpoint, non-numeric score.
        reason: String,
    },

    /// I/O error reading the input table.
    #[error("input read error: {0}")]
    InputRead(#[from] io::Error),

    /// The TOML config file failed to parse.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A label was requested that does not exist in the built graph.
    #[error("label {0:?} not present in the graph")]
    UnknownLabel(String),
}

impl CoreError {
    /// The machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedInputShape { .. } => ErrorCode::UnsupportedInputShape,
            Self::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            Self::InputRead(_) => ErrorCode::InputRead,
            Self::ConfigParse(_) => ErrorCode::ConfigParseError,
            Self::UnknownLabel(_) => ErrorCode::UnknownLabel,
        }
    }

    /// Remediation hint, falling back to the generic internal hint.
    #[must_use]
    pub fn suggestion(&self) -> String {
        self.error_code()
            .hint()
            .unwrap_or("No suggestion available.")
            .to_string()
    }
}
