//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::{
    core::{color::ColorError, constants::MAX_TRUNCATE, data::ParseEntryError},
    render::Diagnostic,
};

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `truncate` must be a finite number above zero and at most
    /// [`MAX_TRUNCATE`](crate::core::constants::MAX_TRUNCATE).
    InvalidTruncate(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTruncate(t) => {
                write!(
                    f,
                    "truncate must be a finite number in (0, {MAX_TRUNCATE}], got {t}"
                )
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
    Parse(ParseEntryError),
    Color(ColorError),
    Config(ConfigError),
    /// Nothing to plot.
    EmptyEntries,
    DuplicateLabel(String),
    /// Raised only when the caller asked to fail on overflow.
    Overflow(Diagnostic),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "{e}"),
            ChartError::Parse(e) => write!(f, "{e}"),
            ChartError::Color(e) => write!(f, "{e}"),
            ChartError::Config(e) => write!(f, "{e}"),
            ChartError::EmptyEntries => f.write_str("no entries to plot"),
            ChartError::DuplicateLabel(l) => write!(f, "duplicate label `{l}`"),
            ChartError::Overflow(d) => write!(f, "{d}"),
        }
    }
}
impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChartError::Io(e) => Some(e),
            ChartError::Parse(e) => Some(e),
            ChartError::Color(e) => Some(e),
            ChartError::Config(e) => Some(e),
            _ => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseEntryError> for ChartError {
    fn from(e: ParseEntryError) -> Self {
        Self::Parse(e)
    }
}
impl From<ColorError> for ChartError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for ChartError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
