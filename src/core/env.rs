//! Environment probe: terminal width, TTY-ness and `NO_COLOR`.

use std::io::{IsTerminal, stdout};

use terminal_size::{Width, terminal_size};

use crate::core::constants::DEFAULT_WIDTH;

/// What the surrounding terminal told us, captured once before rendering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Probe {
    /// Detected terminal columns, `None` when not attached to a terminal.
    pub columns: Option<usize>,
    pub stdout_is_tty: bool,
    /// `NO_COLOR` is set to something non-empty.
    pub no_color: bool,
}

impl Probe {
    #[must_use]
    pub fn detect() -> Self {
        Self {
            columns: terminal_size().map(|(Width(w), _)| usize::from(w)),
            stdout_is_tty: stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }

    /// A fixed probe for piped output; handy in tests and for `--glyphs`
    /// overrides.
    #[must_use]
    pub const fn piped(columns: usize) -> Self {
        Self {
            columns: Some(columns),
            stdout_is_tty: false,
            no_color: false,
        }
    }

    /// Current terminal width (80 column fallback).
    #[inline]
    #[must_use]
    pub fn columns_or_default(&self) -> usize {
        match self.columns {
            Some(c) if c > 0 => c,
            _ => DEFAULT_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_columns_fall_back() {
        let mut p = Probe::piped(0);
        assert_eq!(p.columns_or_default(), DEFAULT_WIDTH);
        p.columns = None;
        assert_eq!(p.columns_or_default(), DEFAULT_WIDTH);
        p.columns = Some(132);
        assert_eq!(p.columns_or_default(), 132);
    }
}
