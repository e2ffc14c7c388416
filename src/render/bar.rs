//! Value to bar length, with sub-character resolution.
//!
//! A bar is a run of full glyphs followed by at most one partial glyph. The
//! partial index is `round(frac * R)` (ties to even), 1-indexed into the
//! profile, so a remainder close enough to a whole cell becomes one more
//! full glyph instead of a partial.

use crate::core::{data::Magnitude, glyph::GlyphProfile};

/// Largest `|value|`, or 0 when there is none. NaN has no order and is
/// skipped; an infinity makes the scale infinite, which empties every
/// finite bar.
pub fn max_magnitude(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .map(f64::abs)
        .fold(0.0, f64::max)
}

/// Unrounded bar length in glyph cells.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn raw_length(value: f64, max_abs: f64, max_bar: usize) -> f64 {
    let max_bar = max_bar as f64;
    match Magnitude::of(value) {
        // 0 / 0: everything is zero, draw nothing.
        Magnitude::Finite(_) if max_abs == 0.0 => 0.0,
        Magnitude::Finite(v) => (v.abs() / max_abs * max_bar).min(max_bar),
        Magnitude::PositiveInfinity => max_bar,
        Magnitude::NegativeInfinity | Magnitude::NotANumber => 0.0,
    }
}

/// Whole cells plus the 1-indexed partial glyph (if any).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Segments {
    pub full: usize,
    pub partial: Option<usize>,
}

impl Segments {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_length(length: f64, resolution: usize) -> Self {
        let length = length.max(0.0);
        let whole = length.floor();
        #[allow(clippy::cast_precision_loss)]
        let index = ((length - whole) * resolution as f64).round_ties_even() as usize;
        Self {
            full: whole as usize,
            partial: (index > 0).then_some(index),
        }
    }

    /// Glyph cells drawn, the partial one included.
    #[inline]
    #[must_use]
    pub fn cells(self) -> usize {
        self.full + usize::from(self.partial.is_some())
    }

    #[must_use]
    pub fn draw(self, glyphs: GlyphProfile) -> String {
        let mut bar = String::with_capacity(self.cells() * 4);
        bar.extend(std::iter::repeat_n(glyphs.full(), self.full));
        if let Some(c) = self.partial.and_then(|i| glyphs.partial(i)) {
            bar.push(c);
        }
        bar
    }
}
