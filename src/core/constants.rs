//! A collection of constants.

/// Columns assumed when the terminal size cannot be detected.
pub const DEFAULT_WIDTH: usize = 80;

/// One space between the label column and whatever follows it.
pub const LABEL_GUTTER: usize = 1;

/// Fixed part of a value string: sign, leading digit, decimal point,
/// exponent marker, exponent sign and two exponent digits.
///
/// `-1.20e+01` is 7 + 2 chars long.
pub const VALUE_STRING_OVERHEAD: usize = 7;

/// Digits after the decimal point of the value string.
pub const DEFAULT_SIGNIFICANT_FIGURES: usize = 2;

/// Labels longer than a quarter of the width are truncated.
pub const DEFAULT_TRUNCATE: f64 = 0.25;

/// Largest accepted `truncate`, in label chars.
pub const MAX_TRUNCATE: f64 = 65_535.0;

/// Appended to truncated labels.
pub const ELLIPSIS: char = '…';
