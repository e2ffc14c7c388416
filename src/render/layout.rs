//! Label truncation and the per-call layout constants.
//!
//! Everything here is computed once per render call, before the first line
//! is built, so every bar starts in the same column.

use crate::core::{
    config::RenderOptions,
    constants::{ELLIPSIS, LABEL_GUTTER, VALUE_STRING_OVERHEAD},
};

/// Longest label kept intact for a given width.
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn truncate_threshold(truncate: f64, width: usize) -> usize {
    if truncate <= 1.0 {
        (width as f64 * truncate).floor() as usize
    } else {
        truncate.floor() as usize
    }
}

/// Shorten `label` to `threshold` chars (last one an ellipsis), or
/// right-align it in a field of `pad_to` chars when it already fits.
#[must_use]
pub fn truncate_label(label: &str, threshold: usize, pad_to: usize) -> String {
    if label.chars().count() <= threshold {
        right_align(label, pad_to)
    } else {
        let mut out: String = label.chars().take(threshold.saturating_sub(1)).collect();
        out.push(ELLIPSIS);
        out
    }
}

/// Truncate every label, then right-align all of them to the widest result.
///
/// Returns `None` for an empty label set.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn label_column<'a>(
    labels: impl IntoIterator<Item = &'a str>,
    truncate: f64,
    width: usize,
) -> Option<(Vec<String>, usize)> {
    let threshold = truncate_threshold(truncate, width);
    let pad_to = truncate.floor().max(0.0) as usize;
    let labels: Vec<String> = labels
        .into_iter()
        .map(|l| truncate_label(l, threshold, pad_to))
        .collect();
    let column = labels.iter().map(|l| l.chars().count()).max()?;
    let labels = labels.iter().map(|l| right_align(l, column)).collect();
    Some((labels, column))
}

/// Left-pad with spaces to `width` chars. Any width works, unlike a runtime
/// format width.
fn right_align(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    out.push_str(text);
    out
}

/// Column budget shared by every line of one chart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Layout {
    /// Target width after widening; lines wider than this overflow.
    pub width: usize,
    pub label_width: usize,
    pub value_width: usize,
    /// Blank columns after an inside value.
    pub gap: usize,
    /// Values sit between label and bar, with their space reserved.
    pub values_before: bool,
    pub max_bar: usize,
}

impl Layout {
    /// `base_width` is the requested (or detected) width before widening.
    #[must_use]
    pub fn compute(opts: &RenderOptions, base_width: usize, label_width: usize) -> Self {
        let value_width = VALUE_STRING_OVERHEAD + opts.significant_figures;
        let values_before = opts.show_values && opts.value_before_bar;
        // Only a value drawn inside the bar needs the gap after it.
        let gap = if opts.show_values && !values_before {
            opts.glyphs.value_gap()
        } else {
            0
        };
        let before = if values_before {
            value_width + LABEL_GUTTER
        } else {
            0
        };

        // Widen, never narrow, so the fixed columns always fit.
        let fixed = label_width + LABEL_GUTTER + gap + before;
        let width = base_width.max(fixed);

        Self {
            width,
            label_width,
            value_width,
            gap,
            values_before,
            max_bar: width - fixed,
        }
    }
}
