//! Character sets used to draw bars.
//!
//! A profile is an ordered run of `R` fill characters. The last one is the
//! full glyph, the ones before it are partial fills `1/R ..= (R-1)/R`, so
//! the length of the run is also the sub-character resolution.

use crate::core::config::PadChars;

/// Unicode block elements U+258F..U+2588, one eighth at a time.
const BLOCKS: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
/// Plain ASCII, no partial fills.
const ASCII: [char; 1] = ['X'];
/// Eighths of a hotdog.
const HOTDOGS: [char; 8] = ['⅛', '¼', '⅜', '½', '⅝', '¾', '⅞', '🌭'];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GlyphProfile {
    #[default]
    Unicode,
    Ascii,
    Emoji,
}

impl GlyphProfile {
    #[inline]
    #[must_use]
    pub const fn glyphs(self) -> &'static [char] {
        match self {
            Self::Unicode => &BLOCKS,
            Self::Ascii => &ASCII,
            Self::Emoji => &HOTDOGS,
        }
    }

    /// Discrete fill steps per glyph position.
    #[inline]
    #[must_use]
    pub const fn resolution(self) -> usize {
        self.glyphs().len()
    }

    #[inline]
    #[must_use]
    pub const fn full(self) -> char {
        let g = self.glyphs();
        g[g.len() - 1]
    }

    /// Glyph for `index` eighths (or `index / R` in general), 1-indexed.
    ///
    /// `index == resolution()` is the full glyph; anything above saturates.
    #[inline]
    #[must_use]
    pub fn partial(self, index: usize) -> Option<char> {
        match index {
            0 => None,
            i => Some(self.glyphs()[i.min(self.resolution()) - 1]),
        }
    }

    /// Only block elements are drawn with escape sequences.
    #[inline]
    #[must_use]
    pub const fn allows_color(self) -> bool {
        matches!(self, Self::Unicode)
    }

    /// Blank columns after a value drawn inside the bar. Without colors an
    /// inside value would otherwise run straight into the `X` fill.
    #[inline]
    #[must_use]
    pub const fn value_gap(self) -> usize {
        match self {
            Self::Ascii => 1,
            Self::Unicode | Self::Emoji => 0,
        }
    }

    /// Terminal columns taken by one fill glyph.
    #[inline]
    #[must_use]
    pub const fn column_span(self) -> usize {
        match self {
            Self::Emoji => 2,
            Self::Unicode | Self::Ascii => 1,
        }
    }

    #[must_use]
    pub const fn default_pads(self) -> PadChars {
        match self {
            Self::Ascii => PadChars {
                finite: '+',
                non_finite: 'X',
            },
            Self::Unicode | Self::Emoji => PadChars {
                finite: ' ',
                non_finite: ' ',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolutions() {
        assert_eq!(GlyphProfile::Unicode.resolution(), 8);
        assert_eq!(GlyphProfile::Ascii.resolution(), 1);
        assert_eq!(GlyphProfile::Emoji.resolution(), 8);
    }

    #[test]
    fn partial_is_one_indexed() {
        let p = GlyphProfile::Emoji;
        assert_eq!(p.partial(0), None);
        assert_eq!(p.partial(1), Some('⅛'));
        assert_eq!(p.partial(7), Some('⅞'));
        assert_eq!(p.partial(8), Some('🌭'));
        assert_eq!(GlyphProfile::Ascii.partial(1), Some('X'));
    }

    #[test]
    fn only_unicode_is_colored() {
        assert!(GlyphProfile::Unicode.allows_color());
        assert!(!GlyphProfile::Ascii.allows_color());
        assert!(!GlyphProfile::Emoji.allows_color());
    }
}
