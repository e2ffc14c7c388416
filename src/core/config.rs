//! Render options + fluent builder + the ASCII / emoji presets.

use crate::core::{
    color::AnsiCode,
    constants::{DEFAULT_SIGNIFICANT_FIGURES, DEFAULT_TRUNCATE, MAX_TRUNCATE},
    env::Probe,
    error::ConfigError,
    glyph::GlyphProfile,
};

/// Fill characters for the left side of a value string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PadChars {
    pub finite: char,
    pub non_finite: char,
}

impl PadChars {
    #[inline]
    #[must_use]
    pub fn for_value(self, value: f64) -> char {
        if value.is_finite() {
            self.finite
        } else {
            self.non_finite
        }
    }
}

impl Default for PadChars {
    fn default() -> Self {
        GlyphProfile::Unicode.default_pads()
    }
}

/// Style tokens for sign and for values drawn inside a bar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Palette {
    pub positive: AnsiCode,
    pub negative: AnsiCode,
    pub invert: AnsiCode,
    pub reset: AnsiCode,
}

impl Palette {
    /// Every token empty.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            positive: AnsiCode::none(),
            negative: AnsiCode::none(),
            invert: AnsiCode::none(),
            reset: AnsiCode::none(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            positive: AnsiCode::none(),
            negative: AnsiCode::red(),
            invert: AnsiCode::invert(),
            reset: AnsiCode::reset(),
        }
    }
}

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// `None` means the detected terminal width.
    pub width: Option<usize>,
    /// `<= 1`: fraction of the width; `> 1`: absolute label length.
    pub truncate: f64,
    pub significant_figures: usize,
    pub show_values: bool,
    pub value_before_bar: bool,
    pub warn_on_overflow: bool,
    pub glyphs: GlyphProfile,
    pub palette: Palette,
    pub pads: PadChars,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: None,
            truncate: DEFAULT_TRUNCATE,
            significant_figures: DEFAULT_SIGNIFICANT_FIGURES,
            show_values: true,
            value_before_bar: false,
            warn_on_overflow: true,
            glyphs: GlyphProfile::Unicode,
            palette: Palette::default(),
            pads: PadChars::default(),
        }
    }
}

impl RenderOptions {
    #[inline]
    #[must_use]
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    /// Defaults adjusted for where output is going: no negative color under
    /// `NO_COLOR`, ASCII when stdout is not a terminal.
    #[must_use]
    pub fn for_environment(probe: &Probe) -> Self {
        let mut opts = Self::default();
        if probe.no_color {
            opts.palette.negative = AnsiCode::none();
        }
        if probe.stdout_is_tty {
            opts
        } else {
            opts.ascii()
        }
    }

    /// Single `X` fill, `+`/`X` value padding, no escape sequences.
    #[must_use]
    pub fn ascii(self) -> Self {
        Self {
            glyphs: GlyphProfile::Ascii,
            pads: GlyphProfile::Ascii.default_pads(),
            palette: Palette::plain(),
            ..self
        }
    }

    /// Hotdogs. Values are hidden and, unless a width was set, only half the
    /// terminal is claimed since every hotdog spans two columns.
    #[must_use]
    pub fn emoji(self, columns: usize) -> Self {
        let glyphs = GlyphProfile::Emoji;
        Self {
            width: self.width.or(Some(columns / glyphs.column_span())),
            glyphs,
            pads: glyphs.default_pads(),
            palette: Palette::plain(),
            show_values: false,
            ..self
        }
    }
}

/// Fluent builder, validated on `build`.
#[derive(Debug, Default)]
pub struct RenderOptionsBuilder {
    opts: RenderOptions,
}

impl RenderOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set, e.g. one from
    /// [`RenderOptions::for_environment`].
    #[must_use]
    pub fn from_options(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Target width; zero or negative uses the terminal width.
    #[inline]
    #[must_use]
    pub fn width(mut self, w: i64) -> Self {
        self.opts.width = usize::try_from(w).ok().filter(|&w| w > 0);
        self
    }
    #[inline]
    #[must_use]
    pub fn truncate(mut self, t: f64) -> Self {
        self.opts.truncate = t;
        self
    }
    #[inline]
    #[must_use]
    pub fn significant_figures(mut self, sf: usize) -> Self {
        self.opts.significant_figures = sf;
        self
    }
    #[inline]
    #[must_use]
    pub fn show_values(mut self, on: bool) -> Self {
        self.opts.show_values = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn value_before_bar(mut self, on: bool) -> Self {
        self.opts.value_before_bar = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn warn_on_overflow(mut self, on: bool) -> Self {
        self.opts.warn_on_overflow = on;
        self
    }
    /// Switch glyphs only; see [`RenderOptions::ascii`] for the full preset.
    #[inline]
    #[must_use]
    pub fn glyphs(mut self, g: GlyphProfile) -> Self {
        self.opts.glyphs = g;
        self
    }
    #[inline]
    #[must_use]
    pub fn positive_color(mut self, c: AnsiCode) -> Self {
        self.opts.palette.positive = c;
        self
    }
    #[inline]
    #[must_use]
    pub fn negative_color(mut self, c: AnsiCode) -> Self {
        self.opts.palette.negative = c;
        self
    }
    #[inline]
    #[must_use]
    pub fn palette(mut self, p: Palette) -> Self {
        self.opts.palette = p;
        self
    }
    #[inline]
    #[must_use]
    pub fn pads(mut self, finite: char, non_finite: char) -> Self {
        self.opts.pads = PadChars { finite, non_finite };
        self
    }

    pub fn build(self) -> Result<RenderOptions, ConfigError> {
        let t = self.opts.truncate;
        if !t.is_finite() || t <= 0.0 || t > MAX_TRUNCATE {
            return Err(ConfigError::InvalidTruncate(t));
        }
        Ok(self.opts)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<RenderOptionsBuilder> for Result<RenderOptions, ConfigError> {
    fn from(b: RenderOptionsBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_maps_non_positive_width_to_terminal() {
        let o = RenderOptions::builder().width(-3).build().unwrap();
        assert_eq!(o.width, None);
        let o = RenderOptions::builder().width(0).build().unwrap();
        assert_eq!(o.width, None);
        let o = RenderOptions::builder().width(40).build().unwrap();
        assert_eq!(o.width, Some(40));
    }

    #[test]
    fn builder_rejects_bad_truncate() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e300, MAX_TRUNCATE + 1.0] {
            assert!(matches!(
                RenderOptions::builder().truncate(t).build(),
                Err(ConfigError::InvalidTruncate(_))
            ));
        }
    }

    #[test]
    fn builder_caps_truncate() {
        let o = RenderOptions::builder().truncate(70_000.0);
        assert!(o.build().is_err());
        let o = RenderOptions::builder().truncate(MAX_TRUNCATE).build().unwrap();
        assert_eq!(o.truncate, MAX_TRUNCATE);
    }

    #[test]
    fn ascii_preset_drops_color() {
        let o = RenderOptions::default().ascii();
        assert_eq!(o.glyphs, GlyphProfile::Ascii);
        assert_eq!(o.palette, Palette::plain());
        assert_eq!(o.pads.for_value(1.0), '+');
        assert_eq!(o.pads.for_value(f64::NAN), 'X');
        assert!(o.show_values);
    }

    #[test]
    fn emoji_preset_halves_detected_width_only() {
        let o = RenderOptions::default().emoji(81);
        assert_eq!(o.width, Some(40));
        assert!(!o.show_values);

        let fixed = RenderOptions::builder().width(23).build().unwrap().emoji(81);
        assert_eq!(fixed.width, Some(23));
    }

    #[test]
    fn environment_defaults() {
        let mut probe = Probe::piped(80);
        assert_eq!(
            RenderOptions::for_environment(&probe).glyphs,
            GlyphProfile::Ascii
        );

        probe.stdout_is_tty = true;
        probe.no_color = true;
        let o = RenderOptions::for_environment(&probe);
        assert_eq!(o.glyphs, GlyphProfile::Unicode);
        assert!(o.palette.negative.is_empty());
        assert_eq!(o.palette.invert, AnsiCode::invert());
    }
}
