//! The bar chart renderer.
//!
//! `Renderer::render` is pure: it turns entries + options into a [`Chart`]
//! of lines and diagnostics. Writing the chart out is a separate step so the
//! caller picks the sink and decides what an overflow means.

use std::{
    fmt,
    io::{self, Write},
};

use tracing::debug;

use crate::{
    core::{
        color::AnsiCode,
        config::{Palette, RenderOptions},
        constants::DEFAULT_WIDTH,
        data::Entries,
        error::ChartError,
    },
    render::{
        bar::{Segments, max_magnitude, raw_length},
        layout::{Layout, label_column},
        value::value_string,
    },
};

/// Where the value string went on one line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Placement {
    Hidden,
    /// Between label and bar.
    Before(String),
    /// Over the start of the bar, inverted; takes its columns from the bar.
    Inside(String),
    /// Trailing the bar, for bars too short to hold it.
    After(String),
}

/// One rendered entry. `Display` gives the styled text.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedLine {
    pub label: String,
    pub placement: Placement,
    pub segments: Segments,
    pub bar: String,
    /// Blank columns after an inside value.
    pub gap: usize,
    pub color: AnsiCode,
    pub invert: AnsiCode,
    pub reset: AnsiCode,
}

impl RenderedLine {
    fn parts(&self) -> (&str, &str, &str) {
        match &self.placement {
            Placement::Hidden => ("", "", ""),
            Placement::Before(v) => (v.as_str(), "", ""),
            Placement::Inside(v) => ("", v.as_str(), ""),
            Placement::After(v) => ("", "", v.as_str()),
        }
    }

    /// The line without any escape sequences.
    #[must_use]
    pub fn plain(&self) -> String {
        let (before, inside, after) = self.parts();
        let mut out = String::with_capacity(self.label.len() + self.bar.len() + 24);
        out.push_str(&self.label);
        out.push(' ');
        if !before.is_empty() {
            out.push_str(before);
            out.push(' ');
        }
        out.push_str(inside);
        if !inside.is_empty() {
            out.extend(std::iter::repeat_n(' ', self.gap));
        }
        out.push_str(&self.bar);
        out.push_str(after);
        out
    }

    /// Width in chars, escape sequences excluded.
    #[must_use]
    pub fn width(&self) -> usize {
        self.plain().chars().count()
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (before, inside, after) = self.parts();
        let Self {
            label,
            bar,
            color,
            invert,
            reset,
            ..
        } = self;
        write!(f, "{color}{label} ")?;
        if !before.is_empty() {
            write!(f, "{before} ")?;
        }
        write!(f, "{invert}{inside}")?;
        if !inside.is_empty() {
            write!(f, "{:1$}", "", self.gap)?;
        }
        write!(f, "{reset}{color}{bar}{after}{reset}")
    }
}

/// Advisory events raised while rendering.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    /// At least one line is wider than the target width.
    Overflow {
        /// Index of the first offending line.
        first_line: usize,
        /// How many lines overflowed.
        lines: usize,
        widest: usize,
        limit: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Overflow {
                first_line,
                lines,
                widest,
                limit,
            } => write!(
                f,
                "unable to fit in the requested width, overflowing: {lines} line(s) from line {} \
                 need up to {widest} of {limit} columns",
                first_line + 1
            ),
        }
    }
}

/// Rendered lines plus whatever went wrong along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub layout: Layout,
    pub lines: Vec<RenderedLine>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Chart {
    #[inline]
    #[must_use]
    pub fn overflowed(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::Overflow { .. }))
    }

    /// All lines without escape sequences, newline-terminated.
    #[must_use]
    pub fn plain(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.plain());
            out.push('\n');
        }
        out
    }

    /// Write every styled line, newline-terminated, then flush.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Immutable options + the width used when none is set.
#[derive(Clone, Debug)]
pub struct Renderer {
    options: RenderOptions,
    terminal_width: usize,
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            terminal_width: DEFAULT_WIDTH,
        }
    }

    /// Width to fall back on when the options leave it unset.
    #[inline]
    #[must_use]
    pub fn terminal_width(mut self, columns: usize) -> Self {
        self.terminal_width = if columns > 0 { columns } else { DEFAULT_WIDTH };
        self
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Lay out `entries` as one line each, in order.
    pub fn render(&self, entries: &Entries) -> Result<Chart, ChartError> {
        let opts = &self.options;
        let base_width = opts.width.unwrap_or(self.terminal_width);

        let (labels, label_width) = label_column(entries.labels(), opts.truncate, base_width)
            .ok_or(ChartError::EmptyEntries)?;
        let layout = Layout::compute(opts, base_width, label_width);
        let max_abs = max_magnitude(entries.values());
        let palette = if opts.glyphs.allows_color() {
            opts.palette
        } else {
            Palette::plain()
        };
        debug!(
            width = layout.width,
            label_width,
            max_bar = layout.max_bar,
            max_abs,
            "chart layout"
        );

        #[allow(clippy::cast_precision_loss)]
        let value_cells = layout.value_width as f64;
        let mut lines = Vec::with_capacity(entries.len());
        let mut overflow: Option<(usize, usize, usize)> = None; // first, count, widest

        for (idx, (entry, label)) in entries.iter().zip(labels).enumerate() {
            let value = entry.value;
            let mut length = raw_length(value, max_abs, layout.max_bar);

            let placement = if opts.show_values {
                let text = value_string(
                    value,
                    opts.significant_figures,
                    layout.value_width,
                    opts.pads.for_value(value),
                );
                if layout.values_before {
                    Placement::Before(text)
                } else if length >= value_cells {
                    length -= value_cells;
                    Placement::Inside(text)
                } else {
                    Placement::After(text)
                }
            } else {
                Placement::Hidden
            };

            let segments = Segments::from_length(length, opts.glyphs.resolution());
            let line = RenderedLine {
                label,
                placement,
                segments,
                bar: segments.draw(opts.glyphs),
                gap: layout.gap,
                // NaN is flagged with the negative color too.
                color: if value >= 0.0 {
                    palette.positive
                } else {
                    palette.negative
                },
                invert: palette.invert,
                reset: palette.reset,
            };

            let width = line.width();
            if width > layout.width {
                let seen = overflow.get_or_insert((idx, 0, 0));
                seen.1 += 1;
                seen.2 = seen.2.max(width);
            }
            lines.push(line);
        }

        let diagnostics = match overflow {
            Some((first_line, lines, widest)) if opts.warn_on_overflow => {
                vec![Diagnostic::Overflow {
                    first_line,
                    lines,
                    widest,
                    limit: layout.width,
                }]
            }
            _ => Vec::new(),
        };

        Ok(Chart {
            layout,
            lines,
            diagnostics,
        })
    }
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;
    use crate::core::glyph::GlyphProfile;

    fn entries(pairs: &[(&str, f64)]) -> Entries {
        Entries::try_from_pairs(pairs.iter().copied()).unwrap()
    }

    fn opts(width: i64, truncate: f64) -> RenderOptions {
        RenderOptions::builder()
            .width(width)
            .truncate(truncate)
            .build()
            .unwrap()
    }

    #[test]
    fn empty_entries_fail() {
        let r = Renderer::new(RenderOptions::default());
        assert!(matches!(
            r.render(&Entries::new()),
            Err(ChartError::EmptyEntries)
        ));
    }

    #[test]
    fn inside_value_is_inverted() {
        let chart = Renderer::new(opts(19, 4.0))
            .render(&entries(&[("pi", 3.14)]))
            .unwrap();
        let line = &chart.lines[0];
        assert_eq!(line.placement, Placement::Inside(" 3.14e+00".into()));
        assert_eq!(line.plain(), "  pi  3.14e+00█████");
        assert_eq!(
            line.to_string(),
            "  pi \x1b[7m 3.14e+00\x1b[0m█████\x1b[0m"
        );
    }

    #[test]
    fn short_bar_puts_value_after() {
        let chart = Renderer::new(opts(19, 4.0))
            .render(&entries(&[("pi", 3.14), ("one", 1.0)]))
            .unwrap();
        let line = &chart.lines[1];
        assert!(matches!(line.placement, Placement::After(_)));
        // 14 / 3.14 = 4.458..: four cells and 4/8
        assert_eq!(line.segments, Segments { full: 4, partial: Some(4) });
        assert_eq!(line.plain(), " one ████▌ 1.00e+00");
        assert!(chart.diagnostics.is_empty());
    }

    #[test]
    fn negative_values_use_negative_color() {
        let chart = Renderer::new(opts(30, 4.0))
            .render(&entries(&[("a", -1.0), ("b", 1.0), ("c", f64::NAN)]))
            .unwrap();
        assert_eq!(chart.lines[0].color, AnsiCode::red());
        assert_eq!(chart.lines[1].color, AnsiCode::none());
        assert_eq!(chart.lines[2].color, AnsiCode::red());
    }

    #[test]
    fn ascii_has_no_escapes_and_a_gap() {
        let o = opts(30, 4.0).ascii();
        let chart = Renderer::new(o).render(&entries(&[("a", 2.0)])).unwrap();
        let line = &chart.lines[0];
        assert_eq!(line.to_string(), line.plain());
        // 30 - 4 - 1 - 1 = 24 cells, 9 taken by the value
        assert_eq!(line.plain(), "   a +2.00e+00 XXXXXXXXXXXXXXX");
        assert_eq!(line.width(), 30);
    }

    #[test]
    fn colors_are_gated_by_profile() {
        let o = RenderOptions {
            glyphs: GlyphProfile::Emoji,
            ..opts(30, 4.0)
        };
        let chart = Renderer::new(o).render(&entries(&[("a", -2.0)])).unwrap();
        assert!(!chart.lines[0].to_string().contains('\x1b'));
    }

    #[test]
    fn overflow_reported_once() {
        let chart = Renderer::new(opts(19, 4.0))
            .render(&entries(&[("one", 1.0), ("two", 2.0), ("pi", 3.14)]))
            .unwrap();
        assert_eq!(chart.diagnostics.len(), 1);
        assert!(chart.overflowed());
        assert!(chart.diagnostics[0].to_string().contains("overflow"));
        let Diagnostic::Overflow {
            first_line, limit, ..
        } = &chart.diagnostics[0];
        assert_eq!(*first_line, 1);
        assert_eq!(*limit, 19);
        // lines are kept whole
        assert!(chart.lines[1].width() > 19);
    }

    #[test]
    fn overflow_can_be_silenced() {
        let o = RenderOptions {
            warn_on_overflow: false,
            ..opts(19, 4.0)
        };
        let chart = Renderer::new(o)
            .render(&entries(&[("one", 1.0), ("two", 2.0), ("pi", 3.14)]))
            .unwrap();
        assert!(chart.diagnostics.is_empty());
    }

    #[test]
    fn huge_label_column_and_precision_render() {
        let o = RenderOptions {
            truncate: 70_000.0,
            significant_figures: 70_000,
            ..opts(80, 4.0)
        };
        let chart = Renderer::new(o).render(&entries(&[("pi", 3.14)])).unwrap();
        assert_eq!(chart.layout.label_width, 70_000);
        assert_eq!(chart.layout.value_width, 70_007);
        // widened to the label column, no room left for a bar
        assert_eq!(chart.layout.max_bar, 0);
        let Placement::After(value) = &chart.lines[0].placement else {
            panic!("value should trail the empty bar");
        };
        assert_eq!(value.chars().count(), 70_007);
        assert!(value.trim_start().starts_with("3.14000"));
        assert_eq!(chart.lines[0].width(), 70_000 + 1 + 70_007);
        assert!(chart.overflowed());
    }

    #[test]
    fn terminal_width_used_when_unset() {
        let chart = Renderer::new(RenderOptions::default())
            .terminal_width(40)
            .render(&entries(&[("a", 1.0)]))
            .unwrap();
        assert_eq!(chart.layout.width, 40);
        assert_eq!(chart.lines[0].width(), 40);
    }

    #[test]
    fn write_to_emits_one_line_per_entry() {
        let chart = Renderer::new(opts(30, 4.0).ascii())
            .render(&entries(&[("a", 1.0), ("b", 2.0)]))
            .unwrap();
        let mut out = Vec::new();
        chart.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, chart.plain());
        assert_eq!(text.lines().count(), 2);
    }
}
