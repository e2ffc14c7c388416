use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::{
    color::AnsiCode,
    config::{RenderOptions, RenderOptionsBuilder},
    constants::{DEFAULT_SIGNIFICANT_FIGURES, DEFAULT_TRUNCATE},
    data::Entry,
    env::Probe,
    error::ChartError,
};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "kwbar",
    version,
    about = "Keyword bar charts on stdout, respecting NO_COLOR and TTY"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot LABEL=VALUE pairs
    Plot(PlotArgs),
    /// Plot `label,value` rows from a file
    Csv(CsvArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Which glyphs to draw bars with.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Glyphs {
    /// Unicode blocks on a terminal, ASCII when piped
    #[default]
    Auto,
    Unicode,
    Ascii,
    /// Hotdogs, two columns each
    Emoji,
}

/// Layout and style flags shared by every plotting command.
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Chart width in columns (0 = terminal width)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub width: i64,

    /// Truncate labels after this fraction of the width (<= 1) or this many chars (> 1)
    #[arg(short, long, default_value_t = DEFAULT_TRUNCATE)]
    pub truncate: f64,

    /// Digits after the decimal point of the value strings
    #[arg(long = "sf", default_value_t = DEFAULT_SIGNIFICANT_FIGURES)]
    pub significant_figures: usize,

    /// Hide the value strings
    #[arg(long)]
    pub no_values: bool,

    /// Print values between label and bar instead of inside/after the bar
    #[arg(long)]
    pub before: bool,

    /// Do not warn when a line overflows the width
    #[arg(long)]
    pub no_warn: bool,

    /// Exit with an error if a line overflows the width
    #[arg(long, conflicts_with = "no_warn")]
    pub fail_on_overflow: bool,

    #[arg(long, value_enum, default_value_t = Glyphs::Auto)]
    pub glyphs: Glyphs,

    /// Color for non-negative values (name, `#RRGGBB` or `none`)
    #[arg(long)]
    pub positive: Option<String>,

    /// Color for negative values (name, `#RRGGBB` or `none`)
    #[arg(long)]
    pub negative: Option<String>,

    /// Emit layout and timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

impl ChartArgs {
    /// Resolve flags against the environment into render options.
    pub fn options(&self, probe: &Probe) -> Result<RenderOptions, ChartError> {
        let columns = probe.columns_or_default();
        let base = match self.glyphs {
            Glyphs::Auto => RenderOptions::for_environment(probe),
            Glyphs::Unicode => RenderOptions::for_environment(&Probe {
                stdout_is_tty: true,
                ..*probe
            }),
            Glyphs::Ascii => RenderOptions::default().ascii(),
            Glyphs::Emoji => RenderOptions::default(),
        };

        let mut b = RenderOptionsBuilder::from_options(base)
            .width(self.width)
            .truncate(self.truncate)
            .significant_figures(self.significant_figures)
            .show_values(!self.no_values)
            .value_before_bar(self.before)
            .warn_on_overflow(!self.no_warn);
        if let Some(c) = &self.positive {
            b = b.positive_color(AnsiCode::from_name(c)?);
        }
        if let Some(c) = &self.negative {
            b = b.negative_color(AnsiCode::from_name(c)?);
        }
        let opts = b.build()?;

        Ok(match self.glyphs {
            Glyphs::Emoji => opts.emoji(columns),
            _ => opts,
        })
    }
}

/// `kwbar plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// Entries as LABEL=VALUE (nan, inf and -inf are accepted)
    #[arg(value_name = "LABEL=VALUE", required = true)]
    pub entries: Vec<Entry>,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// `kwbar csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// File of `label,value` rows (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[command(flatten)]
    pub chart: ChartArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::glyph::GlyphProfile;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn plot_takes_pairs_and_flags() {
        let cli = parse(&[
            "kwbar", "plot", "one=1", "pi=3.14", "--width", "40", "-t", "4", "--before",
        ]);
        let Command::Plot(a) = cli.cmd else {
            panic!("expected plot");
        };
        assert_eq!(a.entries.len(), 2);
        assert_eq!(a.entries[1].label, "pi");
        assert_eq!(a.chart.width, 40);
        assert!(a.chart.before);

        let o = a.chart.options(&Probe::piped(100)).unwrap();
        assert_eq!(o.width, Some(40));
        assert!(o.value_before_bar);
        // piped, so ASCII
        assert_eq!(o.glyphs, GlyphProfile::Ascii);
    }

    #[test]
    fn bad_pair_is_a_usage_error() {
        assert!(Cli::try_parse_from(["kwbar", "plot", "oops"]).is_err());
        assert!(Cli::try_parse_from(["kwbar", "plot"]).is_err());
    }

    #[test]
    fn glyph_overrides() {
        let Command::Plot(a) =
            parse(&["kwbar", "plot", "a=1", "--glyphs", "unicode", "--negative", "bold"]).cmd
        else {
            panic!("expected plot");
        };
        let o = a.chart.options(&Probe::piped(100)).unwrap();
        assert_eq!(o.glyphs, GlyphProfile::Unicode);
        assert_eq!(o.palette.negative, AnsiCode::bold());

        let Command::Plot(a) = parse(&["kwbar", "plot", "a=1", "--glyphs", "emoji"]).cmd else {
            panic!("expected plot");
        };
        let o = a.chart.options(&Probe::piped(100)).unwrap();
        assert_eq!(o.glyphs, GlyphProfile::Emoji);
        assert_eq!(o.width, Some(50));
        assert!(!o.show_values);
    }

    #[test]
    fn bad_color_and_truncate_are_reported() {
        let Command::Plot(a) = parse(&["kwbar", "plot", "a=1", "--positive", "mauve"]).cmd else {
            panic!("expected plot");
        };
        assert!(matches!(
            a.chart.options(&Probe::piped(80)),
            Err(ChartError::Color(_))
        ));

        let Command::Plot(a) = parse(&["kwbar", "plot", "a=1", "-t", "0"]).cmd else {
            panic!("expected plot");
        };
        assert!(matches!(
            a.chart.options(&Probe::piped(80)),
            Err(ChartError::Config(_))
        ));
    }

    #[test]
    fn csv_defaults_to_stdin() {
        let Command::Csv(a) = parse(&["kwbar", "csv"]).cmd else {
            panic!("expected csv");
        };
        assert_eq!(a.file, "-");
        assert_eq!(a.chart.glyphs, Glyphs::Auto);
    }
}
