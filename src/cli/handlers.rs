use std::{io::stdout, time::Instant};

use tracing::{debug, warn};

use crate::{
    core::{
        data::{Entries, read_entries_from_path},
        env::Probe,
        error::ChartError,
    },
    render::Renderer,
};

use super::parse::{ChartArgs, CsvArgs, PlotArgs};

pub fn plot(a: PlotArgs) -> Result<(), ChartError> {
    let entries = Entries::try_from_pairs(a.entries.into_iter().map(|e| (e.label, e.value)))?;
    draw(&entries, &a.chart)
}

pub fn csv(a: &CsvArgs) -> Result<(), ChartError> {
    let t_ingest = Instant::now();
    let entries = read_entries_from_path(&a.file)?;
    debug!(
        rows = entries.len(),
        micros = t_ingest.elapsed().as_micros(),
        "ingest"
    );
    draw(&entries, &a.chart)
}

/// Render, print, then report overflow.
fn draw(entries: &Entries, args: &ChartArgs) -> Result<(), ChartError> {
    let probe = Probe::detect();
    let options = args.options(&probe)?;
    debug!(?probe, ?options, "resolved options");

    let t_render = Instant::now();
    let chart = Renderer::new(options)
        .terminal_width(probe.columns_or_default())
        .render(entries)?;
    debug!(
        lines = chart.lines.len(),
        micros = t_render.elapsed().as_micros(),
        "render"
    );

    chart.write_to(stdout().lock())?;

    for d in &chart.diagnostics {
        warn!("{d}");
    }
    match chart.diagnostics.into_iter().next() {
        Some(d) if args.fail_on_overflow => Err(ChartError::Overflow(d)),
        _ => Ok(()),
    }
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    use crate::core::color::{AnsiCode, colorize};

    println!("\nPossible colors (--positive / --negative):");
    println!("{}", colorize(&AnsiCode::red(), "red"));
    println!("{}", colorize(&AnsiCode::green(), "green"));
    println!("{}", colorize(&AnsiCode::yellow(), "yellow"));
    println!("{}", colorize(&AnsiCode::blue(), "blue"));
    println!("{}", colorize(&AnsiCode::magenta(), "magenta"));
    println!("{}", colorize(&AnsiCode::cyan(), "cyan"));
    println!("{}", colorize(&AnsiCode::bold(), "bold"));
    println!("{}", colorize(&AnsiCode::invert(), "invert"));
    println!("none  (no styling)");
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "kwbar";
    println!(
        "
Example invocations
-------------------
• Basic            : {bin} plot one=1 two=2 pi=3.14
• Fixed width      : {bin} plot one=1 two=2 pi=3.14 --width 40 --truncate 4
• Values first     : {bin} plot apples=12 pears=-3 --before
• Non-finite       : {bin} plot ok=1 bad=nan huge=inf
• From a file      : {bin} csv sales.csv
• From a pipe      : printf 'a,1\\nb,2\\n' | {bin} csv -
• Force unicode    : {bin} plot a=1 b=2 --glyphs unicode | less -R
• Hotdogs          : {bin} plot dozen=12 half=6 --glyphs emoji
• Strict width     : {bin} plot a=1 b=2 --width 19 --fail-on-overflow
"
    );
}
