//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{PadChars, Palette, RenderOptions, RenderOptionsBuilder},
    data::{Entries, Entry, Magnitude, read_entries, read_entries_from_path},
    env::Probe,
    error::{ChartError, ConfigError},
    glyph::GlyphProfile,
};

pub use render::{Chart, Diagnostic, Placement, RenderedLine, Renderer};

/// Plot `entries` to stdout with options picked from the environment:
/// ASCII when piped, no negative color under `NO_COLOR`.
///
/// Overflow diagnostics are returned in [`Chart::diagnostics`]. They are also
/// emitted as `tracing` warnings, which only show up when the caller has
/// installed a subscriber.
pub fn plot(entries: &Entries) -> Result<Chart, ChartError> {
    let probe = Probe::detect();
    let chart = Renderer::new(RenderOptions::for_environment(&probe))
        .terminal_width(probe.columns_or_default())
        .render(entries)?;

    chart.write_to(std::io::stdout().lock())?;
    for d in &chart.diagnostics {
        tracing::warn!("{d}");
    }
    Ok(chart)
}
