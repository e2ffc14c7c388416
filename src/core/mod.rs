//! Aggregates the "business logic" layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod env;
pub mod error;
pub mod glyph;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{PadChars, Palette, RenderOptions, RenderOptionsBuilder};
pub use constants::{DEFAULT_WIDTH, LABEL_GUTTER, VALUE_STRING_OVERHEAD};
pub use data::{Entries, Entry, Magnitude};
pub use env::Probe;
pub use error::{ChartError, ConfigError};
pub use glyph::GlyphProfile;
