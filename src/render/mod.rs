pub mod bar;
pub mod chart;
pub mod layout;
pub mod value;

pub use bar::Segments;
pub use chart::{Chart, Diagnostic, Placement, RenderedLine, Renderer};
pub use layout::Layout;
