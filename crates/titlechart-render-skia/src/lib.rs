// File: crates/titlechart-render-skia/src/lib.rs
// Summary: Skia renderer crate. Hosts the CPU raster drawing surface and text shaping.

pub mod surface;
pub mod text;
pub mod theme;

pub use surface::{RenderOptions, SkiaSurface};
pub use text::TextShaper;
pub use theme::Theme;
