// File: crates/titlechart-core/src/lib.rs
// Summary: Core library entry point; exports the chart layout API (insets, axes, title placement).

pub mod chart;
pub mod axis;
pub mod legend;
pub mod title;
pub mod font;
pub mod insets;
pub mod layout;
pub mod surface;
pub mod headless;
pub mod types;
pub mod geometry;
pub mod error;

pub use chart::Chart;
pub use axis::{Axis, AxisPlacement};
pub use legend::Legend;
pub use title::{compute_title_attributes, TitleAttributes, TitleConfig, TitleSprite};
pub use font::Font;
pub use insets::{compute_chart_area, compute_insets};
pub use layout::{Convergence, Layout, LayoutContext, LayoutOptions, Stage};
pub use surface::{DrawingSurface, ElementId, Rotation, TextAttributes};
pub use headless::HeadlessSurface;
pub use types::{Insets, Size};
pub use geometry::{BoundingBox, ChartBBox, Edge};
pub use error::{LayoutError, LayoutResult};
