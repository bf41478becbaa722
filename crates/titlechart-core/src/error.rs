// File: crates/titlechart-core/src/error.rs
// Summary: Error types for layout and title configuration.

use thiserror::Error;

use crate::surface::ElementId;
use crate::types::Insets;

/// Errors reported by the layout pipeline and configuration parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A location string that is not one of the four edges.
    #[error("unrecognized location '{0}', expected top, right, bottom or left")]
    InvalidTitleLocation(String),

    /// Font shorthand that does not start with a pixel size.
    #[error("invalid font '{0}', expected e.g. '12px Helvetica, sans-serif'")]
    InvalidFont(String),

    /// Insets leave no positive plot area.
    #[error("insets {insets:?} leave no room in a {width}x{height} chart")]
    Infeasible { width: f64, height: f64, insets: Insets },

    /// The drawing surface does not know this element.
    #[error("drawing surface has no element {0:?}")]
    MissingElement(ElementId),
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
