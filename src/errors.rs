//! Error types for spec validation and bar layout.
//!
//! Every failure is a precondition failure: it is raised before any output
//! is produced, and the only fix is to change the spec.

use miette::Diagnostic;
use thiserror::Error;

/// A single `WindowSpec` field violated one of its constraints.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("window dimensions must be positive, got {width}mm x {height}mm")]
    #[diagnostic(code(fenestra::spec::invalid_dimensions))]
    InvalidDimensions { width: f64, height: f64 },

    #[error("frame width {frame_width}mm leaves no glazing aperture")]
    #[diagnostic(
        code(fenestra::spec::invalid_frame_width),
        help("the frame insets both sides: 2 * frame_width must stay below {limit}mm")
    )]
    InvalidFrameWidth { frame_width: f64, limit: f64 },

    #[error("arch height {arch_height}mm must lie within 0..={height}mm")]
    #[diagnostic(code(fenestra::spec::invalid_arch_height))]
    InvalidArchHeight { arch_height: f64, height: f64 },

    #[error("sash bar width {width}mm must be non-negative")]
    #[diagnostic(code(fenestra::spec::invalid_bar_width))]
    InvalidBarWidth { width: f64 },
}

/// Bar layout failed even though every field passed validation on its own.
///
/// Kept apart from [`SpecError`]: it depends on the interaction of several
/// fields, not on one field being out of range.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(
        "{count} horizontal bars of {bar_width}mm do not fit in the {span}mm between the chord bar and the aperture bottom"
    )]
    #[diagnostic(
        code(fenestra::layout::insufficient_space),
        help("reduce the bar count or width, or increase the window height")
    )]
    InsufficientSpace {
        span: f64,
        count: u32,
        bar_width: f64,
        /// The gap the equal-gap division came out with (negative).
        gap: f64,
    },
}

/// Any failure of a single generation call.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Layout(#[from] LayoutError),
}
