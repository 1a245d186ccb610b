//! Parametric window elevations as layered SVG.
//!
//! A [`WindowSpec`] describes one window in millimeters: outer size, frame
//! band, sash bar counts and widths, and an optional elliptical arch.
//! [`render`] turns it into a complete SVG document with a glass fill, an
//! even-odd compound frame whose glazing aperture is a real hole, and sash
//! bars clipped to the aperture, curved boundary included.
//!
//! ```
//! use fenestra::WindowSpec;
//!
//! let mut spec = WindowSpec::new(800.0, 1200.0, 60.0);
//! spec.vertical_bars = 2;
//! spec.horizontal_bars = 1;
//! spec.sash_bar_width = 30.0;
//!
//! let document = fenestra::render(&spec)?;
//! assert!(document.starts_with("<svg"));
//! # Ok::<(), fenestra::Error>(())
//! ```

pub mod errors;
mod log;
pub mod render;
pub mod spec;

pub use errors::{Error, LayoutError, SpecError};
pub use spec::{HorizontalMode, WindowSpec};

use render::WindowGeometry;

/// Render one window elevation to an SVG document string.
///
/// The call is pure and stateless: a given spec always yields the
/// identical document, and nothing survives the call. Invalid specs are
/// rejected before any geometry is built; chord-mode layouts that cannot
/// fit their bars fail instead of producing partial output.
pub fn render(spec: &WindowSpec) -> Result<String, Error> {
    spec.validate()?;
    let geometry = WindowGeometry::build(spec)?;
    Ok(render::svg::document(spec, &geometry).to_string())
}
