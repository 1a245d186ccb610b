//! The frame band as one compound path.
//!
//! The outer contour is followed directly by the aperture contour in a
//! single path filled with the even-odd rule, so the aperture becomes a
//! hole and the band paints as one region. Two stacked opaque fills would
//! need exact arc alignment to avoid a seam along the curve.

use crate::spec::WindowSpec;

use super::Aperture;
use super::arch;
use super::path::Path;

/// Outer silhouette minus the aperture, for even-odd filling.
pub fn compound_frame(spec: &WindowSpec, aperture: &Aperture) -> Path {
    arch::outer_boundary(spec).extend(arch::aperture_boundary(aperture))
}
