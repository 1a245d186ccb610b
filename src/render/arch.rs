//! Outer silhouette and aperture boundary paths.
//!
//! Arched boundaries start at the left springline, cross the crown with a
//! single elliptical arc, then run the straight jambs and the sill.
//! Flat-topped boundaries take a separate plain-rectangle code path; a
//! zero-rise arc is never emitted.

use glam::{DVec2, dvec2};

use crate::spec::WindowSpec;

use super::Aperture;
use super::path::Path;

/// Outer silhouette of the window.
pub fn outer_boundary(spec: &WindowSpec) -> Path {
    if spec.arched() {
        arched(DVec2::ZERO, dvec2(spec.width, spec.height), spec.arch_height)
    } else {
        rectangle(DVec2::ZERO, dvec2(spec.width, spec.height))
    }
}

/// Boundary of the glazing aperture. The frame band erodes the arch rise
/// along with the extents, so a narrow arch under a wide frame falls back
/// to the flat-topped contour.
pub fn aperture_boundary(aperture: &Aperture) -> Path {
    if aperture.arch_rise > 0.0 {
        arched(aperture.origin, aperture.size, aperture.arch_rise)
    } else {
        rectangle(aperture.origin, aperture.size)
    }
}

/// Arch-capped contour: elliptical arc across the top, straight edges
/// elsewhere. `rise` is the arc's vertical extent above the springline.
fn arched(origin: DVec2, size: DVec2, rise: f64) -> Path {
    let springline = origin.y + rise;
    let right = origin.x + size.x;
    let bottom = origin.y + size.y;
    Path::new()
        .move_to(dvec2(origin.x, springline))
        .arc_to(dvec2(size.x / 2.0, rise), dvec2(right, springline))
        .line_to(dvec2(right, bottom))
        .line_to(dvec2(origin.x, bottom))
        .close()
}

/// Plain rectangular contour, clockwise from the top-left corner.
fn rectangle(origin: DVec2, size: DVec2) -> Path {
    let right = origin.x + size.x;
    let bottom = origin.y + size.y;
    Path::new()
        .move_to(origin)
        .line_to(dvec2(right, origin.y))
        .line_to(dvec2(right, bottom))
        .line_to(dvec2(origin.x, bottom))
        .close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::path::PathCmd;

    fn arch_spec() -> WindowSpec {
        let mut spec = WindowSpec::new(1000.0, 1400.0, 70.0);
        spec.arch_height = 250.0;
        spec
    }

    #[test]
    fn arched_outer_boundary_starts_on_the_springline() {
        let path = outer_boundary(&arch_spec());
        assert_eq!(
            path.commands(),
            &[
                PathCmd::MoveTo(dvec2(0.0, 250.0)),
                PathCmd::ArcTo {
                    radii: dvec2(500.0, 250.0),
                    large_arc: false,
                    sweep: true,
                    end: dvec2(1000.0, 250.0),
                },
                PathCmd::LineTo(dvec2(1000.0, 1400.0)),
                PathCmd::LineTo(dvec2(0.0, 1400.0)),
                PathCmd::Close,
            ]
        );
    }

    #[test]
    fn rectangular_outer_boundary_has_no_arc() {
        let path = outer_boundary(&WindowSpec::new(800.0, 1200.0, 60.0));
        assert_eq!(
            path.commands(),
            &[
                PathCmd::MoveTo(dvec2(0.0, 0.0)),
                PathCmd::LineTo(dvec2(800.0, 0.0)),
                PathCmd::LineTo(dvec2(800.0, 1200.0)),
                PathCmd::LineTo(dvec2(0.0, 1200.0)),
                PathCmd::Close,
            ]
        );
    }

    #[test]
    fn aperture_boundary_insets_arc_and_extents() {
        let aperture = Aperture::from_spec(&arch_spec());
        let path = aperture_boundary(&aperture);
        assert_eq!(
            path.commands()[0],
            PathCmd::MoveTo(dvec2(70.0, 70.0 + 180.0))
        );
        assert_eq!(
            path.commands()[1],
            PathCmd::ArcTo {
                radii: dvec2(430.0, 180.0),
                large_arc: false,
                sweep: true,
                end: dvec2(930.0, 250.0),
            }
        );
    }

    #[test]
    fn frame_wider_than_rise_degrades_to_flat_top() {
        let mut spec = WindowSpec::new(1000.0, 1400.0, 70.0);
        spec.arch_height = 50.0; // rise entirely consumed by the frame band
        let aperture = Aperture::from_spec(&spec);
        assert_eq!(aperture.arch_rise, 0.0);
        let path = aperture_boundary(&aperture);
        assert!(
            path.commands()
                .iter()
                .all(|cmd| !matches!(cmd, PathCmd::ArcTo { .. })),
            "flat-topped aperture must not contain an arc"
        );
    }
}
