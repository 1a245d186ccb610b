//! Window geometry: aperture, frame, and bar construction, plus the SVG
//! document assembly.
//!
//! Everything here is recomputed per generation call from one spec and
//! owned by the call; nothing is cached or mutated afterwards.

pub mod arch;
pub mod bars;
pub mod frame;
pub mod path;
pub mod svg;

use glam::DVec2;

use crate::errors::LayoutError;
use crate::log::debug;
use crate::spec::WindowSpec;

use self::path::Path;

/// The glazing region inside the frame band: the area eligible for glass
/// and the clip boundary for bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aperture {
    /// Top-left corner of the inset bounding box.
    pub origin: DVec2,
    /// Extents of the inset bounding box.
    pub size: DVec2,
    /// Rise of the inner arch above its springline; 0 for a flat top.
    pub arch_rise: f64,
}

impl Aperture {
    /// Inset the outer silhouette by the frame band on all sides. The
    /// band erodes the arch rise by the same amount it erodes the
    /// extents, clamped at a flat top.
    pub fn from_spec(spec: &WindowSpec) -> Self {
        let inset = spec.frame_width;
        Self {
            origin: DVec2::splat(inset),
            size: DVec2::new(
                (spec.width - 2.0 * inset).max(0.0),
                (spec.height - 2.0 * inset).max(0.0),
            ),
            arch_rise: if spec.arched() {
                (spec.arch_height - inset).max(0.0)
            } else {
                0.0
            },
        }
    }

    /// y of the inner springline, where the arch meets the straight jambs.
    pub fn springline(&self) -> f64 {
        self.origin.y + self.arch_rise
    }

    /// y of the aperture's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.y
    }

    /// Boundary path: arch-capped while any rise survives the frame
    /// inset, a plain rectangle otherwise.
    pub fn boundary(&self) -> Path {
        arch::aperture_boundary(self)
    }
}

/// Which way a sash bar runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// An axis-aligned sash bar rectangle in its unclipped full-span form:
/// vertical bars run the full outer height, horizontal bars the full
/// outer width. The aperture clip trims them at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub origin: DVec2,
    pub size: DVec2,
    pub orientation: Orientation,
}

/// Every geometric layer of one elevation, ready for document assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowGeometry {
    /// Outer silhouette extents.
    pub size: DVec2,
    pub aperture: Aperture,
    /// Frame band as a compound even-odd path.
    pub frame: Path,
    /// Vertical bars first, then horizontal, in layout order.
    pub bars: Vec<Bar>,
}

impl WindowGeometry {
    /// Build all layers for a validated spec: aperture, compound frame,
    /// then the bar layout (the only stage that can still fail).
    pub fn build(spec: &WindowSpec) -> Result<Self, LayoutError> {
        let aperture = Aperture::from_spec(spec);
        let frame = frame::compound_frame(spec, &aperture);
        let mut all_bars = bars::vertical_bars(spec, &aperture);
        all_bars.extend(bars::horizontal_bars(spec, &aperture)?);
        debug!(
            bar_count = all_bars.len(),
            arch_rise = aperture.arch_rise,
            "window geometry built"
        );
        Ok(Self {
            size: DVec2::new(spec.width, spec.height),
            aperture,
            frame,
            bars: all_bars,
        })
    }
}
