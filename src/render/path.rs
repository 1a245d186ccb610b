//! Typed path commands.
//!
//! Geometry is produced as an ordered command list. Turning commands into
//! SVG `d` syntax happens in [`super::svg`], which keeps the construction
//! code independent of the output format.

use glam::DVec2;

/// One drawing command of a planar path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    /// Start a new contour at the point.
    MoveTo(DVec2),
    /// Elliptical arc from the current point to `end`. The ellipse is
    /// axis-aligned; `large_arc` and `sweep` follow the SVG arc flags.
    ArcTo {
        radii: DVec2,
        large_arc: bool,
        sweep: bool,
        end: DVec2,
    },
    /// Straight segment to the point.
    LineTo(DVec2),
    /// Close the current contour.
    Close,
}

/// An ordered sequence of drawing commands, possibly spanning several
/// contours. Under even-odd filling a nested second contour becomes a
/// hole, which is how the frame band is painted as one region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, point: DVec2) -> Self {
        self.cmds.push(PathCmd::MoveTo(point));
        self
    }

    /// Minor-arc, positive-sweep elliptical arc, the only form a window
    /// boundary needs: with y growing downward it bulges toward the top.
    pub fn arc_to(mut self, radii: DVec2, end: DVec2) -> Self {
        self.cmds.push(PathCmd::ArcTo {
            radii,
            large_arc: false,
            sweep: true,
            end,
        });
        self
    }

    pub fn line_to(mut self, point: DVec2) -> Self {
        self.cmds.push(PathCmd::LineTo(point));
        self
    }

    pub fn close(mut self) -> Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    /// Append every command of `other` as further contours of this path.
    pub fn extend(mut self, other: Path) -> Self {
        self.cmds.extend(other.cmds);
        self
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }
}
