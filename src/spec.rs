//! The window specification: the single input to a generation call.

use serde::{Deserialize, Serialize};

use crate::errors::SpecError;

fn default_frame_color() -> String {
    "#c7c7c7".to_string()
}

fn default_glass_color() -> String {
    "#e6f2ff".to_string()
}

/// Horizontal bar distribution policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalMode {
    /// Bars equally spaced by centerlines across the aperture height.
    #[default]
    Even,
    /// A chord bar sits on the arch's inner springline and the remaining
    /// bars spread with equal gaps between it and the aperture bottom.
    /// Without an arch this coincides with `Even` and adds no chord bar.
    FromChord,
}

/// Parametric description of one window elevation.
///
/// All lengths are millimeters; the coordinate origin is the top-left
/// corner of the outer silhouette with y growing downward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Overall outer width.
    pub width: f64,
    /// Overall outer height, arch included.
    pub height: f64,
    /// Uniform thickness of the frame band.
    pub frame_width: f64,
    /// Number of vertical sash bars.
    #[serde(default)]
    pub vertical_bars: u32,
    /// Number of horizontal sash bars. In `FromChord` mode this excludes
    /// the chord bar, which is added implicitly.
    #[serde(default)]
    pub horizontal_bars: u32,
    /// Width of every sash bar except an overridden center bar.
    #[serde(default)]
    pub sash_bar_width: f64,
    /// Width of the middle vertical bar when `vertical_bars` is odd.
    /// Falls back to `sash_bar_width` when unset.
    #[serde(default)]
    pub center_bar_width: Option<f64>,
    /// Vertical extent of the elliptical arch from springline to crown.
    /// Zero for a rectangular window.
    #[serde(default)]
    pub arch_height: f64,
    /// Horizontal bar distribution policy.
    #[serde(default)]
    pub horizontal_mode: HorizontalMode,

    /// Frame fill color (pass-through, no geometric effect).
    #[serde(default = "default_frame_color")]
    pub frame_color: String,
    /// Glass fill color.
    #[serde(default = "default_glass_color")]
    pub glass_color: String,
    /// Sash bar fill color.
    #[serde(default = "default_frame_color")]
    pub bar_color: String,
}

impl WindowSpec {
    /// A bare spec with the given outer size and frame band: no bars, no
    /// arch, even distribution, the classic gray-on-ice palette.
    pub fn new(width: f64, height: f64, frame_width: f64) -> Self {
        Self {
            width,
            height,
            frame_width,
            vertical_bars: 0,
            horizontal_bars: 0,
            sash_bar_width: 0.0,
            center_bar_width: None,
            arch_height: 0.0,
            horizontal_mode: HorizontalMode::Even,
            frame_color: default_frame_color(),
            glass_color: default_glass_color(),
            bar_color: default_frame_color(),
        }
    }

    /// True when the elevation carries an elliptical arch.
    pub fn arched(&self) -> bool {
        self.arch_height > 0.0
    }

    /// Middle-bar width with the `center_bar_width` fallback applied.
    pub fn resolved_center_width(&self) -> f64 {
        self.center_bar_width.unwrap_or(self.sash_bar_width)
    }

    /// Check every standalone field constraint, reporting the first
    /// violation. The checks are independent; none builds any geometry.
    pub fn validate(&self) -> Result<(), SpecError> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0 {
            return Err(SpecError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let limit = self.width.min(self.height);
        if !self.frame_width.is_finite() || self.frame_width < 0.0 || 2.0 * self.frame_width >= limit {
            return Err(SpecError::InvalidFrameWidth {
                frame_width: self.frame_width,
                limit,
            });
        }
        if !self.arch_height.is_finite() || self.arch_height < 0.0 || self.arch_height > self.height {
            return Err(SpecError::InvalidArchHeight {
                arch_height: self.arch_height,
                height: self.height,
            });
        }
        for width in [self.sash_bar_width, self.resolved_center_width()] {
            if !width.is_finite() || width < 0.0 {
                return Err(SpecError::InvalidBarWidth { width });
            }
        }
        Ok(())
    }
}
