//! Bar layout: centerline distribution, the odd-count center override, and
//! the chord-anchored horizontal policy.
//!
//! Bars come out in their unclipped full-span form. Clipping against the
//! aperture happens at render time, so a bar's edge along an arched
//! boundary stays the exact curve instead of a polygon approximation.

use glam::dvec2;

use crate::errors::LayoutError;
use crate::log::warn;
use crate::spec::{HorizontalMode, WindowSpec};

use super::{Aperture, Bar, Orientation};

/// A gap this close to zero is rounding residue of the equal-gap division,
/// not a real overflow.
const GAP_TOLERANCE: f64 = 1e-9;

/// Vertical bars on the `N+1`-way even split of the aperture width. The
/// middle bar of an odd count takes the resolved center width.
pub fn vertical_bars(spec: &WindowSpec, aperture: &Aperture) -> Vec<Bar> {
    let count = spec.vertical_bars as usize;
    if count == 0 || aperture.size.x <= 0.0 {
        return Vec::new();
    }
    let pitch = aperture.size.x / (count as f64 + 1.0);
    (0..count)
        .map(|i| {
            let centerline = aperture.origin.x + (i as f64 + 1.0) * pitch;
            let width = if count % 2 == 1 && i == count / 2 {
                spec.resolved_center_width()
            } else {
                spec.sash_bar_width
            };
            Bar {
                origin: dvec2(centerline - width / 2.0, 0.0),
                size: dvec2(width, spec.height),
                orientation: Orientation::Vertical,
            }
        })
        .collect()
}

/// Horizontal bars under the spec's distribution policy.
pub fn horizontal_bars(spec: &WindowSpec, aperture: &Aperture) -> Result<Vec<Bar>, LayoutError> {
    if aperture.size.y <= 0.0 {
        return Ok(Vec::new());
    }
    match spec.horizontal_mode {
        // Chord placement needs an arch; on a flat window it collapses to
        // the even distribution.
        HorizontalMode::FromChord if spec.arched() => from_chord(spec, aperture),
        _ => Ok(even(spec, aperture)),
    }
}

/// Centerline distribution across the aperture height, the horizontal
/// mirror of [`vertical_bars`].
fn even(spec: &WindowSpec, aperture: &Aperture) -> Vec<Bar> {
    let count = spec.horizontal_bars as usize;
    if count == 0 {
        return Vec::new();
    }
    let pitch = aperture.size.y / (count as f64 + 1.0);
    (0..count)
        .map(|j| {
            let centerline = aperture.origin.y + (j as f64 + 1.0) * pitch;
            Bar {
                origin: dvec2(0.0, centerline - spec.sash_bar_width / 2.0),
                size: dvec2(spec.width, spec.sash_bar_width),
                orientation: Orientation::Horizontal,
            }
        })
        .collect()
}

/// The structural transom at the base of the arch, then the requested bars
/// with equal gaps between the transom and the sill.
///
/// The chord bar is as thick as the frame band and its top edge sits
/// exactly on the inner springline. Below it, gaps and bars alternate
/// starting and ending with a gap: `g = (span - n * bar_width) / (n + 1)`.
fn from_chord(spec: &WindowSpec, aperture: &Aperture) -> Result<Vec<Bar>, LayoutError> {
    let chord_y = aperture.springline();
    let mut bars = vec![Bar {
        origin: dvec2(0.0, chord_y),
        size: dvec2(spec.width, spec.frame_width),
        orientation: Orientation::Horizontal,
    }];

    let count = spec.horizontal_bars;
    if count == 0 {
        return Ok(bars);
    }

    let start = chord_y + spec.frame_width;
    let span = aperture.bottom() - start;
    let bar_width = spec.sash_bar_width;
    let gap = (span - count as f64 * bar_width) / (count as f64 + 1.0);
    if span <= 0.0 || gap < -GAP_TOLERANCE {
        return Err(LayoutError::InsufficientSpace {
            span,
            count,
            bar_width,
            gap,
        });
    }
    if gap < 0.0 {
        warn!("clamping gap rounding residue of {gap}mm to zero");
    }
    let gap = gap.max(0.0);

    for k in 0..count as usize {
        let top = start + gap + k as f64 * (bar_width + gap);
        bars.push(Bar {
            origin: dvec2(0.0, top),
            size: dvec2(spec.width, bar_width),
            orientation: Orientation::Horizontal,
        });
    }
    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn rect_spec() -> WindowSpec {
        let mut spec = WindowSpec::new(800.0, 1200.0, 60.0);
        spec.vertical_bars = 2;
        spec.horizontal_bars = 1;
        spec.sash_bar_width = 30.0;
        spec
    }

    fn arch_spec() -> WindowSpec {
        let mut spec = WindowSpec::new(1000.0, 1400.0, 70.0);
        spec.arch_height = 250.0;
        spec.vertical_bars = 3;
        spec.horizontal_bars = 2;
        spec.sash_bar_width = 35.0;
        spec.center_bar_width = Some(60.0);
        spec
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn vertical_centerlines_split_the_aperture_evenly() {
        let spec = rect_spec();
        let aperture = Aperture::from_spec(&spec);
        let bars = vertical_bars(&spec, &aperture);

        assert_eq!(bars.len(), 2);
        assert_close(bars[0].origin.x + 15.0, 60.0 + 680.0 / 3.0);
        assert_close(bars[1].origin.x + 15.0, 60.0 + 2.0 * 680.0 / 3.0);
        for bar in &bars {
            assert_eq!(bar.orientation, Orientation::Vertical);
            assert_eq!(bar.origin.y, 0.0);
            assert_eq!(bar.size.y, 1200.0);
            assert_eq!(bar.size.x, 30.0);
        }
    }

    #[test]
    fn gaps_plus_bars_sum_to_the_aperture_width() {
        let mut spec = rect_spec();
        spec.vertical_bars = 5;
        spec.sash_bar_width = 24.0;
        spec.center_bar_width = Some(42.0);
        let aperture = Aperture::from_spec(&spec);
        let bars = vertical_bars(&spec, &aperture);

        let mut total = 0.0;
        let mut cursor = aperture.origin.x;
        for bar in &bars {
            total += bar.origin.x - cursor; // gap before this bar
            total += bar.size.x;
            cursor = bar.origin.x + bar.size.x;
        }
        total += aperture.origin.x + aperture.size.x - cursor; // final gap
        assert_close(total, aperture.size.x);
    }

    #[test]
    fn odd_count_gives_the_middle_bar_the_center_width() {
        let spec = arch_spec();
        let aperture = Aperture::from_spec(&spec);
        let bars = vertical_bars(&spec, &aperture);

        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].size.x, 35.0);
        assert_eq!(bars[1].size.x, 60.0);
        assert_eq!(bars[2].size.x, 35.0);

        // The override widens the bar around an unchanged centerline.
        assert_close(bars[1].origin.x + 30.0, 70.0 + 860.0 / 2.0);
    }

    #[test]
    fn even_count_ignores_the_center_width() {
        let mut spec = arch_spec();
        spec.vertical_bars = 4;
        let aperture = Aperture::from_spec(&spec);
        for bar in vertical_bars(&spec, &aperture) {
            assert_eq!(bar.size.x, 35.0);
        }
    }

    #[test]
    fn no_bars_requested_means_no_bars() {
        let mut spec = rect_spec();
        spec.vertical_bars = 0;
        spec.horizontal_bars = 0;
        let aperture = Aperture::from_spec(&spec);
        assert!(vertical_bars(&spec, &aperture).is_empty());
        assert!(horizontal_bars(&spec, &aperture).unwrap().is_empty());
    }

    #[test]
    fn even_horizontal_bars_mirror_the_vertical_formula() {
        let spec = rect_spec();
        let aperture = Aperture::from_spec(&spec);
        let bars = horizontal_bars(&spec, &aperture).unwrap();

        assert_eq!(bars.len(), 1);
        let bar = &bars[0];
        assert_eq!(bar.orientation, Orientation::Horizontal);
        assert_close(bar.origin.y + 15.0, 60.0 + 540.0);
        assert_eq!(bar.origin.x, 0.0);
        assert_eq!(bar.size.x, 800.0);
        assert_eq!(bar.size.y, 30.0);
    }

    #[test]
    fn chord_bar_sits_on_the_inner_springline() {
        let mut spec = arch_spec();
        spec.horizontal_mode = HorizontalMode::FromChord;
        let aperture = Aperture::from_spec(&spec);
        let bars = horizontal_bars(&spec, &aperture).unwrap();

        let chord = &bars[0];
        assert_eq!(chord.origin.y, 70.0 + 180.0);
        assert_eq!(chord.size.y, 70.0); // frame thickness, not sash width
        assert_eq!(chord.size.x, 1000.0);
        assert_eq!(bars.len(), 3); // chord + 2 requested
    }

    #[test]
    fn chord_mode_distributes_equal_gaps_below_the_chord_bar() {
        let mut spec = arch_spec();
        spec.horizontal_mode = HorizontalMode::FromChord;
        let aperture = Aperture::from_spec(&spec);
        let bars = horizontal_bars(&spec, &aperture).unwrap();

        let start = 250.0 + 70.0; // chord bottom
        let bottom = 70.0 + 1260.0; // aperture bottom
        let span = bottom - start;
        let gap = (span - 2.0 * 35.0) / 3.0;

        assert_close(bars[1].origin.y, start + gap);
        assert_close(bars[2].origin.y, start + 2.0 * gap + 35.0);
        // The run ends on a gap, flush with the aperture bottom.
        assert_close(bars[2].origin.y + 35.0 + gap, bottom);
    }

    #[test]
    fn chord_mode_without_extra_bars_places_only_the_chord() {
        let mut spec = arch_spec();
        spec.horizontal_mode = HorizontalMode::FromChord;
        spec.horizontal_bars = 0;
        let aperture = Aperture::from_spec(&spec);
        let bars = horizontal_bars(&spec, &aperture).unwrap();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].size.y, 70.0);
    }

    #[test]
    fn chord_mode_on_a_flat_window_collapses_to_even() {
        let mut spec = rect_spec();
        spec.horizontal_mode = HorizontalMode::FromChord;
        let aperture = Aperture::from_spec(&spec);

        let chord_bars = horizontal_bars(&spec, &aperture).unwrap();
        spec.horizontal_mode = HorizontalMode::Even;
        let even_bars = horizontal_bars(&spec, &aperture).unwrap();
        assert_eq!(chord_bars, even_bars);
    }

    #[test]
    fn overfull_chord_layout_fails_instead_of_clamping() {
        let mut spec = arch_spec();
        spec.horizontal_mode = HorizontalMode::FromChord;
        spec.horizontal_bars = 40;
        spec.sash_bar_width = 35.0; // 1400mm of bars in a 1010mm span
        let aperture = Aperture::from_spec(&spec);

        let err = horizontal_bars(&spec, &aperture).unwrap_err();
        let LayoutError::InsufficientSpace {
            span,
            count,
            bar_width,
            gap,
        } = err;
        assert_close(span, 1330.0 - 320.0);
        assert_eq!(count, 40);
        assert_eq!(bar_width, 35.0);
        assert!(gap < 0.0);
    }

    #[test]
    fn rounding_residue_in_the_gap_is_tolerated() {
        // Pick a count that exactly fills the span so g == 0 up to noise.
        let mut spec = arch_spec();
        spec.horizontal_mode = HorizontalMode::FromChord;
        let aperture = Aperture::from_spec(&spec);
        let span = aperture.bottom() - (aperture.springline() + spec.frame_width);
        spec.horizontal_bars = 10;
        spec.sash_bar_width = span / 10.0;

        let bars = horizontal_bars(&spec, &aperture).unwrap();
        assert_eq!(bars.len(), 11);
        // All gaps collapse to zero; the bars tile the span.
        assert_close(bars[1].origin.y, aperture.springline() + spec.frame_width);
    }
}
