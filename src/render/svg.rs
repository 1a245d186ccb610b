//! SVG document assembly.
//!
//! Layer order is a correctness requirement, not presentation: the glass
//! fills the aperture, the even-odd frame punches its hole over it, and
//! the bars render last inside a clip bound to the aperture so they never
//! paint into the frame band or past an arched edge.

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{ClipPath, Definitions, Group, Path as SvgPath, Rectangle};

use crate::spec::WindowSpec;

use super::WindowGeometry;
use super::path::{Path, PathCmd};

const CLIP_ID: &str = "glazing-clip";

/// Lower typed path commands into SVG path data. Path data parameters are
/// `f32` in the output layer; millimeter-scale coordinates lose nothing
/// that survives rasterization.
fn path_data(path: &Path) -> Data {
    let mut data = Data::new();
    for cmd in path.commands() {
        data = match *cmd {
            PathCmd::MoveTo(p) => data.move_to((p.x as f32, p.y as f32)),
            PathCmd::ArcTo {
                radii,
                large_arc,
                sweep,
                end,
            } => data.elliptical_arc_to(vec![
                radii.x as f32,
                radii.y as f32,
                0.0,
                if large_arc { 1.0 } else { 0.0 },
                if sweep { 1.0 } else { 0.0 },
                end.x as f32,
                end.y as f32,
            ]),
            PathCmd::LineTo(p) => data.line_to((p.x as f32, p.y as f32)),
            PathCmd::Close => data.close(),
        };
    }
    data
}

/// The aperture as a bare element: the arched region needs a path, the
/// rectangular one stays a plain `<rect>`.
enum ApertureElement {
    Shape(SvgPath),
    Rect(Rectangle),
}

fn aperture_element(spec: &WindowSpec, geometry: &WindowGeometry) -> ApertureElement {
    if spec.arched() {
        ApertureElement::Shape(SvgPath::new().set("d", path_data(&geometry.aperture.boundary())))
    } else {
        let aperture = &geometry.aperture;
        ApertureElement::Rect(
            Rectangle::new()
                .set("x", aperture.origin.x)
                .set("y", aperture.origin.y)
                .set("width", aperture.size.x)
                .set("height", aperture.size.y),
        )
    }
}

/// Assemble the full drawing in its mandatory z-order: clip definition,
/// glass fill, even-odd frame, then bars grouped under the aperture clip.
pub fn document(spec: &WindowSpec, geometry: &WindowGeometry) -> Document {
    let clip = match aperture_element(spec, geometry) {
        ApertureElement::Shape(path) => ClipPath::new().set("id", CLIP_ID).add(path),
        ApertureElement::Rect(rect) => ClipPath::new().set("id", CLIP_ID).add(rect),
    };

    let frame = SvgPath::new()
        .set("d", path_data(&geometry.frame))
        .set("fill", spec.frame_color.as_str())
        .set("fill-rule", "evenodd")
        .set("stroke", "none");

    let mut panes = Group::new().set("clip-path", format!("url(#{CLIP_ID})"));
    for bar in &geometry.bars {
        panes = panes.add(
            Rectangle::new()
                .set("x", bar.origin.x)
                .set("y", bar.origin.y)
                .set("width", bar.size.x)
                .set("height", bar.size.y)
                .set("fill", spec.bar_color.as_str())
                .set("stroke", "none"),
        );
    }

    let document = Document::new()
        .set("width", format!("{}mm", spec.width))
        .set("height", format!("{}mm", spec.height))
        .set("viewBox", format!("0 0 {} {}", spec.width, spec.height))
        .add(Definitions::new().add(clip));

    // The glass paints the same region the clip was defined with.
    let document = match aperture_element(spec, geometry) {
        ApertureElement::Shape(path) => {
            document.add(path.set("fill", spec.glass_color.as_str()).set("stroke", "none"))
        }
        ApertureElement::Rect(rect) => {
            document.add(rect.set("fill", spec.glass_color.as_str()).set("stroke", "none"))
        }
    };

    document.add(frame).add(panes)
}
