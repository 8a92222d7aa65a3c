//! SVG rendering of a placement result: the board extent, placed rectangles
//! color-coded by type, dashed keepout zones, and circular proximity guides
//! around controllers.

use std::fs;
use std::path::Path;

use crate::candidates::PROXIMITY_RADIUS;
use crate::engine::PlacementResult;
use crate::error::PlaceResult;
use crate::profile::ComponentType;

fn fill_for(kind: ComponentType) -> &'static str {
    match kind {
        ComponentType::Controller => "#4e79a7",
        ComponentType::Connector => "#f28e2b",
        ComponentType::Bus => "#59a14f",
        ComponentType::Crystal => "#e15759",
        ComponentType::ExclusionZone => "#bab0ac",
    }
}

pub fn render_svg(result: &PlacementResult) -> String {
    let (width, height) = result.board;
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(
        "<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\" stroke=\"#333333\" stroke-width=\"0.5\"/>",
    );

    for rect in &result.keepouts {
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"0.4\" stroke=\"#666666\" stroke-width=\"0.3\" stroke-dasharray=\"2 1\"/>",
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            fill_for(ComponentType::ExclusionZone)
        ));
    }

    for rec in &result.placed {
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"#222222\" stroke-width=\"0.3\"/>",
            rec.x,
            rec.y,
            rec.width,
            rec.height,
            fill_for(rec.kind)
        ));
        if rec.kind == ComponentType::Controller {
            let cx = rec.x as f32 + rec.width as f32 / 2.0;
            let cy = rec.y as f32 + rec.height as f32 / 2.0;
            svg.push_str(&format!(
                "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{PROXIMITY_RADIUS}\" fill=\"none\" stroke=\"{}\" stroke-width=\"0.3\" stroke-dasharray=\"1 1\"/>",
                fill_for(ComponentType::Controller)
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

pub fn write_svg(result: &PlacementResult, path: &Path) -> PlaceResult<()> {
    fs::write(path, render_svg(result))?;
    Ok(())
}
