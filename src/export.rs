//! Text export of a placement result.
//!
//! One line per physical placed component: `"<LABEL> x y w h"`. Labels are
//! fixed per type except Bus instances, which receive an incrementing suffix
//! (`BUS_1`, `BUS_2`, ...) in placement order. Exclusion zones are omitted.

use std::fs;
use std::path::Path;

use crate::engine::PlacementResult;
use crate::error::PlaceResult;
use crate::profile::ComponentType;

pub fn layout_lines(result: &PlacementResult) -> String {
    let mut out = String::new();
    let mut bus_count = 0usize;
    for rec in &result.placed {
        let label = match rec.kind {
            ComponentType::Bus => {
                bus_count += 1;
                format!("BUS_{bus_count}")
            }
            other => other.label().to_string(),
        };
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            label, rec.x, rec.y, rec.width, rec.height
        ));
    }
    out
}

pub fn write_layout(result: &PlacementResult, path: &Path) -> PlaceResult<()> {
    fs::write(path, layout_lines(result))?;
    Ok(())
}
