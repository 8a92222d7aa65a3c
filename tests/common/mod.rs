#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use pcb_pack::config::{BoardSpec, ComponentSpec, OrderPolicy, PlaceConfig};
use pcb_pack::engine::{PlacedRecord, PlacementResult};
use pcb_pack::geom::Rect;
use pcb_pack::profile::ComponentType;

pub fn temp_path(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!(
        "pcb_pack_test_{label}_{}_{}",
        std::process::id(),
        nanos
    ));
    path
}

pub fn write_text(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write temp file");
}

pub fn component(kind: ComponentType, width: i32, height: i32) -> ComponentSpec {
    ComponentSpec {
        kind,
        width,
        height,
        count: 1,
    }
}

pub fn base_config(components: Vec<ComponentSpec>) -> PlaceConfig {
    PlaceConfig {
        board: BoardSpec {
            width: 50,
            height: 50,
        },
        components,
        order: OrderPolicy::Input,
        strict: false,
        refine_passes: None,
        com_weight: None,
        output: None,
    }
}

/// The seven-component reference layout: connector with keepout, two buses,
/// three controllers, one crystal, on a 50x50 board.
pub fn scenario_config() -> PlaceConfig {
    let mut cfg = base_config(vec![
        component(ComponentType::Connector, 5, 5),
        component(ComponentType::Bus, 5, 15),
        component(ComponentType::Controller, 5, 5),
        component(ComponentType::Controller, 5, 5),
        component(ComponentType::Controller, 5, 5),
        component(ComponentType::Bus, 5, 15),
        component(ComponentType::Crystal, 5, 5),
    ]);
    cfg.order = OrderPolicy::Ascending;
    cfg
}

pub fn rect_of(rec: &PlacedRecord) -> Rect {
    Rect::new(rec.x, rec.y, rec.width, rec.height)
}

pub fn assert_layout_legal(result: &PlacementResult) {
    let (bw, bh) = result.board;
    let rects: Vec<Rect> = result.placed.iter().map(rect_of).collect();
    for (i, a) in rects.iter().enumerate() {
        for b in rects.iter().skip(i + 1) {
            assert!(!a.overlaps(b), "physical rects overlap: {a:?} vs {b:?}");
        }
        for k in &result.keepouts {
            assert!(!a.overlaps(k), "rect overlaps keepout: {a:?} vs {k:?}");
        }
    }
    for r in rects.iter().chain(result.keepouts.iter()) {
        assert!(
            r.x >= 0 && r.y >= 0 && r.x + r.w <= bw && r.y + r.h <= bh,
            "rect out of bounds: {r:?}"
        );
    }
}

pub fn touches_edge(rec: &PlacedRecord, board: (i32, i32)) -> bool {
    rec.x == 0 || rec.y == 0 || rec.x + rec.width == board.0 || rec.y + rec.height == board.1
}
