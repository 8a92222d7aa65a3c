use pcb_pack::candidates::UnplacedCause;
use pcb_pack::config::OrderPolicy;
use pcb_pack::engine::run;
use pcb_pack::error::PlaceError;
use pcb_pack::geom::{Point, Rect};
use pcb_pack::profile::ComponentType;

mod common;
use common::{assert_layout_legal, base_config, component, scenario_config, touches_edge};

#[test]
fn single_controller_lands_on_board_center() {
    let cfg = base_config(vec![component(ComponentType::Controller, 5, 5)]);
    let result = run(&cfg).expect("run");
    assert_eq!(result.placed.len(), 1);
    let rec = &result.placed[0];
    assert_eq!((rec.x, rec.y), (23, 23));
    assert_layout_legal(&result);
}

#[test]
fn second_controller_joins_via_ring_search() {
    let mut cfg = base_config(vec![component(ComponentType::Controller, 5, 5)]);
    cfg.components[0].count = 2;
    cfg.refine_passes = Some(0);
    let result = run(&cfg).expect("run");
    assert_eq!(result.placed.len(), 2);
    // First at center; the second settles on the first ring at the
    // left-hand position, the earliest of the best-scoring directions.
    assert_eq!((result.placed[0].x, result.placed[0].y), (23, 23));
    assert_eq!((result.placed[1].x, result.placed[1].y), (17, 23));
    assert_layout_legal(&result);
}

#[test]
fn edge_bound_components_touch_a_boundary() {
    let cfg = base_config(vec![
        component(ComponentType::Controller, 5, 5),
        component(ComponentType::Connector, 5, 5),
        component(ComponentType::Bus, 5, 15),
    ]);
    let result = run(&cfg).expect("run");
    assert_layout_legal(&result);
    for rec in &result.placed {
        match rec.kind {
            ComponentType::Connector | ComponentType::Bus => {
                assert!(
                    touches_edge(rec, result.board),
                    "{} not flush with a board edge",
                    rec.kind.label()
                );
            }
            _ => {}
        }
    }
    assert_eq!(result.keepouts.len(), 1);
}

#[test]
fn crystal_before_controller_is_deferred() {
    let cfg = base_config(vec![
        component(ComponentType::Crystal, 5, 5),
        component(ComponentType::Controller, 5, 5),
    ]);
    let result = run(&cfg).expect("run");
    assert_eq!(result.placed.len(), 1);
    assert_eq!(result.placed[0].kind, ComponentType::Controller);
    assert_eq!(result.unplaced.len(), 1);
    assert_eq!(result.unplaced[0].input_index, 0);
    assert_eq!(result.unplaced[0].cause, UnplacedCause::TargetMissing);
}

#[test]
fn strict_mode_aborts_on_unplaceable() {
    let mut cfg = base_config(vec![
        component(ComponentType::Crystal, 5, 5),
        component(ComponentType::Controller, 5, 5),
    ]);
    cfg.strict = true;
    assert!(matches!(run(&cfg), Err(PlaceError::Unplaceable(_))));
}

#[test]
fn ascending_order_places_crystal_after_controller() {
    let mut cfg = base_config(vec![
        component(ComponentType::Crystal, 5, 5),
        component(ComponentType::Controller, 5, 5),
    ]);
    cfg.order = OrderPolicy::Ascending;
    let result = run(&cfg).expect("run");
    assert!(result.unplaced.is_empty());
    assert_eq!(result.placed.len(), 2);
    let controller = result
        .placed
        .iter()
        .find(|r| r.kind == ComponentType::Controller)
        .unwrap();
    let crystal = result
        .placed
        .iter()
        .find(|r| r.kind == ComponentType::Crystal)
        .unwrap();
    let d = common::rect_of(crystal)
        .center()
        .distance(common::rect_of(controller).center());
    assert!(d <= 10.0, "crystal {d} units from its controller");
}

#[test]
fn refinement_never_degrades_balance() {
    let mut baseline = scenario_config();
    baseline.refine_passes = Some(0);
    let before = run(&baseline).expect("run").com_distance.expect("com");

    let mut refined = scenario_config();
    refined.refine_passes = Some(3);
    let after = run(&refined).expect("run").com_distance.expect("com");

    assert!(
        after <= before + 1e-4,
        "refinement degraded balance: {before} -> {after}"
    );
}

#[test]
fn runs_are_deterministic() {
    let cfg = scenario_config();
    let a = run(&cfg).expect("first run");
    let b = run(&cfg).expect("second run");
    let coords = |r: &pcb_pack::engine::PlacementResult| -> Vec<(i32, i32, i32, i32)> {
        r.placed
            .iter()
            .map(|p| (p.x, p.y, p.width, p.height))
            .collect()
    };
    assert_eq!(coords(&a), coords(&b));
    assert_eq!(a.keepouts, b.keepouts);
}

#[test]
fn reference_scenario_places_everything() {
    let mut cfg = scenario_config();
    cfg.refine_passes = Some(3);
    let result = run(&cfg).expect("run");
    assert_layout_legal(&result);
    assert!(result.unplaced.is_empty(), "unplaced: {:?}", result.unplaced);
    assert_eq!(result.placed.len(), 7);
    assert_eq!(result.keepouts.len(), 1);

    // Both buses flush on directly opposite edges.
    let buses: Vec<Rect> = result
        .placed
        .iter()
        .filter(|r| r.kind == ComponentType::Bus)
        .map(common::rect_of)
        .collect();
    assert_eq!(buses.len(), 2);
    let (a, b) = (&buses[0], &buses[1]);
    let opposite_x = (a.x == 0 && b.x + b.w == 50) || (b.x == 0 && a.x + a.w == 50);
    let opposite_y = (a.y == 0 && b.y + b.h == 50) || (b.y == 0 && a.y + a.h == 50);
    assert!(
        opposite_x || opposite_y,
        "buses not on opposite edges: {a:?} vs {b:?}"
    );

    // The crystal sits within the proximity radius of some controller.
    let controllers: Vec<Point> = result
        .placed
        .iter()
        .filter(|r| r.kind == ComponentType::Controller)
        .map(|r| common::rect_of(r).center())
        .collect();
    assert_eq!(controllers.len(), 3);
    let crystal = result
        .placed
        .iter()
        .find(|r| r.kind == ComponentType::Crystal)
        .map(common::rect_of)
        .unwrap();
    assert!(controllers
        .iter()
        .any(|c| crystal.center().distance(*c) <= 10.0));

    // Controllers cluster near the board center.
    for c in &controllers {
        assert!(
            c.distance(Point::new(25.0, 25.0)) <= 12.0,
            "controller far from center: {c:?}"
        );
    }

    // The final layout stays reasonably mass-balanced.
    assert!(result.com_distance.unwrap() < 6.0);
}

#[test]
fn refine_passes_zero_disables_refinement() {
    let mut cfg = base_config(vec![component(ComponentType::Controller, 5, 5)]);
    cfg.refine_passes = Some(0);
    let result = run(&cfg).expect("run");
    assert_eq!((result.placed[0].x, result.placed[0].y), (23, 23));
}
