//! Placement engine: greedy sequential assignment over an ordered component
//! sequence, followed by the refinement pass.
//!
//! A run is a pure function of (component list, board, order policy): the
//! occupancy model is owned by the run, mutated only here and in
//! [`crate::refine`], and dropped when the result is built.

use std::cmp::Reverse;
use std::time::Instant;

use crate::candidates::{self, UnplacedCause};
use crate::config::{OrderPolicy, PlaceConfig};
use crate::error::{PlaceError, PlaceResult};
use crate::geom::Rect;
use crate::occupancy::{Occupancy, Placed};
use crate::profile::{active_constraint_count, profile_for, ComponentType, ConstraintProfile};
use crate::refine::refine;
use crate::score::score;
use crate::streaming::{
    duration_ms, ComponentPlacedEvent, ComponentUnplacedEvent, PhaseCompleteEvent,
    PhaseStartedEvent, PlacePhase, RunCompleteEvent, RunStartedEvent, StreamEmitter,
};

#[derive(Clone, Copy, Debug)]
pub struct PlacedRecord {
    pub input_index: usize,
    pub kind: ComponentType,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub rotated: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct UnplacedRecord {
    pub input_index: usize,
    pub kind: ComponentType,
    pub cause: UnplacedCause,
}

#[derive(Clone, Debug)]
pub struct PlacementResult {
    pub board: (i32, i32),
    /// Successfully placed components, in commit order.
    pub placed: Vec<PlacedRecord>,
    /// Components that yielded no legal candidate, with their cause.
    pub unplaced: Vec<UnplacedRecord>,
    /// Synthesized exclusion rectangles, in commit order.
    pub keepouts: Vec<Rect>,
    /// Final center-of-mass distance to the board center; `None` when
    /// nothing was placed.
    pub com_distance: Option<f32>,
}

struct WorkItem {
    input_index: usize,
    kind: ComponentType,
    width: i32,
    height: i32,
    profile: ConstraintProfile,
}

pub fn run(config: &PlaceConfig) -> PlaceResult<PlacementResult> {
    run_with_stream(config, StreamEmitter::disabled())
}

pub fn run_with_stream(
    config: &PlaceConfig,
    emitter: StreamEmitter,
) -> PlaceResult<PlacementResult> {
    let cfg = config.normalized()?;
    let t_run = Instant::now();
    let items = build_order(&cfg);
    let total = items.len();
    let com_weight = cfg.com_weight.unwrap_or(0.2);

    if emitter.is_enabled() {
        emitter.emit_run_started(&RunStartedEvent {
            board: (cfg.board.width, cfg.board.height),
            total_components: total,
            order: order_name(cfg.order).to_string(),
        });
        emitter.emit_phase_started(&PhaseStartedEvent {
            phase: PlacePhase::CorePlacement,
            total_components: Some(total),
        });
    }

    let t_place = Instant::now();
    let mut occ = Occupancy::new(cfg.board.width, cfg.board.height);
    let mut unplaced = Vec::new();
    let mut keepouts = Vec::new();

    for (seq, item) in items.iter().enumerate() {
        let cands = candidates::generate(item.width, item.height, &item.profile, &occ);
        if cands.is_empty() {
            let cause = candidates::empty_cause(&item.profile, &occ);
            if emitter.is_enabled() {
                emitter.emit_component_unplaced(&ComponentUnplacedEvent {
                    component_index: seq,
                    kind: item.kind,
                    cause,
                });
            }
            if cfg.strict {
                let message = format!(
                    "{} (input {}) has no legal position: {}",
                    item.kind.label(),
                    item.input_index,
                    cause.as_str()
                );
                if emitter.is_enabled() {
                    emitter.emit_error("unplaceable", &message);
                }
                return Err(PlaceError::Unplaceable(message));
            }
            unplaced.push(UnplacedRecord {
                input_index: item.input_index,
                kind: item.kind,
                cause,
            });
            continue;
        }

        // Minimum score wins; the strict comparison keeps the
        // first-generated candidate on ties, so runs are deterministic.
        let mut best = &cands[0];
        let mut best_score = score(&occ, &best.rect, com_weight);
        for cand in &cands[1..] {
            let value = score(&occ, &cand.rect, com_weight);
            if value < best_score {
                best = cand;
                best_score = value;
            }
        }

        occ.insert(Placed {
            kind: item.kind,
            rect: best.rect,
            rotated: best.rotated,
            input_index: Some(item.input_index),
        });
        if let Some(keepout) = best.keepout {
            occ.insert(Placed {
                kind: ComponentType::ExclusionZone,
                rect: keepout,
                rotated: false,
                input_index: None,
            });
            keepouts.push(keepout);
        }
        if emitter.is_enabled() {
            emitter.emit_component_placed(&ComponentPlacedEvent {
                component_index: seq,
                total_components: total,
                kind: item.kind,
                x: best.rect.x,
                y: best.rect.y,
                rotated: best.rotated,
                score: best_score,
                candidates: cands.len(),
            });
        }
    }

    if emitter.is_enabled() {
        emitter.emit_phase_complete(&PhaseCompleteEvent {
            phase: PlacePhase::CorePlacement,
            elapsed_ms: duration_ms(t_place.elapsed()),
            moves: None,
        });
    }

    let passes = cfg.refine_passes.unwrap_or(1);
    if passes > 0 && occ.placed().iter().any(|p| p.is_physical()) {
        let t_refine = Instant::now();
        if emitter.is_enabled() {
            emitter.emit_phase_started(&PhaseStartedEvent {
                phase: PlacePhase::Refine,
                total_components: None,
            });
        }
        let stats = refine(&mut occ, passes)?;
        if emitter.is_enabled() {
            emitter.emit_phase_complete(&PhaseCompleteEvent {
                phase: PlacePhase::Refine,
                elapsed_ms: duration_ms(t_refine.elapsed()),
                moves: Some(stats.moves),
            });
        }
    }

    let placed: Vec<PlacedRecord> = occ
        .placed()
        .iter()
        .filter(|p| p.is_physical())
        .map(|p| PlacedRecord {
            // Physical entries always carry their input index.
            input_index: p.input_index.unwrap_or(usize::MAX),
            kind: p.kind,
            x: p.rect.x,
            y: p.rect.y,
            width: p.rect.w,
            height: p.rect.h,
            rotated: p.rotated,
        })
        .collect();
    let com_distance = occ.com_distance().ok();

    if emitter.is_enabled() {
        emitter.emit_run_complete(&RunCompleteEvent {
            placed: placed.len(),
            unplaced: unplaced.len(),
            keepouts: keepouts.len(),
            com_distance,
            elapsed_ms: duration_ms(t_run.elapsed()),
        });
    }

    Ok(PlacementResult {
        board: (cfg.board.width, cfg.board.height),
        placed,
        unplaced,
        keepouts,
        com_distance,
    })
}

fn build_order(cfg: &PlaceConfig) -> Vec<WorkItem> {
    let mut items = Vec::new();
    let mut input_index = 0usize;
    for spec in &cfg.components {
        for _ in 0..spec.count {
            items.push(WorkItem {
                input_index,
                kind: spec.kind,
                width: spec.width,
                height: spec.height,
                profile: profile_for(spec.kind),
            });
            input_index += 1;
        }
    }
    // Stable sorts: equal constraint counts keep input order.
    match cfg.order {
        OrderPolicy::Input => {}
        OrderPolicy::Ascending => {
            items.sort_by_key(|item| active_constraint_count(&item.profile));
        }
        OrderPolicy::Descending => {
            items.sort_by_key(|item| Reverse(active_constraint_count(&item.profile)));
        }
    }
    items
}

fn order_name(order: OrderPolicy) -> &'static str {
    match order {
        OrderPolicy::Input => "input",
        OrderPolicy::Ascending => "ascending",
        OrderPolicy::Descending => "descending",
    }
}
