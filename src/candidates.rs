//! Candidate generation: all legal positions for one component given its
//! constraint profile and the current occupancy.
//!
//! Three branches, concatenated:
//!   - unconstrained components seek the board center, widening an
//!     eight-direction ring when the center is blocked
//!   - edge-bound components enumerate every flush position on the four
//!     edges, carrying a keepout footprint or a parallel-alignment check
//!   - proximity-bound components scan the grid near placed target
//!     instances

use crate::geom::{Point, Rect};
use crate::occupancy::Occupancy;
use crate::profile::{active_constraint_count, ComponentType, ConstraintProfile};

/// Center-to-center proximity radius, in board units.
pub const PROXIMITY_RADIUS: f32 = 10.0;

/// Ring schedule for the unconstrained outward search.
const RADIAL_START: f32 = 6.0;
const RADIAL_STEP: f32 = 2.0;
const RADIAL_ANGLES: [f32; 8] = [0.0, 90.0, 180.0, 270.0, 45.0, 135.0, 225.0, 315.0];

#[derive(Clone, Copy, Debug)]
pub struct Candidate {
    pub rect: Rect,
    pub rotated: bool,
    pub keepout: Option<Rect>,
}

/// Why a component yielded zero candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnplacedCause {
    /// Every enumerated position was out of bounds or blocked.
    NoLegalPosition,
    /// The outward ring search hit the board-diagonal bound.
    SearchExhausted,
    /// A proximity target type has no placed instance yet.
    TargetMissing,
}

impl UnplacedCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoLegalPosition => "no_legal_position",
            Self::SearchExhausted => "search_exhausted",
            Self::TargetMissing => "target_missing",
        }
    }
}

pub fn generate(w: i32, h: i32, profile: &ConstraintProfile, occ: &Occupancy) -> Vec<Candidate> {
    if active_constraint_count(profile) == 0 {
        return central_candidates(w, h, occ);
    }
    let mut out = Vec::new();
    if profile.edge {
        out.extend(edge_candidates(w, h, profile, occ));
    }
    if let Some(target) = profile.proximity {
        out.extend(proximity_candidates(w, h, target, occ));
    }
    out
}

/// Diagnose an empty generation result for reporting.
pub fn empty_cause(profile: &ConstraintProfile, occ: &Occupancy) -> UnplacedCause {
    if let Some(target) = profile.proximity {
        let placed = occ
            .placed()
            .iter()
            .any(|p| p.is_physical() && p.kind == target);
        if !placed {
            return UnplacedCause::TargetMissing;
        }
    }
    if active_constraint_count(profile) == 0 {
        return UnplacedCause::SearchExhausted;
    }
    UnplacedCause::NoLegalPosition
}

fn orientations(w: i32, h: i32) -> Vec<(i32, i32, bool)> {
    if w == h {
        vec![(w, h, false)]
    } else {
        vec![(w, h, false), (h, w, true)]
    }
}

// ---------------------------------------------------------------------------
// Unconstrained: center-seeking with bounded outward search
// ---------------------------------------------------------------------------

fn central_candidates(w: i32, h: i32, occ: &Occupancy) -> Vec<Candidate> {
    let cx = occ.width() / 2;
    let cy = occ.height() / 2;
    let mut out = Vec::new();

    for (rw, rh, rotated) in orientations(w, h) {
        let rect = Rect::new(cx - rw / 2, cy - rh / 2, rw, rh);
        if occ.within_bounds(&rect) && !occ.blocks(&rect) {
            out.push(Candidate {
                rect,
                rotated,
                keepout: None,
            });
        }
    }
    if !out.is_empty() {
        return out;
    }

    // Center blocked: widen a ring over eight compass/diagonal directions,
    // stopping at the first radius that produces any legal position. The
    // radius is capped at the board diagonal so a saturated board fails
    // explicitly instead of looping.
    let diagonal = occ.diagonal();
    let mut radius = RADIAL_START;
    while radius <= diagonal {
        for angle in RADIAL_ANGLES {
            let rad = angle.to_radians();
            let px = cx + (radius * rad.cos()).round() as i32;
            let py = cy + (radius * rad.sin()).round() as i32;
            for (rw, rh, rotated) in orientations(w, h) {
                let rect = Rect::new(px - rw / 2, py - rh / 2, rw, rh);
                if occ.within_bounds(&rect) && !occ.blocks(&rect) {
                    out.push(Candidate {
                        rect,
                        rotated,
                        keepout: None,
                    });
                }
            }
        }
        if !out.is_empty() {
            return out;
        }
        radius += RADIAL_STEP;
    }
    out
}

// ---------------------------------------------------------------------------
// Edge-bound: flush positions on the four board edges
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    fn opposite(self) -> Edge {
        match self {
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
        }
    }
}

fn edge_candidates(
    w: i32,
    h: i32,
    profile: &ConstraintProfile,
    occ: &Occupancy,
) -> Vec<Candidate> {
    let bw = occ.width();
    let bh = occ.height();
    let mut out = Vec::new();

    for edge in Edge::ALL {
        // Orientation is implied by the edge: vertical edges keep the base
        // dimensions, horizontal edges use the rotated form so the same side
        // runs along the edge either way.
        let (rw, rh, rotated) = match edge {
            Edge::Left | Edge::Right => (w, h, false),
            Edge::Top | Edge::Bottom => (h, w, true),
        };
        if rw > bw || rh > bh {
            continue;
        }
        if let Some(target) = profile.parallel {
            if !parallel_ok(edge, w, h, target, occ) {
                continue;
            }
        }
        let rects: Vec<Rect> = match edge {
            Edge::Left => (0..=bh - rh).map(|y| Rect::new(0, y, rw, rh)).collect(),
            Edge::Right => (0..=bh - rh)
                .map(|y| Rect::new(bw - rw, y, rw, rh))
                .collect(),
            Edge::Top => (0..=bw - rw).map(|x| Rect::new(x, 0, rw, rh)).collect(),
            Edge::Bottom => (0..=bw - rw)
                .map(|x| Rect::new(x, bh - rh, rw, rh))
                .collect(),
        };
        for rect in rects {
            if occ.blocks(&rect) {
                continue;
            }
            let keepout = match profile.keepout {
                Some((depth, span)) => match keepout_rect(edge, &rect, depth, span, occ) {
                    Some(k) => Some(k),
                    None => continue,
                },
                None => None,
            };
            out.push(Candidate {
                rect,
                rotated,
                keepout,
            });
        }
    }
    out
}

/// Keep-clear rectangle projected from an edge-placed component into the
/// board along the edge normal, centered on the component's cross-axis.
/// `depth` runs along the normal, `span` along the edge.
fn keepout_rect(edge: Edge, comp: &Rect, depth: i32, span: i32, occ: &Occupancy) -> Option<Rect> {
    let rect = match edge {
        Edge::Left => Rect::new(comp.x + comp.w, comp.y + (comp.h - span) / 2, depth, span),
        Edge::Right => Rect::new(comp.x - depth, comp.y + (comp.h - span) / 2, depth, span),
        Edge::Top => Rect::new(comp.x + (comp.w - span) / 2, comp.y + comp.h, span, depth),
        Edge::Bottom => Rect::new(comp.x + (comp.w - span) / 2, comp.y - depth, span, depth),
    };
    (occ.within_bounds(&rect) && !occ.blocks_physical(&rect)).then_some(rect)
}

/// Parallel alignment: legal on this edge when no target instance exists
/// yet, or when some placed instance with matching base dimensions sits
/// flush on the directly opposite edge.
fn parallel_ok(edge: Edge, w: i32, h: i32, target: ComponentType, occ: &Occupancy) -> bool {
    let mut seen = false;
    for p in occ
        .placed()
        .iter()
        .filter(|p| p.is_physical() && p.kind == target)
    {
        seen = true;
        if dims_match(&p.rect, w, h) && touches_edge(&p.rect, edge.opposite(), occ) {
            return true;
        }
    }
    !seen
}

fn dims_match(rect: &Rect, w: i32, h: i32) -> bool {
    (rect.w == w && rect.h == h) || (rect.w == h && rect.h == w)
}

fn touches_edge(rect: &Rect, edge: Edge, occ: &Occupancy) -> bool {
    match edge {
        Edge::Left => rect.x == 0,
        Edge::Right => rect.x + rect.w == occ.width(),
        Edge::Top => rect.y == 0,
        Edge::Bottom => rect.y + rect.h == occ.height(),
    }
}

// ---------------------------------------------------------------------------
// Proximity-bound: grid scan near placed target instances
// ---------------------------------------------------------------------------

fn proximity_candidates(
    w: i32,
    h: i32,
    target: ComponentType,
    occ: &Occupancy,
) -> Vec<Candidate> {
    let centers: Vec<Point> = occ
        .placed()
        .iter()
        .filter(|p| p.is_physical() && p.kind == target)
        .map(|p| p.rect.center())
        .collect();
    // No placed target yet: the constraint cannot be validated, so this
    // branch yields nothing and the component is reported unplaced.
    if centers.is_empty() {
        return Vec::new();
    }
    let bw = occ.width();
    let bh = occ.height();
    let mut out = Vec::new();
    for (rw, rh, rotated) in orientations(w, h) {
        if rw > bw || rh > bh {
            continue;
        }
        for y in 0..=bh - rh {
            for x in 0..=bw - rw {
                let rect = Rect::new(x, y, rw, rh);
                let center = rect.center();
                if !centers
                    .iter()
                    .any(|t| center.distance(*t) <= PROXIMITY_RADIUS)
                {
                    continue;
                }
                if occ.blocks(&rect) {
                    continue;
                }
                out.push(Candidate {
                    rect,
                    rotated,
                    keepout: None,
                });
            }
        }
    }
    out
}
