//! Post-placement refinement: unit displacements of non-edge-bound
//! components that strictly reduce the center-of-mass distance.

use crate::error::PlaceResult;
use crate::occupancy::Occupancy;
use crate::profile::profile_for;

/// Fixed direction order for candidate translations: left, right, up, down.
const STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Clone, Copy, Debug, Default)]
pub struct RefineStats {
    pub passes: usize,
    pub moves: usize,
}

/// Sweep the placed set up to `max_passes` times. Each sweep visits the
/// physical, non-edge-bound entries in placement order and accepts the first
/// unit translation that stays in bounds, stays clear of every other entry,
/// and strictly improves the global center-of-mass distance. A sweep that
/// accepts no move ends the pass early; refinement therefore never degrades
/// the layout.
pub fn refine(occ: &mut Occupancy, max_passes: usize) -> PlaceResult<RefineStats> {
    let mut stats = RefineStats::default();
    for _ in 0..max_passes {
        stats.passes += 1;
        let mut moved = 0usize;
        for idx in 0..occ.placed().len() {
            let entry = occ.placed()[idx];
            if !entry.is_physical() || profile_for(entry.kind).edge {
                continue;
            }
            let before = occ.com_distance()?;
            for (dx, dy) in STEPS {
                let cand = entry.rect.translated(dx, dy);
                if !occ.within_bounds(&cand) {
                    continue;
                }
                if occ.blocks_except(idx, &cand) {
                    continue;
                }
                if occ.com_distance_moved(idx, &cand)? < before {
                    occ.move_entry(idx, cand);
                    moved += 1;
                    break;
                }
            }
        }
        stats.moves += moved;
        if moved == 0 {
            break;
        }
    }
    Ok(stats)
}
