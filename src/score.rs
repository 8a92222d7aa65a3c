//! Candidate scoring: global mass balance, optionally blended with the
//! candidate's own distance to the board center.

use crate::geom::Rect;
use crate::occupancy::Occupancy;

/// Score a candidate rectangle against the current occupancy. Lower is
/// better. The first term is the distance of the would-be center of mass to
/// the board center; `com_weight` blends in the candidate's own centering to
/// break ties toward compact layouts (0 disables the local term).
pub fn score(occ: &Occupancy, rect: &Rect, com_weight: f32) -> f32 {
    let board_center = occ.board_center();
    let mut value = occ.com_with(rect).distance(board_center);
    if com_weight > 0.0 {
        value += com_weight * rect.center().distance(board_center);
    }
    value
}
