//! Occupancy model: the board dimensions plus every committed rectangle, in
//! placement order.
//!
//! Physical rectangles never overlap each other or any exclusion zone.
//! Exclusion zones never overlap a physical rectangle but may overlap other
//! exclusion zones. Validation happens before [`Occupancy::insert`]; insert
//! itself only appends.

use crate::error::{PlaceError, PlaceResult};
use crate::geom::{Point, Rect};
use crate::profile::ComponentType;

#[derive(Clone, Copy, Debug)]
pub struct Placed {
    pub kind: ComponentType,
    pub rect: Rect,
    pub rotated: bool,
    /// Index into the run's input sequence; `None` for synthesized
    /// exclusion zones.
    pub input_index: Option<usize>,
}

impl Placed {
    pub fn is_physical(&self) -> bool {
        self.kind != ComponentType::ExclusionZone
    }
}

#[derive(Clone, Debug)]
pub struct Occupancy {
    width: i32,
    height: i32,
    placed: Vec<Placed>,
}

impl Occupancy {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            placed: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn board_center(&self) -> Point {
        Point::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    pub fn diagonal(&self) -> f32 {
        let w = self.width as f32;
        let h = self.height as f32;
        (w * w + h * h).sqrt()
    }

    pub fn placed(&self) -> &[Placed] {
        &self.placed
    }

    pub fn within_bounds(&self, rect: &Rect) -> bool {
        rect.x >= 0 && rect.y >= 0 && rect.x + rect.w <= self.width && rect.y + rect.h <= self.height
    }

    /// Legality test for a physical candidate: it may not intersect any
    /// committed entry, exclusion zones included.
    pub fn blocks(&self, rect: &Rect) -> bool {
        self.placed.iter().any(|p| p.rect.overlaps(rect))
    }

    /// Legality test for an exclusion-zone candidate: only physical entries
    /// block it.
    pub fn blocks_physical(&self, rect: &Rect) -> bool {
        self.placed
            .iter()
            .filter(|p| p.is_physical())
            .any(|p| p.rect.overlaps(rect))
    }

    /// Same as [`blocks`](Self::blocks) but ignoring the entry at `skip`,
    /// used when testing a translation of an already-committed entry.
    pub fn blocks_except(&self, skip: usize, rect: &Rect) -> bool {
        self.placed
            .iter()
            .enumerate()
            .any(|(idx, p)| idx != skip && p.rect.overlaps(rect))
    }

    pub fn insert(&mut self, entry: Placed) {
        self.placed.push(entry);
    }

    pub fn move_entry(&mut self, idx: usize, rect: Rect) {
        self.placed[idx].rect = rect;
    }

    /// Mean of the centers of all physical entries.
    pub fn center_of_mass(&self) -> PlaceResult<Point> {
        let mut sum_x = 0.0f32;
        let mut sum_y = 0.0f32;
        let mut count = 0usize;
        for p in self.placed.iter().filter(|p| p.is_physical()) {
            let c = p.rect.center();
            sum_x += c.x;
            sum_y += c.y;
            count += 1;
        }
        if count == 0 {
            return Err(PlaceError::EmptyPlacement);
        }
        Ok(Point::new(sum_x / count as f32, sum_y / count as f32))
    }

    pub fn com_distance(&self) -> PlaceResult<f32> {
        Ok(self.center_of_mass()?.distance(self.board_center()))
    }

    /// Center of mass as it would be with `rect` committed as a physical
    /// entry. Total infallibly: the hypothetical set is never empty.
    pub fn com_with(&self, rect: &Rect) -> Point {
        let c = rect.center();
        let mut sum_x = c.x;
        let mut sum_y = c.y;
        let mut count = 1usize;
        for p in self.placed.iter().filter(|p| p.is_physical()) {
            let pc = p.rect.center();
            sum_x += pc.x;
            sum_y += pc.y;
            count += 1;
        }
        Point::new(sum_x / count as f32, sum_y / count as f32)
    }

    /// COM-to-board-center distance with the physical entry at `idx`
    /// relocated to `rect`.
    pub fn com_distance_moved(&self, idx: usize, rect: &Rect) -> PlaceResult<f32> {
        let mut sum_x = 0.0f32;
        let mut sum_y = 0.0f32;
        let mut count = 0usize;
        for (i, p) in self.placed.iter().enumerate() {
            if !p.is_physical() {
                continue;
            }
            let c = if i == idx { rect.center() } else { p.rect.center() };
            sum_x += c.x;
            sum_y += c.y;
            count += 1;
        }
        if count == 0 {
            return Err(PlaceError::EmptyPlacement);
        }
        let com = Point::new(sum_x / count as f32, sum_y / count as f32);
        Ok(com.distance(self.board_center()))
    }
}
