//! Constraint-driven placement of rectangular components on a bounded
//! circuit-board footprint.
//!
//! Each component type carries a constraint profile (board-edge adjacency,
//! keepout footprint, proximity to another type, parallel alignment with a
//! peer). The engine places components one at a time, scoring every legal
//! candidate by the distance of the would-be center of mass to the board
//! center, then runs a local refinement pass over the committed layout.
//!
//! # Pipeline
//!
//! ```text
//! PlaceConfig
//!   → ordering            (input / ascending / descending constraint count)
//!   → candidate generation (per-profile branches)
//!   → scoring             (global balance + local centering blend)
//!   → greedy commit       (occupancy model, synthesized exclusion zones)
//!   → refinement          (unit displacements that improve balance)
//!   → PlacementResult     (placed records, unplaced causes, keepouts)
//! ```

pub mod candidates;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod geom;
pub mod occupancy;
pub mod profile;
pub mod refine;
pub mod score;
pub mod streaming;
pub mod svg;

pub use engine::{run, run_with_stream, PlacementResult};
