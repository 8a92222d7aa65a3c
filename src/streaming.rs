//! NDJSON progress events for the placement engine.
//!
//! Emits one JSON object per line to stderr so placement decisions and
//! failures can be consumed independently of stdout output.
//!
//! Event types:
//!   - run_started: board and component totals
//!   - phase_started / phase_complete: placement and refinement phases
//!   - component_placed: committed position with score and candidate count
//!   - component_unplaced: failure with its cause
//!   - run_complete: final summary envelope

use std::time::Duration;

use crate::candidates::UnplacedCause;
use crate::profile::ComponentType;

#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub board: (i32, i32),
    pub total_components: usize,
    pub order: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacePhase {
    CorePlacement,
    Refine,
}

impl PlacePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CorePlacement => "core_placement",
            Self::Refine => "refine",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PhaseStartedEvent {
    pub phase: PlacePhase,
    pub total_components: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct ComponentPlacedEvent {
    pub component_index: usize,
    pub total_components: usize,
    pub kind: ComponentType,
    pub x: i32,
    pub y: i32,
    pub rotated: bool,
    pub score: f32,
    pub candidates: usize,
}

#[derive(Debug, Clone)]
pub struct ComponentUnplacedEvent {
    pub component_index: usize,
    pub kind: ComponentType,
    pub cause: UnplacedCause,
}

#[derive(Debug, Clone)]
pub struct PhaseCompleteEvent {
    pub phase: PlacePhase,
    pub elapsed_ms: u64,
    pub moves: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub placed: usize,
    pub unplaced: usize,
    pub keepouts: usize,
    pub com_distance: Option<f32>,
    pub elapsed_ms: u64,
}

/// Streaming emitter for NDJSON events.
///
/// Emits events to stderr when enabled; a disabled emitter is free.
#[derive(Debug, Clone, Copy)]
pub struct StreamEmitter {
    enabled: bool,
}

impl StreamEmitter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit_json(&self, json: &str) {
        if self.enabled {
            eprintln!("{}", json);
        }
    }

    pub fn emit_run_started(&self, event: &RunStartedEvent) {
        let order = serde_json::to_string(&event.order).unwrap_or("\"input\"".to_string());
        let json = format!(
            r#"{{"event":"run_started","board":[{},{}],"total_components":{},"order":{}}}"#,
            event.board.0, event.board.1, event.total_components, order
        );
        self.emit_json(&json);
    }

    pub fn emit_phase_started(&self, event: &PhaseStartedEvent) {
        let total = event
            .total_components
            .map(|n| n.to_string())
            .unwrap_or("null".to_string());
        let json = format!(
            r#"{{"event":"phase_started","phase":"{}","total_components":{}}}"#,
            event.phase.as_str(),
            total
        );
        self.emit_json(&json);
    }

    pub fn emit_component_placed(&self, event: &ComponentPlacedEvent) {
        let progress_pct = if event.total_components > 0 {
            (event.component_index + 1) as f64 / event.total_components as f64 * 100.0
        } else {
            0.0
        };
        let json = format!(
            r#"{{"event":"component_placed","component_index":{},"total_components":{},"kind":"{}","x":{},"y":{},"rotated":{},"score":{:.6},"candidates":{},"progress_pct":{:.1}}}"#,
            event.component_index,
            event.total_components,
            event.kind.label(),
            event.x,
            event.y,
            event.rotated,
            event.score,
            event.candidates,
            progress_pct
        );
        self.emit_json(&json);
    }

    pub fn emit_component_unplaced(&self, event: &ComponentUnplacedEvent) {
        let json = format!(
            r#"{{"event":"component_unplaced","component_index":{},"kind":"{}","cause":"{}"}}"#,
            event.component_index,
            event.kind.label(),
            event.cause.as_str()
        );
        self.emit_json(&json);
    }

    pub fn emit_phase_complete(&self, event: &PhaseCompleteEvent) {
        let moves = event
            .moves
            .map(|n| n.to_string())
            .unwrap_or("null".to_string());
        let json = format!(
            r#"{{"event":"phase_complete","phase":"{}","elapsed_ms":{},"moves":{}}}"#,
            event.phase.as_str(),
            event.elapsed_ms,
            moves
        );
        self.emit_json(&json);
    }

    pub fn emit_run_complete(&self, event: &RunCompleteEvent) {
        let com = event
            .com_distance
            .map(|v| format!("{:.6}", v))
            .unwrap_or("null".to_string());
        let json = format!(
            r#"{{"event":"run_complete","placed":{},"unplaced":{},"keepouts":{},"com_distance":{},"elapsed_ms":{}}}"#,
            event.placed, event.unplaced, event.keepouts, com, event.elapsed_ms
        );
        self.emit_json(&json);
    }

    pub fn emit_error(&self, code: &str, message: &str) {
        let code = serde_json::to_string(code).unwrap_or("\"unknown\"".to_string());
        let message = serde_json::to_string(message).unwrap_or("\"Unknown error\"".to_string());
        let json = format!(r#"{{"event":"error","code":{},"message":{}}}"#, code, message);
        self.emit_json(&json);
    }
}

pub(crate) fn duration_ms(d: Duration) -> u64 {
    d.as_millis().try_into().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_started_format() {
        let emitter = StreamEmitter::enabled();
        emitter.emit_run_started(&RunStartedEvent {
            board: (50, 50),
            total_components: 7,
            order: "ascending".to_string(),
        });
    }

    #[test]
    fn test_disabled_emitter() {
        let emitter = StreamEmitter::disabled();
        assert!(!emitter.is_enabled());
        // Should not panic
        emitter.emit_component_placed(&ComponentPlacedEvent {
            component_index: 0,
            total_components: 1,
            kind: ComponentType::Controller,
            x: 23,
            y: 23,
            rotated: false,
            score: 0.7,
            candidates: 1,
        });
    }
}
