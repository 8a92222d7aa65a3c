use serde::{Deserialize, Serialize};

use crate::error::{PlaceError, PlaceResult};
use crate::profile::ComponentType;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceConfig {
    pub board: BoardSpec,
    pub components: Vec<ComponentSpec>,
    #[serde(default)]
    pub order: OrderPolicy,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub refine_passes: Option<usize>,
    #[serde(default)]
    pub com_weight: Option<f32>,
    #[serde(default)]
    pub output: Option<OutputSpec>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BoardSpec {
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub kind: ComponentType,
    pub width: i32,
    pub height: i32,
    #[serde(default = "default_count")]
    pub count: usize,
}

/// Sequence in which components are handed to the engine. Measurably changes
/// outcomes, so it is an explicit parameter rather than a baked-in default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPolicy {
    #[default]
    Input,
    Ascending,
    Descending,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputSpec {
    pub path: String,
    pub format: String,
}

fn default_count() -> usize {
    1
}

impl PlaceConfig {
    pub fn normalized(&self) -> PlaceResult<PlaceConfig> {
        let mut cfg = self.clone();
        cfg.validate()?;
        if cfg.refine_passes.is_none() {
            cfg.refine_passes = Some(1);
        }
        if cfg.com_weight.is_none() {
            cfg.com_weight = Some(0.2);
        }
        Ok(cfg)
    }

    pub fn validate(&self) -> PlaceResult<()> {
        if self.board.width <= 0 || self.board.height <= 0 {
            return Err(PlaceError::Invalid("board dimensions must be positive".into()));
        }
        if self.components.is_empty() {
            return Err(PlaceError::Invalid("component list is empty".into()));
        }
        if let Some(weight) = self.com_weight {
            if weight < 0.0 {
                return Err(PlaceError::Invalid("com_weight must be >= 0".into()));
            }
        }
        if let Some(spec) = &self.output {
            match spec.format.as_str() {
                "layout" | "svg" => {}
                other => {
                    return Err(PlaceError::Invalid(format!(
                        "unknown output format {other:?} (expected layout or svg)"
                    )));
                }
            }
        }
        for c in &self.components {
            if c.kind == ComponentType::ExclusionZone {
                return Err(PlaceError::Invalid(
                    "exclusion zones are synthesized by the engine and cannot be supplied".into(),
                ));
            }
            if c.width <= 0 || c.height <= 0 {
                return Err(PlaceError::Invalid(format!(
                    "component {} dimensions must be positive",
                    c.kind.label()
                )));
            }
            if c.count == 0 {
                return Err(PlaceError::Invalid("component count must be > 0".into()));
            }
        }
        Ok(())
    }
}
