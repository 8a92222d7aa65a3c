//! Closed component-type set and the constraint profile derived from it.
//!
//! Profiles are a total, immutable mapping: every type resolves to exactly
//! one profile, and the engine never dispatches on anything but this enum.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Controller,
    Connector,
    Bus,
    Crystal,
    /// Synthetic keep-clear occupant created by the engine alongside certain
    /// edge placements. Never accepted as run input.
    ExclusionZone,
}

impl ComponentType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Controller => "CONTROLLER",
            Self::Connector => "CONNECTOR",
            Self::Bus => "BUS",
            Self::Crystal => "CRYSTAL",
            Self::ExclusionZone => "EXCLUSION",
        }
    }
}

/// Per-type placement constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstraintProfile {
    /// Must sit flush against one of the four board edges.
    pub edge: bool,
    /// Keep-clear footprint `(depth, span)` projected into the board from
    /// the occupied edge.
    pub keepout: Option<(i32, i32)>,
    /// Must lie within [`PROXIMITY_RADIUS`](crate::candidates::PROXIMITY_RADIUS)
    /// of a placed instance of this type.
    pub proximity: Option<ComponentType>,
    /// Must align on the board edge opposite a placed instance of this type
    /// with matching dimensions.
    pub parallel: Option<ComponentType>,
}

impl ConstraintProfile {
    const NONE: ConstraintProfile = ConstraintProfile {
        edge: false,
        keepout: None,
        proximity: None,
        parallel: None,
    };
}

pub fn profile_for(kind: ComponentType) -> ConstraintProfile {
    match kind {
        ComponentType::Controller => ConstraintProfile::NONE,
        ComponentType::Connector => ConstraintProfile {
            edge: true,
            keepout: Some((10, 15)),
            proximity: None,
            parallel: None,
        },
        ComponentType::Bus => ConstraintProfile {
            edge: true,
            keepout: None,
            proximity: None,
            parallel: Some(ComponentType::Bus),
        },
        ComponentType::Crystal => ConstraintProfile {
            edge: false,
            keepout: None,
            proximity: Some(ComponentType::Controller),
            parallel: None,
        },
        ComponentType::ExclusionZone => ConstraintProfile::NONE,
    }
}

/// Number of constraint fields present on a profile. Used only as an
/// ordering hint for the processing sequence.
pub fn active_constraint_count(profile: &ConstraintProfile) -> usize {
    usize::from(profile.edge)
        + usize::from(profile.keepout.is_some())
        + usize::from(profile.proximity.is_some())
        + usize::from(profile.parallel.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_counts_match_profiles() {
        let count = |kind| active_constraint_count(&profile_for(kind));
        assert_eq!(count(ComponentType::Controller), 0);
        assert_eq!(count(ComponentType::Crystal), 1);
        assert_eq!(count(ComponentType::Connector), 2);
        assert_eq!(count(ComponentType::Bus), 2);
        assert_eq!(count(ComponentType::ExclusionZone), 0);
    }
}
