//! Time-to-goal horizon

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Months needed to reach a savings goal
///
/// Serializes as a number of months, or `null` when the goal can never be
/// reached at the current contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalHorizon {
    Months(u32),
    Unreachable,
}

impl GoalHorizon {
    pub fn months(&self) -> Option<u32> {
        match self {
            GoalHorizon::Months(n) => Some(*n),
            GoalHorizon::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, GoalHorizon::Months(_))
    }
}

impl Serialize for GoalHorizon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GoalHorizon::Months(n) => serializer.serialize_u32(*n),
            GoalHorizon::Unreachable => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for GoalHorizon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<u32>::deserialize(deserializer)? {
            Some(n) => GoalHorizon::Months(n),
            None => GoalHorizon::Unreachable,
        })
    }
}

/// Reads a present-but-null horizon as `Unreachable` rather than absent
pub(crate) fn deserialize_present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<GoalHorizon>, D::Error> {
    GoalHorizon::deserialize(deserializer).map(Some)
}
