use std::fmt;

use super::thresholds::Thresholds;
use crate::scene::{RegionId, VertexId};

/// Shape of the line junction at a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Junction {
    /// Two lines meeting at a corner.
    L,
    /// Three lines, two of them continuing straight through.
    T,
    /// Three lines with every sector narrower than a half turn.
    Fork,
    /// Three lines with one sector wider than a half turn.
    Arrow,
    /// Anything else.
    Multi,
}

impl fmt::Display for Junction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::L => "L",
            Self::T => "T",
            Self::Fork => "FORK",
            Self::Arrow => "ARROW",
            Self::Multi => "MULTI",
        };
        f.write_str(name)
    }
}

/// A vertex together with its measured sectors and junction type.
#[derive(Debug, Clone)]
pub struct ClassifiedVertex {
    pub vertex: VertexId,
    pub junction: Junction,
    /// Regions around the vertex in kind-list order.
    pub regions: Vec<RegionId>,
    pub angles: Vec<f64>,
}

/// Classifies a vertex from its sector angles.
///
/// The result depends on the angle list alone, never on which vertex
/// produced it.
#[must_use]
pub fn classify_vertex(angles: &[f64], thresholds: &Thresholds) -> Junction {
    let half_turn = 180.0;
    match angles {
        [] => Junction::L,
        [_, _, _] => {
            if angles
                .iter()
                .any(|a| (a - half_turn).abs() <= thresholds.t_tolerance_deg)
            {
                Junction::T
            } else if angles.iter().all(|&a| a < thresholds.arrow_cutoff_deg) {
                Junction::Fork
            } else if angles.iter().any(|&a| a > thresholds.arrow_cutoff_deg) {
                Junction::Arrow
            } else {
                Junction::Multi
            }
        }
        _ => Junction::Multi,
    }
}
