use std::fmt;

use super::junction::Junction;
use crate::scene::RegionId;

/// Merge pass that produced a [`GroupingEvent::Merged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergePhase {
    /// Strong evidence: pairs linked by several vertices.
    Global,
    /// Weak evidence: a lone region with a single neighbour.
    SingleBody,
}

impl fmt::Display for MergePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Global => "GLOBAL",
            Self::SingleBody => "SINGLEBODY",
        })
    }
}

/// One step of a grouping run, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupingEvent {
    /// A vertex was assigned a junction type.
    Classified { vertex: String, junction: Junction },
    /// A neighbour coincides with the vertex; its ray was taken along +x.
    DegenerateVector { vertex: String },
    /// The nuclei holding `a` and `b` were merged.
    Merged {
        phase: MergePhase,
        a: RegionId,
        b: RegionId,
    },
}

impl fmt::Display for GroupingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classified { vertex, junction } => write!(f, "vertex {vertex} is {junction}"),
            Self::DegenerateVector { vertex } => {
                write!(f, "vertex {vertex} has a zero-length ray")
            }
            Self::Merged { phase, a, b } => write!(f, "{phase}: merged region {a} with region {b}"),
        }
    }
}
