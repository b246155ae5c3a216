/// Half-width of the window around 180° inside which a sector makes a T.
pub const T_JUNCTION_TOLERANCE_DEG: f64 = 5.0;

/// A sector wider than this makes an ARROW; a vertex whose sectors all stay
/// below it is a FORK.
pub const ARROW_CUTOFF_DEG: f64 = 180.0;

/// Number of links between two regions needed to merge them in the global
/// pass.
pub const STRONG_EVIDENCE: usize = 2;

/// Tunable thresholds of the junction classifier and the merger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// See [`T_JUNCTION_TOLERANCE_DEG`].
    pub t_tolerance_deg: f64,
    /// See [`ARROW_CUTOFF_DEG`].
    pub arrow_cutoff_deg: f64,
    /// See [`STRONG_EVIDENCE`].
    pub strong_evidence: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            t_tolerance_deg: T_JUNCTION_TOLERANCE_DEG,
            arrow_cutoff_deg: ARROW_CUTOFF_DEG,
            strong_evidence: STRONG_EVIDENCE,
        }
    }
}
