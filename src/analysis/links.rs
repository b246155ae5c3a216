use super::junction::{ClassifiedVertex, Junction};
use super::thresholds::Thresholds;
use crate::scene::RegionId;

/// Evidence that two regions belong to the same body.
///
/// The pair is unordered and stored smallest first; a region is never
/// linked to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Link {
    a: RegionId,
    b: RegionId,
}

impl Link {
    /// Creates a link between two distinct regions, or `None` if they are
    /// the same region.
    #[must_use]
    pub fn new(a: RegionId, b: RegionId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { a, b }),
            std::cmp::Ordering::Greater => Some(Self { a: b, b: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller region of the pair.
    #[must_use]
    pub fn a(&self) -> RegionId {
        self.a
    }

    /// The larger region of the pair.
    #[must_use]
    pub fn b(&self) -> RegionId {
        self.b
    }

    /// Returns `true` if either side is `region`.
    #[must_use]
    pub fn touches(&self, region: RegionId) -> bool {
        self.a == region || self.b == region
    }
}

/// Links asserted by a single junction, before background filtering.
///
/// `regions` are the regions around the vertex in kind-list order and
/// `angles` the matching sector angles.
#[must_use]
pub fn junction_links(
    junction: Junction,
    regions: &[RegionId],
    angles: &[f64],
    thresholds: &Thresholds,
) -> Vec<Link> {
    if regions.len() < 2 {
        return Vec::new();
    }
    let pairs: Vec<(usize, usize)> = match (junction, regions.len()) {
        (Junction::Fork, 3) => vec![(0, 1), (1, 2), (0, 2)],
        (Junction::Arrow, 3) => {
            let wide = angles
                .iter()
                .position(|&a| a > thresholds.arrow_cutoff_deg);
            match wide {
                Some(0) => vec![(1, 2)],
                Some(1) => vec![(0, 2)],
                _ => vec![(0, 1)],
            }
        }
        _ => Vec::new(),
    };
    pairs
        .into_iter()
        .filter_map(|(i, j)| Link::new(regions[i], regions[j]))
        .collect()
}

/// Collects the links of every classified vertex.
///
/// Duplicates are kept: each copy is one more vertex vouching for the pair.
/// Links touching `background` are dropped.
#[must_use]
pub fn generate_links(
    background: RegionId,
    classified: &[ClassifiedVertex],
    thresholds: &Thresholds,
) -> Vec<Link> {
    classified
        .iter()
        .flat_map(|cv| junction_links(cv.junction, &cv.regions, &cv.angles, thresholds))
        .filter(|link| !link.touches(background))
        .collect()
}
