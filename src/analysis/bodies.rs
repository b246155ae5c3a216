use super::nucleus::Nuclei;
use crate::scene::RegionId;

/// A group of regions inferred to be the faces of one solid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Body {
    regions: Vec<RegionId>,
}

impl Body {
    /// The regions of the body, ascending.
    #[must_use]
    pub fn regions(&self) -> &[RegionId] {
        &self.regions
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if the body has no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns `true` if `region` is one of the faces of this body.
    #[must_use]
    pub fn contains(&self, region: RegionId) -> bool {
        self.regions.binary_search(&region).is_ok()
    }
}

/// Turns the final nuclei into bodies, ordered by smallest region.
#[must_use]
pub fn extract_bodies(nuclei: &Nuclei) -> Vec<Body> {
    nuclei
        .groups()
        .into_iter()
        .map(|mut regions| {
            regions.sort_unstable();
            Body { regions }
        })
        .collect()
}
