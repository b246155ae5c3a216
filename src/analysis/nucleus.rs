use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::unionfind::UnionFind;
use tracing::debug;

use super::events::{GroupingEvent, MergePhase};
use super::links::Link;
use crate::scene::RegionId;

/// Partition of the non-background regions into nuclei.
///
/// Regions are kept sorted and addressed by dense index; nuclei are the
/// classes of a union-find over those indices. Merging only ever joins two
/// classes, so the set of regions never changes.
#[derive(Debug, Clone)]
pub struct Nuclei {
    regions: Vec<RegionId>,
    index: HashMap<RegionId, usize>,
    sets: UnionFind<usize>,
    /// Nucleus size, valid at class representatives.
    sizes: Vec<usize>,
}

impl Nuclei {
    /// Starts with every region in a nucleus of its own.
    #[must_use]
    pub fn new(regions: impl IntoIterator<Item = RegionId>) -> Self {
        let regions: Vec<RegionId> = regions
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index = regions.iter().enumerate().map(|(i, &r)| (r, i)).collect();
        let n = regions.len();
        Self {
            regions,
            index,
            sets: UnionFind::new(n),
            sizes: vec![1; n],
        }
    }

    /// Number of regions being partitioned.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of nuclei.
    #[must_use]
    pub fn len(&self) -> usize {
        (0..self.regions.len())
            .filter(|&i| self.sets.find(i) == i)
            .count()
    }

    /// Returns `true` if there are no regions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns `true` if both regions are known and share a nucleus.
    #[must_use]
    pub fn same_nucleus(&self, a: RegionId, b: RegionId) -> bool {
        match (self.index.get(&a), self.index.get(&b)) {
            (Some(&i), Some(&j)) => self.sets.equiv(i, j),
            _ => false,
        }
    }

    /// Size of the nucleus holding `region`, or 0 for an unknown region.
    #[must_use]
    pub fn nucleus_len(&self, region: RegionId) -> usize {
        self.index
            .get(&region)
            .map_or(0, |&i| self.sizes[self.sets.find(i)])
    }

    /// Joins the nuclei holding `a` and `b`.
    ///
    /// Returns `false` if they already share a nucleus or either region is
    /// unknown.
    pub fn merge(&mut self, a: RegionId, b: RegionId) -> bool {
        let (Some(&i), Some(&j)) = (self.index.get(&a), self.index.get(&b)) else {
            return false;
        };
        let (ri, rj) = (self.sets.find_mut(i), self.sets.find_mut(j));
        if ri == rj {
            return false;
        }
        let size = self.sizes[ri] + self.sizes[rj];
        self.sets.union(ri, rj);
        let root = self.sets.find_mut(ri);
        self.sizes[root] = size;
        true
    }

    /// Merges every pair linked at least `strong_evidence` times, repeating
    /// until a full pass changes nothing.
    ///
    /// Pairs are visited in ascending order. Returns the merges performed.
    pub fn merge_global(&mut self, links: &[Link], strong_evidence: usize) -> Vec<GroupingEvent> {
        let mut evidence: BTreeMap<Link, usize> = BTreeMap::new();
        for link in links {
            *evidence.entry(*link).or_default() += 1;
        }

        let mut events = Vec::new();
        loop {
            let mut merged = false;
            for (link, &count) in &evidence {
                if count >= strong_evidence && self.merge(link.a(), link.b()) {
                    debug!(a = %link.a(), b = %link.b(), count, "global merge");
                    events.push(GroupingEvent::Merged {
                        phase: MergePhase::Global,
                        a: link.a(),
                        b: link.b(),
                    });
                    merged = true;
                }
            }
            if !merged {
                break;
            }
        }
        events
    }

    /// Attaches each region still alone in its nucleus to its neighbour when
    /// it has exactly one, repeating until nothing changes.
    ///
    /// Every link counts once, whatever its evidence. Regions are scanned in
    /// ascending order and the scan restarts after each merge. Returns the
    /// merges performed.
    pub fn merge_single_body(&mut self, links: &[Link]) -> Vec<GroupingEvent> {
        let mut adjacency: BTreeMap<RegionId, BTreeSet<RegionId>> = BTreeMap::new();
        for link in links {
            adjacency.entry(link.a()).or_default().insert(link.b());
            adjacency.entry(link.b()).or_default().insert(link.a());
        }

        let mut events = Vec::new();
        while let Some((region, neighbor)) = self.lone_region_with_one_neighbor(&adjacency) {
            if !self.merge(region, neighbor) {
                break;
            }
            debug!(region = %region, neighbor = %neighbor, "single-body merge");
            events.push(GroupingEvent::Merged {
                phase: MergePhase::SingleBody,
                a: region,
                b: neighbor,
            });
        }
        events
    }

    /// First region, in ascending order, that is alone in its nucleus and has
    /// exactly one known neighbour.
    fn lone_region_with_one_neighbor(
        &self,
        adjacency: &BTreeMap<RegionId, BTreeSet<RegionId>>,
    ) -> Option<(RegionId, RegionId)> {
        self.regions.iter().find_map(|&region| {
            if self.nucleus_len(region) != 1 {
                return None;
            }
            let mut neighbors = adjacency.get(&region)?.iter();
            match (neighbors.next(), neighbors.next()) {
                (Some(&neighbor), None) if self.index.contains_key(&neighbor) => {
                    Some((region, neighbor))
                }
                _ => None,
            }
        })
    }

    /// The current nuclei, each sorted ascending, ordered by smallest region.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<RegionId>> {
        let mut groups: Vec<Vec<RegionId>> = Vec::new();
        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        for (i, &region) in self.regions.iter().enumerate() {
            let root = self.sets.find(i);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(region);
        }
        groups
    }
}
