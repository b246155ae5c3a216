use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Identifier of a planar region of the drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a kind-list: either a neighbouring vertex or a region.
///
/// In JSON, vertex ids are strings and region ids are integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KindEntry {
    Vertex(String),
    Region(RegionId),
}

impl From<&str> for KindEntry {
    fn from(name: &str) -> Self {
        Self::Vertex(name.to_owned())
    }
}

impl From<u32> for KindEntry {
    fn from(id: u32) -> Self {
        Self::Region(RegionId(id))
    }
}

/// Builds kind-list entries from a whitespace-separated description.
///
/// Tokens that parse as unsigned integers are regions, everything else is a
/// vertex name: `"B 1 C 2 D 0 B"`.
#[must_use]
pub fn kind_entries(text: &str) -> Vec<KindEntry> {
    text.split_whitespace()
        .map(|token| match token.parse::<u32>() {
            Ok(id) => KindEntry::from(id),
            Err(_) => KindEntry::from(token),
        })
        .collect()
}

/// A validated kind-list.
///
/// The entries alternate neighbour vertex and region, starting with a
/// neighbour, and the list is closed by repeating the first neighbour:
/// `n0 r0 n1 r1 ... nk rk n0`. Region `ri` lies between `ni` and `ni+1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindList {
    entries: Vec<KindEntry>,
}

impl KindList {
    /// Validates the raw entries of the kind-list recorded at `vertex`.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::MalformedKindList` if the entries do not
    /// alternate vertex and region, are not closed, list the vertex as its
    /// own neighbour, or name no neighbour at all.
    pub fn new(vertex: &str, entries: Vec<KindEntry>) -> Result<Self, SceneError> {
        let malformed = |reason: &str| SceneError::MalformedKindList {
            vertex: vertex.to_owned(),
            reason: reason.to_owned(),
        };

        if entries.len() < 3 || entries.len() % 2 == 0 {
            return Err(malformed("expected an odd number of entries, at least 3"));
        }
        for (i, entry) in entries.iter().enumerate() {
            match entry {
                KindEntry::Vertex(name) if i % 2 == 0 => {
                    if name == vertex {
                        return Err(malformed("vertex lists itself as a neighbour"));
                    }
                }
                KindEntry::Region(_) if i % 2 == 1 => {}
                KindEntry::Vertex(_) => {
                    return Err(malformed(&format!("entry {i} should be a region")));
                }
                KindEntry::Region(_) => {
                    return Err(malformed(&format!("entry {i} should be a vertex")));
                }
            }
        }
        if entries.first() != entries.last() {
            return Err(malformed("list is not closed by its first neighbour"));
        }

        Ok(Self { entries })
    }

    /// Returns the raw entries, closing neighbour included.
    #[must_use]
    pub fn entries(&self) -> &[KindEntry] {
        &self.entries
    }

    /// Iterates the neighbouring vertex names in angular order, without the
    /// closing repeat.
    pub fn neighbors(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries[..self.entries.len() - 1]
            .iter()
            .filter_map(|entry| match entry {
                KindEntry::Vertex(name) => Some(name.as_str()),
                KindEntry::Region(_) => None,
            })
    }

    /// Iterates the adjacent regions in angular order.
    pub fn regions(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            KindEntry::Region(id) => Some(*id),
            KindEntry::Vertex(_) => None,
        })
    }
}
