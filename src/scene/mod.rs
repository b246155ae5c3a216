pub mod kind_list;
mod load;

pub use kind_list::{kind_entries, KindEntry, KindList, RegionId};

use std::collections::{BTreeSet, HashMap};

use slotmap::SlotMap;

use crate::error::SceneError;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the scene.
    pub struct VertexId;
}

/// Data associated with one vertex of the line drawing.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The vertex name, unique within the scene.
    pub name: String,
    /// The 2D position of the vertex in the drawing.
    pub point: Point2,
    /// Neighbours and regions around the vertex, in angular order.
    pub kind_list: KindList,
}

/// A line drawing: vertices with their kind-lists, plus the background region.
///
/// Vertices reference each other by name inside kind-lists. References are
/// resolved lazily, so vertices may be added in any order; [`Scene::validate`]
/// checks that every reference resolves.
#[derive(Debug, Clone)]
pub struct Scene {
    vertices: SlotMap<VertexId, VertexData>,
    names: HashMap<String, VertexId>,
    background: RegionId,
}

impl Scene {
    /// Creates an empty scene whose outside is the given region.
    #[must_use]
    pub fn new(background: RegionId) -> Self {
        Self {
            vertices: SlotMap::with_key(),
            names: HashMap::new(),
            background,
        }
    }

    /// Inserts a vertex and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::DuplicateVertex` if the name is taken, or
    /// `SceneError::MalformedKindList` if the kind-list is not a closed,
    /// alternating vertex/region sequence.
    pub fn add_vertex(
        &mut self,
        name: impl Into<String>,
        point: Point2,
        kind_list: Vec<KindEntry>,
    ) -> Result<VertexId, SceneError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(SceneError::DuplicateVertex(name));
        }
        let kind_list = KindList::new(&name, kind_list)?;
        let id = self.vertices.insert(VertexData {
            name: name.clone(),
            point,
            kind_list,
        });
        self.names.insert(name, id);
        Ok(id)
    }

    /// Returns the vertex data for an ID, if present.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&VertexData> {
        self.vertices.get(id)
    }

    /// Looks a vertex up by name.
    #[must_use]
    pub fn vertex_by_name(&self, name: &str) -> Option<&VertexData> {
        self.names.get(name).and_then(|&id| self.vertices.get(id))
    }

    /// Iterates all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the scene has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The region standing for everything outside the objects.
    #[must_use]
    pub fn background(&self) -> RegionId {
        self.background
    }

    /// Every distinct non-background region mentioned by any kind-list.
    #[must_use]
    pub fn regions(&self) -> BTreeSet<RegionId> {
        self.vertices
            .values()
            .flat_map(|v| v.kind_list.regions())
            .filter(|&r| r != self.background)
            .collect()
    }

    /// Resolves the coordinates of a vertex's neighbours, in kind-list order.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::MissingVertexReference` if a neighbour is not in
    /// the scene.
    pub fn neighbor_points(&self, vertex: &VertexData) -> Result<Vec<Point2>, SceneError> {
        vertex
            .kind_list
            .neighbors()
            .map(|name| {
                self.vertex_by_name(name)
                    .map(|n| n.point)
                    .ok_or_else(|| SceneError::MissingVertexReference {
                        vertex: vertex.name.clone(),
                        missing: name.to_owned(),
                    })
            })
            .collect()
    }

    /// Checks that every kind-list reference names a vertex of this scene.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::MissingVertexReference` for the first dangling
    /// reference found.
    pub fn validate(&self) -> Result<(), SceneError> {
        for vertex in self.vertices.values() {
            if let Some(missing) = vertex
                .kind_list
                .neighbors()
                .find(|name| !self.names.contains_key(*name))
            {
                return Err(SceneError::MissingVertexReference {
                    vertex: vertex.name.clone(),
                    missing: missing.to_owned(),
                });
            }
        }
        Ok(())
    }
}
