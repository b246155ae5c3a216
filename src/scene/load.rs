use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use serde::Deserialize;

use super::{KindEntry, RegionId, Scene};
use crate::error::{LoadError, Result, SceneError};
use crate::math::Point2;

/// On-disk layout of a scene: coordinates and kind-lists in separate maps,
/// keyed by vertex name. Every key is optional.
#[derive(Debug, Deserialize)]
struct SceneDocument {
    #[serde(default)]
    background: Option<RegionId>,
    #[serde(default)]
    vertices: BTreeMap<String, [f64; 2]>,
    #[serde(default)]
    kind_lists: BTreeMap<String, Vec<KindEntry>>,
    #[serde(default)]
    regions: Option<Vec<RegionId>>,
}

impl Scene {
    /// Parses a scene from a JSON document that names its own background.
    ///
    /// ```json
    /// {
    ///   "background": 0,
    ///   "vertices":   { "A": [0.0, 0.0], "B": [1.0, 0.0], "C": [0.0, 1.0] },
    ///   "kind_lists": { "A": ["B", 1, "C", 0, "B"], "...": [] },
    ///   "regions":    [0, 1]
    /// }
    /// ```
    ///
    /// Missing `vertices` or `kind_lists` read as empty maps. Vertices are
    /// inserted in name order.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Json` for malformed JSON, `SceneError::MissingBackground`
    /// if the document has no `background`, and a `SceneError` when the two
    /// maps disagree, a kind-list is malformed, a kind-list names an unknown
    /// vertex, or a region is missing from the `regions` list.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: SceneDocument = serde_json::from_str(json).map_err(LoadError::from)?;
        document.into_scene(None)
    }

    /// Parses a scene whose background region is supplied by the caller.
    ///
    /// `background` takes precedence over a `background` key in the document,
    /// which may be absent.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Scene::from_json_str`], except that the
    /// background can no longer be missing.
    pub fn from_json_str_with_background(json: &str, background: RegionId) -> Result<Self> {
        let document: SceneDocument = serde_json::from_str(json).map_err(LoadError::from)?;
        document.into_scene(Some(background))
    }

    /// Reads a scene from a JSON stream. See [`Scene::from_json_str`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Scene::from_json_str`].
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let document: SceneDocument =
            serde_json::from_reader(reader).map_err(LoadError::from)?;
        document.into_scene(None)
    }

    /// Reads a scene from a JSON stream with a caller-supplied background.
    /// See [`Scene::from_json_str_with_background`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Scene::from_json_str_with_background`].
    pub fn from_json_reader_with_background<R: Read>(
        reader: R,
        background: RegionId,
    ) -> Result<Self> {
        let document: SceneDocument =
            serde_json::from_reader(reader).map_err(LoadError::from)?;
        document.into_scene(Some(background))
    }
}

impl SceneDocument {
    fn into_scene(self, background: Option<RegionId>) -> Result<Scene> {
        let background = background
            .or(self.background)
            .ok_or(SceneError::MissingBackground)?;

        if let Some(name) = self
            .kind_lists
            .keys()
            .find(|name| !self.vertices.contains_key(*name))
        {
            return Err(SceneError::UnknownVertex(name.clone()).into());
        }

        let declared: Option<BTreeSet<RegionId>> =
            self.regions.map(|regions| regions.into_iter().collect());

        let mut kind_lists = self.kind_lists;
        let mut scene = Scene::new(background);
        for (name, [x, y]) in self.vertices {
            let entries = kind_lists
                .remove(&name)
                .ok_or_else(|| SceneError::MissingKindList(name.clone()))?;

            if let Some(declared) = &declared {
                let undeclared = entries.iter().find_map(|entry| match entry {
                    KindEntry::Region(r) if !declared.contains(r) => Some(*r),
                    _ => None,
                });
                if let Some(region) = undeclared {
                    return Err(SceneError::UndeclaredRegion {
                        vertex: name,
                        region: region.0,
                    }
                    .into());
                }
            }

            scene.add_vertex(name, Point2::new(x, y), entries)?;
        }

        scene.validate()?;
        Ok(scene)
    }
}
