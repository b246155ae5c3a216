mod angles;
mod bodies;
mod events;
mod junction;
mod links;
mod nucleus;
mod thresholds;

pub use angles::{sector_angles, SectorAngles};
pub use bodies::{extract_bodies, Body};
pub use events::{GroupingEvent, MergePhase};
pub use junction::{classify_vertex, ClassifiedVertex, Junction};
pub use links::{generate_links, junction_links, Link};
pub use nucleus::Nuclei;
pub use thresholds::{Thresholds, ARROW_CUTOFF_DEG, STRONG_EVIDENCE, T_JUNCTION_TOLERANCE_DEG};

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::scene::Scene;

/// Outcome of grouping a scene.
#[derive(Debug, Clone)]
pub struct Grouping {
    /// The bodies found, ordered by smallest region.
    pub bodies: Vec<Body>,
    /// Every link asserted by the junctions, duplicates included.
    pub links: Vec<Link>,
    /// What happened, in order.
    pub events: Vec<GroupingEvent>,
}

/// Groups the regions of a line drawing into bodies.
///
/// Every vertex is classified from its sector angles, junctions assert
/// links between the regions around them, and regions are merged first on
/// strong (repeated) evidence and then on weak evidence.
#[derive(Debug)]
pub struct GroupBodies<'a> {
    scene: &'a Scene,
    thresholds: Thresholds,
}

impl<'a> GroupBodies<'a> {
    /// Creates a new grouping operation with default thresholds.
    #[must_use]
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            thresholds: Thresholds::default(),
        }
    }

    /// Replaces the classifier and merge thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Executes the grouping.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::MissingVertexReference` if a kind-list names a
    /// vertex that is not in the scene, or `GeometryError::Inconsistent` if
    /// the sectors of a three-line junction do not add up to a full turn.
    /// No bodies are produced in either case.
    pub fn execute(&self) -> Result<Grouping> {
        self.scene.validate()?;

        let mut events = Vec::new();
        let mut classified = Vec::with_capacity(self.scene.len());
        for (id, vertex) in self.scene.vertices() {
            let sectors = sector_angles(self.scene, vertex)?;
            trace!(vertex = %vertex.name, angles = ?sectors.angles, "sector angles");
            if sectors.degenerate {
                warn!(vertex = %vertex.name, "zero-length ray, direction taken as 0 degrees");
                events.push(GroupingEvent::DegenerateVector {
                    vertex: vertex.name.clone(),
                });
            }

            let junction = classify_vertex(&sectors.angles, &self.thresholds);
            debug!(vertex = %vertex.name, %junction, "classified vertex");
            events.push(GroupingEvent::Classified {
                vertex: vertex.name.clone(),
                junction,
            });
            classified.push(ClassifiedVertex {
                vertex: id,
                junction,
                regions: vertex.kind_list.regions().collect(),
                angles: sectors.angles,
            });
        }

        let links = generate_links(self.scene.background(), &classified, &self.thresholds);
        debug!(count = links.len(), "generated links");

        let mut nuclei = Nuclei::new(self.scene.regions());
        events.extend(nuclei.merge_global(&links, self.thresholds.strong_evidence));
        events.extend(nuclei.merge_single_body(&links));

        let bodies = extract_bodies(&nuclei);
        debug!(bodies = bodies.len(), regions = nuclei.region_count(), "grouping done");

        Ok(Grouping {
            bodies,
            links,
            events,
        })
    }
}
