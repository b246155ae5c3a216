//! Groups the faces of a polyhedral line drawing into solid bodies.
//!
//! A [`Scene`] lists the vertices of the drawing with the neighbours and
//! regions around each one. [`GroupBodies`] classifies every junction,
//! collects region links from them and merges regions into bodies.

pub mod analysis;
pub mod error;
pub mod math;
pub mod scene;

pub use analysis::{Body, GroupBodies, Grouping, GroupingEvent, Junction, Thresholds};
pub use error::{Result, WireframeError};
pub use scene::{RegionId, Scene};
