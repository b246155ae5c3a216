use thiserror::Error;

/// Top-level error type for wireframe body grouping.
#[derive(Debug, Error)]
pub enum WireframeError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Errors in the structure of a scene: vertex table and kind-lists.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("vertex {vertex} references unknown vertex {missing}")]
    MissingVertexReference { vertex: String, missing: String },

    #[error("malformed kind-list at vertex {vertex}: {reason}")]
    MalformedKindList { vertex: String, reason: String },

    #[error("duplicate vertex: {0}")]
    DuplicateVertex(String),

    #[error("vertex {0} has no kind-list")]
    MissingKindList(String),

    #[error("kind-list given for unknown vertex {0}")]
    UnknownVertex(String),

    #[error("vertex {vertex} uses undeclared region {region}")]
    UndeclaredRegion { vertex: String, region: u32 },

    #[error("no background region given")]
    MissingBackground,
}

/// Errors in the geometry of a scene.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("sector angles at vertex {vertex} sum to {sum:.3} degrees, expected 360")]
    Inconsistent { vertex: String, sum: f64 },
}

/// Errors while reading a serialized scene.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`WireframeError`].
pub type Result<T> = std::result::Result<T, WireframeError>;
