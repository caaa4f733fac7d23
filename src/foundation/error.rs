/// Convenience result type used across sketchweave.
pub type SketchResult<T> = Result<T, SketchError>;

/// Top-level error taxonomy used by resolver APIs.
#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    /// Structurally invalid document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Shape geometry that cannot be projected (for example a path with no points).
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    /// Errors when serializing or deserializing document nodes.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failed resolution of an archive-backed asset reference.
    #[error(transparent)]
    Asset(#[from] AssetResolutionError),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Why an asset reference could not be resolved.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetResolutionError {
    /// The archive has no entry with this name.
    #[error("archive entry not found: {0}")]
    EntryNotFound(String),

    /// The reference class is not one the resolver knows how to load.
    #[error("unsupported reference type: {0}")]
    UnsupportedReferenceType(String),
}

impl SketchError {
    /// Build a [`SketchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SketchError::MalformedGeometry`] value.
    pub fn malformed_geometry(msg: impl Into<String>) -> Self {
        Self::MalformedGeometry(msg.into())
    }

    /// Build a [`SketchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build an [`AssetResolutionError::EntryNotFound`] error.
    pub fn entry_not_found(name: impl Into<String>) -> Self {
        Self::Asset(AssetResolutionError::EntryNotFound(name.into()))
    }

    /// Build an [`AssetResolutionError::UnsupportedReferenceType`] error.
    pub fn unsupported_reference(ref_class: impl Into<String>) -> Self {
        Self::Asset(AssetResolutionError::UnsupportedReferenceType(
            ref_class.into(),
        ))
    }

    /// The asset resolution failure, if this error is one.
    pub fn as_asset_error(&self) -> Option<&AssetResolutionError> {
        match self {
            Self::Asset(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SketchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
