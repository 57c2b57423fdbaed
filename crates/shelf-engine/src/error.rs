use shelf_kernel::BackendError;
use shelf_layout::LayoutError;
use shelf_types::{ConfigError, NodePath};

/// The single diagnostic a failed build reports: what went wrong and where.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("invalid geometry at {path}: {reason}")]
    InvalidGeometry { path: NodePath, reason: String },

    #[error("empty container at {path}: {reason}")]
    EmptyContainer { path: NodePath, reason: String },

    #[error("face not found at {path}: {reason}")]
    FaceNotFound { path: NodePath, reason: String },

    #[error("ambiguous region at {path}: {reason}")]
    AmbiguousRegion { path: NodePath, reason: String },

    #[error("kernel operation failed at {path}: {reason}")]
    KernelOperationFailed { path: NodePath, reason: String },
}

/// Failure taxonomy without context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildErrorKind {
    InvalidGeometry,
    EmptyContainer,
    FaceNotFound,
    AmbiguousRegion,
    KernelOperationFailed,
}

impl BuildError {
    pub fn kind(&self) -> BuildErrorKind {
        match self {
            BuildError::InvalidGeometry { .. } => BuildErrorKind::InvalidGeometry,
            BuildError::EmptyContainer { .. } => BuildErrorKind::EmptyContainer,
            BuildError::FaceNotFound { .. } => BuildErrorKind::FaceNotFound,
            BuildError::AmbiguousRegion { .. } => BuildErrorKind::AmbiguousRegion,
            BuildError::KernelOperationFailed { .. } => BuildErrorKind::KernelOperationFailed,
        }
    }

    /// Tree path of the node being processed when the build failed.
    pub fn path(&self) -> &NodePath {
        match self {
            BuildError::InvalidGeometry { path, .. }
            | BuildError::EmptyContainer { path, .. }
            | BuildError::FaceNotFound { path, .. }
            | BuildError::AmbiguousRegion { path, .. }
            | BuildError::KernelOperationFailed { path, .. } => path,
        }
    }

    pub(crate) fn from_layout(path: &NodePath, err: LayoutError) -> Self {
        let path = path.clone();
        let reason = err.to_string();
        match err {
            LayoutError::InvalidGeometry { .. } => BuildError::InvalidGeometry { path, reason },
            LayoutError::EmptyContainer { .. } => BuildError::EmptyContainer { path, reason },
            LayoutError::FaceNotFound { .. } => BuildError::FaceNotFound { path, reason },
            LayoutError::AmbiguousRegion { .. } => BuildError::AmbiguousRegion { path, reason },
        }
    }

    pub(crate) fn from_backend(path: &NodePath, err: BackendError) -> Self {
        BuildError::KernelOperationFailed {
            path: path.clone(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn from_config(err: ConfigError) -> Self {
        BuildError::InvalidGeometry {
            path: NodePath::root(),
            reason: err.to_string(),
        }
    }
}

/// Attach the current tree path to a lower-layer error.
pub(crate) trait AtPath<T> {
    fn at(self, path: &NodePath) -> Result<T, BuildError>;
}

impl<T> AtPath<T> for Result<T, LayoutError> {
    fn at(self, path: &NodePath) -> Result<T, BuildError> {
        self.map_err(|e| BuildError::from_layout(path, e))
    }
}

impl<T> AtPath<T> for Result<T, BackendError> {
    fn at(self, path: &NodePath) -> Result<T, BuildError> {
        self.map_err(|e| BuildError::from_backend(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_errors_keep_their_kind() {
        let path = NodePath::root().child(2);
        let err = BuildError::from_layout(&path, LayoutError::EmptyContainer { kind: "row" });
        assert_eq!(err.kind(), BuildErrorKind::EmptyContainer);
        assert_eq!(err.path(), &path);
        assert_eq!(err.to_string(), "empty container at root/2: row has no cells");
    }

    #[test]
    fn backend_errors_are_kernel_failures() {
        let raw: Result<(), BackendError> = Err(BackendError::BooleanFailed {
            reason: "no result".to_string(),
        });
        let err = raw.at(&NodePath::root()).unwrap_err();
        assert_eq!(err.kind(), BuildErrorKind::KernelOperationFailed);
        assert!(err.to_string().contains("boolean operation failed"));
    }
}
