//! Pure shelf geometry: rectangle insets, container partitioning, drawer
//! derivation, and the face/region queries the engine runs against a backend.

pub mod drawer;
pub mod faces;
pub mod partition;
pub mod rect;
pub mod region;

pub use drawer::derive_drawer;
pub use faces::{select_oriented_face, FRONT, TOP};
pub use partition::partition;
pub use rect::inset;
pub use region::{select_region, RegionQuery};

/// Errors from layout computation and geometric queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid geometry in {context}: {width} x {height}")]
    InvalidGeometry {
        context: String,
        width: f64,
        height: f64,
    },

    #[error("{kind} has no cells")]
    EmptyContainer { kind: &'static str },

    #[error("no face faces {target:?}")]
    FaceNotFound { target: [f64; 3] },

    #[error("ambiguous region: {reason}")]
    AmbiguousRegion { reason: String },
}

impl LayoutError {
    pub(crate) fn invalid(context: impl Into<String>, width: f64, height: f64) -> Self {
        LayoutError::InvalidGeometry {
            context: context.into(),
            width,
            height,
        }
    }
}
