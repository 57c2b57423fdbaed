use serde::Serialize;
use shelf_types::{LayoutNode, ShelfConfig};

use crate::document::ShelfDocument;
use crate::errors::SaveError;
use crate::metadata::ProjectMetadata;

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// Format identifier written to every document.
pub const FORMAT_NAME: &str = "shelf";

/// The top-level file structure.
#[derive(Debug, Clone, Serialize)]
pub struct ShelfFile<'a> {
    /// Format identifier.
    pub format: &'a str,
    /// Format version number.
    pub version: u32,
    pub project: &'a ProjectMetadata,
    pub config: &'a ShelfConfig,
    /// The layout tree (the parametric recipe).
    pub layout: &'a LayoutNode,
}

/// Serialize a document to a pretty-printed JSON string.
pub fn save_document(document: &ShelfDocument) -> Result<String, SaveError> {
    let file = ShelfFile {
        format: FORMAT_NAME,
        version: FORMAT_VERSION,
        project: &document.project,
        config: &document.config,
        layout: &document.layout,
    };
    serde_json::to_string_pretty(&file).map_err(|e| SaveError::SerializeError(e.to_string()))
}
