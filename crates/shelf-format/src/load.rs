use serde::Deserialize;
use shelf_types::{LayoutNode, ShelfConfig};

use crate::document::ShelfDocument;
use crate::errors::LoadError;
use crate::metadata::ProjectMetadata;
use crate::save::{FORMAT_NAME, FORMAT_VERSION};

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ShelfFileRaw {
    pub format: String,
    pub version: u32,
    pub project: ProjectMetadata,
    pub config: ShelfConfig,
    pub layout: LayoutNode,
}

/// Deserialize a document from a JSON string.
///
/// Validates the format identifier, the version and the configuration.
pub fn load_document(json: &str) -> Result<ShelfDocument, LoadError> {
    let raw: ShelfFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_NAME {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }
    // Version 1 is the first shelf format
    if raw.version < FORMAT_VERSION {
        return Err(LoadError::UnsupportedVersion(raw.version));
    }

    let document = ShelfDocument {
        project: raw.project,
        config: raw.config,
        layout: raw.layout,
    };

    document.config.validate()?;
    Ok(document)
}
