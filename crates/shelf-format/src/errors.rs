use shelf_types::ConfigError;

/// Errors during document loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("file version {0} predates the first shelf format")]
    UnsupportedVersion(u32),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Errors during document saving.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveError {
    #[error("failed to serialize document: {0}")]
    SerializeError(String),
}
