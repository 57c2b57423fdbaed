pub mod document;
pub mod errors;
pub mod load;
pub mod metadata;
pub mod save;

pub use document::{default_document, ShelfDocument};
pub use errors::{LoadError, SaveError};
pub use load::load_document;
pub use metadata::ProjectMetadata;
pub use save::{save_document, FORMAT_NAME, FORMAT_VERSION};
