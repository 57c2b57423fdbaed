pub mod config;
pub mod drawer;
pub mod geometry;
pub mod layout;

pub use config::*;
pub use drawer::*;
pub use geometry::*;
pub use layout::*;
