pub mod mock_backend;
pub mod planar;
pub mod primitives;
pub mod tessellation;
pub mod traits;
pub mod truck_backend;
pub mod types;

pub use mock_backend::{MockBackend, MockFaults};
pub use traits::*;
pub use truck_backend::TruckBackend;
pub use types::*;
