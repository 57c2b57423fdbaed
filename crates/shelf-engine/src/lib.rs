pub mod accumulator;
pub mod build;
pub mod bundle;
pub mod case_shell;
pub mod drawer;
pub mod error;
pub mod report;

pub use accumulator::{AccumulatedRegion, RegionAccumulator};
pub use build::{build, plan, walk_layout};
pub use bundle::BackendBundle;
pub use case_shell::CaseShellSynthesizer;
pub use drawer::DrawerSynthesizer;
pub use error::{BuildError, BuildErrorKind};
pub use report::{BuildPlan, BuildReport, DrawerReport, PlannedDrawer};
