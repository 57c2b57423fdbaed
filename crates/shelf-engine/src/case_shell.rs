use shelf_kernel::{SolidHandle, SolidMode};
use shelf_types::{NodePath, ShelfConfig};
use tracing::debug;

use crate::accumulator::{AccumulatedRegion, RegionAccumulator};
use crate::bundle::{find_region, BackendBundle};
use crate::error::{AtPath, BuildError};

/// Builds the back panel and the case shell from the shared case canvas.
pub struct CaseShellSynthesizer<'a> {
    config: &'a ShelfConfig,
}

impl<'a> CaseShellSynthesizer<'a> {
    pub fn new(config: &'a ShelfConfig) -> Self {
        Self { config }
    }

    /// Extrude the boundary backwards by one cell gap.
    ///
    /// Must run while the boundary is still the only outline on the canvas.
    pub fn back_panel(
        &self,
        kb: &mut dyn BackendBundle,
        accumulator: &RegionAccumulator,
    ) -> Result<SolidHandle, BuildError> {
        let path = NodePath::root();
        let region = find_region(
            kb,
            accumulator.canvas(),
            &accumulator.boundary_query(),
            self.config.region_selection,
            &path,
        )?;
        let solid = kb
            .synthesize_solid(region, -self.config.cell_gap(), SolidMode::Create)
            .at(&path)?;
        debug!(solid = solid.id(), "back panel");
        Ok(solid)
    }

    /// Extrude the boundary minus every slot to the full stock depth.
    pub fn case_shell(
        &self,
        kb: &mut dyn BackendBundle,
        region: AccumulatedRegion,
    ) -> Result<SolidHandle, BuildError> {
        let path = NodePath::root();
        let handle = find_region(
            kb,
            region.canvas,
            &region.shell_query(),
            self.config.region_selection,
            &path,
        )?;
        let solid = kb
            .synthesize_solid(handle, self.config.stock_depth, SolidMode::Create)
            .at(&path)?;
        debug!(solid = solid.id(), openings = region.slots.len(), "case shell");
        Ok(solid)
    }
}
