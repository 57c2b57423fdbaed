//! RegionAccumulator: the shared case canvas threaded through one build.
//!
//! The accumulator owns the canvas for the lifetime of the build. The case
//! boundary is recorded when it is created, every drawer slot is appended
//! during the traversal, and `finalize` consumes the accumulator exactly once
//! to hand the finished outline set to the case shell.

use shelf_kernel::{BackendError, CanvasHandle, OutlineHandle};
use shelf_layout::RegionQuery;
use shelf_types::{Plane, Rect};
use tracing::trace;

use crate::bundle::BackendBundle;

/// Fixed region index for the back panel and the case shell in ordinal mode.
const CASE_ORDINAL: usize = 0;

pub struct RegionAccumulator {
    canvas: CanvasHandle,
    boundary: Rect,
    slots: Vec<Rect>,
}

impl RegionAccumulator {
    /// Create the case canvas and record the outer boundary on it.
    pub fn new(kb: &mut dyn BackendBundle, boundary: Rect) -> Result<Self, BackendError> {
        let canvas = kb.create_canvas(Plane::XY)?;
        kb.add_rect_outline(canvas, boundary)?;
        Ok(Self {
            canvas,
            boundary,
            slots: Vec::new(),
        })
    }

    /// Append a slot outline to the shared canvas.
    pub fn record_outline(
        &mut self,
        kb: &mut dyn BackendBundle,
        rect: Rect,
    ) -> Result<OutlineHandle, BackendError> {
        let handle = kb.add_rect_outline(self.canvas, rect)?;
        self.slots.push(rect);
        trace!(slots = self.slots.len(), "slot recorded");
        Ok(handle)
    }

    pub fn canvas(&self) -> CanvasHandle {
        self.canvas
    }

    pub fn boundary(&self) -> Rect {
        self.boundary
    }

    pub fn slots(&self) -> &[Rect] {
        &self.slots
    }

    /// Query for the boundary while it is the only outline on the canvas.
    pub fn boundary_query(&self) -> RegionQuery {
        RegionQuery::area(self.boundary.area())
            .with_bounds(self.boundary)
            .with_holes(0)
            .at_ordinal(CASE_ORDINAL)
    }

    /// Close the canvas to further outlines.
    pub fn finalize(self) -> AccumulatedRegion {
        AccumulatedRegion {
            canvas: self.canvas,
            boundary: self.boundary,
            slots: self.slots,
        }
    }
}

/// The finished case canvas: the boundary with one hole per slot.
#[derive(Debug, Clone)]
pub struct AccumulatedRegion {
    pub canvas: CanvasHandle,
    pub boundary: Rect,
    pub slots: Vec<Rect>,
}

impl AccumulatedRegion {
    /// Area of the boundary minus every slot.
    pub fn shell_area(&self) -> f64 {
        self.boundary.area() - self.slots.iter().map(Rect::area).sum::<f64>()
    }

    pub fn shell_query(&self) -> RegionQuery {
        RegionQuery::area(self.shell_area())
            .with_bounds(self.boundary)
            .with_holes(self.slots.len())
            .at_ordinal(CASE_ORDINAL)
    }
}
