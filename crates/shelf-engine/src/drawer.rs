use shelf_kernel::{SolidHandle, SolidMode};
use shelf_layout::{derive_drawer, RegionQuery, FRONT, TOP};
use shelf_types::{NodePath, Outline, Plane, Rect, ShelfConfig};
use tracing::{debug, instrument};

use crate::accumulator::RegionAccumulator;
use crate::bundle::{find_face, find_region, BackendBundle};
use crate::error::{AtPath, BuildError};
use crate::report::DrawerReport;

/// Fixed region indices for each drawer step in ordinal mode.
const BODY_ORDINAL: usize = 0;
const POCKET_ORDINAL: usize = 1;
const THUMB_ORDINAL: usize = 0;

/// Builds one drawer: slot outline, body, pocket cut and thumb hole.
pub struct DrawerSynthesizer<'a> {
    config: &'a ShelfConfig,
}

impl<'a> DrawerSynthesizer<'a> {
    pub fn new(config: &'a ShelfConfig) -> Self {
        Self { config }
    }

    /// Record the slot and synthesize the drawer solid for `cell`.
    ///
    /// The slot is recorded before anything else, so the opening exists in the
    /// case even if the drawer itself fails. The body handle is pushed onto
    /// `created` as soon as it exists.
    #[instrument(skip(self, kb, accumulator, created, path), fields(path = %path))]
    pub fn synthesize(
        &self,
        kb: &mut dyn BackendBundle,
        accumulator: &mut RegionAccumulator,
        created: &mut Vec<SolidHandle>,
        path: &NodePath,
        cell: Rect,
    ) -> Result<DrawerReport, BuildError> {
        accumulator.record_outline(kb, cell).at(path)?;
        let geometry = derive_drawer(cell, self.config).at(path)?;
        let selection = self.config.region_selection;

        // Body
        let canvas = kb.create_canvas(Plane::XY).at(path)?;
        kb.add_rect_outline(canvas, geometry.body_rect).at(path)?;
        let body_query = RegionQuery::area(geometry.body_rect.area())
            .with_bounds(geometry.body_rect)
            .with_holes(0)
            .at_ordinal(BODY_ORDINAL);
        let region = find_region(kb, canvas, &body_query, selection, path)?;
        let solid = kb
            .synthesize_solid(region, self.config.stock_depth, SolidMode::Create)
            .at(path)?;
        created.push(solid);
        debug!(solid = solid.id(), "drawer body");

        // Pocket, cut in from the front face
        let front = find_face(kb, solid, FRONT, path)?;
        let canvas = kb.create_canvas_on_face(front).at(path)?;
        kb.add_rect_outline(canvas, geometry.pocket_rect).at(path)?;
        let pocket_query = RegionQuery::area(geometry.pocket_rect.area())
            .with_bounds(geometry.pocket_rect)
            .with_holes(0)
            .at_ordinal(POCKET_ORDINAL);
        let region = find_region(kb, canvas, &pocket_query, selection, path)?;
        kb.synthesize_solid(region, -geometry.pocket_depth, SolidMode::CutFrom(solid))
            .at(path)?;
        debug!(solid = solid.id(), depth = geometry.pocket_depth, "drawer pocket");

        // Thumb hole through the top face. The projected face outline crosses
        // the circle, so everything else on the canvas is removed first.
        let top = find_face(kb, solid, TOP, path)?;
        let canvas = kb.create_canvas_on_face(top).at(path)?;
        let projected = kb.outlines(canvas).at(path)?;
        let hole = geometry.thumb_hole;
        kb.add_circle_outline(canvas, hole.center, hole.radius)
            .at(path)?;
        for outline in projected {
            kb.remove_outline(canvas, outline).at(path)?;
        }
        let thumb = Outline::circle(hole.center, hole.radius);
        let thumb_query = RegionQuery::area(thumb.area())
            .with_bounds(thumb.bounds())
            .with_holes(0)
            .at_ordinal(THUMB_ORDINAL);
        let region = find_region(kb, canvas, &thumb_query, selection, path)?;
        kb.synthesize_solid(region, -self.config.stock_depth, SolidMode::CutFrom(solid))
            .at(path)?;
        debug!(solid = solid.id(), radius = hole.radius, "drawer thumb hole");

        Ok(DrawerReport {
            path: path.clone(),
            geometry,
            solid,
        })
    }
}
