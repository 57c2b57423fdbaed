//! TruckBackend: real geometry backend wrapping truck's B-rep API.

use std::collections::BTreeMap;

use shelf_types::{Outline, Plane, Point2, Rect};
use tracing::debug;
use truck_modeling::geometry::Surface;
use truck_modeling::topology::{Face, Solid};

use crate::planar::Canvas;
use crate::primitives;
use crate::tessellation;
use crate::traits::{BackendIntrospect, GeometryBackend};
use crate::types::*;

/// Face ids are `solid_id * FACE_STRIDE + face_index`.
const FACE_STRIDE: u64 = 10_000;

/// Tolerance handed to truck's boolean operations.
const BOOLEAN_TOLERANCE: f64 = 0.05;

/// Cut tools are pushed this far past both ends so they never share a face
/// plane with the target, which truck's boolean cannot resolve.
const CUT_OVERSHOOT: f64 = 0.01;

/// Real geometry backend backed by the truck B-rep library.
pub struct TruckBackend {
    next_id: u64,
    canvases: BTreeMap<u64, Canvas>,
    solids: BTreeMap<u64, Solid>,
}

impl TruckBackend {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            canvases: BTreeMap::new(),
            solids: BTreeMap::new(),
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn canvas(&self, handle: CanvasHandle) -> Result<&Canvas, BackendError> {
        self.canvases
            .get(&handle.0)
            .ok_or(BackendError::canvas(handle))
    }

    fn find_face(&self, face: FaceHandle) -> Option<&Face> {
        let solid = self.solids.get(&(face.0 / FACE_STRIDE))?;
        let index = (face.0 % FACE_STRIDE) as usize;
        solid
            .boundaries()
            .iter()
            .flat_map(|shell| shell.face_iter())
            .nth(index)
    }
}

impl Default for TruckBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Origin and outward normal of a planar face.
fn planar_frame(face: &Face) -> Option<([f64; 3], [f64; 3])> {
    match face.oriented_surface() {
        Surface::Plane(plane) => {
            let p = plane.origin();
            let n = plane.normal();
            Some(([p[0], p[1], p[2]], [n[0], n[1], n[2]]))
        }
        _ => None,
    }
}

/// First vertex of the face's boundary, or the surface origin of a planar
/// face that has none.
fn face_point(face: &Face) -> [f64; 3] {
    let vertex = face
        .boundaries()
        .iter()
        .flat_map(|wire| wire.vertex_iter().collect::<Vec<_>>())
        .next();
    match vertex {
        Some(v) => {
            let p = v.point();
            [p[0], p[1], p[2]]
        }
        None => planar_frame(face).map_or([0.0; 3], |(origin, _)| origin),
    }
}

impl GeometryBackend for TruckBackend {
    fn create_canvas(&mut self, plane: Plane) -> Result<CanvasHandle, BackendError> {
        let handle = CanvasHandle(self.alloc_id());
        self.canvases.insert(handle.0, Canvas::new(plane));
        Ok(handle)
    }

    fn create_canvas_on_face(&mut self, face: FaceHandle) -> Result<CanvasHandle, BackendError> {
        let truck_face = self.find_face(face).ok_or(BackendError::face(face))?;
        let (origin, normal) =
            planar_frame(truck_face).ok_or_else(|| BackendError::NotSupported {
                operation: "canvas on a non-planar face".to_string(),
            })?;
        let plane = Plane::from_face(origin, normal);

        let local: Vec<Point2> = truck_face
            .boundaries()
            .iter()
            .flat_map(|wire| wire.vertex_iter().collect::<Vec<_>>())
            .map(|v| {
                let p = v.point();
                plane.to_local([p[0], p[1], p[2]])
            })
            .collect();
        if local.is_empty() {
            return Err(BackendError::InvalidProfile {
                reason: format!("face {} has no boundary vertices", face.0),
            });
        }
        let min_x = local.iter().map(|p| p.x).fold(f64::MAX, f64::min);
        let min_y = local.iter().map(|p| p.y).fold(f64::MAX, f64::min);
        let max_x = local.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        let max_y = local.iter().map(|p| p.y).fold(f64::MIN, f64::max);

        let canvas = self.create_canvas(plane)?;
        // Projected face boundary
        self.add_rect_outline(canvas, Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))?;
        Ok(canvas)
    }

    fn add_outline(
        &mut self,
        canvas: CanvasHandle,
        outline: Outline,
    ) -> Result<OutlineHandle, BackendError> {
        if !self.canvases.contains_key(&canvas.0) {
            return Err(BackendError::canvas(canvas));
        }
        let handle = OutlineHandle(self.alloc_id());
        if let Some(c) = self.canvases.get_mut(&canvas.0) {
            c.push(handle, outline);
        }
        Ok(handle)
    }

    fn remove_outline(
        &mut self,
        canvas: CanvasHandle,
        outline: OutlineHandle,
    ) -> Result<(), BackendError> {
        self.canvases
            .get_mut(&canvas.0)
            .ok_or(BackendError::canvas(canvas))?
            .remove(outline)
            .map(|_| ())
    }

    fn synthesize_solid(
        &mut self,
        region: RegionHandle,
        depth: f64,
        mode: SolidMode,
    ) -> Result<SolidHandle, BackendError> {
        if !depth.is_finite() || depth == 0.0 {
            return Err(BackendError::InvalidProfile {
                reason: format!("extrusion depth {} is not usable", depth),
            });
        }
        let canvas = self.canvas(region.canvas)?;
        let plane = canvas.plane;
        let planar = canvas.region(region.outer)?;
        let (lo, hi) = if depth < 0.0 { (depth, 0.0) } else { (0.0, depth) };
        let (lo, hi) = match mode {
            SolidMode::Create => (lo, hi),
            SolidMode::CutFrom(_) => (lo - CUT_OVERSHOOT, hi + CUT_OVERSHOOT),
        };
        let prism = primitives::region_prism(&plane, &planar, lo, hi)?;

        match mode {
            SolidMode::Create => {
                let handle = SolidHandle(self.alloc_id());
                debug!(solid = handle.0, depth, "truck extrude");
                self.solids.insert(handle.0, prism);
                Ok(handle)
            }
            SolidMode::CutFrom(target) => {
                let target_solid = self
                    .solids
                    .get(&target.0)
                    .ok_or(BackendError::solid(target))?;

                // Subtraction = A ∩ ¬B. not() mutates in place.
                let mut tool = prism;
                tool.not();
                let result = truck_shapeops::and(target_solid, &tool, BOOLEAN_TOLERANCE)
                    .ok_or_else(|| BackendError::BooleanFailed {
                        reason: "truck and() returned None for subtraction".to_string(),
                    })?;
                debug!(solid = target.0, depth, "truck cut");
                self.solids.insert(target.0, result);
                Ok(target)
            }
        }
    }

    fn remove_solid(&mut self, solid: SolidHandle) -> Result<(), BackendError> {
        self.solids
            .remove(&solid.0)
            .map(|_| ())
            .ok_or(BackendError::solid(solid))
    }

    fn tessellate(
        &mut self,
        solid: SolidHandle,
        tolerance: f64,
    ) -> Result<RenderMesh, BackendError> {
        let truck_solid = self
            .solids
            .get(&solid.0)
            .ok_or(BackendError::solid(solid))?;
        tessellation::tessellate_solid(truck_solid, tolerance)
    }
}

impl BackendIntrospect for TruckBackend {
    fn canvas_plane(&self, canvas: CanvasHandle) -> Result<Plane, BackendError> {
        Ok(self.canvas(canvas)?.plane)
    }

    fn outlines(&self, canvas: CanvasHandle) -> Result<Vec<OutlineHandle>, BackendError> {
        Ok(self.canvas(canvas)?.handles())
    }

    fn regions(&self, canvas: CanvasHandle) -> Result<Vec<RegionInfo>, BackendError> {
        Ok(self
            .canvas(canvas)?
            .arrange()?
            .iter()
            .map(|r| RegionInfo {
                handle: RegionHandle {
                    canvas,
                    outer: r.outer.0,
                },
                area: r.area(),
                bounds: r.bounds(),
                hole_count: r.holes.len(),
            })
            .collect())
    }

    fn faces(&self, solid: SolidHandle) -> Result<Vec<FaceInfo>, BackendError> {
        let truck_solid = self
            .solids
            .get(&solid.0)
            .ok_or(BackendError::solid(solid))?;
        Ok(truck_solid
            .boundaries()
            .iter()
            .flat_map(|shell| shell.face_iter())
            .enumerate()
            .map(|(i, face)| FaceInfo {
                handle: FaceHandle(solid.0 * FACE_STRIDE + i as u64),
                normal: planar_frame(face).map(|(_, n)| n),
                point: face_point(face),
            })
            .collect())
    }

    fn solids(&self) -> Vec<SolidHandle> {
        self.solids.keys().map(|&id| SolidHandle(id)).collect()
    }
}
