//! MockBackend: deterministic test double implementing GeometryBackend + BackendIntrospect.
//!
//! Solids are tracked by their axis-aligned bounds, their planar faces and the
//! list of cuts applied to them. Regions are enumerated smallest-area first, so
//! ordinals shift as outlines are added, the way a host modeler's do.

use std::collections::BTreeMap;

use shelf_types::{dot, Outline, Plane, Point2, Rect};
use tracing::trace;

use crate::planar::{Canvas, PlanarRegion};
use crate::traits::{BackendIntrospect, GeometryBackend};
use crate::types::*;

/// Boundary tolerance used when deciding which cut faces end up inside a solid.
const EPS: f64 = 1e-9;

/// A face of a mock solid.
#[derive(Debug, Clone)]
pub struct MockFace {
    pub id: FaceHandle,
    /// Outward normal; `None` for curved faces.
    pub normal: Option<[f64; 3]>,
    /// World-space corners of a planar face, counter-clockwise about the normal.
    pub corners: Vec<[f64; 3]>,
    pub centroid: [f64; 3],
}

/// A cut applied to a mock solid.
#[derive(Debug, Clone)]
pub struct MockCut {
    /// Bounds of the swept tool volume.
    pub tool_bounds: Aabb,
    /// Area of the cut profile.
    pub profile_area: f64,
    pub depth: f64,
}

/// A synthetic solid.
#[derive(Debug, Clone)]
pub struct MockSolid {
    pub bounds: Aabb,
    pub faces: Vec<MockFace>,
    /// Area of the extruded region times the extrusion depth.
    pub extruded_volume: f64,
    pub hole_count: usize,
    pub cuts: Vec<MockCut>,
}

/// Failures injected into an otherwise healthy mock.
#[derive(Debug, Clone, Default)]
pub struct MockFaults {
    /// The n-th cut (0-based, counted over the session) fails.
    pub fail_cut_at: Option<usize>,
    /// New bodies are created without faces.
    pub faceless_solids: bool,
    /// Regions are enumerated in insertion order instead of by area.
    pub insertion_order_regions: bool,
}

/// Deterministic test double for the geometry backend.
pub struct MockBackend {
    next_id: u64,
    canvases: BTreeMap<u64, Canvas>,
    solids: BTreeMap<u64, MockSolid>,
    cuts_performed: usize,
    faults: MockFaults,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::with_faults(MockFaults::default())
    }

    pub fn with_faults(faults: MockFaults) -> Self {
        Self {
            next_id: 1,
            canvases: BTreeMap::new(),
            solids: BTreeMap::new(),
            cuts_performed: 0,
            faults,
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Inspect a solid.
    pub fn solid(&self, handle: SolidHandle) -> Option<&MockSolid> {
        self.solids.get(&handle.0)
    }

    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    pub fn canvas_count(&self) -> usize {
        self.canvases.len()
    }

    fn canvas(&self, handle: CanvasHandle) -> Result<&Canvas, BackendError> {
        self.canvases
            .get(&handle.0)
            .ok_or(BackendError::canvas(handle))
    }

    fn find_face(&self, face: FaceHandle) -> Option<&MockFace> {
        self.solids
            .values()
            .flat_map(|s| s.faces.iter())
            .find(|f| f.id == face)
    }

    /// Build the faces of a region extruded between plane offsets `lo` and `hi`.
    fn prism_faces(
        &mut self,
        plane: &Plane,
        region: &PlanarRegion,
        lo: f64,
        hi: f64,
    ) -> Vec<MockFace> {
        let n = plane.normal;
        let neg = |v: [f64; 3]| [-v[0], -v[1], -v[2]];
        let bottom = plane.offset(lo);
        let top = plane.offset(hi);
        let bounds = region.bounds();
        let mut faces = Vec::new();

        // End caps: the sketch-side cap first, like a box's bottom then top
        for (cap_plane, normal) in [(bottom, neg(n)), (top, n)] {
            let corners: Vec<[f64; 3]> = bounds
                .corners()
                .iter()
                .map(|&p| cap_plane.to_world(p))
                .collect();
            faces.push(self.planar_face(normal, corners));
        }

        faces.extend(self.side_faces(&bottom, &top, &region.outer.1, false));
        for (_, hole) in &region.holes {
            faces.extend(self.side_faces(&bottom, &top, hole, true));
        }
        faces
    }

    /// Lateral faces swept from one outline. Hole walls face into the hole.
    fn side_faces(
        &mut self,
        bottom: &Plane,
        top: &Plane,
        outline: &Outline,
        inward: bool,
    ) -> Vec<MockFace> {
        let flip = if inward { -1.0 } else { 1.0 };
        match outline {
            Outline::Rect { rect } => {
                let x = bottom.x_axis;
                let y = bottom.y_axis();
                let c = rect.corners();
                // (edge start, edge end, outward normal): front, back, left, right
                let sides = [
                    (c[0], c[1], [-y[0], -y[1], -y[2]]),
                    (c[2], c[3], y),
                    (c[3], c[0], [-x[0], -x[1], -x[2]]),
                    (c[1], c[2], x),
                ];
                sides
                    .into_iter()
                    .map(|(a, b, normal)| {
                        let normal = [normal[0] * flip, normal[1] * flip, normal[2] * flip];
                        let corners = vec![
                            bottom.to_world(a),
                            bottom.to_world(b),
                            top.to_world(b),
                            top.to_world(a),
                        ];
                        self.planar_face(normal, corners)
                    })
                    .collect()
            }
            Outline::Circle { center, .. } => {
                let a = bottom.to_world(*center);
                let b = top.to_world(*center);
                vec![MockFace {
                    id: FaceHandle(self.alloc_id()),
                    normal: None,
                    corners: Vec::new(),
                    centroid: [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0, (a[2] + b[2]) / 2.0],
                }]
            }
        }
    }

    fn planar_face(&mut self, normal: [f64; 3], corners: Vec<[f64; 3]>) -> MockFace {
        let k = corners.len().max(1) as f64;
        let mut centroid = [0.0; 3];
        for c in &corners {
            for i in 0..3 {
                centroid[i] += c[i] / k;
            }
        }
        MockFace {
            id: FaceHandle(self.alloc_id()),
            normal: Some(normal),
            corners,
            centroid,
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// World bounds of a region swept between plane offsets `lo` and `hi`.
fn prism_bounds(plane: &Plane, bounds: &Rect, lo: f64, hi: f64) -> Aabb {
    let mut points = Vec::with_capacity(8);
    for offset in [lo, hi] {
        let p = plane.offset(offset);
        points.extend(bounds.corners().iter().map(|&c| p.to_world(c)));
    }
    Aabb::from_points(&points)
}

fn face_on_boundary(bounds: &Aabb, centroid: [f64; 3]) -> bool {
    !bounds.strictly_contains(centroid, EPS)
}

fn invert(v: [f64; 3]) -> [f64; 3] {
    [-v[0], -v[1], -v[2]]
}

impl GeometryBackend for MockBackend {
    fn create_canvas(&mut self, plane: Plane) -> Result<CanvasHandle, BackendError> {
        let handle = CanvasHandle(self.alloc_id());
        self.canvases.insert(handle.0, Canvas::new(plane));
        Ok(handle)
    }

    fn create_canvas_on_face(&mut self, face: FaceHandle) -> Result<CanvasHandle, BackendError> {
        let mock_face = self.find_face(face).ok_or(BackendError::face(face))?.clone();
        let normal = mock_face.normal.ok_or_else(|| BackendError::NotSupported {
            operation: "canvas on a non-planar face".to_string(),
        })?;

        let plane = Plane::from_face(mock_face.centroid, normal);
        let local: Vec<Point2> = mock_face.corners.iter().map(|&c| plane.to_local(c)).collect();
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
        let tool_bounds = prism_bounds(&plane, &planar.bounds(), lo, hi);

        match mode {
            SolidMode::Create => {
                let faces = if self.faults.faceless_solids {
                    Vec::new()
                } else {
                    self.prism_faces(&plane, &planar, lo, hi)
                };
                let handle = SolidHandle(self.alloc_id());
                trace!(solid = handle.0, faces = faces.len(), "mock extrude");
                self.solids.insert(
                    handle.0,
                    MockSolid {
                        bounds: tool_bounds,
                        faces,
                        extruded_volume: planar.area() * depth.abs(),
                        hole_count: planar.holes.len(),
                        cuts: Vec::new(),
                    },
                );
                Ok(handle)
            }
            SolidMode::CutFrom(target) => {
                let cut_index = self.cuts_performed;
                self.cuts_performed += 1;
                if self.faults.fail_cut_at == Some(cut_index) {
                    return Err(BackendError::BooleanFailed {
                        reason: format!("injected failure on cut {}", cut_index),
                    });
                }

                let target_bounds = self
                    .solids
                    .get(&target.0)
                    .ok_or(BackendError::solid(target))?
                    .bounds;
                if target_bounds.overlap_volume(&tool_bounds) <= 0.0 {
                    return Err(BackendError::BooleanFailed {
                        reason: "cut tool does not intersect the target body".to_string(),
                    });
                }

                // Tool walls that end up inside the body become new faces of it
                let tool_faces = self.prism_faces(&plane, &planar, lo, hi);
                let new_faces: Vec<MockFace> = tool_faces
                    .into_iter()
                    .filter(|f| !face_on_boundary(&target_bounds, f.centroid))
                    .map(|f| MockFace {
                        normal: f.normal.map(invert),
                        ..f
                    })
                    .collect();

                let solid = self
                    .solids
                    .get_mut(&target.0)
                    .ok_or(BackendError::solid(target))?;
                solid.faces.extend(new_faces);
                solid.cuts.push(MockCut {
                    tool_bounds,
                    profile_area: planar.area(),
                    depth,
                });
                trace!(solid = target.0, cuts = solid.cuts.len(), "mock cut");
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
        _tolerance: f64,
    ) -> Result<RenderMesh, BackendError> {
        let s = self.solids.get(&solid.0).ok_or(BackendError::solid(solid))?;
        Ok(tessellate_bounds(&s.bounds))
    }
}

/// Two triangles per side of a box.
fn tessellate_bounds(b: &Aabb) -> RenderMesh {
    let (lo, hi) = (b.min, b.max);
    // (normal, four corners counter-clockwise seen from outside)
    let quads: [([f32; 3], [[f64; 3]; 4]); 6] = [
        ([0.0, 0.0, -1.0], [[lo[0], lo[1], lo[2]], [lo[0], hi[1], lo[2]], [hi[0], hi[1], lo[2]], [hi[0], lo[1], lo[2]]]),
        ([0.0, 0.0, 1.0], [[lo[0], lo[1], hi[2]], [hi[0], lo[1], hi[2]], [hi[0], hi[1], hi[2]], [lo[0], hi[1], hi[2]]]),
        ([0.0, -1.0, 0.0], [[lo[0], lo[1], lo[2]], [hi[0], lo[1], lo[2]], [hi[0], lo[1], hi[2]], [lo[0], lo[1], hi[2]]]),
        ([0.0, 1.0, 0.0], [[lo[0], hi[1], lo[2]], [lo[0], hi[1], hi[2]], [hi[0], hi[1], hi[2]], [hi[0], hi[1], lo[2]]]),
        ([-1.0, 0.0, 0.0], [[lo[0], lo[1], lo[2]], [lo[0], lo[1], hi[2]], [lo[0], hi[1], hi[2]], [lo[0], hi[1], lo[2]]]),
        ([1.0, 0.0, 0.0], [[hi[0], lo[1], lo[2]], [hi[0], hi[1], lo[2]], [hi[0], hi[1], hi[2]], [hi[0], lo[1], hi[2]]]),
    ];

    let mut mesh = RenderMesh::default();
    for (normal, corners) in quads {
        let base = (mesh.vertices.len() / 3) as u32;
        for c in corners {
            mesh.vertices.extend_from_slice(&[c[0] as f32, c[1] as f32, c[2] as f32]);
            mesh.normals.extend_from_slice(&normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

impl BackendIntrospect for MockBackend {
    fn canvas_plane(&self, canvas: CanvasHandle) -> Result<Plane, BackendError> {
        Ok(self.canvas(canvas)?.plane)
    }

    fn outlines(&self, canvas: CanvasHandle) -> Result<Vec<OutlineHandle>, BackendError> {
        Ok(self.canvas(canvas)?.handles())
    }

    fn regions(&self, canvas: CanvasHandle) -> Result<Vec<RegionInfo>, BackendError> {
        let mut regions: Vec<RegionInfo> = self
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
            .collect();
        if !self.faults.insertion_order_regions {
            regions.sort_by(|a, b| {
                a.area
                    .partial_cmp(&b.area)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.handle.outer.cmp(&b.handle.outer))
            });
        }
        Ok(regions)
    }

    fn faces(&self, solid: SolidHandle) -> Result<Vec<FaceInfo>, BackendError> {
        let s = self.solids.get(&solid.0).ok_or(BackendError::solid(solid))?;
        let mut faces: Vec<FaceInfo> = s
            .faces
            .iter()
            .map(|f| FaceInfo {
                handle: f.id,
                normal: f.normal,
                point: f.centroid,
            })
            .collect();
        faces.sort_by_key(|f| f.handle);
        Ok(faces)
    }

    fn solids(&self) -> Vec<SolidHandle> {
        self.solids.keys().map(|&id| SolidHandle(id)).collect()
    }
}

impl MockSolid {
    /// The planar face whose normal is closest to `direction`, lowest id on ties.
    pub fn face_facing(&self, direction: [f64; 3]) -> Option<&MockFace> {
        let mut best: Option<(&MockFace, f64)> = None;
        for f in &self.faces {
            let Some(n) = f.normal else { continue };
            let d = dot(n, direction);
            if best.map_or(true, |(_, bd)| d > bd) {
                best = Some((f, d));
            }
        }
        best.map(|(f, _)| f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extrude_rect(mock: &mut MockBackend, rect: Rect, depth: f64) -> SolidHandle {
        let canvas = mock.create_canvas(Plane::XY).unwrap();
        mock.add_rect_outline(canvas, rect).unwrap();
        let region = mock.region_at(canvas, 0).unwrap();
        mock.synthesize_solid(region, depth, SolidMode::Create).unwrap()
    }

    #[test]
    fn test_extrude_rect_produces_box() {
        let mut mock = MockBackend::new();
        let solid = extrude_rect(&mut mock, Rect::new(1.0, 2.0, 3.0, 4.0), 5.0);
        let s = mock.solid(solid).unwrap();
        assert_eq!(s.faces.len(), 6);
        assert!(s.bounds.approx_eq(
            &Aabb {
                min: [1.0, 2.0, 0.0],
                max: [4.0, 6.0, 5.0]
            },
            1e-12
        ));
        assert!((s.extruded_volume - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_depth_extrudes_backwards() {
        let mut mock = MockBackend::new();
        let solid = extrude_rect(&mut mock, Rect::new(0.0, 0.0, 2.0, 2.0), -0.5);
        let s = mock.solid(solid).unwrap();
        assert!((s.bounds.min[2] + 0.5).abs() < 1e-12);
        assert!(s.bounds.max[2].abs() < 1e-12);
    }

    #[test]
    fn test_box_face_normals() {
        let mut mock = MockBackend::new();
        let solid = extrude_rect(&mut mock, Rect::new(0.0, 0.0, 2.0, 2.0), 1.0);
        let normals: Vec<[f64; 3]> = mock
            .faces(solid)
            .unwrap()
            .iter()
            .map(|f| f.normal.unwrap())
            .collect();
        assert_eq!(
            normals,
            vec![
                [0.0, 0.0, -1.0],
                [0.0, 0.0, 1.0],
                [0.0, -1.0, 0.0],
                [0.0, 1.0, 0.0],
                [-1.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_regions_enumerate_smallest_first() {
        let mut mock = MockBackend::new();
        let canvas = mock.create_canvas(Plane::XY).unwrap();
        mock.add_rect_outline(canvas, Rect::new(0.0, 0.0, 10.0, 10.0))
            .unwrap();
        let before = mock.region_at(canvas, 0).unwrap();
        mock.add_rect_outline(canvas, Rect::new(1.0, 1.0, 2.0, 2.0))
            .unwrap();
        let after = mock.region_at(canvas, 0).unwrap();
        assert_ne!(before, after, "ordinal 0 should now denote the slot");

        let regions = mock.regions(canvas).unwrap();
        assert_eq!(regions.len(), 2);
        assert!((regions[1].area - 96.0).abs() < 1e-12);
        assert_eq!(regions[1].hole_count, 1);
    }

    #[test]
    fn test_canvas_on_face_projects_boundary() {
        let mut mock = MockBackend::new();
        let solid = extrude_rect(&mut mock, Rect::new(1.0, 2.0, 3.0, 4.0), 5.0);
        let front = mock.solid(solid).unwrap().face_facing([0.0, -1.0, 0.0]).unwrap().id;
        let canvas = mock.create_canvas_on_face(front).unwrap();
        assert_eq!(mock.canvas_count(), 2);
        let plane = mock.canvas_plane(canvas).unwrap();
        assert_eq!(plane.normal, [0.0, -1.0, 0.0]);
        assert_eq!(plane.y_axis(), [0.0, 0.0, 1.0]);
        let regions = mock.regions(canvas).unwrap();
        assert_eq!(regions.len(), 1);
        // Front face spans x in [1, 4] and z in [0, 5]
        assert!(regions[0]
            .bounds
            .approx_eq(&Rect::new(1.0, 0.0, 3.0, 5.0), 1e-12));
    }

    #[test]
    fn test_cut_adds_inner_faces_and_records_tool() {
        let mut mock = MockBackend::new();
        let solid = extrude_rect(&mut mock, Rect::new(0.0, 0.0, 4.0, 4.0), 4.0);
        let top = mock.solid(solid).unwrap().face_facing([0.0, 0.0, 1.0]).unwrap().id;
        let canvas = mock.create_canvas_on_face(top).unwrap();
        let boundary = mock.outlines(canvas).unwrap()[0];
        mock.add_rect_outline(canvas, Rect::new(1.0, 1.0, 2.0, 2.0))
            .unwrap();
        mock.remove_outline(canvas, boundary).unwrap();
        let region = mock.region_at(canvas, 0).unwrap();
        let result = mock
            .synthesize_solid(region, -2.0, SolidMode::CutFrom(solid))
            .unwrap();
        assert_eq!(result, solid);

        let s = mock.solid(solid).unwrap();
        assert_eq!(s.cuts.len(), 1);
        assert!(s.cuts[0].tool_bounds.approx_eq(
            &Aabb {
                min: [1.0, 1.0, 2.0],
                max: [3.0, 3.0, 4.0]
            },
            1e-12
        ));
        // Four pocket walls plus the pocket floor; the opening lies on the top face
        assert_eq!(s.faces.len(), 11);
        // The original top face keeps the lowest id among +Z faces
        assert_eq!(s.face_facing([0.0, 0.0, 1.0]).unwrap().id, top);
    }

    #[test]
    fn test_cut_missing_target_fails() {
        let mut mock = MockBackend::new();
        let solid = extrude_rect(&mut mock, Rect::new(0.0, 0.0, 1.0, 1.0), 1.0);
        let canvas = mock.create_canvas(Plane::XY).unwrap();
        mock.add_rect_outline(canvas, Rect::new(5.0, 5.0, 1.0, 1.0))
            .unwrap();
        let region = mock.region_at(canvas, 0).unwrap();
        let result = mock.synthesize_solid(region, 1.0, SolidMode::CutFrom(solid));
        assert!(matches!(result, Err(BackendError::BooleanFailed { .. })));
    }

    #[test]
    fn test_injected_cut_failure() {
        let mut mock = MockBackend::with_faults(MockFaults {
            fail_cut_at: Some(0),
            ..MockFaults::default()
        });
        let solid = extrude_rect(&mut mock, Rect::new(0.0, 0.0, 2.0, 2.0), 2.0);
        let canvas = mock.create_canvas(Plane::XY).unwrap();
        mock.add_rect_outline(canvas, Rect::new(0.5, 0.5, 1.0, 1.0))
            .unwrap();
        let region = mock.region_at(canvas, 0).unwrap();
        let result = mock.synthesize_solid(region, 1.0, SolidMode::CutFrom(solid));
        assert!(matches!(result, Err(BackendError::BooleanFailed { .. })));
    }

    #[test]
    fn test_remove_solid() {
        let mut mock = MockBackend::new();
        let solid = extrude_rect(&mut mock, Rect::new(0.0, 0.0, 1.0, 1.0), 1.0);
        assert_eq!(mock.solids(), vec![solid]);
        mock.remove_solid(solid).unwrap();
        assert!(mock.solids().is_empty());
        assert!(mock.remove_solid(solid).is_err());
    }

    #[test]
    fn test_tessellate_box() {
        let mut mock = MockBackend::new();
        let solid = extrude_rect(&mut mock, Rect::new(0.0, 0.0, 1.0, 1.0), 1.0);
        let mesh = mock.tessellate(solid, 0.1).unwrap();
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertices.len(), mesh.normals.len());
    }

    #[test]
    fn test_deterministic_ids() {
        let mut a = MockBackend::new();
        let mut b = MockBackend::new();
        let sa = extrude_rect(&mut a, Rect::new(0.0, 0.0, 1.0, 1.0), 1.0);
        let sb = extrude_rect(&mut b, Rect::new(0.0, 0.0, 1.0, 1.0), 1.0);
        assert_eq!(sa, sb);
        assert_eq!(a.faces(sa).unwrap(), b.faces(sb).unwrap());
    }
}
