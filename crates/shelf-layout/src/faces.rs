use shelf_kernel::{FaceHandle, FaceInfo};
use shelf_types::dot;

use crate::LayoutError;

/// Direction of a drawer's front face.
pub const FRONT: [f64; 3] = [0.0, -1.0, 0.0];

/// Direction of a drawer's top face.
pub const TOP: [f64; 3] = [0.0, 0.0, 1.0];

/// Normals closer than this in alignment are treated as a tie.
const ALIGNMENT_EPS: f64 = 1e-9;

/// Pick the face whose normal is most aligned with `target`.
///
/// Faces without a normal are skipped. Among equally aligned faces the one
/// furthest along `target` wins, so a pocket floor never shadows the lid
/// above it. Remaining ties go to the lowest face id.
pub fn select_oriented_face(faces: &[FaceInfo], target: [f64; 3]) -> Result<FaceHandle, LayoutError> {
    let mut best: Option<(f64, f64, FaceHandle)> = None;
    for face in faces {
        let Some(normal) = face.normal else {
            continue;
        };
        let candidate = (dot(normal, target), dot(face.point, target), face.handle);
        best = match best {
            Some(current) if !outranks(&candidate, &current) => Some(current),
            _ => Some(candidate),
        };
    }
    best.map(|(_, _, handle)| handle)
        .ok_or(LayoutError::FaceNotFound { target })
}

fn outranks(a: &(f64, f64, FaceHandle), b: &(f64, f64, FaceHandle)) -> bool {
    if (a.0 - b.0).abs() > ALIGNMENT_EPS {
        return a.0 > b.0;
    }
    if a.1 != b.1 {
        return a.1 > b.1;
    }
    a.2 < b.2
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_kernel::{BackendIntrospect, GeometryBackend, MockBackend, SolidHandle, SolidMode};
    use shelf_types::{Plane, Rect};

    fn unit_box(backend: &mut MockBackend) -> SolidHandle {
        let canvas = backend.create_canvas(Plane::XY).unwrap();
        backend
            .add_rect_outline(canvas, Rect::from_size(1.0, 1.0))
            .unwrap();
        let region = backend.region_at(canvas, 0).unwrap();
        backend
            .synthesize_solid(region, 1.0, SolidMode::Create)
            .unwrap()
    }

    #[test]
    fn picks_front_and_top() {
        let mut backend = MockBackend::new();
        let solid = unit_box(&mut backend);
        let faces = backend.faces(solid).unwrap();

        let front = select_oriented_face(&faces, FRONT).unwrap();
        let top = select_oriented_face(&faces, TOP).unwrap();
        let normal_of = |h| faces.iter().find(|f| f.handle == h).unwrap().normal.unwrap();
        assert_eq!(normal_of(front), [0.0, -1.0, 0.0]);
        assert_eq!(normal_of(top), [0.0, 0.0, 1.0]);
    }

    fn face(id: u64, normal: [f64; 3], point: [f64; 3]) -> FaceInfo {
        FaceInfo {
            handle: FaceHandle(id),
            normal: Some(normal),
            point,
        }
    }

    #[test]
    fn outermost_parallel_face_wins() {
        // A pocket floor enumerated before the lid, both facing up
        let floor = face(3, TOP, [1.0, 1.0, 0.3]);
        let lid = face(9, TOP, [1.0, 1.0, 4.0]);
        let side = face(1, FRONT, [1.0, 0.0, 2.0]);
        let faces = [floor, side, lid];
        assert_eq!(select_oriented_face(&faces, TOP), Ok(FaceHandle(9)));

        let reversed = [lid, side, floor];
        assert_eq!(select_oriented_face(&reversed, TOP), Ok(FaceHandle(9)));
    }

    #[test]
    fn near_parallel_normals_still_compare_by_position() {
        let floor = face(2, [0.0, 0.0, 1.0], [0.0, 0.0, 0.3]);
        let lid = face(5, [0.0, 1e-12, 1.0 - 1e-12], [0.0, 0.0, 4.0]);
        assert_eq!(select_oriented_face(&[floor, lid], TOP), Ok(FaceHandle(5)));
    }

    #[test]
    fn coplanar_tie_goes_to_lowest_id() {
        let faces = [
            face(7, TOP, [0.0, 0.0, 1.0]),
            face(4, TOP, [2.0, 3.0, 1.0]),
        ];
        assert_eq!(select_oriented_face(&faces, TOP), Ok(FaceHandle(4)));
    }

    #[test]
    fn pocket_floor_does_not_shadow_top_on_mock() {
        let mut backend = MockBackend::new();
        let canvas = backend.create_canvas(Plane::XY).unwrap();
        backend
            .add_rect_outline(canvas, Rect::from_size(4.0, 3.0))
            .unwrap();
        let region = backend.region_at(canvas, 0).unwrap();
        let solid = backend
            .synthesize_solid(region, 2.0, SolidMode::Create)
            .unwrap();
        let front = select_oriented_face(&backend.faces(solid).unwrap(), FRONT).unwrap();
        let pocket_canvas = backend.create_canvas_on_face(front).unwrap();
        backend
            .add_rect_outline(pocket_canvas, Rect::new(0.5, 0.5, 3.0, 1.0))
            .unwrap();
        let pocket = backend.region_at(pocket_canvas, 0).unwrap();
        backend
            .synthesize_solid(pocket, -2.5, SolidMode::CutFrom(solid))
            .unwrap();

        let faces = backend.faces(solid).unwrap();
        let up: Vec<_> = faces.iter().filter(|f| f.normal == Some(TOP)).collect();
        assert_eq!(up.len(), 2);
        let top = select_oriented_face(&faces, TOP).unwrap();
        let chosen = faces.iter().find(|f| f.handle == top).unwrap();
        assert!((chosen.point[2] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn curved_faces_are_skipped() {
        let mut backend = MockBackend::new();
        let canvas = backend.create_canvas(Plane::XY).unwrap();
        backend
            .add_circle_outline(canvas, shelf_types::Point2::new(0.0, 0.0), 1.0)
            .unwrap();
        let region = backend.region_at(canvas, 0).unwrap();
        let solid = backend
            .synthesize_solid(region, 1.0, SolidMode::Create)
            .unwrap();
        let faces = backend.faces(solid).unwrap();
        assert_eq!(faces.len(), 3);
        // Only the caps have normals, so nothing faces sideways better than them
        let chosen = select_oriented_face(&faces, [1.0, 0.0, 0.0]).unwrap();
        assert!(faces.iter().any(|f| f.handle == chosen && f.normal.is_some()));
    }

    #[test]
    fn no_faces_is_face_not_found() {
        assert_eq!(
            select_oriented_face(&[], TOP),
            Err(LayoutError::FaceNotFound { target: TOP })
        );
    }
}
