//! Wire and prism builders on top of truck's sweep API.

use std::f64::consts::PI;

use shelf_types::{Outline, Plane, Point2};
use truck_modeling::builder;
use truck_modeling::topology::{Edge, Face, Solid, Wire};
use truck_modeling::{Point3, Rad, Vector3};

use crate::planar::PlanarRegion;
use crate::types::BackendError;

fn point3(p: [f64; 3]) -> Point3 {
    Point3::new(p[0], p[1], p[2])
}

fn vector3(v: [f64; 3]) -> Vector3 {
    Vector3::new(v[0], v[1], v[2])
}

/// Closed wire for an outline, counter-clockwise about the plane normal.
pub fn outline_wire(plane: &Plane, outline: &Outline) -> Wire {
    match outline {
        Outline::Rect { rect } => {
            let pts: Vec<Point3> = rect
                .corners()
                .iter()
                .map(|&c| point3(plane.to_world(c)))
                .collect();
            // Create all vertices first so edges share endpoints
            let vertices: Vec<_> = pts.iter().map(|&p| builder::vertex(p)).collect();
            let n = pts.len();
            let edges: Vec<Edge> = (0..n)
                .map(|i| {
                    let j = (i + 1) % n;
                    Edge::new(
                        &vertices[i],
                        &vertices[j],
                        truck_modeling::geometry::Curve::Line(truck_modeling::geometry::Line(
                            pts[i], pts[j],
                        )),
                    )
                })
                .collect();
            Wire::from_iter(edges)
        }
        Outline::Circle { center, radius } => {
            let start = plane.to_world(Point2::new(center.x + radius, center.y));
            let v = builder::vertex(point3(start));
            builder::rsweep(
                &v,
                point3(plane.to_world(*center)),
                vector3(plane.normal),
                Rad(2.0 * PI),
            )
        }
    }
}

/// Planar face for a region: the outer wire plus one reversed wire per hole.
pub fn region_face(plane: &Plane, region: &PlanarRegion) -> Result<Face, BackendError> {
    let mut wires = vec![outline_wire(plane, &region.outer.1)];
    for (_, hole) in &region.holes {
        wires.push(outline_wire(plane, hole).inverse());
    }
    builder::try_attach_plane(&wires).map_err(|e| BackendError::InvalidProfile {
        reason: format!("failed to create planar face: {}", e),
    })
}

/// Sweep a region between plane offsets `lo < hi` along the plane normal.
pub fn region_prism(
    plane: &Plane,
    region: &PlanarRegion,
    lo: f64,
    hi: f64,
) -> Result<Solid, BackendError> {
    let face = region_face(&plane.offset(lo), region)?;
    let n = plane.normal;
    let length = hi - lo;
    Ok(builder::tsweep(
        &face,
        Vector3::new(n[0] * length, n[1] * length, n[2] * length),
    ))
}
