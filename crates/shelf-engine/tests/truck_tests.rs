use shelf_engine::build;
use shelf_kernel::{BackendIntrospect, GeometryBackend, RenderMesh, TruckBackend};
use shelf_types::{LayoutNode, ShelfConfig};

fn scenario_config() -> ShelfConfig {
    ShelfConfig {
        tool_clearance: 0.1,
        stock_width: 10.0,
        stock_height: 6.0,
        stock_depth: 4.0,
        thumb_radius: 0.5,
        ..ShelfConfig::default()
    }
}

fn two_by_two() -> LayoutNode {
    LayoutNode::row(vec![
        LayoutNode::column(vec![LayoutNode::Drawer, LayoutNode::Drawer]),
        LayoutNode::column(vec![LayoutNode::Drawer, LayoutNode::Drawer]),
    ])
}

/// Area of the triangles lying in the plane `z = height`.
fn area_at_height(mesh: &RenderMesh, height: f64) -> f64 {
    let vertex = |i: u32| {
        let i = i as usize * 3;
        [
            mesh.vertices[i] as f64,
            mesh.vertices[i + 1] as f64,
            mesh.vertices[i + 2] as f64,
        ]
    };
    mesh.indices
        .chunks(3)
        .map(|t| [vertex(t[0]), vertex(t[1]), vertex(t[2])])
        .filter(|t| t.iter().all(|p| (p[2] - height).abs() < 1e-4))
        .map(|[a, b, c]| {
            let u = [b[0] - a[0], b[1] - a[1]];
            let v = [c[0] - a[0], c[1] - a[1]];
            (u[0] * v[1] - u[1] * v[0]).abs() / 2.0
        })
        .sum()
}

#[test]
fn single_drawer_thumb_hole_opens_the_lid() {
    let config = scenario_config();
    let mut backend = TruckBackend::new();
    let report = build(&LayoutNode::Drawer, &config, &mut backend).unwrap();
    let drawer = &report.drawers[0];
    let body = drawer.geometry.body_rect;
    let r = drawer.geometry.thumb_hole.radius;

    let mesh = backend.tessellate(drawer.solid, 0.01).unwrap();
    let lid = area_at_height(&mesh, config.stock_depth);
    // Half of the thumb circle sits over the body at its front edge
    let notch = std::f64::consts::PI * r * r / 2.0;
    let full = body.width * body.height;
    assert!(lid < full - 0.75 * notch, "lid area {lid} of {full} is uncut");
    assert!(lid > full - 1.25 * notch, "lid area {lid} of {full}");

    // The pocket floor keeps its material
    let floor = area_at_height(&mesh, config.cell_gap());
    assert!(floor > 0.0);
}

#[test]
fn scenario_a_builds_on_truck() {
    let config = scenario_config();
    let mut backend = TruckBackend::new();
    let report = build(&two_by_two(), &config, &mut backend).unwrap();
    assert_eq!(backend.solids().len(), 6);

    // Outer box plus four walls around each of the four slots
    let shell_faces = backend.faces(report.case_shell).unwrap();
    assert_eq!(shell_faces.len(), 6 + 4 * 4);

    for drawer in &report.drawers {
        let mesh = backend.tessellate(drawer.solid, 0.01).unwrap();
        let body = drawer.geometry.body_rect;
        let lid = area_at_height(&mesh, config.stock_depth);
        assert!(lid < body.width * body.height - 0.3, "{}: lid uncut", drawer.path);
    }

    for (name, solid) in report.named_solids() {
        let mesh = backend.tessellate(solid, 0.05).unwrap();
        assert!(mesh.triangle_count() > 0, "{name} has no triangles");
        assert_eq!(mesh.vertices.len(), mesh.normals.len(), "{name}");
    }
}
