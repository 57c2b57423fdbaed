use serde::{Deserialize, Serialize};

/// A point in a canvas's local 2D frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in stock units. `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Both extents are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Corners in counter-clockwise order, starting bottom-left.
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.right(), self.y),
            Point2::new(self.right(), self.top()),
            Point2::new(self.x, self.top()),
        ]
    }

    /// `other` lies inside `self`, edges may touch.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.top() <= self.top()
    }

    /// `other` lies inside `self` with a positive margin on every side.
    pub fn strictly_contains_rect(&self, other: &Rect) -> bool {
        other.x > self.x
            && other.y > self.y
            && other.right() < self.right()
            && other.top() < self.top()
    }

    pub fn contains_point(&self, p: Point2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.top()
    }

    /// Rectangles share interior area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }

    /// Component-wise comparison within `tol`.
    pub fn approx_eq(&self, other: &Rect, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.width - other.width).abs() <= tol
            && (self.height - other.height).abs() <= tol
    }
}

/// A closed outline drawn on a canvas, in the canvas's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outline {
    Rect { rect: Rect },
    Circle { center: Point2, radius: f64 },
}

impl Outline {
    pub fn rect(rect: Rect) -> Self {
        Outline::Rect { rect }
    }

    pub fn circle(center: Point2, radius: f64) -> Self {
        Outline::Circle { center, radius }
    }

    pub fn area(&self) -> f64 {
        match self {
            Outline::Rect { rect } => rect.area(),
            Outline::Circle { radius, .. } => std::f64::consts::PI * radius * radius,
        }
    }

    /// Axis-aligned bounding rectangle.
    pub fn bounds(&self) -> Rect {
        match self {
            Outline::Rect { rect } => *rect,
            Outline::Circle { center, radius } => Rect::new(
                center.x - radius,
                center.y - radius,
                2.0 * radius,
                2.0 * radius,
            ),
        }
    }

    /// Point lies inside or on the outline.
    pub fn contains_point(&self, p: Point2) -> bool {
        match self {
            Outline::Rect { rect } => rect.contains_point(p),
            Outline::Circle { center, radius } => {
                let dx = p.x - center.x;
                let dy = p.y - center.y;
                dx * dx + dy * dy <= radius * radius
            }
        }
    }

    /// `inner` lies entirely within `self`, boundaries may touch.
    pub fn encloses(&self, inner: &Outline) -> bool {
        match (self, inner) {
            (Outline::Rect { rect: outer }, _) => outer.contains_rect(&inner.bounds()),
            (Outline::Circle { center, radius }, Outline::Circle { center: c, radius: r }) => {
                let d = ((c.x - center.x).powi(2) + (c.y - center.y).powi(2)).sqrt();
                d + r <= *radius
            }
            (Outline::Circle { .. }, Outline::Rect { rect }) => {
                rect.corners().iter().all(|p| self.contains_point(*p))
            }
        }
    }

    /// Interiors of the two outlines are disjoint.
    pub fn is_disjoint_from(&self, other: &Outline) -> bool {
        match (self, other) {
            (Outline::Rect { rect: a }, Outline::Rect { rect: b }) => !a.overlaps(b),
            (Outline::Circle { center, radius }, Outline::Rect { rect })
            | (Outline::Rect { rect }, Outline::Circle { center, radius }) => {
                let nx = center.x.clamp(rect.x, rect.right());
                let ny = center.y.clamp(rect.y, rect.top());
                let dx = center.x - nx;
                let dy = center.y - ny;
                dx * dx + dy * dy >= radius * radius
            }
            (Outline::Circle { center: a, radius: ra }, Outline::Circle { center: b, radius: rb }) => {
                let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                d >= ra + rb
            }
        }
    }
}

/// A plane with a local 2D frame.
/// Local `(u, v)` maps to `origin + u * x_axis + v * (normal × x_axis)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: [f64; 3],
    pub normal: [f64; 3],
    pub x_axis: [f64; 3],
}

impl Plane {
    /// The case sketch plane. Depth runs along +Z.
    pub const XY: Plane = Plane {
        origin: [0.0, 0.0, 0.0],
        normal: [0.0, 0.0, 1.0],
        x_axis: [1.0, 0.0, 0.0],
    };

    /// Frame for a planar face through `point` with outward `normal`.
    ///
    /// The x axis is world X unless the normal is parallel to it, in which
    /// case world Y is used. The origin is the projection of the world origin.
    pub fn from_face(point: [f64; 3], normal: [f64; 3]) -> Self {
        let n = normalize(normal);
        let x_axis = if n[0].abs() < 0.9 {
            [1.0, 0.0, 0.0]
        } else {
            [0.0, 1.0, 0.0]
        };
        // Remove any normal component so the axis lies in the plane
        let along = dot(x_axis, n);
        let x_axis = normalize([
            x_axis[0] - along * n[0],
            x_axis[1] - along * n[1],
            x_axis[2] - along * n[2],
        ]);
        let offset = dot(point, n);
        Self {
            origin: [n[0] * offset, n[1] * offset, n[2] * offset],
            normal: n,
            x_axis,
        }
    }

    pub fn y_axis(&self) -> [f64; 3] {
        cross(self.normal, self.x_axis)
    }

    /// Map a local point to world coordinates.
    pub fn to_world(&self, p: Point2) -> [f64; 3] {
        let y = self.y_axis();
        [
            self.origin[0] + p.x * self.x_axis[0] + p.y * y[0],
            self.origin[1] + p.x * self.x_axis[1] + p.y * y[1],
            self.origin[2] + p.x * self.x_axis[2] + p.y * y[2],
        ]
    }

    /// Project a world point into the local frame.
    pub fn to_local(&self, p: [f64; 3]) -> Point2 {
        let d = [
            p[0] - self.origin[0],
            p[1] - self.origin[1],
            p[2] - self.origin[2],
        ];
        Point2::new(dot(d, self.x_axis), dot(d, self.y_axis()))
    }

    /// The same frame shifted along its normal by `distance`.
    pub fn offset(&self, distance: f64) -> Self {
        Self {
            origin: [
                self.origin[0] + self.normal[0] * distance,
                self.origin[1] + self.normal[1] * distance,
                self.origin[2] + self.normal[2] * distance,
            ],
            ..*self
        }
    }
}

pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Unit vector along `v`; +Z for a zero-length input.
pub fn normalize(v: [f64; 3]) -> [f64; 3] {
    let len = dot(v, v).sqrt();
    if len > 1e-12 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < EPS)
    }

    #[test]
    fn xy_plane_is_identity_frame() {
        let p = Plane::XY.to_world(Point2::new(2.0, 3.0));
        assert!(close(p, [2.0, 3.0, 0.0]));
    }

    #[test]
    fn front_face_frame_maps_v_to_depth() {
        // Face at y = 1.5 facing -Y: local (u, v) should be world (x, z)
        let plane = Plane::from_face([4.0, 1.5, 2.0], [0.0, -1.0, 0.0]);
        assert!(close(plane.y_axis(), [0.0, 0.0, 1.0]));
        let w = plane.to_world(Point2::new(3.0, 0.5));
        assert!(close(w, [3.0, 1.5, 0.5]));
        let back = plane.to_local([3.0, 1.5, 0.5]);
        assert!((back.x - 3.0).abs() < EPS && (back.y - 0.5).abs() < EPS);
    }

    #[test]
    fn top_face_frame_maps_to_world_xy() {
        let plane = Plane::from_face([1.0, 1.0, 9.0], [0.0, 0.0, 1.0]);
        assert!(close(plane.origin, [0.0, 0.0, 9.0]));
        let w = plane.to_world(Point2::new(5.0, 2.0));
        assert!(close(w, [5.0, 2.0, 9.0]));
    }

    #[test]
    fn x_facing_plane_falls_back_to_y_axis() {
        let plane = Plane::from_face([3.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        assert!(close(plane.x_axis, [0.0, 1.0, 0.0]));
        assert!(close(plane.y_axis(), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn rect_containment() {
        let outer = Rect::new(0.0, 0.0, 10.0, 6.0);
        let inner = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert!(outer.strictly_contains_rect(&inner));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.strictly_contains_rect(&outer));
        assert!(!inner.contains_rect(&outer));
    }

    #[test]
    fn circle_straddling_rect_edge_is_neither_inside_nor_disjoint() {
        let rect = Outline::rect(Rect::new(0.0, 0.0, 4.0, 4.0));
        let circle = Outline::circle(Point2::new(2.0, 0.0), 1.0);
        assert!(!rect.encloses(&circle));
        assert!(!rect.is_disjoint_from(&circle));
    }

    #[test]
    fn outline_serde_tagged() {
        let outline = Outline::circle(Point2::new(1.0, 2.0), 0.5);
        let json = serde_json::to_string(&outline).unwrap();
        assert!(json.contains("\"type\":\"circle\""));
        let back: Outline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outline);
    }
}
