use serde::{Deserialize, Serialize};

use crate::geometry::{Point2, Rect};

/// Pull hole cut through the top of a drawer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThumbHole {
    pub center: Point2,
    pub radius: f64,
}

/// Everything derived for one drawer leaf.
///
/// `slot_rect` and `body_rect` live on the case sketch plane. `pocket_rect`
/// lives in the front face's frame, where `u` is world X and `v` runs along
/// the depth axis. The thumb hole lives in the top face's frame (world X/Y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawerGeometry {
    pub slot_rect: Rect,
    pub body_rect: Rect,
    pub pocket_rect: Rect,
    /// How far the pocket is cut in from the front face.
    pub pocket_depth: f64,
    pub thumb_hole: ThumbHole,
}
