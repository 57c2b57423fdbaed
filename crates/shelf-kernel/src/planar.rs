//! Planar canvases and region arrangement shared by every backend.
//!
//! Outlines on one canvas must not cross: any two are either nested or
//! disjoint. Each outline then bounds exactly one region, made of its
//! interior minus the outlines it directly encloses.

use shelf_types::{Outline, Plane, Rect};

use crate::types::{BackendError, OutlineHandle};

/// A canvas: a plane plus the closed outlines drawn on it.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub plane: Plane,
    outlines: Vec<(OutlineHandle, Outline)>,
}

impl Canvas {
    pub fn new(plane: Plane) -> Self {
        Self {
            plane,
            outlines: Vec::new(),
        }
    }

    pub fn push(&mut self, handle: OutlineHandle, outline: Outline) {
        self.outlines.push((handle, outline));
    }

    pub fn remove(&mut self, handle: OutlineHandle) -> Result<Outline, BackendError> {
        let pos = self
            .outlines
            .iter()
            .position(|(h, _)| *h == handle)
            .ok_or(BackendError::outline(handle))?;
        Ok(self.outlines.remove(pos).1)
    }

    pub fn handles(&self) -> Vec<OutlineHandle> {
        self.outlines.iter().map(|(h, _)| *h).collect()
    }

    /// Regions in outline insertion order.
    pub fn arrange(&self) -> Result<Vec<PlanarRegion>, BackendError> {
        arrange(&self.outlines)
    }

    /// The region bounded from outside by `outer`.
    pub fn region(&self, outer: OutlineHandle) -> Result<PlanarRegion, BackendError> {
        self.arrange()?
            .into_iter()
            .find(|r| r.outer.0 == outer)
            .ok_or(BackendError::outline(outer))
    }
}

/// One face of the arrangement: an outer outline minus its direct children.
#[derive(Debug, Clone)]
pub struct PlanarRegion {
    pub outer: (OutlineHandle, Outline),
    pub holes: Vec<(OutlineHandle, Outline)>,
}

impl PlanarRegion {
    pub fn area(&self) -> f64 {
        self.outer.1.area() - self.holes.iter().map(|(_, o)| o.area()).sum::<f64>()
    }

    pub fn bounds(&self) -> Rect {
        self.outer.1.bounds()
    }
}

/// Build the region arrangement of non-crossing outlines.
pub fn arrange(outlines: &[(OutlineHandle, Outline)]) -> Result<Vec<PlanarRegion>, BackendError> {
    let n = outlines.len();
    // encloses[i][j]: outline i strictly owns outline j
    let mut encloses = vec![vec![false; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let (hi, a) = &outlines[i];
            let (hj, b) = &outlines[j];
            let a_in_b = b.encloses(a);
            let b_in_a = a.encloses(b);
            if b_in_a {
                // Identical outlines nest the later one inside the earlier
                encloses[i][j] = true;
            } else if a_in_b {
                encloses[j][i] = true;
            } else if !a.is_disjoint_from(b) {
                return Err(BackendError::IntersectingOutlines { a: hi.0, b: hj.0 });
            }
        }
    }

    // The parent of j is the smallest outline that encloses it
    let parent: Vec<Option<usize>> = (0..n)
        .map(|j| {
            (0..n)
                .filter(|&i| encloses[i][j])
                .min_by(|&a, &b| {
                    outlines[a]
                        .1
                        .area()
                        .partial_cmp(&outlines[b].1.area())
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(b.cmp(&a))
                })
        })
        .collect();

    Ok((0..n)
        .map(|i| PlanarRegion {
            outer: outlines[i],
            holes: (0..n)
                .filter(|&j| parent[j] == Some(i))
                .map(|j| outlines[j])
                .collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_types::Point2;

    fn h(id: u64) -> OutlineHandle {
        OutlineHandle(id)
    }

    #[test]
    fn single_outline_is_one_region() {
        let regions = arrange(&[(h(1), Outline::rect(Rect::new(0.0, 0.0, 10.0, 6.0)))]).unwrap();
        assert_eq!(regions.len(), 1);
        assert!((regions[0].area() - 60.0).abs() < 1e-12);
        assert!(regions[0].holes.is_empty());
    }

    #[test]
    fn boundary_with_two_slots() {
        let regions = arrange(&[
            (h(1), Outline::rect(Rect::new(0.0, 0.0, 10.0, 6.0))),
            (h(2), Outline::rect(Rect::new(1.0, 1.0, 3.0, 4.0))),
            (h(3), Outline::rect(Rect::new(5.0, 1.0, 3.0, 4.0))),
        ])
        .unwrap();
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].holes.len(), 2);
        assert!((regions[0].area() - (60.0 - 24.0)).abs() < 1e-12);
        assert!((regions[1].area() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn nested_slots_only_subtract_direct_children() {
        let regions = arrange(&[
            (h(1), Outline::rect(Rect::new(0.0, 0.0, 10.0, 10.0))),
            (h(2), Outline::rect(Rect::new(1.0, 1.0, 8.0, 8.0))),
            (h(3), Outline::rect(Rect::new(2.0, 2.0, 2.0, 2.0))),
        ])
        .unwrap();
        assert_eq!(regions[0].holes.len(), 1);
        assert_eq!(regions[0].holes[0].0, h(2));
        assert_eq!(regions[1].holes[0].0, h(3));
    }

    #[test]
    fn circle_inside_rect_is_a_hole() {
        let regions = arrange(&[
            (h(1), Outline::rect(Rect::new(0.0, 0.0, 10.0, 10.0))),
            (h(2), Outline::circle(Point2::new(5.0, 5.0), 1.0)),
        ])
        .unwrap();
        let expected = 100.0 - std::f64::consts::PI;
        assert!((regions[0].area() - expected).abs() < 1e-12);
    }

    #[test]
    fn crossing_outlines_are_rejected() {
        let result = arrange(&[
            (h(1), Outline::rect(Rect::new(0.0, 0.0, 4.0, 4.0))),
            (h(2), Outline::circle(Point2::new(2.0, 0.0), 1.0)),
        ]);
        assert!(matches!(
            result,
            Err(BackendError::IntersectingOutlines { a: 1, b: 2 })
        ));
    }

    #[test]
    fn canvas_remove_unknown_outline_fails() {
        let mut canvas = Canvas::new(Plane::XY);
        canvas.push(h(1), Outline::rect(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert!(canvas.remove(h(7)).is_err());
        assert!(canvas.remove(h(1)).is_ok());
        assert!(canvas.handles().is_empty());
    }
}
