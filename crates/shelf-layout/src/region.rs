use shelf_kernel::{RegionHandle, RegionInfo};
use shelf_types::{RegionSelection, Rect};
use tracing::warn;

use crate::LayoutError;

/// Geometric description of the region a caller expects to find on a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionQuery {
    pub expected_area: f64,
    pub expected_bounds: Option<Rect>,
    pub expected_holes: Option<usize>,
    /// Index used under `RegionSelection::Ordinal`.
    pub ordinal: usize,
}

impl RegionQuery {
    pub fn area(expected_area: f64) -> Self {
        Self {
            expected_area,
            expected_bounds: None,
            expected_holes: None,
            ordinal: 0,
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.expected_bounds = Some(bounds);
        self
    }

    pub fn with_holes(mut self, holes: usize) -> Self {
        self.expected_holes = Some(holes);
        self
    }

    pub fn at_ordinal(mut self, ordinal: usize) -> Self {
        self.ordinal = ordinal;
        self
    }

    fn tolerance(&self) -> f64 {
        1e-6 * self.expected_area.abs().max(1.0)
    }

    pub fn area_matches(&self, region: &RegionInfo) -> bool {
        (region.area - self.expected_area).abs() <= self.tolerance()
    }

    pub fn matches(&self, region: &RegionInfo) -> bool {
        self.area_matches(region)
            && self
                .expected_bounds
                .map_or(true, |b| region.bounds.approx_eq(&b, 1e-6))
            && self.expected_holes.map_or(true, |n| region.hole_count == n)
    }
}

/// Resolve a region on a canvas.
///
/// `Predicate` requires exactly one region matching `query`. `Ordinal` takes
/// the region at `query.ordinal` and only checks its area.
pub fn select_region(
    regions: &[RegionInfo],
    query: &RegionQuery,
    selection: RegionSelection,
) -> Result<RegionHandle, LayoutError> {
    match selection {
        RegionSelection::Predicate => {
            let mut found = regions.iter().filter(|r| query.matches(r));
            match (found.next(), found.next()) {
                (Some(region), None) => Ok(region.handle),
                (None, _) => Err(LayoutError::AmbiguousRegion {
                    reason: format!(
                        "none of {} regions has area {}",
                        regions.len(),
                        query.expected_area
                    ),
                }),
                (Some(_), Some(_)) => Err(LayoutError::AmbiguousRegion {
                    reason: format!("several regions have area {}", query.expected_area),
                }),
            }
        }
        RegionSelection::Ordinal => {
            let index = query.ordinal;
            warn!(index, "selecting region by ordinal");
            let region = regions.get(index).ok_or_else(|| LayoutError::AmbiguousRegion {
                reason: format!("region {} requested, {} available", index, regions.len()),
            })?;
            if !query.area_matches(region) {
                return Err(LayoutError::AmbiguousRegion {
                    reason: format!(
                        "region {} has area {}, expected {}",
                        index, region.area, query.expected_area
                    ),
                });
            }
            Ok(region.handle)
        }
    }
}
