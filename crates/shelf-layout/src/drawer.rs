use shelf_types::{DrawerGeometry, Point2, Rect, ShelfConfig, ThumbHole};

use crate::rect::inset;
use crate::LayoutError;

/// Derive a drawer's slot, body, pocket and thumb hole from its cell.
///
/// The pocket rect is expressed in the front face's frame (`u` = world X,
/// `v` = depth) and leaves `cell_gap` of material on the sides, the floor and
/// the lid. It is cut to `body.height - cell_gap`, which leaves a back wall of
/// `cell_gap`.
pub fn derive_drawer(cell: Rect, config: &ShelfConfig) -> Result<DrawerGeometry, LayoutError> {
    if !cell.is_valid() {
        return Err(LayoutError::invalid("drawer cell", cell.width, cell.height));
    }
    let gap = config.cell_gap();
    let slot_rect = cell;
    let body_rect = inset(slot_rect, config.drawer_shelf_gap())?;

    let pocket_rect = Rect::new(
        body_rect.x + gap,
        gap,
        body_rect.width - 2.0 * gap,
        config.stock_depth - 2.0 * gap,
    );
    if !pocket_rect.is_valid() {
        return Err(LayoutError::invalid(
            "drawer pocket",
            pocket_rect.width,
            pocket_rect.height,
        ));
    }
    let pocket_depth = body_rect.height - gap;
    if pocket_depth <= 0.0 {
        return Err(LayoutError::invalid(
            "drawer pocket depth",
            pocket_rect.width,
            pocket_depth,
        ));
    }

    Ok(DrawerGeometry {
        slot_rect,
        body_rect,
        pocket_rect,
        pocket_depth,
        thumb_hole: ThumbHole {
            center: Point2::new(body_rect.x + body_rect.width / 2.0, body_rect.y),
            radius: config.thumb_radius,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ShelfConfig {
        ShelfConfig {
            tool_clearance: 0.1,
            stock_width: 10.0,
            stock_height: 6.0,
            stock_depth: 4.0,
            thumb_radius: 0.5,
            ..ShelfConfig::default()
        }
    }

    #[test]
    fn derives_every_part() {
        let cell = Rect::new(0.3, 0.3, 4.55, 2.55);
        let g = derive_drawer(cell, &config()).unwrap();
        assert_eq!(g.slot_rect, cell);
        assert!(g.body_rect.approx_eq(&Rect::new(0.5, 0.5, 4.15, 2.15), 1e-9));
        assert!(g.pocket_rect.approx_eq(&Rect::new(0.8, 0.3, 3.55, 3.4), 1e-9));
        assert!((g.pocket_depth - 1.85).abs() < 1e-9);
        assert!((g.thumb_hole.center.x - 2.575).abs() < 1e-9);
        assert!((g.thumb_hole.center.y - 0.5).abs() < 1e-9);
        assert_eq!(g.thumb_hole.radius, 0.5);
    }

    #[test]
    fn cell_too_small_for_body() {
        let err = derive_drawer(Rect::new(0.0, 0.0, 0.3, 2.0), &config()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidGeometry { .. }));
    }

    #[test]
    fn body_too_narrow_for_pocket() {
        // Body width 0.6 - 0.4 = 0.2 leaves no room for two cell gaps.
        let err = derive_drawer(Rect::new(0.0, 0.0, 0.6, 2.0), &config()).unwrap_err();
        match err {
            LayoutError::InvalidGeometry { context, .. } => assert_eq!(context, "drawer pocket"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn body_too_short_for_back_wall() {
        // Body height 0.65 - 0.4 = 0.25 is less than the 0.3 back wall.
        let err = derive_drawer(Rect::new(0.0, 0.0, 4.0, 0.65), &config()).unwrap_err();
        match err {
            LayoutError::InvalidGeometry { context, .. } => {
                assert_eq!(context, "drawer pocket depth")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
