use shelf_types::Rect;

use crate::LayoutError;

/// Shrink `rect` by `margin` on all four sides.
///
/// Fails when either resulting dimension is not positive.
pub fn inset(rect: Rect, margin: f64) -> Result<Rect, LayoutError> {
    let out = Rect::new(
        rect.x + margin,
        rect.y + margin,
        rect.width - 2.0 * margin,
        rect.height - 2.0 * margin,
    );
    if !out.is_valid() {
        return Err(LayoutError::invalid(
            format!("inset by {}", margin),
            out.width,
            out.height,
        ));
    }
    Ok(out)
}
