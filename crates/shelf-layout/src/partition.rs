use shelf_types::{LayoutNode, Rect};
use tracing::trace;

use crate::LayoutError;

/// Split a container's rect into one rect per child, in child order.
///
/// Rows split the width left-to-right and columns split the height
/// bottom-to-top. Siblings are separated by `gap` with no leading or trailing
/// gap. Every child rect is computed before any is returned, so an
/// over-subscribed container fails without a child being visited. A drawer
/// has no children and partitions to an empty list.
pub fn partition(node: &LayoutNode, rect: Rect, gap: f64) -> Result<Vec<Rect>, LayoutError> {
    let (children, horizontal) = match node {
        LayoutNode::Row { children } => (children, true),
        LayoutNode::Column { children } => (children, false),
        LayoutNode::Drawer => return Ok(Vec::new()),
    };
    let n = children.len();
    if n == 0 {
        return Err(LayoutError::EmptyContainer {
            kind: node.kind_name(),
        });
    }

    let total_gap = gap * (n - 1) as f64;
    let extent = if horizontal { rect.width } else { rect.height };
    let child_extent = (extent - total_gap) / n as f64;
    let (child_width, child_height) = if horizontal {
        (child_extent, rect.height)
    } else {
        (rect.width, child_extent)
    };
    if !Rect::from_size(child_width, child_height).is_valid() {
        return Err(LayoutError::invalid(
            format!("{} of {} cells with gap {}", node.kind_name(), n, gap),
            child_width,
            child_height,
        ));
    }
    trace!(kind = node.kind_name(), n, child_extent, "partition");

    Ok((0..n)
        .map(|i| {
            let offset = i as f64 * (child_extent + gap);
            if horizontal {
                Rect::new(rect.x + offset, rect.y, child_extent, rect.height)
            } else {
                Rect::new(rect.x, rect.y + offset, rect.width, child_extent)
            }
        })
        .collect())
}
