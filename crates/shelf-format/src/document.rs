use shelf_types::{LayoutNode, ShelfConfig};

use crate::metadata::ProjectMetadata;

/// A shelf project: metadata, build configuration and layout tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfDocument {
    pub project: ProjectMetadata,
    pub config: ShelfConfig,
    pub layout: LayoutNode,
}

impl ShelfDocument {
    pub fn new(name: impl Into<String>, config: ShelfConfig, layout: LayoutNode) -> Self {
        Self {
            project: ProjectMetadata::new(name),
            config,
            layout,
        }
    }
}

/// The stock shelf: a row of three columns holding three, two and one drawers.
pub fn default_document() -> ShelfDocument {
    let layout = LayoutNode::row(vec![
        LayoutNode::column(vec![LayoutNode::Drawer; 3]),
        LayoutNode::column(vec![LayoutNode::Drawer; 2]),
        LayoutNode::column(vec![LayoutNode::Drawer]),
    ]);
    ShelfDocument::new("shelf", ShelfConfig::default(), layout)
}
