use serde::{Deserialize, Serialize};

/// A node of the authored shelf layout.
///
/// Rows lay their children left-to-right, columns bottom-to-top.
/// Drawers are leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutNode {
    Row {
        #[serde(rename = "cells", default)]
        children: Vec<LayoutNode>,
    },
    Column {
        #[serde(rename = "cells", default)]
        children: Vec<LayoutNode>,
    },
    Drawer,
}

impl LayoutNode {
    pub fn row(children: Vec<LayoutNode>) -> Self {
        LayoutNode::Row { children }
    }

    pub fn column(children: Vec<LayoutNode>) -> Self {
        LayoutNode::Column { children }
    }

    /// Children of a container; empty for a drawer.
    pub fn children(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::Row { children } | LayoutNode::Column { children } => children,
            LayoutNode::Drawer => &[],
        }
    }

    /// Lowercase variant name, as used in documents and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            LayoutNode::Row { .. } => "row",
            LayoutNode::Column { .. } => "column",
            LayoutNode::Drawer => "drawer",
        }
    }

    /// Number of drawer leaves in this subtree.
    pub fn drawer_count(&self) -> usize {
        match self {
            LayoutNode::Drawer => 1,
            _ => self.children().iter().map(LayoutNode::drawer_count).sum(),
        }
    }

    /// Nesting depth; a single drawer has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(LayoutNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Position of a node in the layout tree, as child indices from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePath(pub Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// File-name friendly form: `root` or `0_2_1`.
    pub fn slug(&self) -> String {
        if self.0.is_empty() {
            return "root".to_string();
        }
        self.0
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "root")?;
        for i in &self.0 {
            write!(f, "/{}", i)?;
        }
        Ok(())
    }
}
