use serde::Serialize;
use shelf_kernel::SolidHandle;
use shelf_types::{DrawerGeometry, NodePath, Rect};

/// One built drawer.
#[derive(Debug, Clone)]
pub struct DrawerReport {
    pub path: NodePath,
    pub geometry: DrawerGeometry,
    pub solid: SolidHandle,
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub back_panel: SolidHandle,
    pub case_shell: SolidHandle,
    /// Drawers in traversal order.
    pub drawers: Vec<DrawerReport>,
}

impl BuildReport {
    /// Every solid of the build with a file-name friendly label.
    pub fn named_solids(&self) -> Vec<(String, SolidHandle)> {
        let mut out = vec![
            ("back_panel".to_string(), self.back_panel),
            ("case_shell".to_string(), self.case_shell),
        ];
        out.extend(
            self.drawers
                .iter()
                .map(|d| (format!("drawer_{}", d.path.slug()), d.solid)),
        );
        out
    }
}

/// A drawer as planned, before any geometry exists.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedDrawer {
    pub path: NodePath,
    pub geometry: DrawerGeometry,
}

/// Backend-free dry run of a build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    /// The stock footprint.
    pub root_rect: Rect,
    /// The root rect after the root inset.
    pub working_rect: Rect,
    pub drawers: Vec<PlannedDrawer>,
}
