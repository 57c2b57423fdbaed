//! The build orchestrator: one depth-first pass from a layout tree to a
//! finished set of solids.

use shelf_kernel::SolidHandle;
use shelf_layout::{derive_drawer, inset, partition};
use shelf_types::{LayoutNode, NodePath, Rect, ShelfConfig};
use tracing::{debug, info, instrument, warn};

use crate::accumulator::RegionAccumulator;
use crate::bundle::BackendBundle;
use crate::case_shell::CaseShellSynthesizer;
use crate::drawer::DrawerSynthesizer;
use crate::error::{AtPath, BuildError};
use crate::report::{BuildPlan, BuildReport, PlannedDrawer};

/// Visit every drawer leaf under `node` depth-first, in child order.
///
/// Containers are partitioned before any of their children is visited, so a
/// container that cannot fit its cells fails before the visitor sees them.
pub fn walk_layout<F>(
    node: &LayoutNode,
    path: &NodePath,
    rect: Rect,
    gap: f64,
    visit: &mut F,
) -> Result<(), BuildError>
where
    F: FnMut(&NodePath, Rect) -> Result<(), BuildError>,
{
    debug!(path = %path, kind = node.kind_name(), ?rect, "visit");
    match node {
        LayoutNode::Drawer => visit(path, rect),
        LayoutNode::Row { children } | LayoutNode::Column { children } => {
            let rects = partition(node, rect, gap).at(path)?;
            for (i, (child, child_rect)) in children.iter().zip(rects).enumerate() {
                walk_layout(child, &path.child(i), child_rect, gap, visit)?;
            }
            Ok(())
        }
    }
}

/// Compute every drawer's geometry without touching a backend.
pub fn plan(layout: &LayoutNode, config: &ShelfConfig) -> Result<BuildPlan, BuildError> {
    config.validate().map_err(BuildError::from_config)?;
    let root = NodePath::root();
    let root_rect = Rect::from_size(config.stock_width, config.stock_height);
    let working_rect = inset(root_rect, config.cell_gap()).at(&root)?;

    let mut drawers = Vec::new();
    walk_layout(layout, &root, working_rect, config.cell_gap(), &mut |path, cell| {
        let geometry = derive_drawer(cell, config).at(path)?;
        drawers.push(PlannedDrawer {
            path: path.clone(),
            geometry,
        });
        Ok(())
    })?;

    Ok(BuildPlan {
        root_rect,
        working_rect,
        drawers,
    })
}

/// Build the case and every drawer on `kb`.
///
/// The first failure aborts the build. Solids created before it are left in
/// the backend unless `config.rollback_on_failure` is set, in which case they
/// are removed before the error is returned.
#[instrument(skip_all, fields(drawers = layout.drawer_count()))]
pub fn build(
    layout: &LayoutNode,
    config: &ShelfConfig,
    kb: &mut dyn BackendBundle,
) -> Result<BuildReport, BuildError> {
    config.validate().map_err(BuildError::from_config)?;
    info!(
        width = config.stock_width,
        height = config.stock_height,
        depth = config.stock_depth,
        "build started"
    );

    let mut created = Vec::new();
    match run(layout, config, kb, &mut created) {
        Ok(report) => {
            info!(solids = created.len(), "build finished");
            Ok(report)
        }
        Err(err) => {
            if config.rollback_on_failure {
                rollback(kb, &created);
            }
            Err(err)
        }
    }
}

fn run(
    layout: &LayoutNode,
    config: &ShelfConfig,
    kb: &mut dyn BackendBundle,
    created: &mut Vec<SolidHandle>,
) -> Result<BuildReport, BuildError> {
    let root = NodePath::root();
    let gap = config.cell_gap();
    let root_rect = Rect::from_size(config.stock_width, config.stock_height);
    let shell = CaseShellSynthesizer::new(config);
    let drawer = DrawerSynthesizer::new(config);

    let mut accumulator = RegionAccumulator::new(kb, root_rect).at(&root)?;
    let back_panel = shell.back_panel(kb, &accumulator)?;
    created.push(back_panel);

    let working = inset(root_rect, gap).at(&root)?;
    let mut drawers = Vec::new();
    walk_layout(layout, &root, working, gap, &mut |path, cell| {
        drawers.push(drawer.synthesize(kb, &mut accumulator, created, path, cell)?);
        Ok(())
    })?;

    let case_shell = shell.case_shell(kb, accumulator.finalize())?;
    created.push(case_shell);

    Ok(BuildReport {
        back_panel,
        case_shell,
        drawers,
    })
}

fn rollback(kb: &mut dyn BackendBundle, created: &[SolidHandle]) {
    warn!(solids = created.len(), "build failed, removing created solids");
    for &solid in created.iter().rev() {
        if let Err(e) = kb.remove_solid(solid) {
            warn!(solid = solid.id(), error = %e, "rollback could not remove solid");
        }
    }
}
