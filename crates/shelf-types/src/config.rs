use serde::{Deserialize, Serialize};

/// How the engine picks a region out of a canvas holding several outlines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegionSelection {
    /// Select the region whose area and bounds match the expected values.
    #[default]
    Predicate,
    /// Take the region at the fixed per-step ordinal. The area is still checked.
    Ordinal,
}

/// Build parameters, fixed for one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfConfig {
    /// Minimum clean-cut margin. Every other gap derives from it.
    pub tool_clearance: f64,
    pub stock_width: f64,
    pub stock_height: f64,
    /// Extrusion depth of the case and of every drawer.
    pub stock_depth: f64,
    pub thumb_radius: f64,
    /// Remove every solid created so far when the build fails.
    #[serde(default)]
    pub rollback_on_failure: bool,
    #[serde(default)]
    pub region_selection: RegionSelection,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            tool_clearance: 0.04,
            stock_width: 26.0,
            stock_height: 15.0,
            stock_depth: 9.0,
            thumb_radius: 1.8,
            rollback_on_failure: false,
            region_selection: RegionSelection::Predicate,
        }
    }
}

impl ShelfConfig {
    /// Spacing between sibling cells, and the margin around every outline.
    pub fn cell_gap(&self) -> f64 {
        self.tool_clearance * 3.0
    }

    /// Clearance between a drawer body and its slot.
    pub fn drawer_shelf_gap(&self) -> f64 {
        self.tool_clearance * 2.0
    }

    /// Check that every dimension is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("tool_clearance", self.tool_clearance),
            ("stock_width", self.stock_width),
            ("stock_height", self.stock_height),
            ("stock_depth", self.stock_depth),
            ("thumb_radius", self.thumb_radius),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if 2.0 * self.cell_gap() >= self.stock_depth {
            return Err(ConfigError::DepthTooShallow {
                depth: self.stock_depth,
                cell_gap: self.cell_gap(),
            });
        }
        Ok(())
    }
}

/// Configuration rejected before any geometry is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("stock depth {depth} leaves no pocket with cell gap {cell_gap}")]
    DepthTooShallow { depth: f64, cell_gap: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_gaps() {
        let config = ShelfConfig {
            tool_clearance: 0.1,
            ..ShelfConfig::default()
        };
        assert!((config.cell_gap() - 0.3).abs() < 1e-12);
        assert!((config.drawer_shelf_gap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn default_is_valid() {
        assert!(ShelfConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_width() {
        let config = ShelfConfig {
            stock_width: 0.0,
            ..ShelfConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "stock_width",
                ..
            })
        ));
    }

    #[test]
    fn rejects_nan_clearance() {
        let config = ShelfConfig {
            tool_clearance: f64::NAN,
            ..ShelfConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_depth_without_room_for_pocket() {
        let config = ShelfConfig {
            tool_clearance: 1.0,
            stock_depth: 5.0,
            ..ShelfConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DepthTooShallow { .. })
        ));
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let json = r#"{
            "tool_clearance": 0.04,
            "stock_width": 26.0,
            "stock_height": 15.0,
            "stock_depth": 9.0,
            "thumb_radius": 1.8
        }"#;
        let config: ShelfConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }
}
