//! TOML view configurations, one table per booster id:
//!
//! ```toml
//! [welcome_booster]
//! custom_view = { icon = "🚀", text = "Custom View Support!" }
//! custom_view_height = 120.0
//! detents = ["medium", "large"]
//! ```

use std::fs;
use std::path::Path;

use booster_core::ViewConfigurations;

use crate::error::{Result, StoreError};

pub fn parse_view_configurations(toml_str: &str) -> Result<ViewConfigurations> {
    let configs: ViewConfigurations = toml::from_str(toml_str)
        .map_err(|e| StoreError::InvalidData(format!("invalid view configuration: {e}")))?;
    for (booster_id, config) in &configs {
        config.validate().map_err(|e| {
            StoreError::InvalidData(format!("invalid view configuration for {booster_id}: {e}"))
        })?;
    }
    Ok(configs)
}

pub fn load_view_configurations(path: &Path) -> Result<ViewConfigurations> {
    let contents = fs::read_to_string(path).map_err(|e| {
        StoreError::InvalidData(format!("failed to read {}: {e}", path.display()))
    })?;
    let configs = parse_view_configurations(&contents)?;
    tracing::debug!(
        "loaded {} view configurations from {}",
        configs.len(),
        path.display()
    );
    Ok(configs)
}
