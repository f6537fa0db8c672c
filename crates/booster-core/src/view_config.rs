use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An allowed size state for a presented card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Detent {
    Medium,
    Large,
    /// Fixed height in points.
    Height(f64),
}

/// Extra visual element embedded in a card above the call to action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomView {
    pub icon: String,
    pub text: String,
}

/// Per-booster presentation hints. The default value means "default style".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfiguration {
    pub custom_view: Option<CustomView>,
    pub custom_view_height: Option<f64>,
    pub detents: Vec<Detent>,
}

impl ViewConfiguration {
    /// Detents to present with; a configuration without any uses `[Large]`.
    pub fn effective_detents(&self) -> Vec<Detent> {
        if self.detents.is_empty() {
            vec![Detent::Large]
        } else {
            self.detents.clone()
        }
    }

    /// Check that every height is a finite, positive number of points.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(h) = self.custom_view_height.filter(|h| !is_valid_height(*h)) {
            return Err(format!("custom_view_height must be a positive number, got {h}"));
        }
        let heights = self.detents.iter().filter_map(|d| match d {
            Detent::Height(h) => Some(*h),
            _ => None,
        });
        for h in heights {
            if !is_valid_height(h) {
                return Err(format!("detent height must be a positive number, got {h}"));
            }
        }
        Ok(())
    }
}

fn is_valid_height(h: f64) -> bool {
    h.is_finite() && h > 0.0
}

/// View configurations keyed by booster id.
pub type ViewConfigurations = HashMap<String, ViewConfiguration>;
