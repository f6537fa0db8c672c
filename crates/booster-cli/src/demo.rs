//! Fixed demo content: screen text, the custom welcome view and navigation stubs.

use booster_core::{CustomView, Detent, ViewConfiguration, ViewConfigurations};

pub const ROOT_TITLE: &str = "BoosterKit Demo App";

pub const ROOT_INSTRUCTIONS: &str = "A Booster should appear when you launch the app for the first time.\n\n\
Once you've seen it, it won't show again. Run `booster-demo reset` to clear it and see it again.";

pub const DEV_MODE_INFO: &str =
    "When enabled, boosters won't be marked as viewed and can be shown repeatedly";

pub const RESTART_NOTICE: &str = "Restart the app for this change to take effect.";

pub const RESET_PROMPT: &str = "This will clear all viewed Booster records. Restart the app to see the Booster again.";

pub const RESET_DONE: &str = "All viewed Booster records have been cleared. Restart the app to see the Booster again.";

/// The root screen shown at every launch.
pub fn render_root_screen(dev_mode: bool) -> String {
    format!(
        "{ROOT_TITLE}\n\n{ROOT_INSTRUCTIONS}\n\nDev Mode: {}\n  {DEV_MODE_INFO}\n\n",
        on_off(dev_mode)
    )
}

pub fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// Built-in presentation hints: the welcome booster gets a custom view.
pub fn demo_view_configurations() -> ViewConfigurations {
    let mut configurations = ViewConfigurations::new();
    configurations.insert(
        "welcome_booster".to_string(),
        ViewConfiguration {
            custom_view: Some(CustomView {
                icon: "🚀".to_string(),
                text: "Custom View Support!\nYou can add any view here.".to_string(),
            }),
            custom_view_height: Some(120.0),
            detents: vec![Detent::Medium, Detent::Large],
        },
    );
    configurations
}

/// Where a primary action on `booster_id` would take the user.
pub fn navigation_target(booster_id: &str) -> Option<&'static str> {
    match booster_id {
        "welcome_booster" => Some("Navigate to welcome screen"),
        "feature_update_v2" => Some("Navigate to editor"),
        "settings_reminder" => Some("Navigate to settings"),
        _ => None,
    }
}
