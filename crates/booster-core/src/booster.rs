use serde::{Deserialize, Serialize};

/// A single promotional or onboarding message candidate.
///
/// `id` is the join key against viewed records. Higher `priority` wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booster {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Symbolic icon name, e.g. `star.circle.fill`.
    pub image_name: String,
    pub button_text: String,
    pub priority: i64,
}

impl Booster {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        image_name: &str,
        button_text: &str,
        priority: i64,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image_name: image_name.to_string(),
            button_text: button_text.to_string(),
            priority,
        }
    }
}
