use std::fs;
use std::path::Path;

use booster_core::{Catalog, parse_catalog};

use crate::error::{Result, StoreError};

/// Read and validate a JSON booster list from `path`.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path).map_err(|e| {
        StoreError::InvalidData(format!("failed to read {}: {e}", path.display()))
    })?;
    parse_catalog(&json)
        .map_err(|e| StoreError::InvalidData(format!("{}: {e}", path.display())))
}

/// Load the booster catalog from `path`, falling back to
/// [`Catalog::fallback`] on any failure. Never fails the caller.
pub fn load_catalog(path: &Path) -> Catalog {
    match read_catalog(path) {
        Ok(catalog) => {
            tracing::info!(
                "successfully loaded {} boosters from {}",
                catalog.len(),
                path.display()
            );
            catalog
        }
        Err(e) => {
            let fallback = Catalog::fallback();
            tracing::warn!(
                "failed to load boosters ({e}), using {} fallback boosters",
                fallback.len()
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("boosters.json");
        fs::write(&path, contents).unwrap();
        path
    }

    fn ids(catalog: &Catalog) -> Vec<&str> {
        catalog.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_missing_file_uses_fallback() {
        let dir = TempDir::new().unwrap();
        let catalog = load_catalog(&dir.path().join("absent.json"));

        assert_eq!(ids(&catalog), ["welcome_booster", "feature_update"]);
        assert_eq!(catalog.get("welcome_booster").unwrap().priority, 10);
        assert_eq!(catalog.get("feature_update").unwrap().priority, 5);
    }

    #[test]
    fn test_valid_file_loaded() {
        let dir = TempDir::new().unwrap();
        let contents = serde_json::json!([
            {
                "id": "settings_reminder",
                "title": "Tune your settings",
                "description": "Make the app yours.",
                "imageName": "gearshape",
                "buttonText": "Open Settings",
                "priority": 3
            }
        ]);
        let path = write(&dir, &contents.to_string());

        let catalog = load_catalog(&path);
        assert_eq!(ids(&catalog), ["settings_reminder"]);
        assert_eq!(catalog.boosters()[0].button_text, "Open Settings");
    }

    #[test]
    fn test_corrupt_file_uses_fallback() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "[{ not json");
        assert_eq!(load_catalog(&path), Catalog::fallback());
    }

    #[test]
    fn test_schema_mismatch_uses_fallback() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"[{"id": "a", "title": "only a title"}]"#);
        assert_eq!(load_catalog(&path), Catalog::fallback());
    }

    #[test]
    fn test_duplicate_ids_use_fallback() {
        let dir = TempDir::new().unwrap();
        let booster = serde_json::json!({
            "id": "dup", "title": "t", "description": "d",
            "imageName": "i", "buttonText": "b", "priority": 1
        });
        let path = write(&dir, &serde_json::json!([booster, booster]).to_string());

        assert!(read_catalog(&path).is_err());
        assert_eq!(load_catalog(&path), Catalog::fallback());
    }

    #[test]
    fn test_read_catalog_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nowhere.json");
        let err = read_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("nowhere.json"), "got: {err}");
    }
}
