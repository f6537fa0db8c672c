//! Key-value demo settings, stored alongside the viewed records.

use rusqlite::{OptionalExtension, params};

use crate::error::Result;
use crate::store::Store;

/// Settings key for the dev-mode flag.
pub const DEV_MODE_KEY: &str = "isDevMode";

impl Store {
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn()
            .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Missing or unrecognised values read as `false`.
    pub fn get_bool_setting(&self, key: &str) -> Result<bool> {
        Ok(matches!(
            self.get_setting(key)?.as_deref(),
            Some("true") | Some("1")
        ))
    }

    pub fn set_bool_setting(&self, key: &str, value: bool) -> Result<()> {
        self.set_setting(key, if value { "true" } else { "false" })
    }

    pub fn dev_mode(&self) -> Result<bool> {
        self.get_bool_setting(DEV_MODE_KEY)
    }

    pub fn set_dev_mode(&self, enabled: bool) -> Result<()> {
        self.set_bool_setting(DEV_MODE_KEY, enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_roundtrip() {
        let store = Store::open_in_memory().unwrap();

        assert!(store.get_setting("foo").unwrap().is_none());

        store.set_setting("foo", "bar").unwrap();
        assert_eq!(store.get_setting("foo").unwrap(), Some("bar".to_string()));

        store.set_setting("foo", "baz").unwrap();
        assert_eq!(store.get_setting("foo").unwrap(), Some("baz".to_string()));
    }

    #[test]
    fn test_dev_mode_defaults_off() {
        let store = Store::open_in_memory().unwrap();
        assert!(!store.dev_mode().unwrap());
    }

    #[test]
    fn test_dev_mode_toggle() {
        let store = Store::open_in_memory().unwrap();
        store.set_dev_mode(true).unwrap();
        assert!(store.dev_mode().unwrap());
        assert_eq!(store.get_setting(DEV_MODE_KEY).unwrap().as_deref(), Some("true"));

        store.set_dev_mode(false).unwrap();
        assert!(!store.dev_mode().unwrap());
    }

    #[test]
    fn test_garbage_bool_reads_false() {
        let store = Store::open_in_memory().unwrap();
        store.set_setting(DEV_MODE_KEY, "maybe").unwrap();
        assert!(!store.dev_mode().unwrap());
    }

    #[test]
    fn test_settings_do_not_touch_viewed_records() {
        let store = Store::open_in_memory().unwrap();
        store.mark_viewed("a").unwrap();
        store.set_dev_mode(true).unwrap();
        assert_eq!(store.viewed_ids().unwrap().len(), 1);
    }
}
