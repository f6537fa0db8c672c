pub mod catalog_file;
pub mod error;
pub mod schema;
pub mod settings;
pub mod storage;
pub mod store;
pub mod view_config_file;

pub use catalog_file::{load_catalog, read_catalog};
pub use error::{Result, StoreError};
pub use settings::DEV_MODE_KEY;
pub use storage::BoosterStorage;
pub use store::{DATABASE_FILE, Store, ViewedRecord, default_data_dir};
pub use view_config_file::{load_view_configurations, parse_view_configurations};
