//! App Configuration
//!
//! Static settings provided to components through context.

use log::LevelFilter;
use planner_core::STORAGE_KEY;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key for the persisted document
    pub storage_key: String,
    /// Reference data file, relative to the page
    pub data_url: String,
    /// Offline-cache worker script
    pub service_worker_path: String,
    /// Download name for the grocery CSV
    pub csv_filename: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            data_url: "./data.json".to_string(),
            service_worker_path: "./sw.js".to_string(),
            csv_filename: "grocery_list.csv".to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "master_planner_state_v1");
        assert_eq!(config.csv_filename, "grocery_list.csv");
        assert!(config.data_url.ends_with("data.json"));
    }
}
