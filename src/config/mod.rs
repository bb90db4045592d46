//! Configuration management for collection hooks.
//!
//! Configuration is read from the `"collection"` key of a JSON settings
//! document, merged with defaults, validated, and kept in a process-wide
//! singleton.

pub mod schema;

pub use schema::CollectionConfig;

use once_cell::sync::Lazy;
use serde_json::Value;
use std::path::Path;
use std::sync::RwLock;

/// Key under which collection settings live in a settings document.
pub const SETTINGS_KEY: &str = "collection";

static CONFIG: Lazy<RwLock<CollectionConfig>> =
    Lazy::new(|| RwLock::new(CollectionConfig::default()));

/// Loads configuration from a JSON settings value.
///
/// Settings that fail to deserialize are reported and replaced by
/// defaults; settings that deserialize but fail validation are an error.
/// On success the global configuration is updated.
///
/// # Example
///
/// ```no_run
/// use collection_hooks::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "collection": {
///         "userAgent": "Orders-Collection/2.0",
///         "timeout": 5000
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.timeout, 5000);
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<CollectionConfig, String> {
    let mut config = CollectionConfig::default();

    if let Some(settings) = settings_json {
        if let Some(collection_settings) = settings.get(SETTINGS_KEY) {
            match serde_json::from_value::<CollectionConfig>(collection_settings.clone()) {
                Ok(user_config) => config = user_config,
                Err(e) => {
                    log::warn!(
                        "Failed to parse {} settings: {}. Using defaults.",
                        SETTINGS_KEY,
                        e
                    );
                }
            }
        }
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }

    Ok(config)
}

/// Loads configuration from a JSON settings file.
///
/// The file must contain a settings document as accepted by [`load_config`].
pub fn load_config_file(path: &Path) -> Result<CollectionConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let settings: Value = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    log::debug!("Loaded settings from {}", path.display());
    load_config(Some(settings))
}

/// Returns a clone of the current global configuration.
pub fn get_config() -> CollectionConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| CollectionConfig::default())
}

/// Applies an in-place update to the global configuration.
///
/// If the result fails validation the configuration reverts to defaults.
pub fn update_config<F>(updater: F)
where
    F: FnOnce(&mut CollectionConfig),
{
    if let Ok(mut config) = CONFIG.write() {
        updater(&mut config);

        if let Err(e) = config.validate() {
            log::warn!("Configuration validation failed after update: {}", e);
            *config = CollectionConfig::default();
        }
    }
}

/// Resets the global configuration to defaults.
pub fn reset_config() {
    if let Ok(mut config) = CONFIG.write() {
        *config = CollectionConfig::default();
    }
}
