mod errors;
mod model;
mod storage;

use std::path::Path;

pub(crate) use model::{CardData, SettingsData, card_for_anchor};
use storage::{SettingsLoadStatus, load_settings_from_path, settings_path};

/// Load settings for startup, falling back to defaults on any failure.
pub(crate) fn load_initial_settings() -> SettingsData {
    load_initial_settings_from(&settings_path())
}

/// Read `path` without ever writing to disk.
fn load_initial_settings_from(path: &Path) -> SettingsData {
    let load = match load_settings_from_path(path) {
        Ok(load) => load,
        Err(err) => {
            log::warn!("settings load failed: {err}");
            return SettingsData::default();
        },
    };

    let (settings, status) = load.into_parts();
    match status {
        SettingsLoadStatus::Loaded => {
            log::info!("settings loaded from {}", path.display());
        },
        SettingsLoadStatus::Missing => {
            log::info!(
                "settings file {} missing, using defaults",
                path.display()
            );
        },
        SettingsLoadStatus::Invalid(reason) => {
            log::warn!("settings invalid, using defaults: {reason}");
        },
    }

    settings
}
