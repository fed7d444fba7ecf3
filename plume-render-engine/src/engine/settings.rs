//! Engine tuning, collected in one deserialisable resource.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// All knobs of the render engine. `Default` pulls from the `constants`
/// crate; a JSON settings file can override any subset of fields.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlumeSettings {
    /// Directory holding the dataset files.
    pub dataset_dir: PathBuf,
    /// File name stem; files are `{stem}_{index:02}.json`.
    pub file_stem: String,
    /// Number of files in the cycle.
    pub file_count: usize,
    /// Seconds between automatic reloads.
    pub update_interval_secs: f32,
    /// Points per unit of concentration at full LOD. Datasets at different
    /// release rates need different densities.
    pub concentration_scale: f32,
    /// Concentration mapped to the red end of the colour ramp.
    pub max_concentration: f32,
    /// Sphere radius of a rendered point, in metres.
    pub point_radius: f32,
    /// Seed for the point-scatter RNG.
    pub seed: u64,
}

impl Default for PlumeSettings {
    fn default() -> Self {
        Self {
            dataset_dir: constants::dataset::DEFAULT_DATASET_DIR.into(),
            file_stem: constants::dataset::DATASET_FILE_STEM.to_string(),
            file_count: constants::dataset::DATASET_FILE_COUNT,
            update_interval_secs: constants::render_settings::DEFAULT_UPDATE_INTERVAL_SECS,
            concentration_scale: constants::render_settings::DEFAULT_CONCENTRATION_SCALE,
            max_concentration: constants::render_settings::DEFAULT_MAX_CONCENTRATION,
            point_radius: constants::render_settings::POINT_RADIUS,
            seed: 0,
        }
    }
}

impl PlumeSettings {
    /// Path of the dataset file at a given cycle index.
    pub fn dataset_path(&self, index: usize) -> PathBuf {
        self.dataset_dir
            .join(format!("{}_{:02}.json", self.file_stem, index))
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("file_count must be at least 1")]
    ZeroFileCount,
}

/// Load settings overrides from a JSON file. An empty file cycle would make
/// the dataset cursor undefined, so `file_count: 0` is rejected here.
pub fn load_settings(path: &Path) -> Result<PlumeSettings, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: PlumeSettings =
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if settings.file_count == 0 {
        return Err(SettingsError::ZeroFileCount);
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_paths_are_zero_padded() {
        let settings = PlumeSettings::default();
        let path = settings.dataset_path(3);
        assert!(path.ends_with("output_concentrations_03.json"), "{path:?}");
        let path = settings.dataset_path(11);
        assert!(path.ends_with("output_concentrations_11.json"), "{path:?}");
    }

    #[test]
    fn settings_file_overrides_a_subset_of_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plume_settings.json");
        fs::write(&path, r#"{"concentration_scale": 1000.0, "seed": 42}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.concentration_scale, 1000.0);
        assert_eq!(settings.seed, 42);
        // Untouched fields keep their defaults.
        assert_eq!(settings.file_count, 12);
        assert_eq!(settings.update_interval_secs, 1.0);
    }

    #[test]
    fn zero_file_count_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plume_settings.json");
        fs::write(&path, r#"{"file_count": 0}"#).unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, SettingsError::ZeroFileCount));
    }

    #[test]
    fn missing_settings_file_is_io_error() {
        let err = load_settings(Path::new("/nonexistent/plume_settings.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
