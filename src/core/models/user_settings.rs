use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub tesseract_command: PathBuf,
    pub tesseract_language: String,
    pub tesseract_page_segmentation_mode: Option<u8>,
    pub neural_language: String,
    pub models_directory: Option<PathBuf>,
    pub detection_model_url: String,
    pub recognition_model_url: String,
    pub default_method: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            tesseract_command: PathBuf::from(global_constants::DEFAULT_TESSERACT_COMMAND),
            tesseract_language: global_constants::DEFAULT_TESSERACT_LANGUAGE.to_string(),
            tesseract_page_segmentation_mode: None,
            neural_language: global_constants::DEFAULT_NEURAL_LANGUAGE.to_string(),
            models_directory: None,
            detection_model_url: global_constants::DETECTION_MODEL_URL.to_string(),
            recognition_model_url: global_constants::RECOGNITION_MODEL_URL.to_string(),
            default_method: global_constants::METHOD_LABEL_NEURAL.to_string(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Reads settings from `settings_path`, writing the defaults there first
    /// when the file does not exist yet.
    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file at {:?}, using defaults",
                global_constants::LOG_TAG_SETTINGS,
                settings_path
            );
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings file {:?}", settings_path))?;
        let settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", settings_path))?;

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} Tesseract command: {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings.tesseract_command
        );
        log::debug!(
            "{} Default method: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.default_method
        );

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)
            .with_context(|| format!("Failed to write settings file {:?}", settings_path))?;

        log::info!(
            "{} Saved settings to {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        Ok(())
    }

    pub fn resolve_models_directory(&self) -> anyhow::Result<PathBuf> {
        if let Some(models_directory) = &self.models_directory {
            return Ok(models_directory.clone());
        }

        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?;
        Ok(data_dir
            .join(global_constants::CONFIG_DIRECTORY_NAME)
            .join(global_constants::MODELS_SUBDIRECTORY))
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
