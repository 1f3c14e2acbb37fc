use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;

use crate::core::models::ZoomConfig;
use crate::global_constants::{
    self, DEFAULT_COPY_LABEL_RESET_MILLIS, DEFAULT_PALETTE_COLUMNS,
    DEFAULT_RECAPTURE_BACKOFF_MILLIS, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
    DEFAULT_ZOOM_FACTOR, LOG_TAG_SETTINGS,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeSettings {
    pub zoom_factor: u32,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub copy_label_reset_millis: u64,
    pub recapture_backoff_millis: u64,
    pub palette_columns: usize,
    pub theme_mode: ThemeMode,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            copy_label_reset_millis: DEFAULT_COPY_LABEL_RESET_MILLIS,
            recapture_backoff_millis: DEFAULT_RECAPTURE_BACKOFF_MILLIS,
            palette_columns: DEFAULT_PALETTE_COLUMNS,
            theme_mode: ThemeMode::default(),
        }
    }
}

impl ProbeSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Reads settings from `settings_path`, writing defaults there on first run.
    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("{} No settings file found, using defaults", LOG_TAG_SETTINGS);
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Unable to read settings file {:?}", settings_path))?;
        let settings: ProbeSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Unable to parse settings file {:?}", settings_path))?;

        log::info!("{} Loaded settings from {:?}", LOG_TAG_SETTINGS, settings_path);
        log::debug!(
            "{} zoom={} viewport={}x{}",
            LOG_TAG_SETTINGS,
            settings.zoom_factor,
            settings.viewport_width,
            settings.viewport_height
        );

        Ok(settings.sanitized())
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create settings directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)
            .with_context(|| format!("Unable to write settings file {:?}", settings_path))?;

        log::info!("{} Saved settings to {:?}", LOG_TAG_SETTINGS, settings_path);
        Ok(())
    }

    /// Replaces values the probe cannot run with by their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if let Err(error) =
            ZoomConfig::build(self.zoom_factor, self.viewport_width, self.viewport_height)
        {
            log::warn!(
                "{} {}, falling back to default zoom and viewport",
                LOG_TAG_SETTINGS,
                error
            );
            self.zoom_factor = defaults.zoom_factor;
            self.viewport_width = defaults.viewport_width;
            self.viewport_height = defaults.viewport_height;
        }

        if self.palette_columns == 0 {
            log::warn!(
                "{} palette_columns must be at least 1, using {}",
                LOG_TAG_SETTINGS,
                defaults.palette_columns
            );
            self.palette_columns = defaults.palette_columns;
        }

        self
    }

    pub fn zoom_config(&self) -> ZoomConfig {
        ZoomConfig::build(self.zoom_factor, self.viewport_width, self.viewport_height)
            .unwrap_or_default()
    }

    pub fn copy_label_reset(&self) -> Duration {
        Duration::from_millis(self.copy_label_reset_millis)
    }

    pub fn recapture_backoff(&self) -> Duration {
        Duration::from_millis(self.recapture_backoff_millis)
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
