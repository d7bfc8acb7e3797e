// Configuration module
// Tunables of the widget controller, loaded from `widget.toml`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::page::PagingPolicy;
use crate::models::sizing::SizingThresholds;
use crate::services::render::DEFAULT_TRANSPARENCY_PRESETS;

pub const CONFIG_FILE_NAME: &str = "widget.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Percentage points per transparency up/down tap
    pub transparency_step: i64,
    pub transparency_presets: Vec<i64>,
    pub paging_policy: PagingPolicy,
    /// Idle minutes before the settings overlay closes itself; 0 disables
    pub settings_timeout_minutes: u32,
    pub sizing_thresholds: SizingThresholds,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            transparency_step: 10,
            transparency_presets: DEFAULT_TRANSPARENCY_PRESETS.to_vec(),
            paging_policy: PagingPolicy::Wrap,
            settings_timeout_minutes: 30,
            sizing_thresholds: SizingThresholds::default(),
        }
    }
}

impl WidgetConfig {
    /// `widget.toml` in the platform config directory, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "WorkHours", "WorkHoursWidget")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WidgetConfig =
            toml::from_str(content).context("Failed to parse widget configuration")?;
        Ok(config.sanitized())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize widget configuration")
    }

    /// Load from `path`. A missing file yields the defaults; a malformed one
    /// is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Like [`WidgetConfig::load`] but never fails
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{:#}; using default configuration", e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Bring out-of-range values back to something usable.
    pub fn sanitized(mut self) -> Self {
        if !(1..=100).contains(&self.transparency_step) {
            log::warn!(
                "transparency_step {} out of range, using 10",
                self.transparency_step
            );
            self.transparency_step = 10;
        }

        self.transparency_presets.retain(|p| {
            let in_range = (0..=100).contains(p);
            if !in_range {
                log::warn!("Dropping transparency preset {} outside 0..=100", p);
            }
            in_range
        });
        self.transparency_presets.sort_unstable();
        self.transparency_presets.dedup();
        if self.transparency_presets.is_empty() {
            self.transparency_presets = DEFAULT_TRANSPARENCY_PRESETS.to_vec();
        }

        if !self.sizing_thresholds.is_ascending() {
            log::warn!(
                "sizing_thresholds {:?} not ascending, using defaults",
                self.sizing_thresholds
            );
            self.sizing_thresholds = SizingThresholds::default();
        }

        self
    }
}
