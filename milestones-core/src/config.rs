//! Settings and profile input files.
//!
//! Both are YAML. Settings live at `<config dir>/life-milestones/settings.yaml`
//! unless a path is given; a missing default file just means defaults. The
//! profile document is how the CLI receives a profile plus custom events.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::{CustomEvent, GenerateMilestonesRequest, UserProfile};

use crate::domain::CategoryPalette;

const APP_DIR: &str = "life-milestones";
const SETTINGS_FILE: &str = "settings.yaml";
const DEFAULT_DISPLAY_LIMIT: usize = 100;

fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

/// User-tunable generator and display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneSettings {
    /// Category name → "#rrggbb"
    #[serde(default)]
    pub palette: HashMap<String, String>,
    /// Used when a profile has no time of birth
    #[serde(default)]
    pub default_time_of_birth: Option<String>,
    /// Maximum rows the CLI list prints
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

impl Default for MilestoneSettings {
    fn default() -> Self {
        Self {
            palette: HashMap::new(),
            default_time_of_birth: None,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl MilestoneSettings {
    /// Default settings file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load settings from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load_from(&default),
                _ => {
                    debug!("No settings file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings: MilestoneSettings = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Default palette with this file's overrides applied
    pub fn palette(&self) -> Result<CategoryPalette> {
        CategoryPalette::default()
            .with_overrides(&self.palette)
            .context("Invalid palette in settings")
    }
}

/// A profile plus its custom events, as read from a YAML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub profile: UserProfile,
    #[serde(default)]
    pub custom_events: Vec<CustomEvent>,
}

impl ProfileDocument {
    pub fn load_from(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file {:?}", path))?;
        let document: ProfileDocument = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse profile file {:?}", path))?;
        info!(
            "Loaded profile '{}' with {} custom event(s) from {:?}",
            document.profile.name,
            document.custom_events.len(),
            path
        );
        Ok(document)
    }

    /// Generation request, falling back to the settings' default time of birth
    pub fn to_request(&self, settings: &MilestoneSettings) -> GenerateMilestonesRequest {
        let mut request = GenerateMilestonesRequest::from_profile(&self.profile, self.custom_events.clone());
        if request.time_of_birth.is_none() {
            request.time_of_birth = settings.default_time_of_birth.clone();
        }
        request
    }
}
