//! Showcase Settings
//!
//! Names and defaults the showcase is wired with. Every field has a default,
//! so a settings file only needs the values it changes:
//!
//! ```rust,ignore
//! use bottlescroll::config::ShowcaseSettings;
//!
//! let settings = ShowcaseSettings::from_json_str(r#"{ "asset_root": "site/public" }"#)?;
//! assert_eq!(settings.bottle_group, "BottleGroup");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Tween length used when a keyframe does not set one.
pub const DEFAULT_TWEEN_DURATION: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseSettings {
    /// Directory that `/<name>.png` asset paths resolve against.
    pub asset_root: PathBuf,
    /// Name of the scene group holding the bottle meshes.
    pub bottle_group: String,
    /// Image applied to the label at startup.
    pub label_texture: String,
    /// Label images loaded into the texture bank.
    pub textures: Vec<String>,
    /// Id of the overlay element whose background follows the variant.
    pub background_element: String,
    /// Tween length for keyframes without an explicit duration.
    pub default_duration: f32,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("public"),
            bottle_group: "BottleGroup".to_string(),
            label_texture: "FalloutBoy".to_string(),
            textures: ["FalloutBoy", "Classic", "Quantum", "Sunset"]
                .into_iter()
                .map(String::from)
                .collect(),
            background_element: "bg_container".to_string(),
            default_duration: DEFAULT_TWEEN_DURATION,
        }
    }
}

impl ShowcaseSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
