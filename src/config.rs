//! Highlighter configuration
//!
//! Class names are a presentation concern: the front end can rename them or
//! switch a category off (`null`), in which case that category is emitted as
//! plain escaped text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// CSS class per category; `None` leaves the category unwrapped
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    pub comment: Option<String>,
    pub meta_key: Option<String>,
    pub meta_value: Option<String>,
    pub bar: Option<String>,
    pub accidental: Option<String>,
    pub slur: Option<String>,
    pub note: Option<String>,
    pub duration: Option<String>,
    pub chord: Option<String>,
    pub text: Option<String>,
}

impl Default for ClassNames {
    fn default() -> Self {
        let class = |name: &str| Some(format!("abc-{}", name));
        Self {
            comment: class("comment"),
            meta_key: class("meta-key"),
            meta_value: class("meta-value"),
            bar: class("bar"),
            accidental: class("accidental"),
            slur: class("slur"),
            note: class("note"),
            duration: class("duration"),
            chord: class("chord"),
            text: class("text"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightConfig {
    pub classes: ClassNames,
    /// Prefix of the per-depth slur class (`abc-slur-level-N`)
    pub slur_level_prefix: Option<String>,
    /// Number of slur colors before they repeat
    pub slur_palette_size: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            slur_level_prefix: Some("abc-slur-level-".to_string()),
            slur_palette_size: 5,
        }
    }
}

impl HighlightConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }
}
