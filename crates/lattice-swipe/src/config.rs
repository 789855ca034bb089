//! TOML configuration.
//!
//! A [`SwipeConfig`] bundles everything a table of rows is configured
//! with: per-side swipe and expansion settings, row options and the
//! single-open policy. Every field has a default, so a document only needs
//! to name what it changes:
//!
//! ```
//! use lattice_swipe::config::SwipeConfig;
//! use lattice_swipe::settings::TransitionStyle;
//!
//! let config = SwipeConfig::from_toml_str(r#"
//!     allow_multiple_swipe = true
//!
//!     [right.swipe]
//!     transition_style = "clip_center"
//!
//!     [right.expansion]
//!     target_button_index = 0
//!     fill_on_trigger = true
//! "#).unwrap();
//!
//! assert!(config.allow_multiple_swipe);
//! assert_eq!(config.right.swipe.transition_style, TransitionStyle::ClipCenter);
//! assert_eq!(config.left.swipe.reveal_threshold, 0.5);
//! ```

use std::fs;
use std::path::Path;

use lattice_swipe_core::logging::targets;
use lattice_swipe_core::{Result, SwipeError};
use serde::{Deserialize, Serialize};

use crate::animation::AnimationSpec;
use crate::settings::{ExpansionSettings, RowOptions, SwipeDirection, SwipeSettings};
use crate::tray::{ButtonTray, SwipeButton};

/// Settings for one side of a row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    pub swipe: SwipeSettings,
    pub expansion: ExpansionSettings,
}

impl TrayConfig {
    /// Return a copy with both settings normalized.
    pub fn normalized(&self) -> Self {
        let swipe = self.swipe.normalized();
        let expansion = self.expansion.normalized(swipe.reveal_threshold);
        Self { swipe, expansion }
    }

    fn validate(&self, side: &str) -> Result<()> {
        let s = &self.swipe;
        let e = &self.expansion;
        let numbers = [
            ("swipe.reveal_threshold", s.reveal_threshold),
            ("swipe.position_offset", s.position_offset),
            ("swipe.top_margin", s.top_margin),
            ("swipe.bottom_margin", s.bottom_margin),
            ("swipe.button_spacing", s.button_spacing),
            ("swipe.bounce_resistance", s.bounce_resistance),
            ("expansion.expansion_threshold", e.expansion_threshold),
        ];
        for (name, value) in numbers {
            if value.is_nan() {
                return Err(SwipeError::InvalidConfig(format!("{side}.{name} is NaN")));
            }
        }

        let animations: [(&str, &AnimationSpec); 4] = [
            ("swipe.show_animation", &s.show_animation),
            ("swipe.hide_animation", &s.hide_animation),
            ("swipe.stretch_animation", &s.stretch_animation),
            ("expansion.trigger_animation", &e.trigger_animation),
        ];
        for (name, spec) in animations {
            if spec.duration.is_nan() {
                return Err(SwipeError::InvalidConfig(format!(
                    "{side}.{name}.duration is NaN"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for a table of swipeable rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// The tray revealed by swiping left to right.
    pub left: TrayConfig,
    /// The tray revealed by swiping right to left.
    pub right: TrayConfig,
    pub row: RowOptions,
    /// Let several rows stay open at once.
    pub allow_multiple_swipe: bool,
}

impl SwipeConfig {
    /// Parse a configuration document.
    ///
    /// Missing fields take their defaults; NaN values are rejected.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Serialize to a pretty-printed document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to `path`.
    ///
    /// The document is written to a sibling temporary file first and renamed
    /// into place, so readers never observe a partial file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, content)?;
        if let Err(err) = fs::rename(&tmp, path) {
            fs::remove_file(&tmp).ok();
            return Err(err.into());
        }
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Check that every number can be normalized.
    pub fn validate(&self) -> Result<()> {
        self.left.validate("left")?;
        self.right.validate("right")
    }

    /// Return a copy with both sides normalized.
    pub fn normalized(&self) -> Self {
        Self {
            left: self.left.normalized(),
            right: self.right.normalized(),
            row: self.row.clone(),
            allow_multiple_swipe: self.allow_multiple_swipe,
        }
    }

    /// Settings for the side revealed by `direction`.
    pub fn side(&self, direction: SwipeDirection) -> &TrayConfig {
        match direction {
            SwipeDirection::LeftToRight => &self.left,
            SwipeDirection::RightToLeft => &self.right,
        }
    }

    /// Build a tray for `direction` from `buttons` with this side's settings.
    pub fn tray(&self, direction: SwipeDirection, buttons: Vec<SwipeButton>) -> ButtonTray {
        let side = self.side(direction);
        ButtonTray::new(buttons, side.swipe.clone(), side.expansion.clone())
    }
}
