//! Crate configuration module.
//!
//! Handles loading, validating, and merging `edge-images.toml` files.
//! Configuration is sparse: stock defaults are overridden by whichever keys
//! a user file names, and unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! provider_host = "https://yoast.com"   # Scheme + host of the edge endpoint
//! provider_path = "/cdn-cgi/image/"     # Transform prefix on that host
//!
//! [breakpoints]
//! content_width = 600   # Max pixel width the page layout renders images at
//! width_min = 400       # First rung of the default srcset ladder
//! width_max = 2400      # Last rung of the default srcset ladder
//! width_step = 100      # Increment between rungs
//!
//! # Extend or override the named-size registry:
//! [sizes.hero]
//! width = 1200
//! height = 675
//! fit = "cover"
//! ```
//!
//! ## Partial Configuration
//!
//! Override just the values you want:
//!
//! ```toml
//! [breakpoints]
//! content_width = 720
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sizes::SizeProfile;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Crate configuration loaded from `edge-images.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EdgeConfig {
    /// Scheme and host of the edge endpoint, e.g. `https://yoast.com`.
    pub provider_host: String,
    /// Transform prefix on the provider host. Must start and end with `/`.
    pub provider_path: String,
    /// Content width and srcset ladder bounds.
    pub breakpoints: Breakpoints,
    /// Extra named-size profiles, merged over the stock registry.
    pub sizes: BTreeMap<String, SizeProfile>,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            provider_host: default_provider_host(),
            provider_path: default_provider_path(),
            breakpoints: Breakpoints::default(),
            sizes: BTreeMap::new(),
        }
    }
}

fn default_provider_host() -> String {
    "https://yoast.com".to_string()
}

fn default_provider_path() -> String {
    "/cdn-cgi/image/".to_string()
}

impl EdgeConfig {
    /// The full transform prefix: host + provider path.
    ///
    /// `https://yoast.com` + `/cdn-cgi/image/` → `https://yoast.com/cdn-cgi/image/`
    pub fn provider_prefix(&self) -> String {
        format!(
            "{}{}",
            self.provider_host.trim_end_matches('/'),
            self.provider_path
        )
    }

    /// Parse a config from a TOML string, merged over stock defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let overlay: toml::Value = toml::from_str(content)?;
        resolve_config(stock_defaults_value(), Some(overlay))
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.provider_host) {
            Ok(parsed) if !parsed.cannot_be_a_base() => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "provider_host must be an absolute URL: {:?}",
                    self.provider_host
                )));
            }
        }
        if !self.provider_path.starts_with('/') || !self.provider_path.ends_with('/') {
            return Err(ConfigError::Validation(
                "provider_path must start and end with '/'".into(),
            ));
        }
        self.breakpoints.validate()?;
        for (name, profile) in &self.sizes {
            if profile.width == 0 {
                return Err(ConfigError::Validation(format!(
                    "sizes.{name}.width must be at least 1"
                )));
            }
        }
        Ok(())
    }
}

/// Content width and srcset ladder bounds, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Breakpoints {
    /// Maximum pixel width the surrounding layout renders an image at.
    pub content_width: u32,
    /// First rung of the default srcset ladder.
    pub width_min: u32,
    /// Last rung of the default srcset ladder.
    pub width_max: u32,
    /// Increment between ladder rungs.
    pub width_step: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            content_width: 600,
            width_min: 400,
            width_max: 2400,
            width_step: 100,
        }
    }
}

impl Breakpoints {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.content_width == 0 {
            return Err(ConfigError::Validation(
                "breakpoints.content_width must be at least 1".into(),
            ));
        }
        if self.width_min == 0 {
            return Err(ConfigError::Validation(
                "breakpoints.width_min must be at least 1".into(),
            ));
        }
        if self.width_min > self.width_max {
            return Err(ConfigError::Validation(
                "breakpoints.width_min must not exceed width_max".into(),
            ));
        }
        if self.width_step == 0 {
            return Err(ConfigError::Validation(
                "breakpoints.width_step must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// The stock defaults as a TOML value, for use as a merge base.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(EdgeConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<EdgeConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: EdgeConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `edge-images.toml` in the given directory.
///
/// A missing file yields the stock defaults. User values merge on top of
/// stock defaults; unknown keys are rejected and the result is validated.
pub fn load_config(root: &Path) -> Result<EdgeConfig, ConfigError> {
    let config_path = root.join("edge-images.toml");
    let overlay = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        Some(toml::from_str(&content)?)
    } else {
        None
    };
    resolve_config(stock_defaults_value(), overlay)
}
