//! Named-size registry.
//!
//! Hosts address renditions by keyword (`"thumbnail"`, `"medium"`,
//! `"hero"`) rather than by raw dimensions. The registry maps each keyword
//! to a [`SizeProfile`] — the transform parameters and attribute hints for
//! that rendition — and is built once at configuration time.
//!
//! Unknown keywords resolve to the `large` profile instead of failing:
//! the registry is a convenience layer, and a slightly-wrong size beats a
//! broken image. Code that needs strictness should use
//! [`SizeRegistry::get`] and handle the `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::EdgeConfig;
use crate::engine::Fit;

/// Transform parameters and attribute hints for one named rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizeProfile {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels; absent → derived from the source ratio.
    pub height: Option<u32>,
    /// Fit mode for this rendition.
    pub fit: Fit,
    /// Explicit `sizes` attribute value; absent → computed from the width.
    pub sizes_attr: Option<String>,
    /// Extra classes for the container element.
    pub container_classes: Vec<String>,
}

impl Default for SizeProfile {
    fn default() -> Self {
        Self {
            width: 1024,
            height: None,
            fit: Fit::Contain,
            sizes_attr: None,
            container_classes: Vec::new(),
        }
    }
}

impl SizeProfile {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = (height > 0).then_some(height);
        self
    }

    pub fn with_fit(mut self, fit: Fit) -> Self {
        self.fit = fit;
        self
    }
}

/// Registry mapping size keywords to profiles.
///
/// Seeded with the stock sizes every WordPress install registers; host
/// config extends or overrides them. Resolution falls back to `large`.
#[derive(Debug, Clone)]
pub struct SizeRegistry {
    profiles: BTreeMap<String, SizeProfile>,
    fallback: SizeProfile,
}

impl SizeRegistry {
    /// The stock registry: `thumbnail`, `medium`, `medium_large`, `large`.
    pub fn stock() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "thumbnail".to_string(),
            SizeProfile::new(150).with_height(150).with_fit(Fit::Cover),
        );
        profiles.insert(
            "medium".to_string(),
            SizeProfile::new(300).with_height(300),
        );
        profiles.insert("medium_large".to_string(), SizeProfile::new(768));
        profiles.insert("large".to_string(), SizeProfile::new(1024));
        Self {
            fallback: SizeProfile::new(1024),
            profiles,
        }
    }

    /// Stock registry extended by the config's `[sizes.*]` tables.
    ///
    /// Config entries override stock entries of the same name; overriding
    /// `large` also moves the fallback.
    pub fn from_config(config: &EdgeConfig) -> Self {
        let mut registry = Self::stock();
        for (name, profile) in &config.sizes {
            registry.register(name.clone(), profile.clone());
        }
        registry
    }

    /// Add or replace a named profile.
    pub fn register(&mut self, name: impl Into<String>, profile: SizeProfile) {
        let name = name.into();
        if name == "large" {
            self.fallback = profile.clone();
        }
        self.profiles.insert(name, profile);
    }

    /// Strict lookup.
    pub fn get(&self, name: &str) -> Option<&SizeProfile> {
        self.profiles.get(name)
    }

    /// Lookup with fallback to the `large` profile.
    pub fn resolve(&self, name: &str) -> &SizeProfile {
        self.profiles.get(name).unwrap_or(&self.fallback)
    }

    /// Registered keywords, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

impl Default for SizeRegistry {
    fn default() -> Self {
        Self::stock()
    }
}
