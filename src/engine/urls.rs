//! Provider URL construction.
//!
//! A [`TransformedUrl`] is the provider-prefix form of a source image:
//!
//! ```text
//! https://example.com/cdn-cgi/image/f=auto%2Cfit=contain%2Cwidth=800/photo.jpg
//! └─────────── prefix ───────────┘└──────── sorted query ────────┘└─ path ─┘
//! ```
//!
//! Query keys are always emitted in ascending lexicographic order, values
//! are percent-encoded, and `key=value` pairs are joined with `%2C`. Only
//! the path component of the source survives; scheme, host, query string,
//! and fragment are discarded.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use super::TransformError;
use super::params::{ImageSource, TransformRequest};
use crate::config::EdgeConfig;

/// Characters escaped in query values. ASCII alphanumerics plus `-`, `_`,
/// and `.` pass through bare; everything else is percent-encoded.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.');

/// Separator between serialized `key=value` pairs.
const PAIR_SEPARATOR: &str = "%2C";

/// A provider-resized image URL.
///
/// Construction is a pure function: identical inputs reproduce
/// byte-identical output. Use [`fmt::Display`] (or `to_string`) to obtain
/// the serialized URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedUrl {
    provider_prefix: String,
    query: BTreeMap<&'static str, String>,
    path: String,
}

impl TransformedUrl {
    /// Build a provider URL for one rendition of `source`.
    ///
    /// The parameter map always contains `width`, `fit`, `f=auto`,
    /// `gravity=auto`, and `onerror=redirect`; `height` is added only when
    /// the request carries a non-zero height.
    ///
    /// # Errors
    ///
    /// - [`TransformError::InvalidDimension`] when the request width is zero.
    /// - [`TransformError::InvalidSourceUrl`] when the source has no usable path.
    pub fn build(
        source: &ImageSource,
        request: &TransformRequest,
        config: &EdgeConfig,
    ) -> Result<Self, TransformError> {
        if request.width == 0 {
            return Err(TransformError::InvalidDimension("width"));
        }
        let path = source_path(&source.url)?;

        let mut query = BTreeMap::new();
        query.insert("f", "auto".to_string());
        query.insert("fit", request.fit.as_str().to_string());
        query.insert("gravity", "auto".to_string());
        query.insert("onerror", "redirect".to_string());
        query.insert("width", request.width.to_string());
        if let Some(height) = request.height.filter(|&h| h > 0) {
            query.insert("height", height.to_string());
        }

        Ok(Self {
            provider_prefix: config.provider_prefix(),
            query,
            path,
        })
    }

    /// Add or replace one query parameter.
    ///
    /// Extra parameters sort into the existing key order. Multi-valued
    /// parameters follow the same convention as the pair separator: commas
    /// inside the value percent-encode to `%2C`.
    pub fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.insert(key, value.into());
        self
    }

    /// The source path this URL resolves, e.g. `/photo.jpg`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in serialization (ascending key) order.
    pub fn query(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for TransformedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.provider_prefix)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            if i > 0 {
                write!(f, "{PAIR_SEPARATOR}")?;
            }
            write!(f, "{}={}", key, utf8_percent_encode(value, QUERY_VALUE))?;
        }
        write!(f, "{}", self.path)
    }
}

/// Extract the path component of a source URL.
///
/// Relative references (`/wp-content/img.jpg`) resolve against a static
/// dummy base so that absolute and root-relative sources behave
/// identically. Query string and fragment never survive.
fn source_path(raw: &str) -> Result<String, TransformError> {
    if raw.trim().is_empty() {
        return Err(TransformError::InvalidSourceUrl(raw.to_string()));
    }
    static BASE: OnceLock<Url> = OnceLock::new();
    let base = BASE.get_or_init(|| Url::parse("http://x").unwrap());
    let parsed = Url::options()
        .base_url(Some(base))
        .parse(raw)
        .map_err(|_| TransformError::InvalidSourceUrl(raw.to_string()))?;
    if parsed.cannot_be_a_base() {
        return Err(TransformError::InvalidSourceUrl(raw.to_string()));
    }
    Ok(parsed.path().to_string())
}
