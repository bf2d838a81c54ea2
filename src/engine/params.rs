//! Parameter types for edge transforms.
//!
//! These structs describe *what* rendition to produce, not *how* the
//! provider produces it. They are the interface between the assembly layer
//! (which decides what renditions a page needs) and the URL builder (which
//! serializes them for the provider).
//!
//! ## Types
//!
//! - [`ImageSource`] — A source URL plus intrinsic dimensions when known. Immutable.
//! - [`Fit`] — Policy for reconciling a requested box with the source aspect ratio.
//! - [`TransformRequest`] — One desired output rendition (width, optional height, fit).

use serde::{Deserialize, Serialize};

/// An image as the host knows it: a URL, and intrinsic pixel dimensions
/// when attachment metadata supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Source URL. Absolute or root-relative; only its path survives
    /// transformation.
    pub url: String,
    /// Intrinsic `(width, height)` in pixels, when known.
    pub intrinsic: Option<(u32, u32)>,
}

impl ImageSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            intrinsic: None,
        }
    }

    pub fn with_intrinsic(mut self, width: u32, height: u32) -> Self {
        self.intrinsic = Some((width, height));
        self
    }

    /// Intrinsic width, treating a recorded width of zero as unknown.
    pub fn intrinsic_width(&self) -> Option<u32> {
        self.intrinsic.map(|(w, _)| w).filter(|&w| w > 0)
    }
}

/// Fit mode: how the provider reconciles the requested box with the
/// source aspect ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fit {
    /// Resize to fit entirely within the box, preserving aspect ratio.
    #[default]
    Contain,
    /// Fill the box, cropping overflow.
    Cover,
    /// Like `Contain`, but never upscale beyond the source.
    ScaleDown,
    /// Crop to the box exactly.
    Crop,
    /// Like `Contain`, padding the remainder.
    Pad,
}

impl Fit {
    /// The provider's wire name for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Fit::Contain => "contain",
            Fit::Cover => "cover",
            Fit::ScaleDown => "scale-down",
            Fit::Crop => "crop",
            Fit::Pad => "pad",
        }
    }
}

/// One desired output rendition.
///
/// `height` is optional: when absent (or explicitly zero — physically
/// meaningless) the provider derives it from the source aspect ratio, and
/// the serialized query omits the key entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub width: u32,
    pub height: Option<u32>,
    pub fit: Fit,
}

impl TransformRequest {
    /// A request for the given width, height derived by the provider,
    /// default fit.
    pub fn new(width: u32) -> Self {
        Self {
            width,
            height: None,
            fit: Fit::default(),
        }
    }

    /// Set a target height. A height of zero is normalized to "no height"
    /// so the omit-when-absent invariant holds from construction onward.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = (height > 0).then_some(height);
        self
    }

    pub fn with_fit(mut self, fit: Fit) -> Self {
        self.fit = fit;
        self
    }
}
