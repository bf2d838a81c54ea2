//! The transform engine — pure functions from sources and requests to
//! provider URLs, srcset ladders, and constrained dimensions.
//!
//! | Operation | Module / function |
//! |---|---|
//! | **Provider URL** | [`urls::TransformedUrl::build`] |
//! | **Srcset entry** | [`ladder::SrcsetEntry::build`] |
//! | **Default ladder** | [`ladder::default_ladder`] |
//! | **Content-width constraint** | [`calculations::constrain_to_content_width`] |
//!
//! The module is split into:
//! - **Params**: Data structures describing one desired rendition
//! - **Urls**: Query assembly and path isolation
//! - **Ladder**: The lazy, restartable default width ladder
//! - **Calculations**: Pure functions for dimension math (unit testable)

pub mod calculations;
pub mod ladder;
pub mod params;
pub mod urls;

use thiserror::Error;

pub use calculations::constrain_to_content_width;
pub use ladder::{SrcsetEntry, SrcsetLadder, default_ladder};
pub use params::{Fit, ImageSource, TransformRequest};
pub use urls::TransformedUrl;

/// Errors produced by engine operations.
///
/// Both are local, synchronous failures: no retry, no partial result.
/// Callers are expected to treat any failure as "do not transform this
/// image" and fall back to the untransformed rendition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The source could not be parsed into at least a URL path.
    #[error("source URL has no usable path: {0:?}")]
    InvalidSourceUrl(String),
    /// A dimension that must be positive was zero.
    #[error("{0} must be a positive number of pixels")]
    InvalidDimension(&'static str),
}
