//! Attribute assembly — the values a host embeds into image markup.
//!
//! This is the thin layer between the engine and a host templating system.
//! Given a source, a [`SizeProfile`], and the render context, it produces
//! an [`ImageAttrs`]: finished attribute *values* (`src`, `srcset`,
//! `sizes`, class lists, a container style string). It never builds tags —
//! escaping and sanitization stay with the host.
//!
//! Class handling follows the usual CMS conventions: caller classes are
//! sanitized to the HTML-class alphabet, merged over the crate's base
//! classes, and deduplicated while preserving first-seen order.

use serde::Serialize;

use crate::config::EdgeConfig;
use crate::context::RenderContext;
use crate::engine::{
    ImageSource, TransformError, TransformRequest, TransformedUrl, constrain_to_content_width,
    default_ladder,
};
use crate::sizes::SizeProfile;

/// Base class on every transformed `<img>`.
const IMG_CLASS: &str = "edge-images-img";

/// Base class on every container element.
const CONTAINER_CLASS: &str = "edge-images-container";

/// How the image behaves in the surrounding layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Fill the container width; the container caps it.
    #[default]
    Responsive,
    /// Render at exactly the target dimensions.
    Fixed,
}

/// Caller-supplied additions merged into the assembled attributes.
#[derive(Debug, Clone, Default)]
pub struct AttrOverrides {
    /// Alt text, passed through untouched.
    pub alt: Option<String>,
    /// Extra classes for the `<img>` element.
    pub classes: Vec<String>,
    /// Extra classes for the container element.
    pub container_classes: Vec<String>,
    pub layout: Layout,
    /// Host attachment ID; adds an `image-id-<id>` container class.
    pub attachment_id: Option<u64>,
    /// Explicit `sizes` attribute value, overriding profile and default.
    pub sizes: Option<String>,
    /// Override for the `loading` attribute (e.g. `eager` above the fold).
    pub loading: Option<String>,
}

/// The full attribute set for one transformed image.
///
/// Everything is a finished value: `srcset` is the string that goes inside
/// the quotes, `container_style` is a ready `style` attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAttrs {
    pub src: String,
    pub srcset: String,
    pub sizes: String,
    pub width: u32,
    pub height: Option<u32>,
    pub alt: Option<String>,
    pub loading: String,
    pub decoding: String,
    pub class: String,
    pub container_class: String,
    pub container_style: String,
}

/// Assemble the attribute set for one image rendition.
///
/// Dimensions come from the profile, with the height derived from the
/// source aspect ratio when the profile doesn't fix one, and the result
/// constrained to the render's content width.
///
/// # Errors
///
/// Propagates [`TransformError`] from the engine: a zero-width profile or
/// an unusable source URL.
pub fn build_image_attrs(
    source: &ImageSource,
    profile: &SizeProfile,
    ctx: &RenderContext,
    config: &EdgeConfig,
    overrides: &AttrOverrides,
) -> Result<ImageAttrs, TransformError> {
    let ceiling = ctx.content_width(None);

    let target_height = match profile.height {
        Some(h) => Some(h),
        None => source
            .intrinsic
            .filter(|&(w, _)| w > 0)
            .map(|(iw, ih)| (profile.width as f64 * ih as f64 / iw as f64).round() as u32),
    };
    let (width, height) = match target_height {
        Some(h) => {
            let (w, h) = constrain_to_content_width(profile.width, h, ceiling)?;
            (w, Some(h))
        }
        None => (profile.width.min(ceiling), None),
    };

    let request = TransformRequest {
        width,
        height: height.filter(|&h| h > 0),
        fit: profile.fit,
    };
    let src = TransformedUrl::build(source, &request, config)?.to_string();
    let srcset = default_ladder(source, config)?.to_attr_value();

    let sizes = overrides
        .sizes
        .clone()
        .or_else(|| profile.sizes_attr.clone())
        .unwrap_or_else(|| format!("(max-width: {width}px) 100vw, {width}px"));

    let class = classes_to_string(normalize_classes(
        std::iter::once(IMG_CLASS).chain(overrides.classes.iter().map(String::as_str)),
    ));

    let id_class = overrides.attachment_id.map(|id| format!("image-id-{id}"));
    let container_class = classes_to_string(normalize_classes(
        std::iter::once(CONTAINER_CLASS)
            .chain(profile.container_classes.iter().map(String::as_str))
            .chain(overrides.container_classes.iter().map(String::as_str))
            .chain(id_class.as_deref()),
    ));

    let container_style = container_style(width, height, overrides.layout);

    Ok(ImageAttrs {
        src,
        srcset,
        sizes,
        width,
        height,
        alt: overrides.alt.clone(),
        loading: overrides.loading.clone().unwrap_or_else(|| "lazy".to_string()),
        decoding: "async".to_string(),
        class,
        container_class,
        container_style,
    })
}

/// Inline style value for the container element.
///
/// Always carries the aspect-ratio custom property (`1/1` when the height
/// is unknown); a fixed layout pins the box with `max-width`/`max-height`.
pub fn container_style(width: u32, height: Option<u32>, layout: Layout) -> String {
    let mut styles = Vec::new();
    match height {
        Some(h) if h > 0 => styles.push(format!("--aspect-ratio:{width}/{h}")),
        _ => styles.push("--aspect-ratio:1/1".to_string()),
    }
    if layout == Layout::Fixed {
        styles.push(format!("max-width:{width}px"));
        if let Some(h) = height.filter(|&h| h > 0) {
            styles.push(format!("max-height:{h}px"));
        }
    }
    styles.join(";")
}

/// Reduce a class token to the HTML-class alphabet (`A-Za-z0-9_-`).
pub fn sanitize_html_class(class: &str) -> String {
    class
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Split, sanitize, and deduplicate class tokens, preserving first-seen
/// order. Tokens that sanitize to nothing are dropped.
pub fn normalize_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for raw in classes {
        for token in raw.split_whitespace() {
            let clean = sanitize_html_class(token);
            if !clean.is_empty() && !seen.contains(&clean) {
                seen.push(clean);
            }
        }
    }
    seen
}

/// Flatten normalized classes into a space-separated attribute value.
pub fn classes_to_string(classes: Vec<String>) -> String {
    classes.join(" ")
}
