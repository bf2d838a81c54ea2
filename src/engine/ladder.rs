//! Srcset entries and the default responsive width ladder.
//!
//! A srcset ladder is an ordered set of `(URL, width)` pairs offered to the
//! browser for responsive selection. The default ladder climbs from
//! `width_min` in `width_step` increments and stops at the lesser of
//! `width_max` and the source's intrinsic width — there is no point
//! offering the browser an upscale.

use std::fmt;

use super::TransformError;
use super::params::{Fit, ImageSource, TransformRequest};
use super::urls::TransformedUrl;
use crate::config::{Breakpoints, EdgeConfig};

/// One srcset candidate: a provider URL plus its width descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcsetEntry {
    pub url: TransformedUrl,
    pub width: u32,
}

impl SrcsetEntry {
    /// Build a single candidate at the given width.
    ///
    /// Delegates to [`TransformedUrl::build`] with `fit=contain`; a zero
    /// height is treated as "no height".
    pub fn build(
        source: &ImageSource,
        width: u32,
        height: Option<u32>,
        config: &EdgeConfig,
    ) -> Result<Self, TransformError> {
        let request = TransformRequest {
            width,
            height: height.filter(|&h| h > 0),
            fit: Fit::Contain,
        };
        Ok(Self {
            url: TransformedUrl::build(source, &request, config)?,
            width,
        })
    }
}

impl fmt::Display for SrcsetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}w", self.url, self.width)
    }
}

/// The widths of the default ladder, lazily generated.
///
/// Strictly ascending, no duplicates. When the intrinsic width is below
/// the ladder floor, the sequence collapses to exactly one entry at the
/// intrinsic width.
#[derive(Debug, Clone)]
pub struct WidthLadder {
    next: u32,
    max: u32,
    step: u32,
    exhausted: bool,
}

impl WidthLadder {
    /// Ladder widths for a source of the given intrinsic width (`None` or
    /// zero when unknown).
    pub fn new(intrinsic_width: Option<u32>, breakpoints: &Breakpoints) -> Self {
        let intrinsic = intrinsic_width.filter(|&w| w > 0);
        let max = intrinsic.map_or(breakpoints.width_max, |w| w.min(breakpoints.width_max));
        let start = if max < breakpoints.width_min {
            // Collapsed ladder: a single entry at the intrinsic width.
            max
        } else {
            breakpoints.width_min
        };
        Self {
            next: start,
            max,
            step: breakpoints.width_step.max(1),
            exhausted: false,
        }
    }
}

impl Iterator for WidthLadder {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.exhausted || self.next > self.max {
            self.exhausted = true;
            return None;
        }
        let width = self.next;
        match width.checked_add(self.step) {
            Some(n) => self.next = n,
            None => self.exhausted = true,
        }
        Some(width)
    }
}

/// A lazy, restartable sequence of default srcset candidates.
///
/// `Clone` is cheap (two borrows and a counter); callers may iterate the
/// ladder more than once by cloning it.
#[derive(Debug, Clone)]
pub struct SrcsetLadder<'a> {
    source: &'a ImageSource,
    config: &'a EdgeConfig,
    widths: WidthLadder,
}

impl<'a> SrcsetLadder<'a> {
    /// Serialize the remaining entries as a `srcset` attribute value.
    pub fn to_attr_value(self) -> String {
        self.map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'a> Iterator for SrcsetLadder<'a> {
    type Item = SrcsetEntry;

    fn next(&mut self) -> Option<SrcsetEntry> {
        let width = self.widths.next()?;
        // The source path was validated in `default_ladder` and ladder
        // widths are non-zero by construction, so building cannot fail.
        SrcsetEntry::build(self.source, width, None, self.config).ok()
    }
}

/// Build the default srcset ladder for a source.
///
/// Validates the source once up front; iteration itself is infallible.
///
/// # Errors
///
/// [`TransformError::InvalidSourceUrl`] when the source has no usable path.
pub fn default_ladder<'a>(
    source: &'a ImageSource,
    config: &'a EdgeConfig,
) -> Result<SrcsetLadder<'a>, TransformError> {
    // Probe with an arbitrary valid width so path errors surface here
    // rather than disappearing into the iterator.
    TransformedUrl::build(source, &TransformRequest::new(1), config)?;
    Ok(SrcsetLadder {
        source,
        config,
        widths: WidthLadder::new(source.intrinsic_width(), &config.breakpoints),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EdgeConfig {
        EdgeConfig {
            provider_host: "https://example.com".to_string(),
            ..EdgeConfig::default()
        }
    }

    // =========================================================================
    // WidthLadder
    // =========================================================================

    #[test]
    fn default_bounds_for_large_source() {
        // Intrinsic 5000 caps at width_max: 400, 500, ..., 2400.
        let bp = Breakpoints::default();
        let widths: Vec<u32> = WidthLadder::new(Some(5000), &bp).collect();
        assert_eq!(widths.len(), 21);
        assert_eq!(widths.first(), Some(&400));
        assert_eq!(widths.last(), Some(&2400));
    }

    #[test]
    fn widths_strictly_ascend_without_duplicates() {
        let bp = Breakpoints::default();
        let widths: Vec<u32> = WidthLadder::new(Some(5000), &bp).collect();
        assert!(widths.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn ladder_stops_at_intrinsic_width() {
        let bp = Breakpoints::default();
        let widths: Vec<u32> = WidthLadder::new(Some(850), &bp).collect();
        assert_eq!(widths, vec![400, 500, 600, 700, 800]);
    }

    #[test]
    fn intrinsic_on_a_step_is_included() {
        let bp = Breakpoints::default();
        let widths: Vec<u32> = WidthLadder::new(Some(600), &bp).collect();
        assert_eq!(widths, vec![400, 500, 600]);
    }

    #[test]
    fn small_source_collapses_to_single_entry() {
        let bp = Breakpoints::default();
        let widths: Vec<u32> = WidthLadder::new(Some(250), &bp).collect();
        assert_eq!(widths, vec![250]);
    }

    #[test]
    fn unknown_intrinsic_climbs_to_width_max() {
        let bp = Breakpoints::default();
        let widths: Vec<u32> = WidthLadder::new(None, &bp).collect();
        assert_eq!(widths.last(), Some(&2400));
    }

    #[test]
    fn ladder_is_restartable() {
        let bp = Breakpoints::default();
        let ladder = WidthLadder::new(Some(900), &bp);
        let first: Vec<u32> = ladder.clone().collect();
        let second: Vec<u32> = ladder.collect();
        assert_eq!(first, second);
    }

    // =========================================================================
    // SrcsetEntry / SrcsetLadder
    // =========================================================================

    #[test]
    fn entry_formats_width_descriptor() {
        let source = ImageSource::new("https://example.com/photo.jpg");
        let entry = SrcsetEntry::build(&source, 400, None, &config()).unwrap();
        let rendered = entry.to_string();
        assert!(rendered.ends_with("/photo.jpg 400w"));
        assert!(rendered.contains("width=400"));
    }

    #[test]
    fn entry_zero_height_is_omitted() {
        let source = ImageSource::new("https://example.com/photo.jpg");
        let entry = SrcsetEntry::build(&source, 400, Some(0), &config()).unwrap();
        assert!(!entry.to_string().contains("height"));
    }

    #[test]
    fn default_ladder_entries_match_widths() {
        let source = ImageSource::new("https://example.com/photo.jpg").with_intrinsic(850, 600);
        let entries: Vec<SrcsetEntry> = default_ladder(&source, &config()).unwrap().collect();
        let widths: Vec<u32> = entries.iter().map(|e| e.width).collect();
        assert_eq!(widths, vec![400, 500, 600, 700, 800]);
    }

    #[test]
    fn default_ladder_rejects_bad_source() {
        let source = ImageSource::new("");
        assert!(default_ladder(&source, &config()).is_err());
    }

    #[test]
    fn attr_value_joins_with_comma_space() {
        let source = ImageSource::new("https://example.com/photo.jpg").with_intrinsic(600, 400);
        let value = default_ladder(&source, &config()).unwrap().to_attr_value();
        let parts: Vec<&str> = value.split(", ").collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[0].ends_with(" 400w"));
        assert!(parts[2].ends_with(" 600w"));
    }
}
