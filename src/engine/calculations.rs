//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O.

use super::TransformError;

/// Constrain an intrinsic `(width, height)` pair to a maximum content width.
///
/// Dimensions at or under the ceiling pass through unchanged. Wider sources
/// scale down proportionally so `width == max_width`, with the height
/// rounded to the nearest integer.
///
/// # Errors
///
/// [`TransformError::InvalidDimension`] when `width` is zero.
///
/// # Examples
/// ```
/// # use edge_images::engine::constrain_to_content_width;
/// // 1200x800 constrained to 600 → 600x400 (ratio preserved exactly)
/// assert_eq!(constrain_to_content_width(1200, 800, 600).unwrap(), (600, 400));
///
/// // Already narrow enough: unchanged
/// assert_eq!(constrain_to_content_width(500, 300, 600).unwrap(), (500, 300));
/// ```
pub fn constrain_to_content_width(
    width: u32,
    height: u32,
    max_width: u32,
) -> Result<(u32, u32), TransformError> {
    if width == 0 {
        return Err(TransformError::InvalidDimension("width"));
    }
    if width <= max_width {
        return Ok((width, height));
    }
    let ratio = max_width as f64 / width as f64;
    Ok((max_width, (height as f64 * ratio).round() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_source_scales_proportionally() {
        assert_eq!(
            constrain_to_content_width(1200, 800, 600).unwrap(),
            (600, 400)
        );
    }

    #[test]
    fn narrow_source_passes_through() {
        assert_eq!(
            constrain_to_content_width(400, 300, 600).unwrap(),
            (400, 300)
        );
    }

    #[test]
    fn exact_ceiling_passes_through() {
        assert_eq!(
            constrain_to_content_width(600, 450, 600).unwrap(),
            (600, 450)
        );
    }

    #[test]
    fn fractional_height_rounds_to_nearest() {
        // 1000x333 → 600 wide: 333 * 0.6 = 199.8 → 200
        assert_eq!(
            constrain_to_content_width(1000, 333, 600).unwrap(),
            (600, 200)
        );
    }

    #[test]
    fn zero_width_is_invalid() {
        assert_eq!(
            constrain_to_content_width(0, 300, 600).unwrap_err(),
            TransformError::InvalidDimension("width")
        );
    }

    #[test]
    fn zero_height_stays_zero() {
        assert_eq!(constrain_to_content_width(1200, 0, 600).unwrap(), (600, 0));
    }
}
