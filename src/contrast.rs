//! WCAG 2.x relative luminance and contrast ratio.
//!
//! <https://www.w3.org/TR/WCAG20/#relativeluminancedef>

use palette::Srgb;

use crate::color::ColorValue;
use crate::error::ColorError;

/// Lowest possible contrast ratio (identical luminance).
pub const MIN_CONTRAST: f64 = 1.0;

/// Highest possible contrast ratio (black against white).
pub const MAX_CONTRAST: f64 = 21.0;

/// Luminance channel weights for sRGB.
const COEF_R: f64 = 0.2126;
const COEF_G: f64 = 0.7152;
const COEF_B: f64 = 0.0722;

/// Boundary between the linear and the gamma segment of the sRGB curve.
const LINEAR_THRESHOLD: f64 = 0.03928;

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an sRGB color, in `[0.0, 1.0]`.
pub fn relative_luminance(color: Srgb<u8>) -> f64 {
    linearize(color.red) * COEF_R + linearize(color.green) * COEF_G + linearize(color.blue) * COEF_B
}

/// Contrast ratio of two sRGB colors, in `[1.0, 21.0]`. Symmetric.
pub fn contrast_ratio(a: Srgb<u8>, b: Srgb<u8>) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio of two colors.
pub fn ratio(a: &ColorValue, b: &ColorValue) -> f64 {
    contrast_ratio(a.rgb(), b.rgb())
}

/// Reject contrast bounds outside of `[1, 21]`.
pub fn check_contrast_bound(min_contrast: f64) -> Result<f64, ColorError> {
    if (MIN_CONTRAST..=MAX_CONTRAST).contains(&min_contrast) {
        Ok(min_contrast)
    } else {
        Err(ColorError::InvalidArgument(format!(
            "min_contrast is outside of [{MIN_CONTRAST}, {MAX_CONTRAST}]: {min_contrast}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_extremes_are_exact() {
        assert_eq!(relative_luminance(Srgb::new(0, 0, 0)), 0.0);
        assert_eq!(relative_luminance(Srgb::new(255, 255, 255)), 1.0);
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Srgb::new(0, 0, 0), Srgb::new(255, 255, 255));
        assert_eq!(ratio, 21.0);
    }

    #[test]
    fn identical_colors_are_1() {
        let gray = Srgb::new(0x76, 0x76, 0x76);
        assert_eq!(contrast_ratio(gray, gray), 1.0);
    }

    #[test]
    fn bound_check_accepts_inclusive_range() {
        assert!(check_contrast_bound(1.0).is_ok());
        assert!(check_contrast_bound(21.0).is_ok());
        assert!(check_contrast_bound(0.9).is_err());
        assert!(check_contrast_bound(21.1).is_err());
        assert!(check_contrast_bound(f64::NAN).is_err());
    }
}
