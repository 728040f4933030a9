//! Contrast solver: find a color contrasting with a reference.
//!
//! Plain inversion is tried first. When it does not reach the requested WCAG
//! contrast ratio, the solver walks the inverted color's HSL lightness away
//! from its starting point in both directions, one step at a time, checking
//! the darker candidate before the lighter one at every step.

use palette::Srgb;
use tracing::{debug, trace};

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::color::ColorValue;
use crate::contrast::{MIN_CONTRAST, check_contrast_bound};
use crate::error::ColorError;
use crate::names::ColorNames;

/// Upper bound of HSL lightness, in percent.
const MAX_LIGHTNESS: i16 = 100;

/// Component-wise `255 - channel`, renamed through `names`.
pub fn invert(color: &ColorValue, names: &ColorNames) -> ColorValue {
    let rgb = color.rgb();
    ColorValue::named(
        Srgb::new(255 - rgb.red, 255 - rgb.green, 255 - rgb.blue),
        names,
    )
}

/// Invert `color`, adjusting lightness until `min_contrast` is met.
///
/// # Errors
///
/// * [`ColorError::InvalidArgument`] if `min_contrast` is outside of `[1, 21]`
/// * [`ColorError::ContrastUnsatisfiable`] if no lightness of the inverted
///   hue and saturation reaches `min_contrast`
///
/// # Example
///
/// ```
/// use palette::Srgb;
/// use color_wallpaper::color::ColorValue;
/// use color_wallpaper::contrast_solver::invert_with_min_contrast;
/// use color_wallpaper::names::ColorNames;
///
/// let names = ColorNames::builtin();
/// let gray = ColorValue::named(Srgb::new(0x50, 0x50, 0x50), names);
/// let solved = invert_with_min_contrast(&gray, Some(4.0), names).unwrap();
/// assert_eq!(solved.components(), [0xB7, 0xB7, 0xB7]);
/// ```
#[cfg_attr(debug_assertions, instrument(skip(color, names), fields(color = %color)))]
pub fn invert_with_min_contrast(
    color: &ColorValue,
    min_contrast: Option<f64>,
    names: &ColorNames,
) -> Result<ColorValue, ColorError> {
    let inverted = invert(color, names);

    let Some(min_contrast) = min_contrast else {
        return Ok(inverted);
    };
    if min_contrast == MIN_CONTRAST {
        return Ok(inverted);
    }
    check_contrast_bound(min_contrast)?;

    if color.contrast_ratio(&inverted) >= min_contrast {
        return Ok(inverted);
    }

    let (hue, saturation, lightness) = inverted.hsl();
    let lightness = i16::from(lightness);
    let mut down = lightness - 1;
    let mut up = lightness + 1;

    let candidate = |l: i16| -> Result<Option<ColorValue>, ColorError> {
        let l = u8::try_from(l).map_err(|_| {
            ColorError::InvalidColor(format!("l is outside of [0, {MAX_LIGHTNESS}]: {l}"))
        })?;
        let candidate = ColorValue::from_hsl(hue, saturation, l, names)?;
        let achieved = color.contrast_ratio(&candidate);
        trace!(lightness = l, achieved, "Checked lightness candidate");
        Ok((achieved >= min_contrast).then_some(candidate))
    };

    while down >= 0 || up <= MAX_LIGHTNESS {
        if down >= 0 {
            if let Some(found) = candidate(down)? {
                debug!(lightness = down, found = %found, "Contrast met below inverted lightness");
                return Ok(found);
            }
            down -= 1;
        }

        if up <= MAX_LIGHTNESS {
            if let Some(found) = candidate(up)? {
                debug!(lightness = up, found = %found, "Contrast met above inverted lightness");
                return Ok(found);
            }
            up += 1;
        }
    }

    debug!(min_contrast, "Lightness search exhausted");
    Err(ColorError::ContrastUnsatisfiable {
        min_contrast,
        reason: format!("no lightness of the inverted color contrasts enough with {color}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(level: u8) -> ColorValue {
        ColorValue::named(Srgb::new(level, level, level), ColorNames::builtin())
    }

    #[test]
    fn plain_inversion_without_bound() {
        let names = ColorNames::builtin();
        let black = gray(0);
        let inverted = invert_with_min_contrast(&black, None, names).unwrap();
        assert_eq!(inverted, ColorValue::new(Srgb::new(255, 255, 255), "White"));
    }

    #[test]
    fn min_contrast_of_one_skips_search() {
        let names = ColorNames::builtin();
        let mid = gray(0x7F);
        let inverted = invert_with_min_contrast(&mid, Some(1.0), names).unwrap();
        assert_eq!(inverted.components(), [0x80, 0x80, 0x80]);
    }

    #[test]
    fn inversion_that_already_satisfies_is_returned() {
        let names = ColorNames::builtin();
        let inverted = invert_with_min_contrast(&gray(0x10), Some(7.0), names).unwrap();
        assert_eq!(inverted.components(), [0xEF, 0xEF, 0xEF]);
    }

    #[test]
    fn search_moves_up_from_dark_reference() {
        let names = ColorNames::builtin();
        let solved = invert_with_min_contrast(&gray(0x50), Some(4.0), names).unwrap();
        assert_eq!(solved.components(), [0xB7, 0xB7, 0xB7]);
    }

    #[test]
    fn search_moves_down_from_light_reference() {
        let names = ColorNames::builtin();
        let solved = invert_with_min_contrast(&gray(0xB7), Some(6.0), names).unwrap();
        assert_eq!(solved.components(), [0x35, 0x35, 0x35]);
    }

    #[test]
    fn error_mentions_bound_and_color() {
        let names = ColorNames::builtin();
        let err = invert_with_min_contrast(&gray(0x7F), Some(10.0), names).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("10"));
        assert!(message.contains("rgb=(127, 127, 127)"));
    }
}
