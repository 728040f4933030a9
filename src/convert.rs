//! Cylindrical color-space conversions on unit-interval RGB.
//!
//! All routines take and return components in `[0.0, 1.0]`. Hue is expressed
//! as a fraction of a full turn. Integer reporting (degrees, percent) is done
//! by truncation in [`crate::color`], never by rounding.

use palette::Srgb;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Normalize 8-bit sRGB channels to `[0.0, 1.0]`.
pub fn normalize(rgb: Srgb<u8>) -> (f64, f64, f64) {
    (
        f64::from(rgb.red) / 255.0,
        f64::from(rgb.green) / 255.0,
        f64::from(rgb.blue) / 255.0,
    )
}

/// Hue fraction shared by the HSV and HLS conversions.
///
/// Callers guarantee `max > min`.
fn hue(r: f64, g: f64, b: f64, max: f64, min: f64) -> f64 {
    let range = max - min;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    (h / 6.0).rem_euclid(1.0)
}

/// RGB to HSV. Returns `(h, s, v)`.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == min {
        return (0.0, 0.0, max);
    }

    let s = (max - min) / max;
    (hue(r, g, b, max, min), s, max)
}

/// RGB to HLS. Returns `(h, l, s)` in that order.
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let l = sum / 2.0;

    if max == min {
        return (0.0, l, 0.0);
    }

    let range = max - min;
    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - max - min)
    };

    (hue(r, g, b, max, min), l, s)
}

/// HLS to RGB. Takes `(h, l, s)` and returns `(r, g, b)`.
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    (
        hue_channel(m1, m2, h + ONE_THIRD),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - ONE_THIRD),
    )
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);

    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

/// Subtractive CMYK as truncated percentages.
///
/// Pure black short-circuits to `(0, 0, 0, 100)`.
pub fn rgb_to_cmyk(rgb: Srgb<u8>) -> (u8, u8, u8, u8) {
    let (r, g, b) = normalize(rgb);
    let (c, m, y) = (1.0 - r, 1.0 - g, 1.0 - b);
    let k = c.min(m).min(y).min(1.0);

    if k == 1.0 {
        return (0, 0, 0, 100);
    }

    let scale = |component: f64| percent((component - k) / (1.0 - k));
    (scale(c), scale(m), scale(y), percent(k))
}

/// Truncate a unit-interval value to an integer percentage.
pub(crate) fn percent(value: f64) -> u8 {
    (value * 100.0).clamp(0.0, 100.0) as u8
}

/// Truncate a hue fraction to integer degrees in `[0, 360)`.
pub(crate) fn degrees(hue: f64) -> u16 {
    ((hue * 360.0) as u16).min(359)
}

/// Truncate a unit-interval value to an 8-bit channel.
pub(crate) fn channel(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}
