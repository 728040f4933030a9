//! Immutable RGB color value with a display name.

use std::fmt;

use palette::Srgb;

use crate::contrast::{contrast_ratio, relative_luminance};
use crate::contrast_solver::invert_with_min_contrast;
use crate::convert::{self, channel, degrees, percent};
use crate::error::ColorError;
use crate::names::ColorNames;

/// Name given to colors without an entry in the name table.
pub const ANONYMOUS: &str = "Anonymous";

/// Letter case of a hex string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// An sRGB color together with its display name.
///
/// Two values are equal only if both the channels and the name match.
/// Derived representations (HSV, HSL, CMYK, luminance) are computed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorValue {
    rgb: Srgb<u8>,
    name: String,
}

impl ColorValue {
    /// Create a color with an explicit display name.
    pub fn new(rgb: Srgb<u8>, name: impl Into<String>) -> Self {
        Self {
            rgb,
            name: name.into(),
        }
    }

    /// Create a color named after its entry in `names`, or [`ANONYMOUS`].
    pub fn named(rgb: Srgb<u8>, names: &ColorNames) -> Self {
        let name = names.name_of(rgb).unwrap_or(ANONYMOUS);
        Self::new(rgb, name)
    }

    /// Create a color from raw channel values.
    ///
    /// Fails unless exactly three components in `[0, 255]` are given.
    pub fn from_components(components: &[i64], names: &ColorNames) -> Result<Self, ColorError> {
        let [r, g, b] = components else {
            return Err(ColorError::InvalidColor(format!(
                "expected 3 RGB components, got {}",
                components.len()
            )));
        };

        let to_channel = |c: i64| {
            u8::try_from(c).map_err(|_| {
                ColorError::InvalidColor(format!("RGB component is outside of [0, 255]: {c}"))
            })
        };

        Ok(Self::named(
            Srgb::new(to_channel(*r)?, to_channel(*g)?, to_channel(*b)?),
            names,
        ))
    }

    /// Create a color from hue (degrees), saturation and lightness (percent).
    pub fn from_hsl(
        hue: u16,
        saturation: u8,
        lightness: u8,
        names: &ColorNames,
    ) -> Result<Self, ColorError> {
        for (label, value, bound) in [
            ("h", hue, 360),
            ("s", u16::from(saturation), 100),
            ("l", u16::from(lightness), 100),
        ] {
            if value > bound {
                return Err(ColorError::InvalidColor(format!(
                    "{label} is outside of [0, {bound}]: {value}"
                )));
            }
        }

        let (r, g, b) = convert::hls_to_rgb(
            f64::from(hue) / 360.0,
            f64::from(lightness) / 100.0,
            f64::from(saturation) / 100.0,
        );

        Ok(Self::named(Srgb::new(channel(r), channel(g), channel(b)), names))
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.rgb
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Channels as an array, `[r, g, b]`.
    pub fn components(&self) -> [u8; 3] {
        [self.rgb.red, self.rgb.green, self.rgb.blue]
    }

    /// Zero-padded hex string without a leading `#`.
    pub fn hex(&self, case: HexCase) -> String {
        let [r, g, b] = self.components();
        match case {
            HexCase::Lower => format!("{r:02x}{g:02x}{b:02x}"),
            HexCase::Upper => format!("{r:02X}{g:02X}{b:02X}"),
        }
    }

    /// Hue in degrees, saturation and value in percent.
    pub fn hsv(&self) -> (u16, u8, u8) {
        let (r, g, b) = convert::normalize(self.rgb);
        let (h, s, v) = convert::rgb_to_hsv(r, g, b);
        (degrees(h), percent(s), percent(v))
    }

    /// Hue in degrees, saturation and lightness in percent.
    pub fn hsl(&self) -> (u16, u8, u8) {
        let (r, g, b) = convert::normalize(self.rgb);
        let (h, l, s) = convert::rgb_to_hls(r, g, b);
        (degrees(h), percent(s), percent(l))
    }

    /// Cyan, magenta, yellow and key in percent.
    pub fn cmyk(&self) -> (u8, u8, u8, u8) {
        convert::rgb_to_cmyk(self.rgb)
    }

    /// WCAG relative luminance.
    pub fn luminance(&self) -> f64 {
        relative_luminance(self.rgb)
    }

    /// WCAG contrast ratio against `other`.
    pub fn contrast_ratio(&self, other: &ColorValue) -> f64 {
        contrast_ratio(self.rgb, other.rgb)
    }

    /// Inverted color, searched along the lightness axis when `min_contrast`
    /// is not met by plain inversion.
    pub fn inverted(
        &self,
        min_contrast: Option<f64>,
        names: &ColorNames,
    ) -> Result<ColorValue, ColorError> {
        invert_with_min_contrast(self, min_contrast, names)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.components();
        write!(f, "Color(rgb=({r}, {g}, {b}), name='{}')", self.name)
    }
}

impl From<&ColorValue> for Srgb<u8> {
    fn from(color: &ColorValue) -> Self {
        color.rgb
    }
}
