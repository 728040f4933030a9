//! Parsing colors from user-facing strings.

use std::sync::LazyLock;

use palette::Srgb;
use regex::Regex;

use crate::color::ColorValue;
use crate::error::ColorError;
use crate::names::ColorNames;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#?([[:xdigit:]]{6}|[[:xdigit:]]{3})\s*$").expect("hex pattern is valid")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*$").expect("rgb pattern is valid")
});

/// Parse bare 3 or 6 hex digits. The short form doubles each digit.
pub(crate) fn parse_hex_digits(digits: &str) -> Option<Srgb<u8>> {
    // from_str_radix alone would accept a leading sign
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match digits.len() {
        3 => {
            let doubled: Vec<String> = digits.chars().map(|c| format!("{c}{c}")).collect();
            Some(Srgb::new(
                channel(&doubled[0])?,
                channel(&doubled[1])?,
                channel(&doubled[2])?,
            ))
        }
        6 => Some(Srgb::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => None,
    }
}

/// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`, surrounding whitespace allowed.
pub fn from_hex(input: &str, names: &ColorNames) -> Result<ColorValue, ColorError> {
    HEX_RE
        .captures(input)
        .and_then(|caps| parse_hex_digits(&caps[1]))
        .map(|rgb| ColorValue::named(rgb, names))
        .ok_or_else(|| ColorError::InvalidColor(format!("\"{input}\" is not a hex color")))
}

/// Parse `R,G,B` with each component in `[0, 255]`.
pub fn from_rgb_string(input: &str, names: &ColorNames) -> Result<ColorValue, ColorError> {
    let caps = RGB_RE
        .captures(input)
        .ok_or_else(|| ColorError::InvalidColor(format!("\"{input}\" is not an R,G,B color")))?;

    let mut components = [0i64; 3];
    for (slot, group) in components.iter_mut().zip(1..=3) {
        // Digit runs too long for i64 are out of range anyway
        *slot = caps[group].parse().unwrap_or(i64::MAX);
    }

    ColorValue::from_components(&components, names)
}

/// Look up a registered color name, ignoring case and whitespace.
pub fn from_name(input: &str, names: &ColorNames) -> Result<ColorValue, ColorError> {
    names
        .lookup(input)
        .map(|rgb| ColorValue::named(rgb, names))
        .ok_or_else(|| ColorError::InvalidColor(format!("\"{input}\" is not a color name")))
}

/// Parse a color given as hex, `R,G,B` or a name, in that order of precedence.
pub fn parse_color(input: &str, names: &ColorNames) -> Result<ColorValue, ColorError> {
    if HEX_RE.is_match(input) {
        from_hex(input, names)
    } else if RGB_RE.is_match(input) {
        from_rgb_string(input, names)
    } else {
        from_name(input, names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> &'static ColorNames {
        ColorNames::builtin()
    }

    #[test]
    fn hex_accepts_both_lengths() {
        assert_eq!(
            from_hex("#abcdef", names()).unwrap().components(),
            [0xab, 0xcd, 0xef]
        );
        assert_eq!(
            from_hex("  ABCDEF ", names()).unwrap().components(),
            [0xab, 0xcd, 0xef]
        );
        assert_eq!(from_hex("#fa0", names()).unwrap().components(), [0xff, 0xaa, 0x00]);
        assert_eq!(from_hex("000", names()).unwrap().name(), "Black");
    }

    #[test]
    fn hex_rejects_other_lengths() {
        for input in ["#abcd", "abcdefa", "#ggg", "", "#"] {
            assert!(from_hex(input, names()).is_err(), "{input}");
        }
    }

    #[test]
    fn hex_digits_reject_signs() {
        assert_eq!(parse_hex_digits("+a+b+c"), None);
        assert_eq!(parse_hex_digits("+ab"), None);
        assert_eq!(parse_hex_digits("0a0b0c"), Some(Srgb::new(10, 11, 12)));
    }

    #[test]
    fn rgb_string_allows_whitespace() {
        let color = from_rgb_string(" 255 , 0,0 ", names()).unwrap();
        assert_eq!(color.components(), [255, 0, 0]);
        assert_eq!(color.name(), "Red");
    }

    #[test]
    fn rgb_string_rejects_out_of_range() {
        for input in ["256,0,0", "0,0,99999999999999999999999", "1,2", "-1,0,0"] {
            assert!(
                matches!(
                    from_rgb_string(input, names()),
                    Err(ColorError::InvalidColor(_))
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn name_lookup_is_normalized() {
        assert_eq!(from_name("DarkSlate grey", names()).unwrap().name(), "Dark Slate Gray");
        assert!(from_name("random", names()).is_err());
    }

    #[test]
    fn parse_color_prefers_hex_over_names() {
        // "add" is valid hex even though it reads like a word
        assert_eq!(parse_color("add", names()).unwrap().components(), [0xaa, 0xdd, 0xdd]);
        assert_eq!(parse_color("1, 2, 3", names()).unwrap().components(), [1, 2, 3]);
        assert_eq!(parse_color("Tomato", names()).unwrap().hex(Default::default()), "ff6347");
    }

    #[test]
    fn errors_name_the_input() {
        let err = parse_color("not-a-color", names()).unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
    }
}
