//! Badge row text for each [`BadgeFormat`].

pub use crate::cli_args::BadgeFormat;

use crate::color::{ColorValue, HexCase};

impl BadgeFormat {
    /// Label drawn in front of the value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => " ",
            Self::Hex | Self::HashHex | Self::UpperHex | Self::HashUpperHex => "HEX ",
            Self::Rgb => "RGB ",
            Self::Hsv => "HSV ",
            Self::Hsl => "HSL ",
            Self::Cmyk => "CMYK ",
        }
    }

    /// Value of `color` in this representation.
    pub fn value(self, color: &ColorValue) -> String {
        match self {
            Self::Empty => " ".to_string(),
            Self::Hex => color.hex(HexCase::Lower),
            Self::HashHex => format!("#{}", color.hex(HexCase::Lower)),
            Self::UpperHex => color.hex(HexCase::Upper),
            Self::HashUpperHex => format!("#{}", color.hex(HexCase::Upper)),
            Self::Rgb => {
                let [r, g, b] = color.components();
                format!("{r} {g} {b}")
            }
            Self::Hsv => {
                let (h, s, v) = color.hsv();
                format!("{h} {s} {v}")
            }
            Self::Hsl => {
                let (h, s, l) = color.hsl();
                format!("{h} {s} {l}")
            }
            Self::Cmyk => {
                let (c, m, y, k) = color.cmyk();
                format!("{c} {m} {y} {k}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    use crate::names::ColorNames;

    fn sample() -> ColorValue {
        ColorValue::named(Srgb::new(0xAB, 0xCD, 0xEF), ColorNames::builtin())
    }

    #[test]
    fn parses_case_sensitive_hex_variants() {
        assert_eq!("hex".parse::<BadgeFormat>(), Ok(BadgeFormat::Hex));
        assert_eq!("HEX".parse::<BadgeFormat>(), Ok(BadgeFormat::UpperHex));
        assert_eq!("#HEX".parse::<BadgeFormat>(), Ok(BadgeFormat::HashUpperHex));
    }

    #[test]
    fn fixes_casing_when_unique() {
        assert_eq!("RGB".parse::<BadgeFormat>(), Ok(BadgeFormat::Rgb));
        assert_eq!("cMyK".parse::<BadgeFormat>(), Ok(BadgeFormat::Cmyk));
        assert_eq!("Empty".parse::<BadgeFormat>(), Ok(BadgeFormat::Empty));
    }

    #[test]
    fn rejects_ambiguous_casing() {
        let err = "Hex".parse::<BadgeFormat>().unwrap_err();
        assert!(err.contains("ambiguous"), "{err}");
        let err = "#hEx".parse::<BadgeFormat>().unwrap_err();
        assert!(err.contains("ambiguous"), "{err}");
    }

    #[test]
    fn rejects_unknown_formats() {
        let err = "lab".parse::<BadgeFormat>().unwrap_err();
        assert!(err.contains("invalid choice"), "{err}");
    }

    #[test]
    fn rows_for_known_color() {
        let color = sample();
        let rows: Vec<(String, String)> = BadgeFormat::ALL
            .into_iter()
            .map(|f| (f.label().to_string(), f.value(&color)))
            .collect();

        let expected = [
            (" ", " "),
            ("HEX ", "abcdef"),
            ("HEX ", "#abcdef"),
            ("HEX ", "ABCDEF"),
            ("HEX ", "#ABCDEF"),
            ("RGB ", "171 205 239"),
            ("HSV ", "210 28 93"),
            ("HSL ", "210 68 80"),
            ("CMYK ", "28 14 0 6"),
        ];

        for ((label, value), (want_label, want_value)) in rows.iter().zip(expected) {
            assert_eq!(label, want_label);
            assert_eq!(value, want_value);
        }
    }
}
