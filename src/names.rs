//! Read-only color name table.
//!
//! The table is passed explicitly to everything that needs a name lookup or a
//! random draw, so tests can substitute their own palette.

mod builtin;

use std::collections::HashMap;
use std::sync::LazyLock;

use palette::Srgb;

use crate::error::ColorError;
use crate::parse::parse_hex_digits;

static BUILTIN: LazyLock<ColorNames> = LazyLock::new(|| {
    let mut names = ColorNames::from_trusted(builtin::NAMED_COLORS);
    for (alias, hex) in builtin::ALIASES {
        if let Some(rgb) = parse_hex_digits(hex) {
            names.by_name.insert(normalized(alias), rgb);
        }
    }
    names
});

/// A named palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColor {
    pub rgb: Srgb<u8>,
    pub name: String,
}

/// Immutable mapping between colors and their canonical names.
#[derive(Debug, Clone)]
pub struct ColorNames {
    entries: Vec<NamedColor>,
    by_rgb: HashMap<[u8; 3], usize>,
    by_name: HashMap<String, Srgb<u8>>,
}

/// Lowercase a name and strip all whitespace, for lookups.
pub fn normalized(name: &str) -> String {
    name.split_whitespace()
        .flat_map(str::chars)
        .flat_map(char::to_lowercase)
        .collect()
}

fn key(rgb: Srgb<u8>) -> [u8; 3] {
    [rgb.red, rgb.green, rgb.blue]
}

impl ColorNames {
    /// Build a table from `(hex, name)` pairs.
    ///
    /// Rejects empty tables, malformed hex strings and duplicate hex keys.
    pub fn new<I, H, N>(pairs: I) -> Result<Self, ColorError>
    where
        I: IntoIterator<Item = (H, N)>,
        H: AsRef<str>,
        N: Into<String>,
    {
        let mut names = Self::empty();

        for (hex, name) in pairs {
            let hex = hex.as_ref();
            let rgb = parse_hex_digits(hex.trim_start_matches('#')).ok_or_else(|| {
                ColorError::InvalidPalette(format!("\"{hex}\" is not a hex color"))
            })?;

            if names.by_rgb.contains_key(&key(rgb)) {
                return Err(ColorError::InvalidPalette(format!(
                    "duplicate hex key \"{hex}\""
                )));
            }

            names.push(rgb, name.into());
        }

        if names.entries.is_empty() {
            return Err(ColorError::InvalidPalette("table is empty".to_string()));
        }

        Ok(names)
    }

    /// The built-in table of CSS/X11 named colors.
    pub fn builtin() -> &'static ColorNames {
        &BUILTIN
    }

    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            by_rgb: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Build from static data whose validity is covered by tests.
    fn from_trusted(pairs: &[(&str, &str)]) -> Self {
        let mut names = Self::empty();
        for (hex, name) in pairs {
            if let Some(rgb) = parse_hex_digits(hex) {
                names.push(rgb, (*name).to_string());
            }
        }
        names
    }

    fn push(&mut self, rgb: Srgb<u8>, name: String) {
        self.by_rgb.insert(key(rgb), self.entries.len());
        self.by_name.entry(normalized(&name)).or_insert(rgb);
        self.entries.push(NamedColor { rgb, name });
    }

    /// Canonical name of a color, if it has one.
    pub fn name_of(&self, rgb: Srgb<u8>) -> Option<&str> {
        self.by_rgb
            .get(&key(rgb))
            .map(|&index| self.entries[index].name.as_str())
    }

    /// Color registered under `name`, ignoring case and whitespace.
    pub fn lookup(&self, name: &str) -> Option<Srgb<u8>> {
        self.by_name.get(&normalized(name)).copied()
    }

    /// All entries, in table order.
    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let validated = ColorNames::new(builtin::NAMED_COLORS.iter().copied()).unwrap();
        assert_eq!(validated.len(), builtin::NAMED_COLORS.len());
        assert_eq!(ColorNames::builtin().len(), builtin::NAMED_COLORS.len());
    }

    #[test]
    fn aliases_point_at_canonical_entries() {
        for (alias, hex) in builtin::ALIASES {
            let rgb = parse_hex_digits(hex).unwrap();
            assert!(ColorNames::builtin().name_of(rgb).is_some(), "{alias}");
        }
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let names = ColorNames::builtin();
        let expected = Some(Srgb::new(0xf0, 0xf8, 0xff));
        assert_eq!(names.lookup("alice blue"), expected);
        assert_eq!(names.lookup("  AliceBlue "), expected);
        assert_eq!(names.lookup("A L I C E B L U E"), expected);
        assert_eq!(names.lookup("grey"), names.lookup("Gray"));
        assert_eq!(names.lookup("no such color"), None);
    }

    #[test]
    fn rejects_empty_table() {
        let pairs: Vec<(&str, &str)> = Vec::new();
        assert!(matches!(
            ColorNames::new(pairs),
            Err(ColorError::InvalidPalette(_))
        ));
    }

    #[test]
    fn rejects_duplicate_hex() {
        let result = ColorNames::new([("000000", "Black"), ("#000000", "Ink")]);
        assert!(matches!(result, Err(ColorError::InvalidPalette(_))));
    }

    #[test]
    fn rejects_malformed_hex() {
        for hex in ["00000g", "+a+b+c", "+ab", "12 456"] {
            let result = ColorNames::new([(hex, "Broken")]);
            assert!(matches!(result, Err(ColorError::InvalidPalette(_))), "{hex}");
        }
    }

    #[test]
    fn custom_table_keeps_order() {
        let names = ColorNames::new([("ffffff", "Paper"), ("000", "Ink")]).unwrap();
        let order: Vec<_> = names.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, ["Paper", "Ink"]);
        assert_eq!(names.name_of(Srgb::new(0, 0, 0)), Some("Ink"));
    }
}
