//! CLI argument definitions (build.rs compatible).
//!
//! This module contains only struct/enum definitions with no dependencies on
//! other crate modules, allowing it to be included from build.rs for man page
//! generation.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Smallest accepted wallpaper edge, in pixels.
pub const MIN_RESOLUTION: u32 = 150;

/// Report format for `--print`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML format
    #[default]
    Yaml,
    /// JSON format
    Json,
}

/// A row of the color badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BadgeFormat {
    /// Blank spacer row
    Empty,
    /// Lowercase hex
    Hex,
    /// Lowercase hex with `#`
    HashHex,
    /// Uppercase hex
    UpperHex,
    /// Uppercase hex with `#`
    HashUpperHex,
    Rgb,
    Hsv,
    Hsl,
    Cmyk,
}

impl BadgeFormat {
    pub const ALL: [BadgeFormat; 9] = [
        Self::Empty,
        Self::Hex,
        Self::HashHex,
        Self::UpperHex,
        Self::HashUpperHex,
        Self::Rgb,
        Self::Hsv,
        Self::Hsl,
        Self::Cmyk,
    ];

    /// Default badge rows.
    pub const DEFAULT: [BadgeFormat; 3] = [Self::Empty, Self::UpperHex, Self::Rgb];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Hex => "hex",
            Self::HashHex => "#hex",
            Self::UpperHex => "HEX",
            Self::HashUpperHex => "#HEX",
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::Hsl => "hsl",
            Self::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for BadgeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeFormat {
    type Err = String;

    /// Exact match first, then a unique case-insensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(format) = Self::ALL.into_iter().find(|f| f.as_str() == s) {
            return Ok(format);
        }

        let candidates: Vec<BadgeFormat> = Self::ALL
            .into_iter()
            .filter(|f| f.as_str().eq_ignore_ascii_case(s))
            .collect();

        match candidates.as_slice() {
            [format] => Ok(*format),
            [] => {
                let choices: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                Err(format!(
                    "invalid choice \"{s}\", choose from {{{}}}",
                    choices.join(", ")
                ))
            }
            many => {
                let names: Vec<&str> = many.iter().map(|f| f.as_str()).collect();
                Err(format!(
                    "ambiguous choice \"{s}\", unable to decide between {}",
                    names.join(" and ")
                ))
            }
        }
    }
}

impl TryFrom<String> for BadgeFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BadgeFormat> for String {
    fn from(format: BadgeFormat) -> Self {
        format.as_str().to_string()
    }
}

/// Wallpaper dimensions in pixels, written as `WIDTHxHEIGHT` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = String;

    /// Parse `WIDTHxHEIGHT` or `WIDTH:HEIGHT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X', ':'])
            .ok_or_else(|| format!("unable to parse resolution \"{s}\", expected WIDTHxHEIGHT"))?;

        let dimension = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid dimension \"{}\": {e}", part.trim()))
        };
        let resolution = Self {
            width: dimension(width)?,
            height: dimension(height)?,
        };

        if resolution.width < MIN_RESOLUTION || resolution.height < MIN_RESOLUTION {
            return Err(format!(
                "minimal resolution is {MIN_RESOLUTION}x{MIN_RESOLUTION}, got {resolution}"
            ));
        }

        Ok(resolution)
    }
}

impl TryFrom<String> for Resolution {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Resolution> for String {
    fn from(resolution: Resolution) -> Self {
        resolution.to_string()
    }
}

/// Parse a WCAG contrast bound in `[1, 21]`.
pub fn contrast_bound(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("\"{s}\" is not a number: {e}"))?;

    if (1.0..=21.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("\"{value}\" must be in range (1, 21)"))
    }
}

/// Minimalist wallpaper generator with a contrast-aware color badge.
#[derive(Parser, Debug)]
#[command(name = "color-wallpaper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Image output path (directory when generating multiple wallpapers)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Force overwrite of --output
    #[arg(short, long)]
    pub yes: bool,

    /// Background color: #HEX / R,G,B / NAME / random
    #[arg(short, long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Highlight color: #HEX / R,G,B / NAME / inverted
    #[arg(long, value_name = "COLOR", visible_alias = "highlight")]
    pub color2: Option<String>,

    /// Override the display name of --color. Empty string disables the name row
    #[arg(short, long, value_name = "TEXT")]
    pub display: Option<String>,

    /// Min contrast of --color and --color2 when --color2 is `inverted` (1-21)
    #[arg(long, value_name = "RATIO", value_parser = contrast_bound)]
    pub min_contrast: Option<f64>,

    /// Color of a potential overlay, like icons or text: #HEX / R,G,B / NAME
    #[arg(long, value_name = "COLOR")]
    pub overlay_color: Option<String>,

    /// Min contrast of --color and --overlay-color (1-21)
    #[arg(long, value_name = "RATIO", value_parser = contrast_bound)]
    pub overlay_contrast: Option<f64>,

    /// Cap on random background redraws (0 retries without bound)
    #[arg(long, value_name = "COUNT")]
    pub max_attempts: Option<usize>,

    /// Seed for reproducible random colors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dimensions of the image: WIDTHxHEIGHT
    #[arg(short, long, value_name = "WxH")]
    pub resolution: Option<Resolution>,

    /// Badge size multiplier
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: Option<u32>,

    /// Order of badge rows: empty, hex, #hex, HEX, #HEX, rgb, hsv, hsl, cmyk
    #[arg(short, long, num_args = 0.., value_name = "FORMAT")]
    pub formats: Option<Vec<BadgeFormat>>,

    /// Number of wallpapers to generate from the palette; negative generates all
    #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
    pub multiple_count: Option<i64>,

    /// Image extension used for multiple wallpapers
    #[arg(long, value_name = "EXT")]
    pub multiple_extension: Option<String>,

    /// Print the resolved colors instead of only writing the image
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub print: Option<OutputFormat>,

    /// Resolve and print colors without writing an image
    #[arg(long)]
    pub dry_run: bool,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save current configuration to TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Log file path (logs go to stderr when omitted)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
