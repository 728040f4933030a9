//! TOML configuration with layered overrides.
//!
//! Values are merged in increasing priority: built-in defaults, the TOML file
//! given with `--config`, then flags explicitly set on the command line.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli_args::{BadgeFormat, Resolution};
use crate::error::ColorError;
use crate::names::ColorNames;
use crate::parse::parse_color;
use crate::render::WallpaperLayout;
use crate::selection::{
    BackgroundRequest, INVERTED_MARKER, OverlayConstraint, RANDOM_MARKER, SecondaryRequest,
    SelectionRequest,
};

/// Output path used when none is configured.
pub const DEFAULT_OUTPUT: &str = "out.png";

/// Directory used for multiple wallpapers when the output path was left at its default.
pub const DEFAULT_MULTIPLE_OUTPUT: &str = "generated";

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading/writing file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration file does not exist
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Merging or extracting layered configuration failed
    #[error("config error: {0}")]
    Figment(#[from] Box<figment::Error>),
    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A configured color could not be parsed
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperConfig {
    pub colors: ColorConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
    pub multiple: MultipleConfig,
}

/// Color settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Background color, or "random"
    pub background: String,
    /// Highlight color, or "inverted"
    pub secondary: String,
    /// Min contrast of background and an inverted secondary color
    pub min_contrast: f64,
    /// Overlay color (icons, text) the background must contrast with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
    /// Min contrast of background and overlay
    pub overlay_contrast: f64,
    /// Cap on random background draws, 0 for no cap
    pub max_attempts: usize,
    /// Seed for reproducible random draws
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: RANDOM_MARKER.to_string(),
            secondary: INVERTED_MARKER.to_string(),
            min_contrast: 1.0,
            overlay: None,
            overlay_contrast: 1.0,
            max_attempts: 10_000,
            seed: None,
        }
    }
}

/// Badge layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Replaces the background name; empty hides the name row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub resolution: Resolution,
    pub scale: u32,
    pub formats: Vec<BadgeFormat>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            name: None,
            resolution: Resolution::default(),
            scale: 3,
            formats: BadgeFormat::DEFAULT.to_vec(),
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    /// Replace an existing file
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
            overwrite: false,
        }
    }
}

/// Settings for generating one wallpaper per palette color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultipleConfig {
    /// Number of wallpapers; 1 generates a single image, negative generates all
    pub count: i64,
    /// Image extension of generated files
    pub extension: String,
}

impl Default for MultipleConfig {
    fn default() -> Self {
        Self {
            count: 1,
            extension: "png".to_string(),
        }
    }
}

/// Sparse overrides; only fields set on the command line are serialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub colors: ColorOverrides,
    pub display: DisplayOverrides,
    pub output: OutputOverrides,
    pub multiple: MultipleOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ColorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_contrast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_contrast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<BadgeFormat>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OutputOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MultipleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl WallpaperConfig {
    /// Load configuration from a TOML file on top of the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::layered(Some(path), &ConfigOverrides::default())
    }

    /// Merge defaults, an optional TOML file and command-line overrides.
    pub fn layered(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(|e| ConfigError::Figment(Box::new(e)))
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the color selection request described by this configuration.
    pub fn selection_request(&self, names: &ColorNames) -> Result<SelectionRequest, ConfigError> {
        let colors = &self.colors;

        let overlay = colors
            .overlay
            .as_deref()
            .map(|input| -> Result<_, ColorError> {
                Ok(OverlayConstraint {
                    color: parse_color(input, names)?,
                    min_contrast: colors.overlay_contrast,
                })
            })
            .transpose()?;

        Ok(SelectionRequest {
            background: BackgroundRequest::parse(&colors.background, names)?,
            secondary: SecondaryRequest::parse(&colors.secondary),
            min_contrast: Some(colors.min_contrast),
            overlay,
            max_attempts: (colors.max_attempts > 0).then_some(colors.max_attempts),
        })
    }

    /// Badge layout described by this configuration.
    pub fn layout(&self) -> WallpaperLayout {
        WallpaperLayout {
            resolution: self.display.resolution,
            scale: self.display.scale.max(1),
            display: self.display.name.clone(),
            formats: self.display.formats.clone(),
        }
    }
}
