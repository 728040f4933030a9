//! CLI argument parsing and command handling.

pub use crate::cli_args::{
    BadgeFormat, Cli, MIN_RESOLUTION, OutputFormat, Resolution, contrast_bound,
};

use crate::config::{
    ColorOverrides, ConfigOverrides, DisplayOverrides, MultipleOverrides, OutputOverrides,
};

impl Cli {
    /// Convert flat CLI args to nested overrides for Figment merging.
    ///
    /// Only fields that are explicitly set on the CLI end up in the
    /// serialized overrides, so unset flags never shadow TOML settings.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            colors: ColorOverrides {
                background: self.color.clone(),
                secondary: self.color2.clone(),
                min_contrast: self.min_contrast,
                overlay: self.overlay_color.clone(),
                overlay_contrast: self.overlay_contrast,
                max_attempts: self.max_attempts,
                seed: self.seed,
            },
            display: DisplayOverrides {
                name: self.display.clone(),
                resolution: self.resolution,
                scale: self.scale,
                formats: self.formats.clone(),
            },
            output: OutputOverrides {
                path: self.output.clone(),
                overwrite: self.yes.then_some(true),
            },
            multiple: MultipleOverrides {
                count: self.multiple_count,
                extension: self.multiple_extension.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn unset_flags_produce_empty_overrides() {
        let cli = Cli::parse_from(["color-wallpaper"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.colors.background.is_none());
        assert!(overrides.output.overwrite.is_none());
        assert!(overrides.display.formats.is_none());
    }

    #[test]
    fn flags_map_to_sections() {
        let cli = Cli::parse_from([
            "color-wallpaper",
            "-c",
            "#123",
            "--highlight",
            "white",
            "-r",
            "800x600",
            "-f",
            "hex",
            "cmyk",
            "-y",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.colors.background.as_deref(), Some("#123"));
        assert_eq!(overrides.colors.secondary.as_deref(), Some("white"));
        assert_eq!(
            overrides.display.resolution,
            Some(Resolution {
                width: 800,
                height: 600
            })
        );
        assert_eq!(
            overrides.display.formats,
            Some(vec![BadgeFormat::Hex, BadgeFormat::Cmyk])
        );
        assert_eq!(overrides.output.overwrite, Some(true));
    }

    #[test]
    fn empty_format_list_is_kept() {
        let cli = Cli::parse_from(["color-wallpaper", "--formats"]);
        assert_eq!(cli.formats, Some(vec![]));
    }

    #[test]
    fn contrast_flags_are_bounded() {
        assert!(Cli::try_parse_from(["color-wallpaper", "--min-contrast", "0.5"]).is_err());
        assert!(Cli::try_parse_from(["color-wallpaper", "--overlay-contrast", "22"]).is_err());
        assert!(Cli::try_parse_from(["color-wallpaper", "--min-contrast", "21"]).is_ok());
    }

    #[test]
    fn small_resolution_is_rejected() {
        assert!(Cli::try_parse_from(["color-wallpaper", "-r", "100x100"]).is_err());
        assert!(Cli::try_parse_from(["color-wallpaper", "-r", "150:150"]).is_ok());
    }

    #[test]
    fn scale_must_be_positive() {
        assert!(Cli::try_parse_from(["color-wallpaper", "-s", "0"]).is_err());
    }
}
