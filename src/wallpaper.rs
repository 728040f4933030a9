//! Writing wallpapers to disk, one at a time or one per palette color.

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::color::{ColorValue, HexCase};
use crate::config::{DEFAULT_MULTIPLE_OUTPUT, DEFAULT_OUTPUT};
use crate::error::ColorError;
use crate::names::ColorNames;
use crate::render::{WallpaperLayout, render_wallpaper};
use crate::selection::{BackgroundRequest, ColorSelectionPolicy, Selection, SelectionRequest};

/// Error type for wallpaper generation.
#[derive(Debug, thiserror::Error)]
pub enum WallpaperError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Output exists and overwriting was not requested
    #[error("{} already exists, use --yes to overwrite", .0.display())]
    Exists(PathBuf),
    /// Output exists but is a directory or other non-file
    #[error("{} exists and is not a file", .0.display())]
    NotAFile(PathBuf),
    /// Output directory for multiple wallpapers is an existing file
    #[error("{} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// Multiple wallpapers pick their own backgrounds
    #[error("generating multiple wallpapers requires a random background")]
    RandomRequired,
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Check that `path` may be written and create its parent directories.
pub fn prepare_output(path: &Path, overwrite: bool) -> Result<(), WallpaperError> {
    if path.exists() {
        if !path.is_file() {
            return Err(WallpaperError::NotAFile(path.to_path_buf()));
        }
        if !overwrite {
            return Err(WallpaperError::Exists(path.to_path_buf()));
        }
        debug!(path = %path.display(), "Overwriting existing file");
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| WallpaperError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}

/// Encode `image` to `path`; the format follows the file extension.
pub fn save(image: RgbaImage, path: &Path) -> Result<(), WallpaperError> {
    // Wallpapers are opaque, and JPEG has no alpha channel
    DynamicImage::ImageRgba8(image)
        .into_rgb8()
        .save(path)
        .map_err(|source| WallpaperError::Image {
            path: path.to_path_buf(),
            source,
        })
}

/// Render `selection` and write it to `path`.
#[instrument(skip(selection, layout), fields(background = %selection.background))]
pub fn generate(
    selection: &Selection,
    layout: &WallpaperLayout,
    path: &Path,
    overwrite: bool,
) -> Result<(), WallpaperError> {
    prepare_output(path, overwrite)?;
    save(render_wallpaper(selection, layout), path)?;
    info!(path = %path.display(), "Wrote wallpaper");
    Ok(())
}

/// Directory for multiple wallpapers given the configured output path.
pub fn multiple_output_dir(output: &Path) -> PathBuf {
    if output == Path::new(DEFAULT_OUTPUT) {
        PathBuf::from(DEFAULT_MULTIPLE_OUTPUT)
    } else {
        output.to_path_buf()
    }
}

/// Selections for up to `count` palette colors, in table order.
///
/// Each table entry is tried as a fixed background with the rest of
/// `request`; entries that violate a contrast constraint are skipped. A
/// negative `count` keeps every entry that resolves.
pub fn palette_selections(
    request: &SelectionRequest,
    names: &ColorNames,
    count: i64,
) -> Result<Vec<Selection>, WallpaperError> {
    if !request.background.is_random() {
        return Err(WallpaperError::RandomRequired);
    }

    let policy = ColorSelectionPolicy::new(names);
    let limit = usize::try_from(count).unwrap_or(usize::MAX);
    let mut selections = Vec::new();

    for entry in names.entries() {
        if selections.len() >= limit {
            break;
        }

        let background = ColorValue::new(entry.rgb, entry.name.clone());
        let fixed = SelectionRequest {
            background: BackgroundRequest::Fixed(background.clone()),
            ..request.clone()
        };

        // Fixed backgrounds never draw
        let mut source = || background.clone();
        match policy.resolve(&fixed, &mut source) {
            Ok(selection) => selections.push(selection),
            Err(err) if err.is_contrast_unsatisfiable() => {
                debug!(color = %background, error = %err, "Skipping palette color");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(selections)
}

/// File name of a palette wallpaper: `<hex>.<extension>`.
pub fn file_name(selection: &Selection, extension: &str) -> String {
    format!(
        "{}.{}",
        selection.background.hex(HexCase::Lower),
        extension.trim_start_matches('.')
    )
}

/// Render every selection in parallel into `dir`.
///
/// Returns the written paths in the order of `selections`.
#[instrument(skip(selections, layout), fields(count = selections.len()))]
pub fn generate_all(
    selections: &[Selection],
    layout: &WallpaperLayout,
    dir: &Path,
    extension: &str,
    overwrite: bool,
) -> Result<Vec<PathBuf>, WallpaperError> {
    if dir.exists() && !dir.is_dir() {
        return Err(WallpaperError::NotADirectory(dir.to_path_buf()));
    }
    std::fs::create_dir_all(dir).map_err(|source| WallpaperError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    selections
        .par_iter()
        .map(|selection| -> Result<PathBuf, WallpaperError> {
            let path = dir.join(file_name(selection, extension));
            generate(selection, layout, &path, overwrite)?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::selection::{OverlayConstraint, SecondaryRequest};

    fn black_overlay() -> OverlayConstraint {
        OverlayConstraint {
            color: ColorValue::named(palette::Srgb::new(0, 0, 0), ColorNames::builtin()),
            min_contrast: 7.0,
        }
    }

    #[test]
    fn default_output_maps_to_generated_dir() {
        assert_eq!(
            multiple_output_dir(Path::new("out.png")),
            PathBuf::from("generated")
        );
        assert_eq!(
            multiple_output_dir(Path::new("walls")),
            PathBuf::from("walls")
        );
    }

    #[test]
    fn palette_selections_need_random_background() {
        let names = ColorNames::builtin();
        let request = SelectionRequest {
            background: BackgroundRequest::parse("black", names).unwrap(),
            ..SelectionRequest::random()
        };
        let err = palette_selections(&request, names, 3).unwrap_err();
        assert!(matches!(err, WallpaperError::RandomRequired));
    }

    #[test]
    fn palette_selections_take_count_in_table_order() {
        let names = ColorNames::builtin();
        let selections = palette_selections(&SelectionRequest::random(), names, 3).unwrap();
        let expected: Vec<&str> = names.entries()[..3].iter().map(|e| e.name.as_str()).collect();
        let got: Vec<&str> = selections.iter().map(|s| s.background.name()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn palette_selections_filter_contrast_failures() {
        let names = ColorNames::builtin();
        let request = SelectionRequest {
            overlay: Some(black_overlay()),
            ..SelectionRequest::random()
        };

        let selections = palette_selections(&request, names, -1).unwrap();
        assert!(!selections.is_empty());
        assert!(selections.len() < names.len());
        assert!(
            selections
                .iter()
                .all(|s| s.background.contrast_ratio(&black_overlay().color) >= 7.0)
        );
    }

    #[test]
    fn palette_selections_propagate_invalid_secondary() {
        let names = ColorNames::builtin();
        let request = SelectionRequest {
            secondary: SecondaryRequest::Explicit("not a color".to_string()),
            ..SelectionRequest::random()
        };
        let err = palette_selections(&request, names, 2).unwrap_err();
        assert!(matches!(
            err,
            WallpaperError::Color(ColorError::InvalidColor(_))
        ));
    }

    #[test]
    fn file_name_uses_lowercase_hex() {
        let names = ColorNames::builtin();
        let selection = palette_selections(&SelectionRequest::random(), names, 1)
            .unwrap()
            .remove(0);
        let name = file_name(&selection, ".png");
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), "abcdef.png".len());
        assert_eq!(name, name.to_lowercase());
    }
}
