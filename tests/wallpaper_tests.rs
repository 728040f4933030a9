use std::fs;

use palette::Srgb;

use color_wallpaper::cli_args::Resolution;
use color_wallpaper::color::ColorValue;
use color_wallpaper::names::ColorNames;
use color_wallpaper::render::WallpaperLayout;
use color_wallpaper::selection::{Selection, SelectionRequest};
use color_wallpaper::wallpaper::{
    WallpaperError, file_name, generate, generate_all, palette_selections,
};

fn layout() -> WallpaperLayout {
    WallpaperLayout {
        resolution: Resolution {
            width: 200,
            height: 160,
        },
        scale: 1,
        ..Default::default()
    }
}

fn selection(r: u8, g: u8, b: u8) -> Selection {
    let names = ColorNames::builtin();
    let background = ColorValue::named(Srgb::new(r, g, b), names);
    Selection {
        secondary: color_wallpaper::contrast_solver::invert(&background, names),
        background,
        overlay: None,
    }
}

#[test]
fn test_generate_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a/b/wall.png");

    generate(&selection(10, 20, 30), &layout(), &path, false).unwrap();

    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (200, 160));
    assert_eq!(image.get_pixel(199, 159).0, [10, 20, 30]);
}

#[test]
fn test_generate_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wall.png");
    fs::write(&path, b"keep").unwrap();

    let err = generate(&selection(0, 0, 0), &layout(), &path, false).unwrap_err();
    assert!(matches!(err, WallpaperError::Exists(_)));
    assert_eq!(fs::read(&path).unwrap(), b"keep");

    generate(&selection(0, 0, 0), &layout(), &path, true).unwrap();
    assert!(image::open(&path).is_ok());
}

#[test]
fn test_unsupported_extension_is_an_image_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wall.unknown");

    let err = generate(&selection(0, 0, 0), &layout(), &path, false).unwrap_err();
    assert!(matches!(err, WallpaperError::Image { .. }));
}

#[test]
fn test_generate_all_writes_one_file_per_selection() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated");
    let names = ColorNames::builtin();
    let selections = palette_selections(&SelectionRequest::random(), names, 4).unwrap();

    let written = generate_all(&selections, &layout(), &out, "png", false).unwrap();

    assert_eq!(written.len(), 4);
    for (path, selection) in written.iter().zip(&selections) {
        assert_eq!(path, &out.join(file_name(selection, "png")));
        assert!(path.is_file());
    }
}

#[test]
fn test_generate_all_rejects_file_as_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated");
    fs::write(&out, b"").unwrap();

    let err = generate_all(&[selection(0, 0, 0)], &layout(), &out, "png", false).unwrap_err();
    assert!(matches!(err, WallpaperError::NotADirectory(_)));
}
