//! Wallpaper composition: solid background plus a scaled color badge.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::warn;

use crate::cli_args::Resolution;
use crate::color::ColorValue;
use crate::font::{GLYPH_HEIGHT, glyph, text_width, wrap};
use crate::format::BadgeFormat;
use crate::selection::Selection;

/// Edge length of the unscaled badge.
pub const DECORATION_SIZE: u32 = 128;

/// Width and height available for text inside the badge.
pub const USABLE_SIZE: u32 = 112;

/// Text inset from the badge edge.
const MARGIN: u32 = 8;

/// Outline thickness.
const BORDER: u32 = 3;

/// Distance between text baselines.
pub const LINE_HEIGHT: u32 = 12;

/// Space kept between the scaled badge and the image edge.
const EDGE_CLEARANCE: u32 = 22;

/// Everything needed to draw one wallpaper.
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperLayout {
    pub resolution: Resolution,
    /// Badge size multiplier, at least 1
    pub scale: u32,
    /// Overrides the background name; `Some("")` hides the name row
    pub display: Option<String>,
    pub formats: Vec<BadgeFormat>,
}

impl Default for WallpaperLayout {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            scale: 3,
            display: None,
            formats: BadgeFormat::DEFAULT.to_vec(),
        }
    }
}

fn rgba(color: &ColorValue) -> Rgba<u8> {
    let [r, g, b] = color.components();
    Rgba([r, g, b, 255])
}

/// Height in pixels of `lines` rendered text.
fn block_height(lines: usize) -> u32 {
    match lines {
        0 => 0,
        n => n as u32 * LINE_HEIGHT - (LINE_HEIGHT - GLYPH_HEIGHT),
    }
}

/// Draw one line of text, clipped to the area inside the outline.
fn draw_line(canvas: &mut RgbaImage, text: &str, x: u32, y: u32, color: Rgba<u8>) {
    let limit = DECORATION_SIZE - BORDER;
    let mut cursor = x;

    for c in text.chars() {
        let g = glyph(c);
        for gy in 0..GLYPH_HEIGHT {
            for gx in 0..g.width {
                let (px, py) = (cursor + gx, y + gy);
                if g.is_set(gx, gy) && px < limit && py < limit {
                    canvas.put_pixel(px, py, color);
                }
            }
        }
        cursor += g.advance();
    }
}

/// Render the unscaled badge: outline, name and one row per format.
pub fn render_decoration(
    background: &ColorValue,
    highlight: &ColorValue,
    display: Option<&str>,
    formats: &[BadgeFormat],
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(DECORATION_SIZE, DECORATION_SIZE, Rgba([0, 0, 0, 0]));
    let ink = rgba(highlight);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let edge = DECORATION_SIZE - BORDER;
        if x < BORDER || y < BORDER || x >= edge || y >= edge {
            *pixel = ink;
        }
    }

    // Rows are drawn LINE_HEIGHT below the previous block
    let mut bottom = MARGIN as i64 - LINE_HEIGHT as i64;

    let name = display.unwrap_or(background.name());
    if !name.is_empty() {
        let lines = wrap(name, USABLE_SIZE);
        for (i, line) in lines.iter().enumerate() {
            draw_line(&mut canvas, line, MARGIN, MARGIN + i as u32 * LINE_HEIGHT, ink);
        }

        let height = block_height(lines.len());
        if height > USABLE_SIZE {
            warn!(name, "Display text is too long and will be cut off");
        }
        bottom = i64::from(height);
    }

    for (i, format) in formats.iter().enumerate() {
        if bottom > i64::from(USABLE_SIZE) {
            let ignored: Vec<String> = formats[i..].iter().map(ToString::to_string).collect();
            warn!(
                count = ignored.len(),
                formats = %ignored.join(", "),
                "Unable to display all formats"
            );
            break;
        }

        bottom += i64::from(LINE_HEIGHT);
        let y = u32::try_from(bottom).unwrap_or(MARGIN);
        let label = format.label();
        draw_line(&mut canvas, label, MARGIN, y, ink);
        draw_line(
            &mut canvas,
            &format.value(background),
            MARGIN + text_width(label) + 1,
            y,
            ink,
        );
    }

    canvas
}

/// Scaled badge edge for a given resolution and requested scale.
pub fn badge_size(resolution: Resolution, scale: u32) -> u32 {
    let smaller = resolution.width.min(resolution.height);
    let fit = smaller.saturating_sub(EDGE_CLEARANCE) / DECORATION_SIZE;
    DECORATION_SIZE * scale.max(1).min(fit)
}

/// Render a full wallpaper for a resolved color selection.
pub fn render_wallpaper(selection: &Selection, layout: &WallpaperLayout) -> RgbaImage {
    let Resolution { width, height } = layout.resolution;
    let mut image = RgbaImage::from_pixel(width, height, rgba(&selection.background));

    let decoration = render_decoration(
        &selection.background,
        &selection.secondary,
        layout.display.as_deref(),
        &layout.formats,
    );

    let size = badge_size(layout.resolution, layout.scale);
    if size == 0 {
        warn!(resolution = %layout.resolution, "Resolution too small for the badge");
        return image;
    }

    let decoration = imageops::resize(&decoration, size, size, FilterType::Nearest);
    imageops::overlay(
        &mut image,
        &decoration,
        i64::from((width - size) / 2),
        i64::from((height - size) / 2),
    );

    image
}
