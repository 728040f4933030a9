//! Variable-width 5x7 bitmap font and word wrapping for badge text.

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;

/// Blank column between glyphs.
pub const GLYPH_SPACING: u32 = 1;

/// A bitmap glyph. Row bits run from bit `width - 1` (left) to bit 0 (right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub width: u32,
    pub rows: [u8; GLYPH_HEIGHT as usize],
}

impl Glyph {
    const fn new(width: u32, rows: [u8; GLYPH_HEIGHT as usize]) -> Self {
        Self { width, rows }
    }

    /// Whether the pixel at column `x`, row `y` is set.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        x < self.width
            && y < GLYPH_HEIGHT
            && (self.rows[y as usize] >> (self.width - 1 - x)) & 1 == 1
    }

    /// Horizontal space taken including trailing spacing.
    pub fn advance(&self) -> u32 {
        self.width + GLYPH_SPACING
    }
}

/// Drawn for characters the font does not cover.
pub const FALLBACK: Glyph = Glyph::new(5, [0b11111; 7]);

const SPACE: Glyph = Glyph::new(3, [0; 7]);

/// Glyph for `c`. Lowercase letters use the uppercase shapes.
pub fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        ' ' => SPACE,
        'A' => Glyph::new(5, [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'B' => Glyph::new(5, [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
        'C' => Glyph::new(5, [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
        'D' => Glyph::new(5, [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
        'E' => Glyph::new(5, [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        'F' => Glyph::new(5, [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
        'G' => Glyph::new(5, [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
        'H' => Glyph::new(5, [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'I' => Glyph::new(3, [0b111, 0b010, 0b010, 0b010, 0b010, 0b010, 0b111]),
        'J' => Glyph::new(5, [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
        'K' => Glyph::new(5, [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
        'L' => Glyph::new(5, [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        'M' => Glyph::new(5, [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
        'N' => Glyph::new(5, [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
        'O' => Glyph::new(5, [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'P' => Glyph::new(5, [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
        'Q' => Glyph::new(5, [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
        'R' => Glyph::new(5, [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        'S' => Glyph::new(5, [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'T' => Glyph::new(5, [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        'U' => Glyph::new(5, [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'V' => Glyph::new(5, [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        'W' => Glyph::new(5, [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
        'X' => Glyph::new(5, [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
        'Y' => Glyph::new(5, [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
        'Z' => Glyph::new(5, [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
        '0' => Glyph::new(5, [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        '1' => Glyph::new(3, [0b010, 0b110, 0b010, 0b010, 0b010, 0b010, 0b111]),
        '2' => Glyph::new(5, [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
        '3' => Glyph::new(5, [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
        '4' => Glyph::new(5, [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        '5' => Glyph::new(5, [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        '6' => Glyph::new(5, [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        '7' => Glyph::new(5, [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        '8' => Glyph::new(5, [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        '9' => Glyph::new(5, [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
        '#' => Glyph::new(5, [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010]),
        '-' => Glyph::new(3, [0b000, 0b000, 0b000, 0b111, 0b000, 0b000, 0b000]),
        '+' => Glyph::new(5, [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
        '_' => Glyph::new(5, [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111]),
        '/' => Glyph::new(5, [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000]),
        '?' => Glyph::new(5, [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]),
        '.' => Glyph::new(1, [0, 0, 0, 0, 0, 0, 1]),
        '!' => Glyph::new(1, [1, 1, 1, 1, 1, 0, 1]),
        ':' => Glyph::new(1, [0, 1, 0, 0, 0, 1, 0]),
        '\'' => Glyph::new(1, [1, 1, 0, 0, 0, 0, 0]),
        ',' => Glyph::new(2, [0b00, 0b00, 0b00, 0b00, 0b00, 0b01, 0b10]),
        '(' => Glyph::new(2, [0b01, 0b10, 0b10, 0b10, 0b10, 0b10, 0b01]),
        ')' => Glyph::new(2, [0b10, 0b01, 0b01, 0b01, 0b01, 0b01, 0b10]),
        _ => FALLBACK,
    }
}

/// Pixel width of `text` on one line, without trailing spacing.
pub fn text_width(text: &str) -> u32 {
    text.chars()
        .map(|c| glyph(c).advance())
        .sum::<u32>()
        .saturating_sub(GLYPH_SPACING)
}

/// Split `word` into pieces no wider than `max_width`.
///
/// Every piece holds at least one character, so a single glyph wider than
/// `max_width` still makes progress.
fn split_word(word: &str, max_width: u32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for c in word.chars() {
        let mut candidate = current.clone();
        candidate.push(c);
        if !current.is_empty() && text_width(&candidate) > max_width {
            pieces.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Wrap `text` into lines no wider than `max_width` pixels.
///
/// Both real newlines and the two-character sequence `\n` start a new line.
/// Words wider than a line are split.
pub fn wrap(text: &str, max_width: u32) -> Vec<String> {
    let text = text.replace("\\n", "\n");
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            for piece in split_word(word, max_width) {
                let candidate = if line.is_empty() {
                    piece.clone()
                } else {
                    format!("{line} {piece}")
                };

                if text_width(&candidate) <= max_width {
                    line = candidate;
                } else {
                    lines.push(std::mem::replace(&mut line, piece));
                }
            }
        }

        lines.push(line);
    }

    lines
}
