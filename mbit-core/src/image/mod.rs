//! The 5x5 LED image model.
//!
//! - `Image`: a fixed 5x5 grid of brightness values (0 = off, 9 = max)
//! - `catalogue`: built-in named images (`Image::HAPPY`, ...)
//! - `font`: glyphs for displayable characters

mod catalogue;
mod font;

use std::fmt::{self, Write as _};
use std::ops::Add;
use std::str::FromStr;

use crate::error::{MbitError, MbitResult};

pub use font::{glyph_for_character, UNKNOWN_GLYPH};

/// Display width in pixels.
pub const WIDTH: usize = 5;
/// Display height in pixels.
pub const HEIGHT: usize = 5;
/// Brightest pixel value.
pub const MAX_BRIGHTNESS: u8 = 9;

/// One column of pixels, top to bottom.
pub(crate) type Column = [u8; HEIGHT];

const BORDER: &str = "-------";
const ROW_SEP: char = ':';

/// A 5x5 image. Every pixel is always within `0..=MAX_BRIGHTNESS`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Image {
    pixels: [[u8; WIDTH]; HEIGHT],
}

fn clamp(value: i32) -> u8 {
    value.clamp(0, MAX_BRIGHTNESS as i32) as u8
}

impl Image {
    /// All pixels off.
    pub const BLANK: Image = Image {
        pixels: [[0; WIDTH]; HEIGHT],
    };

    /// Create from a 5x5 array, clamping values above `MAX_BRIGHTNESS`.
    pub const fn new(mut pixels: [[u8; WIDTH]; HEIGHT]) -> Self {
        let mut row = 0;
        while row < HEIGHT {
            let mut col = 0;
            while col < WIDTH {
                if pixels[row][col] > MAX_BRIGHTNESS {
                    pixels[row][col] = MAX_BRIGHTNESS;
                }
                col += 1;
            }
            row += 1;
        }
        Self { pixels }
    }

    /// Build from rows of arbitrary integers.
    ///
    /// Fails with [`MbitError::Shape`] unless there are exactly 5 rows of 5
    /// values. Values are clamped to `0..=MAX_BRIGHTNESS`.
    pub fn build<R: AsRef<[i32]>>(rows: &[R]) -> MbitResult<Self> {
        if rows.len() != HEIGHT {
            return Err(MbitError::Shape {
                rows: rows.len(),
                cols: rows.first().map_or(0, |row| row.as_ref().len()),
            });
        }

        let mut image = Self::BLANK;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != WIDTH {
                return Err(MbitError::Shape {
                    rows: HEIGHT,
                    cols: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                image.pixels[r][c] = clamp(value);
            }
        }
        Ok(image)
    }

    /// Compile-time parser for well-formed `"90009:09090:..."` literals.
    pub(crate) const fn from_literal(literal: &str) -> Self {
        let bytes = literal.as_bytes();
        let mut pixels = [[0; WIDTH]; HEIGHT];
        let (mut row, mut col, mut i) = (0, 0, 0);
        while i < bytes.len() {
            if bytes[i] == ROW_SEP as u8 {
                row += 1;
                col = 0;
            } else {
                pixels[row][col] = bytes[i] - b'0';
                col += 1;
            }
            i += 1;
        }
        Self { pixels }
    }

    /// Assemble an image from five columns, left to right.
    pub(crate) fn from_columns(columns: &[Column]) -> Self {
        let mut image = Self::BLANK;
        for (col, column) in columns.iter().take(WIDTH).enumerate() {
            for (row, &value) in column.iter().enumerate() {
                image.pixels[row][col] = value;
            }
        }
        image
    }

    pub(crate) fn column(&self, col: usize) -> Column {
        let mut column = [0; HEIGHT];
        for (row, value) in column.iter_mut().enumerate() {
            *value = self.pixels[row][col];
        }
        column
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Pixel rows, top to bottom.
    pub fn rows(&self) -> &[[u8; WIDTH]; HEIGHT] {
        &self.pixels
    }

    /// Brightness at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> MbitResult<u8> {
        self.pixels
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(MbitError::IndexOutOfBounds { row, col })
    }

    /// Set brightness at `(row, col)`, clamping `value` to `0..=9`.
    pub fn set_pixel(&mut self, row: usize, col: usize, value: i32) -> MbitResult<()> {
        let cell = self
            .pixels
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MbitError::IndexOutOfBounds { row, col })?;
        *cell = clamp(value);
        Ok(())
    }

    /// True if every pixel is off.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().flatten().all(|&p| p == 0)
    }

    /// Superimpose two images: a pixel is lit if it is lit in either.
    pub fn overlay(&self, other: &Image) -> Image {
        let mut out = *self;
        for (dst, &src) in out.pixels.iter_mut().flatten().zip(other.pixels.iter().flatten()) {
            *dst = (*dst).max(src);
        }
        out
    }

    /// Multiply every pixel by `factor`, truncating and capping at 9.
    pub fn scaled(&self, factor: f32) -> MbitResult<Image> {
        if factor < 0.0 {
            return Err(MbitError::NegativeBrightness(factor));
        }
        let mut out = *self;
        for p in out.pixels.iter_mut().flatten() {
            *p = ((*p as f32 * factor) as u8).min(MAX_BRIGHTNESS);
        }
        Ok(out)
    }

    /// Move the picture `n` columns left. Negative `n` moves right.
    pub fn shift_left(&self, n: i32) -> Image {
        self.shifted(i64::from(n), 0)
    }

    /// Move the picture `n` columns right. Negative `n` moves left.
    pub fn shift_right(&self, n: i32) -> Image {
        self.shifted(-i64::from(n), 0)
    }

    /// Move the picture `n` rows up. Negative `n` moves down.
    pub fn shift_up(&self, n: i32) -> Image {
        self.shifted(0, i64::from(n))
    }

    /// Move the picture `n` rows down. Negative `n` moves up.
    pub fn shift_down(&self, n: i32) -> Image {
        self.shifted(0, -i64::from(n))
    }

    // Each output pixel samples the source at (row + dy, col + dx).
    fn shifted(&self, dx: i64, dy: i64) -> Image {
        let mut out = Self::BLANK;
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let src_row = row as i64 + dy;
                let src_col = col as i64 + dx;
                if (0..HEIGHT as i64).contains(&src_row) && (0..WIDTH as i64).contains(&src_col) {
                    out.pixels[row][col] = self.pixels[src_row as usize][src_col as usize];
                }
            }
        }
        out
    }
}

impl Add for Image {
    type Output = Image;

    /// Per-pixel sum, capped at full brightness.
    fn add(self, other: Image) -> Image {
        let mut out = self;
        for (dst, &src) in out.pixels.iter_mut().flatten().zip(other.pixels.iter().flatten()) {
            *dst = (*dst + src).min(MAX_BRIGHTNESS);
        }
        out
    }
}

impl FromStr for Image {
    type Err = MbitError;

    /// Parse `"90009:09090:00900:09090:90009"`. Short rows and missing rows
    /// are padded with zeroes; an empty string is a blank image.
    fn from_str(s: &str) -> MbitResult<Self> {
        if let Some(bad) = s.chars().find(|c| *c != ROW_SEP && !c.is_ascii_digit()) {
            return Err(MbitError::InvalidLiteral(bad));
        }

        let body = s.trim_end_matches(ROW_SEP);
        if body.is_empty() {
            return Ok(Self::BLANK);
        }

        let rows: Vec<&str> = body.split(ROW_SEP).collect();
        let widest = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        if rows.len() > HEIGHT || widest > WIDTH {
            return Err(MbitError::Shape {
                rows: rows.len(),
                cols: widest,
            });
        }

        let mut image = Self::BLANK;
        for (r, row) in rows.iter().enumerate() {
            for (c, digit) in row.bytes().enumerate() {
                image.pixels[r][c] = digit - b'0';
            }
        }
        Ok(image)
    }
}

/// Renders the bordered frame printed for each displayed image:
///
/// ```text
/// -------
/// |9   9|
/// | 9 9 |
/// |  9  |
/// | 9 9 |
/// |9   9|
/// -------
/// ```
impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BORDER}")?;
        for row in &self.pixels {
            f.write_char('|')?;
            for &p in row {
                f.write_char(if p == 0 { ' ' } else { char::from(b'0' + p) })?;
            }
            writeln!(f, "|")?;
        }
        f.write_str(BORDER)
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Image('")?;
        for row in &self.pixels {
            for &p in row {
                f.write_char(char::from(b'0' + p))?;
            }
            f.write_char(ROW_SEP)?;
        }
        f.write_str("')")
    }
}
