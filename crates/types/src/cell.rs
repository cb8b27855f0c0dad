//! Per-cell character and style types for the shared text surface.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Default style with a different foreground color.
    pub fn with_fg(fg: Rgb) -> Self {
        Self {
            fg,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single cell of the text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    /// The background cell painted where nothing is drawn.
    pub const fn blank() -> Self {
        Self {
            ch: ' ',
            style: CellStyle {
                fg: Rgb::new(220, 220, 220),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                dim: false,
            },
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}
