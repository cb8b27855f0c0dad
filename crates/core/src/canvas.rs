//! The drawing-surface contract consumed by the core.
//!
//! Coordinates are 1-based, matching the terminal convention of the rest of
//! the engine; implementations ignore writes with `x < 1` or `y < 1` or
//! beyond their current size. The core never emits terminal control codes —
//! a backend (see the term crate) implements this trait per platform.

use gridfx_types::{Cell, CellStyle};

pub trait Canvas {
    /// Surface width in cells.
    fn width(&self) -> u16;

    /// Surface height in cells.
    fn height(&self) -> u16;

    /// Write a character at `(x, y)`, keeping the cell's current style.
    fn set_char(&mut self, x: i32, y: i32, ch: char);

    /// Write a style at `(x, y)`, keeping the cell's current character.
    fn set_style(&mut self, x: i32, y: i32, style: CellStyle);

    /// Read the cell at `(x, y)`; `None` when out of range.
    fn cell_at(&self, x: i32, y: i32) -> Option<Cell>;

    /// Reset every cell to the blank background.
    fn clear(&mut self);

    /// Write a full cell (character + style) at `(x, y)`.
    fn put(&mut self, x: i32, y: i32, cell: Cell) {
        self.set_char(x, y, cell.ch);
        self.set_style(x, y, cell.style);
    }
}
