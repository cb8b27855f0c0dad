//! 2D framebuffer of styled character cells.
//!
//! Storage is 0-based row-major; the core-facing [`Canvas`] impl speaks the
//! engine's 1-based coordinates and ignores anything out of range.

use gridfx_core::Canvas;
use gridfx_types::{Cell, CellStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, preserving the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// 0-based read, used by the renderer's diff pass.
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// 0-based write.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Copy another buffer's contents into this one, resizing as needed.
    pub fn copy_from(&mut self, other: &FrameBuffer) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clear();
        self.cells.extend_from_slice(&other.cells);
    }

    // 1-based engine coordinate to internal index.
    fn engine_idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 1 || y < 1 || x > self.width as i32 || y > self.height as i32 {
            return None;
        }
        Some((y as usize - 1) * (self.width as usize) + (x as usize - 1))
    }
}

impl Canvas for FrameBuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn set_char(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.engine_idx(x, y) {
            self.cells[i].ch = ch;
        }
    }

    fn set_style(&mut self, x: i32, y: i32, style: CellStyle) {
        if let Some(i) = self.engine_idx(x, y) {
            self.cells[i].style = style;
        }
    }

    fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        self.engine_idx(x, y).map(|i| self.cells[i])
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
