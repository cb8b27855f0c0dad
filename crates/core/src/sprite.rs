//! Sprites: positioned rectangular grids of optional characters and styles.

use gridfx_types::{CellStyle, SpriteId, Vec2, DEFAULT_MASS};

/// A force currently acting on a sprite, cleared automatically when the
/// engine reaches `expires_at_tick`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveForce {
    pub vec: Vec2,
    pub expires_at_tick: u64,
}

/// A movable drawable unit: a `width × height` grid of cells positioned on
/// the shared surface.
///
/// `cells[row * width + col] == None` marks a transparent cell — the
/// background or a lower sprite shows through. Grid dimensions are fixed for
/// the sprite's lifetime; position, z and physics state are mutable.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub(crate) id: SpriteId,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    width: u16,
    height: u16,
    cells: Vec<Option<char>>,
    styles: Vec<Option<CellStyle>>,
    mass: f64,
    pub velocity: Vec2,
    pub force: Option<ActiveForce>,
    /// Sub-cell displacement carried between ticks; positions are whole
    /// cells, so fractional motion accumulates here.
    pub residual: Vec2,
}

impl Sprite {
    /// Create an undrawn sprite.
    ///
    /// Returns `None` when `width` or `height` is zero or the grids do not
    /// have exactly `width * height` entries (`styles` may also be empty,
    /// meaning "no styling anywhere").
    pub fn new(
        width: u16,
        height: u16,
        cells: Vec<Option<char>>,
        styles: Vec<Option<CellStyle>>,
        z: i32,
    ) -> Option<Self> {
        let len = width as usize * height as usize;
        if width == 0 || height == 0 || cells.len() != len {
            return None;
        }
        if !styles.is_empty() && styles.len() != len {
            return None;
        }
        let styles = if styles.is_empty() {
            vec![None; len]
        } else {
            styles
        };
        Some(Self {
            id: SpriteId::UNDRAWN,
            x: 1,
            y: 1,
            z,
            width,
            height,
            cells,
            styles,
            mass: DEFAULT_MASS,
            velocity: Vec2::ZERO,
            force: None,
            residual: Vec2::ZERO,
        })
    }

    /// Fully opaque rectangle of a single character.
    pub fn filled(width: u16, height: u16, ch: char, style: CellStyle, z: i32) -> Option<Self> {
        let len = width as usize * height as usize;
        Self::new(width, height, vec![Some(ch); len], vec![Some(style); len], z)
    }

    pub fn id(&self) -> SpriteId {
        self.id
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Set the sprite's mass; non-positive values are ignored.
    pub fn set_mass(&mut self, mass: f64) {
        if mass > 0.0 {
            self.mass = mass;
        }
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<char> {
        self.grid_index(col, row).and_then(|i| self.cells[i])
    }

    pub fn style(&self, col: u16, row: u16) -> Option<CellStyle> {
        self.grid_index(col, row).and_then(|i| self.styles[i])
    }

    /// True when the sprite has no character at grid position `(col, row)`.
    pub fn is_transparent(&self, col: u16, row: u16) -> bool {
        self.cell(col, row).is_none()
    }

    /// `(x, y, width, height)` of the sprite's bounding box in surface
    /// coordinates.
    pub fn bounds(&self) -> (i32, i32, u16, u16) {
        (self.x, self.y, self.width, self.height)
    }

    /// True when the bounding box covers the absolute coordinate `(x, y)`.
    pub fn covers(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x + self.width as i32
            && y < self.y + self.height as i32
    }

    /// The sprite's character at the absolute coordinate `(x, y)`, if the
    /// coordinate is inside the bounds and the cell is opaque.
    pub fn cell_at_abs(&self, x: i32, y: i32) -> Option<char> {
        if !self.covers(x, y) {
            return None;
        }
        self.cell((x - self.x) as u16, (y - self.y) as u16)
    }

    /// Style counterpart of [`cell_at_abs`](Self::cell_at_abs).
    pub fn style_at_abs(&self, x: i32, y: i32) -> Option<CellStyle> {
        if !self.covers(x, y) {
            return None;
        }
        self.style((x - self.x) as u16, (y - self.y) as u16)
    }

    fn grid_index(&self, col: u16, row: u16) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfx_types::CellStyle;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(Sprite::new(0, 3, vec![], vec![], 0).is_none());
        assert!(Sprite::new(3, 0, vec![], vec![], 0).is_none());
    }

    #[test]
    fn test_new_rejects_mismatched_grid() {
        assert!(Sprite::new(2, 2, vec![Some('x'); 3], vec![], 0).is_none());
    }

    #[test]
    fn test_filled_sprite_is_opaque_everywhere() {
        let s = Sprite::filled(3, 2, '#', CellStyle::default(), 0).unwrap();
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(s.cell(col, row), Some('#'));
                assert!(!s.is_transparent(col, row));
            }
        }
        assert_eq!(s.cell(3, 0), None);
    }

    #[test]
    fn test_transparent_cells() {
        let cells = vec![Some('a'), None, None, Some('b')];
        let s = Sprite::new(2, 2, cells, vec![], 0).unwrap();
        assert!(s.is_transparent(1, 0));
        assert!(s.is_transparent(0, 1));
        assert!(!s.is_transparent(0, 0));
    }

    #[test]
    fn test_absolute_lookup_tracks_position() {
        let mut s = Sprite::filled(2, 2, '#', CellStyle::default(), 0).unwrap();
        s.x = 5;
        s.y = 7;
        assert_eq!(s.cell_at_abs(5, 7), Some('#'));
        assert_eq!(s.cell_at_abs(6, 8), Some('#'));
        assert_eq!(s.cell_at_abs(7, 7), None);
        assert_eq!(s.cell_at_abs(4, 7), None);
    }

    #[test]
    fn test_set_mass_ignores_non_positive() {
        let mut s = Sprite::filled(1, 1, '#', CellStyle::default(), 0).unwrap();
        s.set_mass(2.5);
        assert_eq!(s.mass(), 2.5);
        s.set_mass(0.0);
        assert_eq!(s.mass(), 2.5);
        s.set_mass(-1.0);
        assert_eq!(s.mass(), 2.5);
    }
}
