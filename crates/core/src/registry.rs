//! The sprite registry: single owner of every drawn sprite.
//!
//! Ids are positive and monotonically increasing — a removed sprite's id is
//! never handed out again, so a stale handle can only miss, never alias a
//! different sprite. Paint order at a cell is ascending z; equal-z ties
//! resolve in registry iteration order, which is deliberately unspecified.

use std::collections::HashMap;

use gridfx_types::{Cell, SpriteId};

use crate::canvas::Canvas;
use crate::sprite::Sprite;

#[derive(Debug, Default)]
pub struct SpriteRegistry {
    sprites: HashMap<SpriteId, Sprite>,
    next_id: u32,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
            next_id: 1,
        }
    }

    /// Draw `sprite` at `(x, y)`, assigning it the next unused id.
    ///
    /// The registry takes ownership; callers keep the returned id. Invalid
    /// coordinates (`< 1`) are a no-op returning [`SpriteId::UNDRAWN`].
    /// Repositioning an already-drawn sprite is [`move_to`](Self::move_to).
    pub fn draw(&mut self, canvas: &mut dyn Canvas, x: i32, y: i32, mut sprite: Sprite) -> SpriteId {
        if x < 1 || y < 1 {
            return SpriteId::UNDRAWN;
        }
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        sprite.id = id;
        sprite.x = x;
        sprite.y = y;
        let (w, h) = (sprite.width(), sprite.height());
        self.sprites.insert(id, sprite);
        self.repaint_rect(canvas, x, y, w, h);
        id
    }

    /// Erase the sprite's footprint and remove it from the registry.
    ///
    /// Cells it covered are repainted with whatever is underneath. The
    /// returned sprite has its id reset to [`SpriteId::UNDRAWN`].
    pub fn remove(&mut self, canvas: &mut dyn Canvas, id: SpriteId) -> Option<Sprite> {
        let mut sprite = self.sprites.remove(&id)?;
        sprite.id = SpriteId::UNDRAWN;
        let (x, y, w, h) = sprite.bounds();
        self.repaint_rect(canvas, x, y, w, h);
        Some(sprite)
    }

    /// Move a drawn sprite to `(x, y)`, repainting only cells whose visible
    /// content actually changes.
    ///
    /// Returns `false` for an unknown id or invalid coordinates.
    pub fn move_to(&mut self, canvas: &mut dyn Canvas, id: SpriteId, x: i32, y: i32) -> bool {
        if x < 1 || y < 1 {
            return false;
        }
        let (old_x, old_y, w, h) = match self.sprites.get(&id) {
            Some(s) => s.bounds(),
            None => return false,
        };
        if (old_x, old_y) == (x, y) {
            return true;
        }
        if let Some(s) = self.sprites.get_mut(&id) {
            s.x = x;
            s.y = y;
        }
        // Vacated, newly covered and shifted-overlap cells all land inside
        // the union of the two rectangles; repaint_cell skips the rest.
        self.repaint_rect(canvas, old_x, old_y, w, h);
        self.repaint_rect(canvas, x, y, w, h);
        true
    }

    /// Relative counterpart of [`move_to`](Self::move_to).
    pub fn move_by(&mut self, canvas: &mut dyn Canvas, id: SpriteId, dx: i32, dy: i32) -> bool {
        let (x, y, _, _) = match self.sprites.get(&id) {
            Some(s) => s.bounds(),
            None => return false,
        };
        self.move_to(canvas, id, x + dx, y + dy)
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(&id)
    }

    /// Mutable access for physics fields (velocity, force, mass).
    ///
    /// Mutating `x`/`y` through this handle bypasses repainting; use
    /// [`move_to`](Self::move_to) for position changes.
    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.sprites.get_mut(&id)
    }

    /// Snapshot of the drawn ids, in registry-internal order.
    pub fn ids(&self) -> Vec<SpriteId> {
        self.sprites.keys().copied().collect()
    }

    /// Iterate the drawn sprites, in registry-internal order.
    pub fn drawn(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.values()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// The visible cell at `(x, y)`: the highest-z opaque sprite cell, or
    /// `None` when only background is there.
    pub fn top_cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        let mut best: Option<(i32, Cell)> = None;
        for sprite in self.sprites.values() {
            let Some(ch) = sprite.cell_at_abs(x, y) else {
                continue;
            };
            if best.map_or(true, |(z, _)| sprite.z >= z) {
                let style = sprite.style_at_abs(x, y).unwrap_or_default();
                best = Some((sprite.z, Cell { ch, style }));
            }
        }
        best.map(|(_, cell)| cell)
    }

    /// Repaint a single cell if its composited value differs from what the
    /// canvas currently shows.
    fn repaint_cell(&self, canvas: &mut dyn Canvas, x: i32, y: i32) {
        let desired = self.top_cell_at(x, y).unwrap_or_default();
        if canvas.cell_at(x, y) != Some(desired) {
            canvas.put(x, y, desired);
        }
    }

    /// Repaint every cell of a rectangle through the compositor.
    pub fn repaint_rect(&self, canvas: &mut dyn Canvas, x: i32, y: i32, w: u16, h: u16) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                self.repaint_cell(canvas, x + dx, y + dy);
            }
        }
    }
}
