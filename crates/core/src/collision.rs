//! Sprite-sprite collision detection.
//!
//! A cheap axis-aligned bounding-box test rejects most pairs; on bbox
//! overlap, the intersecting sub-rectangle is scanned cell by cell for a
//! coordinate where both sprites are opaque. Linear in sprite count and
//! overlap area, which is fine at terminal scale.

use gridfx_types::SpriteId;

use crate::registry::SpriteRegistry;
use crate::sprite::Sprite;

/// True when `a` and `b` share at least one opaque cell at the same absolute
/// coordinate. Symmetric.
pub fn is_colliding(a: &Sprite, b: &Sprite) -> bool {
    let (ax, ay, aw, ah) = a.bounds();
    let (bx, by, bw, bh) = b.bounds();

    // Bounding-box pre-check.
    if ax >= bx + bw as i32 || bx >= ax + aw as i32 || ay >= by + bh as i32 || by >= ay + ah as i32
    {
        return false;
    }

    let x0 = ax.max(bx);
    let y0 = ay.max(by);
    let x1 = (ax + aw as i32).min(bx + bw as i32);
    let y1 = (ay + ah as i32).min(by + bh as i32);

    for y in y0..y1 {
        for x in x0..x1 {
            if a.cell_at_abs(x, y).is_some() && b.cell_at_abs(x, y).is_some() {
                return true;
            }
        }
    }
    false
}

/// Every drawn sprite currently colliding with `id`.
///
/// Empty when `id` is not drawn.
pub fn colliding_with(registry: &SpriteRegistry, id: SpriteId) -> Vec<SpriteId> {
    let Some(target) = registry.get(id) else {
        return Vec::new();
    };
    registry
        .drawn()
        .filter(|other| other.id() != id && is_colliding(target, other))
        .map(|other| other.id())
        .collect()
}
