//! Pure cell-sequence generators for the animated primitives.
//!
//! Every function returns the ordered list of cells a shape visits, so the
//! animator can walk them forward or backward and tests can check geometry
//! without sleeping. Curve outlines use incremental decision variables; the
//! ellipse outline uses the explicit sqrt boundary formula. Degenerate
//! inputs yield an empty sequence.

use std::collections::HashSet;

/// Bresenham line from `(x1, y1)` to `(x2, y2)`, both endpoints included.
pub fn line_cells(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    if x1 < 1 || y1 < 1 || x2 < 1 || y2 < 1 {
        return Vec::new();
    }
    let mut cells = Vec::new();
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);
    loop {
        cells.push((x, y));
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

/// The four sides of a rectangle outline, clockwise from the top-left
/// corner, as `(start, end)` line endpoints.
pub fn rect_sides(x: i32, y: i32, w: u16, h: u16) -> Vec<((i32, i32), (i32, i32))> {
    if x < 1 || y < 1 || w == 0 || h == 0 {
        return Vec::new();
    }
    let x2 = x + w as i32 - 1;
    let y2 = y + h as i32 - 1;
    vec![
        ((x, y), (x2, y)),
        ((x2, y), (x2, y2)),
        ((x2, y2), (x, y2)),
        ((x, y2), (x, y)),
    ]
}

/// Every cell of a filled rectangle, row-major.
pub fn fill_rect_cells(x: i32, y: i32, w: u16, h: u16) -> Vec<(i32, i32)> {
    if x < 1 || y < 1 || w == 0 || h == 0 {
        return Vec::new();
    }
    let mut cells = Vec::with_capacity(w as usize * h as usize);
    for dy in 0..h as i32 {
        for dx in 0..w as i32 {
            cells.push((x + dx, y + dy));
        }
    }
    cells
}

/// Midpoint circle outline around `(cx, cy)`.
///
/// The hot path is purely incremental; no trigonometric calls. Octant
/// symmetry produces the cells, deduplicated at octant seams.
pub fn circle_cells(cx: i32, cy: i32, r: i32) -> Vec<(i32, i32)> {
    if cx < 1 || cy < 1 || r <= 0 {
        return Vec::new();
    }
    let mut cells = Vec::new();
    let mut seen = HashSet::new();
    let mut push = |x: i32, y: i32| {
        if seen.insert((x, y)) {
            cells.push((x, y));
        }
    };

    let mut x = r;
    let mut y = 0;
    let mut d = 1 - r;
    while x >= y {
        push(cx + x, cy + y);
        push(cx + y, cy + x);
        push(cx - y, cy + x);
        push(cx - x, cy + y);
        push(cx - x, cy - y);
        push(cx - y, cy - x);
        push(cx + y, cy - x);
        push(cx + x, cy - y);
        y += 1;
        if d <= 0 {
            d += 2 * y + 1;
        } else {
            x -= 1;
            d += 2 * (y - x) + 1;
        }
    }
    cells
}

/// Every cell inside (or on) the circle `x² + y² ≤ r²`.
pub fn fill_circle_cells(cx: i32, cy: i32, r: i32) -> Vec<(i32, i32)> {
    if cx < 1 || cy < 1 || r <= 0 {
        return Vec::new();
    }
    let mut cells = Vec::new();
    let r2 = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                cells.push((cx + dx, cy + dy));
            }
        }
    }
    cells
}

/// Ellipse outline with semi-axes `a` (horizontal) and `b` (vertical).
///
/// Boundary points come from the explicit formulas `y = b·√(1 − x²/a²)` and
/// `x = a·√(1 − y²/b²)`; sampling both directions keeps steep arcs gap-free.
pub fn ellipse_cells(cx: i32, cy: i32, a: i32, b: i32) -> Vec<(i32, i32)> {
    if cx < 1 || cy < 1 || a <= 0 || b <= 0 {
        return Vec::new();
    }
    let mut cells = Vec::new();
    let mut seen = HashSet::new();
    let mut push = |x: i32, y: i32| {
        if seen.insert((x, y)) {
            cells.push((x, y));
        }
    };

    for dx in 0..=a {
        let t = 1.0 - (dx * dx) as f64 / (a * a) as f64;
        let dy = (b as f64 * t.sqrt()).round() as i32;
        push(cx + dx, cy + dy);
        push(cx - dx, cy + dy);
        push(cx + dx, cy - dy);
        push(cx - dx, cy - dy);
    }
    for dy in 0..=b {
        let t = 1.0 - (dy * dy) as f64 / (b * b) as f64;
        let dx = (a as f64 * t.sqrt()).round() as i32;
        push(cx + dx, cy + dy);
        push(cx - dx, cy + dy);
        push(cx + dx, cy - dy);
        push(cx - dx, cy - dy);
    }
    cells
}

/// Every cell satisfying `x²/a² + y²/b² ≤ 1`.
pub fn fill_ellipse_cells(cx: i32, cy: i32, a: i32, b: i32) -> Vec<(i32, i32)> {
    if cx < 1 || cy < 1 || a <= 0 || b <= 0 {
        return Vec::new();
    }
    let mut cells = Vec::new();
    let (a2, b2) = ((a * a) as f64, (b * b) as f64);
    for dy in -b..=b {
        for dx in -a..=a {
            if (dx * dx) as f64 / a2 + (dy * dy) as f64 / b2 <= 1.0 {
                cells.push((cx + dx, cy + dy));
            }
        }
    }
    cells
}
