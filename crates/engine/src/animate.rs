//! Time-sliced animated drawing.
//!
//! Every primitive takes a total duration and divides it evenly across the
//! cells it draws: one cell, then a sleep, until the shape is complete. The
//! calling thread blocks for the whole duration — run animations from their
//! own threads to overlap them. The canvas lock is taken per cell, never
//! across a sleep.
//!
//! Degenerate inputs (coordinates below 1, empty shapes, zero duration,
//! empty text) are silent no-ops.

use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use gridfx_core::Canvas;
use gridfx_types::CellStyle;

use crate::geometry;

/// Draw `cells` one per time slice, optionally in reverse order.
fn walk_cells<C: Canvas>(
    canvas: &Mutex<C>,
    cells: &[(i32, i32)],
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
    reverse: bool,
) {
    if cells.is_empty() || duration.is_zero() {
        return;
    }
    let slice = duration / cells.len() as u32;
    let mut order: Vec<(i32, i32)> = cells.to_vec();
    if reverse {
        order.reverse();
    }
    for (x, y) in order {
        {
            let mut guard = canvas.lock().unwrap_or_else(PoisonError::into_inner);
            guard.set_char(x, y, ch);
            if let Some(style) = style {
                guard.set_style(x, y, style);
            }
        }
        thread::sleep(slice);
    }
}

/// Animated Bresenham line.
pub fn line<C: Canvas>(
    canvas: &Mutex<C>,
    from: (i32, i32),
    to: (i32, i32),
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::line_cells(from.0, from.1, to.0, to.1);
    walk_cells(canvas, &cells, ch, style, duration, false);
}

/// Animated line drawn end to start.
pub fn line_rev<C: Canvas>(
    canvas: &Mutex<C>,
    from: (i32, i32),
    to: (i32, i32),
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::line_cells(from.0, from.1, to.0, to.1);
    walk_cells(canvas, &cells, ch, style, duration, true);
}

/// Animated rectangle outline: four sides clockwise, each side getting a
/// quarter of the budget.
pub fn rect<C: Canvas>(
    canvas: &Mutex<C>,
    x: i32,
    y: i32,
    w: u16,
    h: u16,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let sides = geometry::rect_sides(x, y, w, h);
    if sides.is_empty() || duration.is_zero() {
        return;
    }
    let per_side = duration / sides.len() as u32;
    for (from, to) in sides {
        line(canvas, from, to, ch, style, per_side);
    }
}

/// Rectangle outline drawn counter-clockwise from the top-left corner.
pub fn rect_rev<C: Canvas>(
    canvas: &Mutex<C>,
    x: i32,
    y: i32,
    w: u16,
    h: u16,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let mut sides = geometry::rect_sides(x, y, w, h);
    if sides.is_empty() || duration.is_zero() {
        return;
    }
    sides.reverse();
    let per_side = duration / sides.len() as u32;
    for (from, to) in sides {
        line_rev(canvas, from, to, ch, style, per_side);
    }
}

/// Animated filled rectangle, row-major.
pub fn fill_rect<C: Canvas>(
    canvas: &Mutex<C>,
    x: i32,
    y: i32,
    w: u16,
    h: u16,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::fill_rect_cells(x, y, w, h);
    walk_cells(canvas, &cells, ch, style, duration, false);
}

/// Filled rectangle drawn from the last cell backward.
pub fn fill_rect_rev<C: Canvas>(
    canvas: &Mutex<C>,
    x: i32,
    y: i32,
    w: u16,
    h: u16,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::fill_rect_cells(x, y, w, h);
    walk_cells(canvas, &cells, ch, style, duration, true);
}

/// Animated midpoint-circle outline.
pub fn circle<C: Canvas>(
    canvas: &Mutex<C>,
    cx: i32,
    cy: i32,
    r: i32,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::circle_cells(cx, cy, r);
    walk_cells(canvas, &cells, ch, style, duration, false);
}

/// Circle outline drawn in reverse cell order.
pub fn circle_rev<C: Canvas>(
    canvas: &Mutex<C>,
    cx: i32,
    cy: i32,
    r: i32,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::circle_cells(cx, cy, r);
    walk_cells(canvas, &cells, ch, style, duration, true);
}

/// Animated filled circle.
pub fn fill_circle<C: Canvas>(
    canvas: &Mutex<C>,
    cx: i32,
    cy: i32,
    r: i32,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::fill_circle_cells(cx, cy, r);
    walk_cells(canvas, &cells, ch, style, duration, false);
}

/// Filled circle drawn from the last cell backward.
pub fn fill_circle_rev<C: Canvas>(
    canvas: &Mutex<C>,
    cx: i32,
    cy: i32,
    r: i32,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::fill_circle_cells(cx, cy, r);
    walk_cells(canvas, &cells, ch, style, duration, true);
}

/// Animated ellipse outline.
pub fn ellipse<C: Canvas>(
    canvas: &Mutex<C>,
    cx: i32,
    cy: i32,
    a: i32,
    b: i32,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::ellipse_cells(cx, cy, a, b);
    walk_cells(canvas, &cells, ch, style, duration, false);
}

/// Ellipse outline drawn in reverse cell order.
pub fn ellipse_rev<C: Canvas>(
    canvas: &Mutex<C>,
    cx: i32,
    cy: i32,
    a: i32,
    b: i32,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::ellipse_cells(cx, cy, a, b);
    walk_cells(canvas, &cells, ch, style, duration, true);
}

/// Animated filled ellipse.
pub fn fill_ellipse<C: Canvas>(
    canvas: &Mutex<C>,
    cx: i32,
    cy: i32,
    a: i32,
    b: i32,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::fill_ellipse_cells(cx, cy, a, b);
    walk_cells(canvas, &cells, ch, style, duration, false);
}

/// Filled ellipse drawn from the last cell backward.
pub fn fill_ellipse_rev<C: Canvas>(
    canvas: &Mutex<C>,
    cx: i32,
    cy: i32,
    a: i32,
    b: i32,
    ch: char,
    style: Option<CellStyle>,
    duration: Duration,
) {
    let cells = geometry::fill_ellipse_cells(cx, cy, a, b);
    walk_cells(canvas, &cells, ch, style, duration, true);
}

/// Animated text: one character per time slice, left to right.
pub fn text<C: Canvas>(
    canvas: &Mutex<C>,
    x: i32,
    y: i32,
    s: &str,
    style: Option<CellStyle>,
    duration: Duration,
) {
    animate_text(canvas, x, y, s, style, duration, false);
}

/// Animated text revealed right to left.
pub fn text_rev<C: Canvas>(
    canvas: &Mutex<C>,
    x: i32,
    y: i32,
    s: &str,
    style: Option<CellStyle>,
    duration: Duration,
) {
    animate_text(canvas, x, y, s, style, duration, true);
}

fn animate_text<C: Canvas>(
    canvas: &Mutex<C>,
    x: i32,
    y: i32,
    s: &str,
    style: Option<CellStyle>,
    duration: Duration,
    reverse: bool,
) {
    if x < 1 || y < 1 || s.is_empty() || duration.is_zero() {
        return;
    }
    let mut chars: Vec<(i32, char)> = s.chars().enumerate().map(|(i, c)| (x + i as i32, c)).collect();
    if reverse {
        chars.reverse();
    }
    let slice = duration / chars.len() as u32;
    for (cx, ch) in chars {
        {
            let mut guard = canvas.lock().unwrap_or_else(PoisonError::into_inner);
            guard.set_char(cx, y, ch);
            if let Some(style) = style {
                guard.set_style(cx, y, style);
            }
        }
        thread::sleep(slice);
    }
}
