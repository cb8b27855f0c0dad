//! Sprite registry tests: ownership, z-order compositing and diff repaint.

use gridfx::core::{Canvas, Sprite, SpriteRegistry};
use gridfx::term::FrameBuffer;
use gridfx::types::{CellStyle, SpriteId};

fn opaque(w: u16, h: u16, ch: char, z: i32) -> Sprite {
    Sprite::filled(w, h, ch, CellStyle::default(), z).unwrap()
}

#[test]
fn test_draw_assigns_fresh_positive_ids() {
    let mut reg = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(20, 10);

    let a = reg.draw(&mut fb, 1, 1, opaque(2, 2, 'a', 0));
    let b = reg.draw(&mut fb, 5, 1, opaque(2, 2, 'b', 0));
    assert!(a.is_drawn());
    assert!(b.is_drawn());
    assert_ne!(a, b);
    assert_eq!(reg.len(), 2);
}

#[test]
fn test_draw_rejects_invalid_coordinates() {
    let mut reg = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(20, 10);
    let id = reg.draw(&mut fb, 0, 1, opaque(2, 2, 'x', 0));
    assert_eq!(id, SpriteId::UNDRAWN);
    assert!(reg.is_empty());
}

#[test]
fn test_draw_paints_opaque_cells() {
    let mut reg = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(20, 10);
    reg.draw(&mut fb, 3, 2, opaque(2, 2, '#', 0));

    for (x, y) in [(3, 2), (4, 2), (3, 3), (4, 3)] {
        assert_eq!(fb.cell_at(x, y).unwrap().ch, '#');
    }
    assert_eq!(fb.cell_at(5, 2).unwrap().ch, ' ');
}

#[test]
fn test_move_by_restores_vacated_cells_over_background() {
    let mut reg = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(20, 10);
    let id = reg.draw(&mut fb, 3, 3, opaque(2, 2, '#', 0));

    assert!(reg.move_by(&mut fb, id, 2, 0));

    // Vacated columns show background again.
    assert_eq!(fb.cell_at(3, 3).unwrap().ch, ' ');
    assert_eq!(fb.cell_at(3, 4).unwrap().ch, ' ');
    assert_eq!(fb.cell_at(4, 3).unwrap().ch, ' ');
    // New footprint painted.
    for (x, y) in [(5, 3), (6, 3), (5, 4), (6, 4)] {
        assert_eq!(fb.cell_at(x, y).unwrap().ch, '#');
    }
    // No stray copies outside old ∪ new footprints.
    for y in 1..=10 {
        for x in 1..=20 {
            let inside = (5..=6).contains(&x) && (3..=4).contains(&y);
            let ch = fb.cell_at(x, y).unwrap().ch;
            assert_eq!(ch == '#', inside, "cell ({x},{y})");
        }
    }
}

#[test]
fn test_move_by_reveals_lower_sprite() {
    let mut reg = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(20, 10);
    reg.draw(&mut fb, 2, 2, opaque(5, 5, '.', 0));
    let top = reg.draw(&mut fb, 3, 3, opaque(2, 2, '#', 1));

    assert_eq!(fb.cell_at(3, 3).unwrap().ch, '#');
    assert!(reg.move_by(&mut fb, top, 2, 2));

    // The lower sprite shows through the vacated cells.
    assert_eq!(fb.cell_at(3, 3).unwrap().ch, '.');
    assert_eq!(fb.cell_at(4, 4).unwrap().ch, '.');
    assert_eq!(fb.cell_at(5, 5).unwrap().ch, '#');
}

#[test]
fn test_higher_z_wins_per_cell() {
    let mut reg = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(20, 10);
    reg.draw(&mut fb, 2, 2, opaque(3, 3, 'l', 0));
    reg.draw(&mut fb, 3, 3, opaque(3, 3, 'h', 5));

    assert_eq!(fb.cell_at(2, 2).unwrap().ch, 'l');
    assert_eq!(fb.cell_at(3, 3).unwrap().ch, 'h');
    assert_eq!(fb.cell_at(4, 4).unwrap().ch, 'h');
}

#[test]
fn test_transparent_cells_show_what_is_underneath() {
    let mut reg = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(20, 10);
    reg.draw(&mut fb, 2, 2, opaque(3, 3, 'l', 0));

    // A cross shape: corners transparent.
    let cells = vec![
        None,
        Some('+'),
        None,
        Some('+'),
        Some('+'),
        Some('+'),
        None,
        Some('+'),
        None,
    ];
    let cross = Sprite::new(3, 3, cells, vec![], 1).unwrap();
    reg.draw(&mut fb, 2, 2, cross);

    assert_eq!(fb.cell_at(2, 2).unwrap().ch, 'l'); // transparent corner
    assert_eq!(fb.cell_at(3, 2).unwrap().ch, '+');
    assert_eq!(fb.cell_at(3, 3).unwrap().ch, '+');
}

#[test]
fn test_remove_restores_background_and_invalidates_id() {
    let mut reg = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(20, 10);
    let id = reg.draw(&mut fb, 3, 3, opaque(2, 2, '#', 0));

    let sprite = reg.remove(&mut fb, id).unwrap();
    assert_eq!(sprite.id(), SpriteId::UNDRAWN);
    assert!(reg.get(id).is_none());
    assert!(!reg.move_to(&mut fb, id, 5, 5));
    assert!(fb.cells().iter().all(|c| c.ch == ' '));
}

#[test]
fn test_removed_id_is_never_reused() {
    let mut reg = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(20, 10);
    let a = reg.draw(&mut fb, 1, 1, opaque(1, 1, 'a', 0));
    reg.remove(&mut fb, a);
    let b = reg.draw(&mut fb, 1, 1, opaque(1, 1, 'b', 0));
    assert_ne!(a, b);
}

#[test]
fn test_move_to_same_position_is_a_no_op() {
    let mut reg = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(20, 10);
    let id = reg.draw(&mut fb, 3, 3, opaque(2, 2, '#', 0));
    assert!(reg.move_to(&mut fb, id, 3, 3));
    assert_eq!(fb.cell_at(3, 3).unwrap().ch, '#');
}
