use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfx::core::{is_colliding, Sprite, SpriteRegistry};
use gridfx::engine::{step, PhysicsConfig};
use gridfx::term::FrameBuffer;
use gridfx::types::{CellStyle, Vec2};

fn sprite(w: u16, h: u16) -> Sprite {
    Sprite::filled(w, h, '#', CellStyle::default(), 0).unwrap()
}

fn bench_is_colliding(c: &mut Criterion) {
    let mut a = sprite(8, 8);
    a.x = 4;
    a.y = 4;
    let mut b = sprite(8, 8);
    b.x = 10;
    b.y = 10;

    c.bench_function("is_colliding_8x8_overlap", |bench| {
        bench.iter(|| is_colliding(black_box(&a), black_box(&b)))
    });
}

fn bench_move_by(c: &mut Criterion) {
    let mut registry = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(120, 40);
    let id = registry.draw(&mut fb, 10, 10, sprite(6, 4));

    c.bench_function("registry_move_by_one_cell", |bench| {
        let mut dx = 1;
        bench.iter(|| {
            registry.move_by(&mut fb, id, dx, 0);
            // Bounce between two columns so every repaint has real work.
            dx = -dx;
        })
    });
}

fn bench_physics_step(c: &mut Criterion) {
    let mut registry = SpriteRegistry::new();
    let mut fb = FrameBuffer::new(120, 40);
    let config = PhysicsConfig {
        tick_speed: 10,
        friction: 0.5,
        ground_y: 39,
        gravity: 9.8,
        motion_debug: false,
    };

    for i in 0..16 {
        let id = registry.draw(&mut fb, 2 + i * 7, 4 + (i % 5) * 6, sprite(4, 3));
        if let Some(s) = registry.get_mut(id) {
            s.velocity = Vec2::new(if i % 2 == 0 { 3.0 } else { -3.0 }, 0.0);
        }
    }

    c.bench_function("physics_step_16_sprites", |bench| {
        let mut tick = 0;
        bench.iter(|| {
            step(&mut registry, &mut fb, &config, black_box(tick), 0.1);
            tick += 1;
        })
    });
}

criterion_group!(benches, bench_is_colliding, bench_move_by, bench_physics_step);
criterion_main!(benches);
