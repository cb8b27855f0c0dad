//! gridfx demo: sprites under gravity, friction and key-driven forces.
//!
//! Arrow keys push the crate sprite around, `q` (or Esc / Ctrl-C) quits.
//! The main thread blocks on a quit channel with a frame timeout instead of
//! spinning; the physics loop and the input poller run on their own threads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, MutexGuard, PoisonError};
use std::time::Duration;

use anyhow::{anyhow, Result};

use gridfx::core::{Canvas, Sprite, Stage};
use gridfx::engine::{animate, PhysicsConfig, PhysicsEngine};
use gridfx::input::{map, EventBus, EventLoop};
use gridfx::term::{shared_canvas, FrameBuffer, SharedCanvas, TerminalRenderer};
use gridfx::types::{
    CellStyle, EventPayload, EventSink, KeySym, Rgb, Vec2, EVENT_COLLISION, EVENT_KEY,
    EVENT_RESIZE,
};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let canvas = shared_canvas(width, height);
    let stage = Arc::new(Stage::new());
    let bus = Arc::new(EventBus::new());
    let events = EventLoop::new(Arc::clone(&bus));

    animate::text(
        &canvas,
        3,
        1,
        "gridfx - arrows push, q quits",
        Some(CellStyle::with_fg(Rgb::new(120, 200, 255)).bold()),
        Duration::from_millis(300),
    );

    let ground_y = height as i32 - 1;

    let crate_sprite = Sprite::filled(4, 3, '#', CellStyle::with_fg(Rgb::new(240, 200, 80)), 1)
        .ok_or_else(|| anyhow!("bad crate sprite dimensions"))?;
    let player = stage.with(|reg| {
        let mut fb = lock(&canvas);
        reg.draw(&mut *fb, 10, ground_y - 3, crate_sprite)
    });

    let mut ball = Sprite::filled(2, 1, 'o', CellStyle::with_fg(Rgb::new(160, 255, 160)), 2)
        .ok_or_else(|| anyhow!("bad ball sprite dimensions"))?;
    ball.velocity = Vec2::new(6.0, 0.0);
    stage.with(|reg| {
        let mut fb = lock(&canvas);
        reg.draw(&mut *fb, 4, 4, ball)
    });

    let engine = Arc::new(PhysicsEngine::new(
        Arc::clone(&stage),
        Arc::clone(&canvas),
        Arc::clone(&bus) as Arc<dyn EventSink>,
        PhysicsConfig {
            ground_y,
            ..PhysicsConfig::default()
        },
    ));
    engine.start();

    let (quit_tx, quit_rx) = mpsc::channel::<()>();

    {
        let engine = Arc::clone(&engine);
        events.add(EVENT_KEY, move |event| {
            if map::is_quit(event) {
                let _ = quit_tx.send(());
                return 0;
            }
            let push = match event.payload {
                EventPayload::Key {
                    sym: KeySym::Left, ..
                } => Vec2::new(-60.0, 0.0),
                EventPayload::Key {
                    sym: KeySym::Right, ..
                } => Vec2::new(60.0, 0.0),
                EventPayload::Key {
                    sym: KeySym::Up, ..
                } => Vec2::new(0.0, -90.0),
                EventPayload::Key {
                    sym: KeySym::Down, ..
                } => Vec2::new(0.0, 60.0),
                _ => return 1,
            };
            engine.add_force_for(player, push, 200);
            0
        });
    }

    let hits = Arc::new(AtomicUsize::new(0));
    {
        let hits = Arc::clone(&hits);
        events.add(EVENT_COLLISION, move |_| {
            hits.fetch_add(1, Ordering::Relaxed);
            0
        });
    }

    {
        let canvas = Arc::clone(&canvas);
        events.add(EVENT_RESIZE, move |event| {
            if let EventPayload::Resize { width, height } = event.payload {
                lock(&canvas).resize(width, height);
                return 0;
            }
            1
        });
    }

    // Main thread: block on the quit channel, re-render once per frame.
    loop {
        match quit_rx.recv_timeout(FRAME) {
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }

        let snapshot = {
            let mut fb = lock(&canvas);
            let hud = format!("collisions: {}", hits.load(Ordering::Relaxed));
            for (i, ch) in hud.chars().enumerate() {
                fb.set_char(1 + i as i32, 2, ch);
            }
            fb.clone()
        };
        term.present(&snapshot)?;
    }

    engine.stop();
    events.stop();
    Ok(())
}

fn lock(canvas: &SharedCanvas) -> MutexGuard<'_, FrameBuffer> {
    canvas.lock().unwrap_or_else(PoisonError::into_inner)
}
