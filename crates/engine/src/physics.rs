//! Background physics: force integration, friction, ground collision and
//! collision-event reporting.
//!
//! The tick loop runs on its own thread and is cooperatively stopped: `stop`
//! flips an atomic flag and joins, so the loop has fully quiesced when it
//! returns. All per-tick work happens in the pure [`step`] function, which
//! tests drive directly without spawning anything.
//!
//! Per tick the order is fixed: force integration → friction → position
//! integration → collision detection → repaint.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use gridfx_core::{colliding_with, ActiveForce, Canvas, SpriteRegistry, Stage};
use gridfx_types::{
    Event, EventSink, SpriteId, Vec2, DEFAULT_FRICTION, DEFAULT_GRAVITY, DEFAULT_TICK_SPEED,
};

/// Engine configuration, fixed for the lifetime of a started engine.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsConfig {
    /// Ticks per second; the tick interval is `1000 / tick_speed` ms.
    pub tick_speed: u32,
    /// Ground friction coefficient, ≥ 0.
    pub friction: f64,
    /// Surface row sprites cannot fall below (the floor plane).
    pub ground_y: i32,
    /// Downward acceleration in cells/s².
    pub gravity: f64,
    /// Overlay per-tick motion state onto the canvas.
    pub motion_debug: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            tick_speed: DEFAULT_TICK_SPEED,
            friction: DEFAULT_FRICTION,
            ground_y: 24,
            gravity: DEFAULT_GRAVITY,
            motion_debug: false,
        }
    }
}

impl PhysicsConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis((1000 / self.tick_speed.max(1)).max(1) as u64)
    }
}

/// What one tick did: which sprites moved and which pairs overlap.
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    pub moved: Vec<SpriteId>,
    /// Each overlapping pair exactly once, smaller id first.
    pub collisions: Vec<(SpriteId, SpriteId)>,
}

/// Advance every sprite by one tick of `dt` seconds.
///
/// `tick` is the index of the tick being executed, used for force expiry.
pub fn step(
    registry: &mut SpriteRegistry,
    canvas: &mut dyn Canvas,
    config: &PhysicsConfig,
    tick: u64,
    dt: f64,
) -> StepReport {
    let mut report = StepReport::default();
    let mut moves: Vec<(SpriteId, i32, i32)> = Vec::new();

    for id in registry.ids() {
        let Some(sprite) = registry.get_mut(id) else {
            continue;
        };

        // 1. Force integration and expiry.
        if let Some(force) = sprite.force {
            if tick >= force.expires_at_tick {
                sprite.force = None;
            } else {
                sprite.velocity = sprite.velocity + force.vec.scale(dt / sprite.mass());
            }
        }

        let (x, y, _w, h) = sprite.bounds();
        let resting = y + h as i32 >= config.ground_y;

        // 2. Friction decelerates, never reverses sign; gravity only pulls
        // while airborne. A live motive force overrides ground friction —
        // otherwise a force weaker than μ·m·g could never start motion.
        if resting {
            let vx = sprite.velocity.x;
            if vx != 0.0 && sprite.force.is_none() {
                let decel = config.friction * sprite.mass() * config.gravity * dt;
                sprite.velocity.x = if vx > 0.0 {
                    (vx - decel).max(0.0)
                } else {
                    (vx + decel).min(0.0)
                };
            }
        } else {
            sprite.velocity.y += config.gravity * dt;
        }

        // 3. Position integration, accumulating sub-cell motion.
        let disp = sprite.velocity.scale(dt).add(sprite.residual);
        let (dx, dy) = (disp.x.trunc() as i32, disp.y.trunc() as i32);
        sprite.residual = Vec2::new(disp.x.fract(), disp.y.fract());

        let nx = x + dx;
        let mut ny = y + dy;
        if ny + h as i32 > config.ground_y {
            // Ground collision: clamp and kill downward motion.
            ny = config.ground_y - h as i32;
            if sprite.velocity.y > 0.0 {
                sprite.velocity.y = 0.0;
            }
            sprite.residual.y = 0.0;
        }
        if (nx, ny) != (x, y) {
            moves.push((id, nx, ny));
        }
    }

    // 4 & 5. Collision queries against final positions, diff repaint through
    // the registry.
    for (id, nx, ny) in moves {
        if registry.move_to(canvas, id, nx, ny) {
            report.moved.push(id);
        }
    }

    let mut pairs = BTreeSet::new();
    for &id in &report.moved {
        for other in colliding_with(registry, id) {
            pairs.insert(if id <= other { (id, other) } else { (other, id) });
        }
    }
    report.collisions = pairs.into_iter().collect();

    if config.motion_debug {
        debug_overlay(registry, canvas, tick);
    }

    report
}

// Writes a one-line motion summary per sprite starting at the top-left.
fn debug_overlay(registry: &SpriteRegistry, canvas: &mut dyn Canvas, tick: u64) {
    let mut ids = registry.ids();
    ids.sort();
    let mut row = 1;
    let header = format!("tick {tick} sprites {}", ids.len());
    write_row(canvas, row, &header);
    for id in ids {
        let Some(s) = registry.get(id) else { continue };
        row += 1;
        let line = format!(
            "#{} pos=({},{}) vel=({:.2},{:.2})",
            id.0, s.x, s.y, s.velocity.x, s.velocity.y
        );
        write_row(canvas, row, &line);
    }
}

fn write_row(canvas: &mut dyn Canvas, row: i32, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        canvas.set_char(1 + i as i32, row, ch);
    }
}

/// The background tick loop. `Stopped → Running → Stopped`.
pub struct PhysicsEngine<C: Canvas + Send + 'static> {
    stage: Arc<Stage>,
    canvas: Arc<Mutex<C>>,
    sink: Arc<dyn EventSink>,
    config: PhysicsConfig,
    running: Arc<AtomicBool>,
    tick: Arc<AtomicU64>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl<C: Canvas + Send + 'static> PhysicsEngine<C> {
    pub fn new(
        stage: Arc<Stage>,
        canvas: Arc<Mutex<C>>,
        sink: Arc<dyn EventSink>,
        config: PhysicsConfig,
    ) -> Self {
        Self {
            stage,
            canvas,
            sink,
            config,
            running: Arc::new(AtomicBool::new(false)),
            tick: Arc::new(AtomicU64::new(0)),
            handle: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Index of the next tick to execute.
    pub fn current_tick(&self) -> u64 {
        self.tick.load(Ordering::SeqCst)
    }

    /// Spawn the tick loop. Returns `false` (no-op) when already running.
    pub fn start(&self) -> bool {
        if self.running.swap(true, Ordering::SeqCst) {
            return false;
        }

        let stage = Arc::clone(&self.stage);
        let canvas = Arc::clone(&self.canvas);
        let sink = Arc::clone(&self.sink);
        let running = Arc::clone(&self.running);
        let tick = Arc::clone(&self.tick);
        let config = self.config;
        let interval = config.interval();
        let dt = interval.as_secs_f64();

        let handle = thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                let started = Instant::now();
                let t = tick.fetch_add(1, Ordering::SeqCst);

                // Lock order: registry, then canvas.
                let report = stage.with(|registry| {
                    let mut fb = canvas.lock().unwrap_or_else(PoisonError::into_inner);
                    step(registry, &mut *fb, &config, t, dt)
                });

                // Dispatch with no locks held; listeners may re-enter the
                // stage or the engine.
                for (a, b) in report.collisions {
                    sink.dispatch(&Event::collision(a, b));
                }

                if let Some(rest) = interval.checked_sub(started.elapsed()) {
                    thread::sleep(rest);
                }
            }
        });

        let mut slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(handle);
        true
    }

    /// Request a cooperative stop and join the loop thread.
    ///
    /// Returns `false` (no-op) when already stopped. On `true`, the loop has
    /// fully quiesced. Must not be called from inside an event listener
    /// running on the tick thread.
    pub fn stop(&self) -> bool {
        if !self.running.swap(false, Ordering::SeqCst) {
            return false;
        }
        let handle = {
            let mut slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
            slot.take()
        };
        if let Some(handle) = handle {
            let _ = handle.join();
        }
        true
    }

    /// Apply `force` to a drawn sprite for `duration_ms`, overwriting any
    /// force already active (forces do not stack across calls).
    ///
    /// Returns `false` for an unknown id.
    pub fn add_force_for(&self, id: SpriteId, force: Vec2, duration_ms: u64) -> bool {
        let interval_ms = self.config.interval().as_millis().max(1) as u64;
        let ticks = (duration_ms + interval_ms - 1) / interval_ms;
        let expires_at_tick = self.current_tick() + ticks.max(1);
        self.stage.with(|registry| match registry.get_mut(id) {
            Some(sprite) => {
                sprite.force = Some(ActiveForce {
                    vec: force,
                    expires_at_tick,
                });
                true
            }
            None => false,
        })
    }
}

impl<C: Canvas + Send + 'static> Drop for PhysicsEngine<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
