//! Sprite compositing core: the drawing-surface contract, sprites, the
//! registry that owns them, and collision detection.

mod canvas;
mod collision;
mod registry;
mod sprite;
mod stage;

pub use canvas::Canvas;
pub use collision::{colliding_with, is_colliding};
pub use registry::SpriteRegistry;
pub use sprite::{ActiveForce, Sprite};
pub use stage::Stage;
