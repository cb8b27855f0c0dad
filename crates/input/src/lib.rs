//! Event dispatch and terminal input polling.

mod bus;
pub mod map;
mod poll;

pub use bus::EventBus;
pub use poll::EventLoop;
