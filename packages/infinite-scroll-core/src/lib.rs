#![doc = include_str!("../README.md")]

mod action;
mod config;
mod distance;
mod error;
mod geometry;
mod host;
mod retry;
mod scroller;
mod source;
mod throttle;

pub use action::*;
pub use config::*;
pub use distance::*;
pub use error::*;
pub use geometry::*;
pub use host::*;
pub use retry::*;
pub use scroller::*;
pub use source::*;
pub use throttle::*;
