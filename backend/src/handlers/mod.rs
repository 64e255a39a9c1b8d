//! HTTP handlers for the Crop Rotation Hub API

mod health;
mod recommendation;
mod rotation;
mod weather;

pub use health::*;
pub use recommendation::*;
pub use rotation::*;
pub use weather::*;
