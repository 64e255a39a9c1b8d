//! Domain models for the Crop Rotation Hub

mod crop;
mod recommendation;
mod rotation;
mod weather;

pub use crop::*;
pub use recommendation::*;
pub use rotation::*;
pub use weather::*;
