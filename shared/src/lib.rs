//! Shared types and models for the Crop Rotation Hub
//!
//! This crate contains the crop catalog, the rotation calculator and the farm
//! visualizer's animation layer. It is used by the backend and, through WASM,
//! by the page's script.

pub mod error;
pub mod models;
pub mod scene;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
