mod utils;

pub mod background;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod frame;
pub mod particle;
pub mod simulator;
pub mod surface;

use wasm_bindgen::prelude::*;

pub use background::{start, start_with_density, ParticleBackground};
pub use color::Color;
pub use config::{Density, FieldConfig, GrabStyle, LinkStyle};
pub use error::FieldError;
pub use field::ParticleField;
pub use frame::{AnimationFrameSource, FrameHandle, FrameSource, ManualFrameSource};
pub use particle::Particle;
pub use simulator::Simulator;
pub use surface::{CanvasSurface, DrawCommand, DrawingSurface, RecordingSurface};

// Smaller allocator for the wasm build, opt in with --features wee_alloc
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
