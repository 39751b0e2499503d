pub mod color;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod particles;
pub mod paths;
pub mod render;
pub mod sampler;
pub mod scheduler;
pub mod surface;

pub use color::*;
pub use config::*;
pub use engine::*;
pub use error::{Result, TrailError};
pub use particles::*;
pub use paths::*;
pub use sampler::*;
pub use scheduler::*;
pub use surface::*;
