pub mod animator;
pub mod chain;
pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod palettes;
pub mod scene;
pub mod share;
pub mod spring;
pub mod state;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static FLOOR_WGSL: &str = include_str!("../shaders/floor.wgsl");

pub use animator::*;
pub use chain::*;
pub use config::*;
pub use constants::*;
pub use error::WheelError;
pub use gesture::*;
pub use layout::*;
pub use palettes::*;
pub use scene::*;
pub use share::*;
pub use spring::*;
pub use state::*;
