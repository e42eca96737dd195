//! Wave field shared between CPU sampling and the surface shader.
//!
//! ```text
//! OceanConfig ──allocate──▶ WavePool ──sync──▶ render parameter sink ──▶ shader
//!                              │
//!                              └──superposed_position──▶ buoyancy sampler
//! ```

pub mod config;
pub mod displacement;
pub mod generator;
pub mod plugin;
pub mod pool;
pub mod sync;

pub use config::{OceanConfig, WavePreset};
pub use displacement::{
    advected_position, circular_displacement, superposed_displacement, superposed_position,
};
pub use generator::{WaveGenerator, WaveParams, WaveUniformHandles};
pub use plugin::{OceanClock, OceanPlugin, ShipTarget};
pub use pool::WavePool;
pub use sync::{sync, sync_pool, FrameUniforms};
