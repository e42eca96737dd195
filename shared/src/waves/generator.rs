//! A single periodic wave and its sink bindings.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::sink::{wave_uniform_name, RenderParamSink, UniformHandle, WaveField};

/// Constructor input for a wave generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Constant offset added to the sampled (x, z) before the phase is computed
    pub displacement: Vec2,
    /// Vertical extent
    pub amplitude: f32,
    /// Temporal phase rate
    pub speed: f32,
    /// Spatial phase rate
    pub frequency: f32,
    /// Propagation direction. Must be non-zero.
    pub direction: Vec2,
}

impl WaveParams {
    pub const fn new(
        displacement: Vec2,
        amplitude: f32,
        speed: f32,
        frequency: f32,
        direction: Vec2,
    ) -> Self {
        Self {
            displacement,
            amplitude,
            speed,
            frequency,
            direction,
        }
    }
}

/// Resolved sink locations for one wave slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveUniformHandles {
    pub enabled: UniformHandle,
    pub displacement: UniformHandle,
    pub amplitude: UniformHandle,
    pub speed: UniformHandle,
    pub frequency: UniformHandle,
    pub direction: UniformHandle,
}

impl WaveUniformHandles {
    /// Resolves the six `waves[slot].<field>` names against `sink`.
    pub fn resolve(slot: usize, sink: &mut impl RenderParamSink) -> Self {
        let mut resolve = |field| sink.resolve_handle(&wave_uniform_name(slot, field));
        Self {
            enabled: resolve(WaveField::Enabled),
            displacement: resolve(WaveField::Displacement),
            amplitude: resolve(WaveField::Amplitude),
            speed: resolve(WaveField::Speed),
            frequency: resolve(WaveField::Frequency),
            direction: resolve(WaveField::Direction),
        }
    }
}

/// One wave contributing to the surface.
///
/// The default value is the inert generator handed out when the pool is
/// exhausted: disabled, every field zero, no sink bindings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveGenerator {
    pub enabled: bool,
    pub displacement: Vec2,
    pub amplitude: f32,
    pub speed: f32,
    pub frequency: f32,
    /// Input direction divided by its squared length
    pub direction: Vec2,
    pub handles: WaveUniformHandles,
}

impl WaveGenerator {
    /// Builds an enabled generator bound to `handles`.
    ///
    /// The direction is divided by its squared length, not its length, so a
    /// non-unit input does not come out unit length. A zero direction yields
    /// non-finite components.
    pub fn new(params: &WaveParams, handles: WaveUniformHandles) -> Self {
        Self {
            enabled: true,
            displacement: params.displacement,
            amplitude: params.amplitude,
            speed: params.speed,
            frequency: params.frequency,
            direction: params.direction / params.direction.length_squared(),
            handles,
        }
    }

    pub fn inert() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::UniformTable;

    #[test]
    fn test_direction_divided_by_squared_length() {
        let params = WaveParams::new(Vec2::ZERO, 1.0, 1.0, 1.0, Vec2::new(3.0, 4.0));
        let wave = WaveGenerator::new(&params, WaveUniformHandles::default());
        assert!((wave.direction.x - 3.0 / 25.0).abs() < 1e-6);
        assert!((wave.direction.y - 4.0 / 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_unit_direction_is_unchanged() {
        let params = WaveParams::new(Vec2::ZERO, 1.0, 1.0, 1.0, Vec2::X);
        let wave = WaveGenerator::new(&params, WaveUniformHandles::default());
        assert_eq!(wave.direction, Vec2::X);
    }

    #[test]
    fn test_zero_direction_is_not_finite() {
        let params = WaveParams::new(Vec2::ZERO, 1.0, 1.0, 1.0, Vec2::ZERO);
        let wave = WaveGenerator::new(&params, WaveUniformHandles::default());
        assert!(!wave.direction.is_finite());
    }

    #[test]
    fn test_inert_generator_is_zeroed() {
        let wave = WaveGenerator::inert();
        assert!(!wave.enabled);
        assert_eq!(wave.amplitude, 0.0);
        assert_eq!(wave.direction, Vec2::ZERO);
        assert!(!wave.handles.enabled.is_resolved());
    }

    #[test]
    fn test_handles_resolve_per_slot() {
        let mut table = UniformTable::water_surface(2);
        let first = WaveUniformHandles::resolve(0, &mut table);
        let second = WaveUniformHandles::resolve(1, &mut table);
        assert!(first.direction.is_resolved());
        assert!(second.direction.is_resolved());
        assert_ne!(first.direction, second.direction);
        assert!(!WaveUniformHandles::resolve(2, &mut table)
            .enabled
            .is_resolved());
    }
}
