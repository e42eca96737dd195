//! Circular wave displacement.
//!
//! These functions match the vertex stage of the water surface shader, which
//! receives the same parameters through [`super::sync`]. Each wave moves a
//! surface point around a circle in the vertical plane aligned with its
//! direction, so the surface both bobs and surges.
//!
//! ## Usage
//!
//! ```rust
//! use bevy::math::{Vec2, Vec3};
//! use shared::sink::UniformTable;
//! use shared::waves::{superposed_position, WaveParams, WavePool};
//!
//! let mut sink = UniformTable::water_surface(6);
//! let mut pool = WavePool::new();
//! pool.allocate(&WaveParams::new(Vec2::ZERO, 1.0, 1.0, 1.0, Vec2::X), &mut sink);
//! let surface = superposed_position(Vec3::ZERO, 0.0, pool.generators());
//! assert!((surface - Vec3::X).length() < 1e-6);
//! ```

use bevy::math::Vec3;

use super::WaveGenerator;

/// Displacement caused by `wave` at surface coordinate (`x`, `z`) and time `t`.
///
/// # Returns
/// `(cos(phase) * direction.x, sin(phase), cos(phase) * direction.y) * amplitude`
#[inline]
pub fn circular_displacement(x: f32, z: f32, t: f32, wave: &WaveGenerator) -> Vec3 {
    let phase = ((wave.displacement.x + x) * wave.direction.x
        + (wave.displacement.y + z) * wave.direction.y)
        * wave.frequency
        + t * wave.speed;
    let (sin_phase, cos_phase) = phase.sin_cos();

    let vertical = wave.amplitude * sin_phase;
    let planar = wave.amplitude * cos_phase;

    Vec3::new(planar * wave.direction.x, vertical, planar * wave.direction.y)
}

/// Where the surface point resting at `pos` sits under a single wave.
pub fn advected_position(pos: Vec3, t: f32, wave: &WaveGenerator) -> Vec3 {
    pos + circular_displacement(pos.x, pos.z, t, wave)
}

/// Summed displacement of every wave in `waves` at (`x`, `z`).
///
/// Disabled waves are not skipped; their zeroed fields contribute nothing.
pub fn superposed_displacement(x: f32, z: f32, t: f32, waves: &[WaveGenerator]) -> Vec3 {
    waves
        .iter()
        .fold(Vec3::ZERO, |acc, wave| acc + circular_displacement(x, z, t, wave))
}

/// Where the surface point resting at `pos` sits under all of `waves`.
pub fn superposed_position(pos: Vec3, t: f32, waves: &[WaveGenerator]) -> Vec3 {
    pos + superposed_displacement(pos.x, pos.z, t, waves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waves::{WaveParams, WaveUniformHandles};
    use bevy::math::Vec2;
    use std::f32::consts::{FRAC_PI_2, TAU};

    const EPSILON: f32 = 1e-5;

    fn wave(
        displacement: Vec2,
        amplitude: f32,
        speed: f32,
        frequency: f32,
        dir: Vec2,
    ) -> WaveGenerator {
        WaveGenerator::new(
            &WaveParams::new(displacement, amplitude, speed, frequency, dir),
            WaveUniformHandles::default(),
        )
    }

    fn unit_wave() -> WaveGenerator {
        wave(Vec2::ZERO, 1.0, 1.0, 1.0, Vec2::X)
    }

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPSILON, "{a} != {b}");
    }

    #[test]
    fn test_displacement_at_origin() {
        assert_close(circular_displacement(0.0, 0.0, 0.0, &unit_wave()), Vec3::X);
    }

    #[test]
    fn test_displacement_at_quarter_period() {
        let d = circular_displacement(0.0, 0.0, FRAC_PI_2, &unit_wave());
        assert_close(d, Vec3::Y);
    }

    #[test]
    fn test_zero_amplitude_is_flat() {
        let flat = wave(Vec2::new(3.0, -1.0), 0.0, 2.0, 0.7, Vec2::new(0.2, 0.8));
        for (x, z, t) in [(0.0, 0.0, 0.0), (12.5, -3.0, 7.1), (-40.0, 9.0, 100.0)] {
            assert_eq!(circular_displacement(x, z, t, &flat), Vec3::ZERO);
        }
    }

    #[test]
    fn test_periodic_in_time() {
        let w = wave(Vec2::new(0.3, 0.1), 0.4, 1.9, 0.4, Vec2::new(1.0, 0.3));
        let period = TAU / w.speed;
        for (x, z, t) in [(0.0, 0.0, 0.0), (1.5, -2.0, 0.3), (-4.0, 6.0, 2.0)] {
            let a = circular_displacement(x, z, t, &w);
            let b = circular_displacement(x, z, t + period, &w);
            assert!((a - b).length() < 1e-4, "{a} != {b}");
        }
    }

    #[test]
    fn test_displacement_offset_shifts_pattern() {
        let shifted = wave(Vec2::new(2.0, 0.0), 1.0, 1.0, 1.0, Vec2::X);
        let plain = unit_wave();
        assert_close(
            circular_displacement(0.0, 0.0, 0.0, &shifted),
            circular_displacement(2.0, 0.0, 0.0, &plain),
        );
    }

    #[test]
    fn test_advected_position_adds_displacement() {
        let pos = Vec3::new(0.0, -0.2, 0.0);
        assert_close(
            advected_position(pos, 0.0, &unit_wave()),
            Vec3::new(1.0, -0.2, 0.0),
        );
    }

    #[test]
    fn test_superposed_empty_is_identity() {
        let pos = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(superposed_position(pos, 4.2, &[]), pos);
    }

    #[test]
    fn test_superposition_is_linear() {
        let a = wave(Vec2::ZERO, 0.4, 1.9, 0.4, Vec2::new(1.0, 0.0));
        let b = wave(Vec2::ZERO, 0.2, 1.2, 0.8, Vec2::new(1.0, 0.3));
        let pos = Vec3::new(0.7, -0.2, -1.3);
        let t = 3.3;

        let expected = pos
            + circular_displacement(pos.x, pos.z, t, &a)
            + circular_displacement(pos.x, pos.z, t, &b);
        assert_close(superposed_position(pos, t, &[a, b]), expected);
    }

    #[test]
    fn test_disabled_waves_contribute_nothing() {
        let pos = Vec3::new(0.5, 0.0, 0.5);
        let with_inert = [unit_wave(), WaveGenerator::inert(), WaveGenerator::inert()];
        assert_eq!(
            superposed_position(pos, 1.0, &with_inert),
            superposed_position(pos, 1.0, &[unit_wave()])
        );
    }

    #[test]
    fn test_deterministic() {
        let waves = [
            unit_wave(),
            wave(Vec2::ZERO, 0.3, 1.23, 1.2, Vec2::new(1.0, -0.5)),
        ];
        let pos = Vec3::new(0.2, -0.2, 0.0);
        let first = superposed_position(pos, 12.34, &waves);
        let second = superposed_position(pos, 12.34, &waves);
        assert_eq!(first.to_array(), second.to_array());
    }
}
