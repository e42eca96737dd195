//! Floating body pose from wave samples.
//!
//! The hull is reduced to five points at a fixed draft. Each frame those
//! points are pushed through the wave field, the displaced front/back and
//! left/right pairs give two tilt angles, and the pose eases toward the new
//! target through a first-order low-pass filter.

use bevy::math::{Quat, Vec2, Vec3};
use bevy::transform::components::Transform;
use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::constants::{
    SHIP_BACK_OFFSET, SHIP_DRAFT, SHIP_FRONT_OFFSET, SHIP_LEFT_OFFSET, SHIP_RIGHT_OFFSET,
    SHIP_ROTATE_FACTOR, SHIP_SMOOTHING_FACTOR,
};
use crate::waves::{superposed_position, WaveGenerator};

/// Hull sampling layout, tuned to the ship mesh footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Vertical offset of every sample point (negative = below the surface)
    pub draft: f32,
    /// Horizontal (x, z) offsets in the ship's frame
    pub center: Vec2,
    pub front: Vec2,
    pub back: Vec2,
    pub left: Vec2,
    pub right: Vec2,
    /// Degrees of rendered rotation per radian of tilt
    pub rotate_factor: f32,
    /// Uniform scale of the rendered model
    pub model_scale: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            draft: SHIP_DRAFT,
            center: Vec2::ZERO,
            front: SHIP_FRONT_OFFSET,
            back: SHIP_BACK_OFFSET,
            left: SHIP_LEFT_OFFSET,
            right: SHIP_RIGHT_OFFSET,
            rotate_factor: SHIP_ROTATE_FACTOR,
            model_scale: 0.1,
        }
    }
}

impl ShipConfig {
    fn at_draft(&self, offset: Vec2) -> Vec3 {
        Vec3::new(offset.x, self.draft, offset.y)
    }
}

/// Low-pass filter applied to the pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Smoothing {
    /// `state += (target - state) / factor` once per frame, whatever the frame time.
    PerFrame { factor: f32 },
    /// Exponential decay toward the target with the given time constant.
    /// Converges at the same wall-clock rate at any frame rate.
    TimeConstant { seconds: f32 },
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::PerFrame {
            factor: SHIP_SMOOTHING_FACTOR,
        }
    }
}

impl Smoothing {
    /// Rejects settings under which the filter would diverge or go NaN.
    /// A per-frame factor must be finite and at least 1, a time constant
    /// finite and positive.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            Smoothing::PerFrame { factor } if !factor.is_finite() || factor < 1.0 => Err(
                format!("smoothing factor must be finite and at least 1, got {factor}"),
            ),
            Smoothing::TimeConstant { seconds } if !seconds.is_finite() || seconds <= 0.0 => {
                Err(format!(
                    "smoothing time constant must be finite and positive, got {seconds}"
                ))
            }
            _ => Ok(()),
        }
    }

    /// Scalar filter step over a frame lasting `delta` seconds.
    pub fn step(&self, state: f32, target: f32, delta: f32) -> f32 {
        match *self {
            Smoothing::PerFrame { factor } => state + (target - state) / factor,
            Smoothing::TimeConstant { seconds } => {
                state + (target - state) * decay_gain(delta, seconds)
            }
        }
    }

    /// Vector filter step, componentwise.
    pub fn step_vec3(&self, state: Vec3, target: Vec3, delta: f32) -> Vec3 {
        match *self {
            Smoothing::PerFrame { factor } => state + (target - state) / Vec3::splat(factor),
            Smoothing::TimeConstant { seconds } => {
                state + (target - state) * decay_gain(delta, seconds)
            }
        }
    }
}

fn decay_gain(delta: f32, seconds: f32) -> f32 {
    if seconds <= 0.0 {
        return 1.0;
    }
    1.0 - (-delta / seconds).exp()
}

/// The five displaced hull points for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullSamples {
    pub center: Vec3,
    pub front: Vec3,
    pub back: Vec3,
    pub left: Vec3,
    pub right: Vec3,
}

impl HullSamples {
    pub fn sample(t: f32, waves: &[WaveGenerator], ship: &ShipConfig) -> Self {
        let sample = |offset| superposed_position(ship.at_draft(offset), t, waves);
        Self {
            center: sample(ship.center),
            front: sample(ship.front),
            back: sample(ship.back),
            left: sample(ship.left),
            right: sample(ship.right),
        }
    }
}

/// Unfiltered pose the ship is pulled toward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoseTarget {
    pub position: Vec3,
    pub front_angle: f32,
    pub side_angle: f32,
}

impl From<&HullSamples> for PoseTarget {
    fn from(samples: &HullSamples) -> Self {
        let front = samples.front - samples.back;
        let side = samples.left - samples.right;
        Self {
            position: samples.center,
            front_angle: front.y.atan2(front.x),
            side_angle: side.y.atan2(side.z),
        }
    }
}

/// Filtered floating pose of the ship. Starts at rest at the origin.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ShipPose {
    pub position: Vec3,
    /// Pitch about the z axis, radians
    pub front_angle: f32,
    /// Roll about the x axis, radians
    pub side_angle: f32,
}

impl ShipPose {
    pub fn smooth_toward(&mut self, target: &PoseTarget, smoothing: &Smoothing, delta: f32) {
        self.front_angle = smoothing.step(self.front_angle, target.front_angle, delta);
        self.side_angle = smoothing.step(self.side_angle, target.side_angle, delta);
        self.position = smoothing.step_vec3(self.position, target.position, delta);
    }

    /// Transform for the rendered model.
    ///
    /// The tilt is exaggerated by `rotate_factor` degrees per radian and
    /// applied about the world origin, after the model is placed at the pose
    /// position, so the position is rotated along with the hull.
    pub fn render_transform(&self, rotate_factor: f32, model_scale: f32) -> Transform {
        let rotation = Quat::from_rotation_z((self.front_angle * rotate_factor).to_radians())
            * Quat::from_rotation_x((self.side_angle * rotate_factor).to_radians());
        Transform {
            translation: rotation * self.position,
            rotation,
            scale: Vec3::splat(model_scale),
        }
    }

    pub fn distance_to(&self, target: &PoseTarget) -> f32 {
        let angles = Vec2::new(
            target.front_angle - self.front_angle,
            target.side_angle - self.side_angle,
        );
        ((target.position - self.position).length_squared() + angles.length_squared()).sqrt()
    }
}

/// Samples the hull at time `t` and eases `pose` toward the result.
///
/// Returns the unfiltered target for inspection.
pub fn float_ship(
    pose: &mut ShipPose,
    t: f32,
    delta: f32,
    waves: &[WaveGenerator],
    ship: &ShipConfig,
    smoothing: &Smoothing,
) -> PoseTarget {
    let samples = HullSamples::sample(t, waves, ship);
    let target = PoseTarget::from(&samples);
    pose.smooth_toward(&target, smoothing, delta);
    target
}
