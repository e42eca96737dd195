//! Mirrors wave parameters and frame globals to the render parameter sink.
//!
//! This is the only path by which CPU-side wave state reaches the surface
//! shader, which evaluates the same circular displacement per vertex.

use bevy::math::{Vec3, Vec4};
use bevy_ecs::resource::Resource;

use super::{WaveGenerator, WavePool};
use crate::constants::{AMBIENT_UNIFORM, TIME_UNIFORM, VIEW_POS_UNIFORM};
use crate::sink::{RenderParamSink, UniformHandle, UniformValue};

/// Writes every field of `wave` through its resolved handles.
///
/// Disabled waves are written too; their fields are all zero.
pub fn sync(wave: &WaveGenerator, sink: &mut impl RenderParamSink) {
    let handles = &wave.handles;
    sink.write(handles.enabled, wave.enabled.into());
    sink.write(handles.displacement, wave.displacement.into());
    sink.write(handles.amplitude, wave.amplitude.into());
    sink.write(handles.speed, wave.speed.into());
    sink.write(handles.frequency, wave.frequency.into());
    sink.write(handles.direction, wave.direction.into());
}

/// Syncs every slot of the pool, filled or not.
pub fn sync_pool(pool: &WavePool, sink: &mut impl RenderParamSink) {
    for wave in pool.generators() {
        sync(wave, sink);
    }
}

/// Handles for the globals shared by every wave.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct FrameUniforms {
    pub time: UniformHandle,
    pub view_pos: UniformHandle,
    pub ambient: UniformHandle,
}

impl FrameUniforms {
    pub fn resolve(sink: &mut impl RenderParamSink) -> Self {
        Self {
            time: sink.resolve_handle(TIME_UNIFORM),
            view_pos: sink.resolve_handle(VIEW_POS_UNIFORM),
            ambient: sink.resolve_handle(AMBIENT_UNIFORM),
        }
    }

    /// Per-frame globals.
    pub fn write(&self, sink: &mut impl RenderParamSink, elapsed: f32, view_pos: Vec3) {
        sink.write(self.time, UniformValue::Float(elapsed));
        sink.write(self.view_pos, UniformValue::Vec3(view_pos));
    }

    pub fn write_ambient(&self, sink: &mut impl RenderParamSink, ambient: Vec4) {
        sink.write(self.ambient, UniformValue::Vec4(ambient));
    }
}
