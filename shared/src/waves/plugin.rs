//! Bevy plugin driving the ocean once per frame.

use bevy::prelude::*;
use bevy_log::info;

use super::{sync_pool, FrameUniforms, OceanConfig, WavePool};
use crate::buoyancy::{float_ship, PoseTarget, ShipPose};
use crate::constants::MAX_WAVES;
use crate::sets::OceanSet;
use crate::sink::UniformTable;

/// Plugin that adds the wave field and the floating ship.
///
/// This plugin:
/// - Allocates the configured waves into the pool at startup
/// - Accumulates elapsed time
/// - Floats the ship on the superposed field
/// - Mirrors wave parameters and frame globals to the [`UniformTable`]
///
/// Everything runs in [`OceanSet::Simulate`]; readers of the pose or the
/// uniforms belong in [`OceanSet::Render`].
pub struct OceanPlugin;

impl Plugin for OceanPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<UniformTable>() {
            app.insert_resource(UniformTable::water_surface(MAX_WAVES));
        }

        app.init_resource::<OceanConfig>()
            .init_resource::<WavePool>()
            .init_resource::<FrameUniforms>()
            .init_resource::<OceanClock>()
            .init_resource::<ShipPose>()
            .init_resource::<ShipTarget>()
            .configure_sets(Update, OceanSet::Simulate.before(OceanSet::Render))
            .add_systems(Startup, allocate_waves)
            .add_systems(
                Update,
                (advance_clock, update_ship_pose, sync_wave_uniforms)
                    .chain()
                    .in_set(OceanSet::Simulate),
            );
    }
}

/// Seconds of simulated time, accumulated from frame deltas. Never reset.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct OceanClock {
    pub elapsed: f32,
}

/// Unfiltered pose from the latest frame.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ShipTarget(pub PoseTarget);

fn allocate_waves(
    config: Res<OceanConfig>,
    mut pool: ResMut<WavePool>,
    mut sink: ResMut<UniformTable>,
    mut frame: ResMut<FrameUniforms>,
) {
    *frame = FrameUniforms::resolve(sink.as_mut());
    frame.write_ambient(sink.as_mut(), config.ambient);

    for params in &config.waves {
        pool.allocate(params, sink.as_mut());
    }

    info!(
        "Ocean ready with {} of {} requested waves",
        pool.len(),
        config.waves.len()
    );
}

fn advance_clock(time: Res<Time>, mut clock: ResMut<OceanClock>) {
    clock.elapsed += time.delta_secs();
}

fn update_ship_pose(
    time: Res<Time>,
    clock: Res<OceanClock>,
    config: Res<OceanConfig>,
    pool: Res<WavePool>,
    mut pose: ResMut<ShipPose>,
    mut target: ResMut<ShipTarget>,
) {
    target.0 = float_ship(
        &mut pose,
        clock.elapsed,
        time.delta_secs(),
        pool.generators(),
        &config.ship,
        &config.smoothing,
    );
}

fn sync_wave_uniforms(
    clock: Res<OceanClock>,
    config: Res<OceanConfig>,
    pool: Res<WavePool>,
    frame: Res<FrameUniforms>,
    mut sink: ResMut<UniformTable>,
) {
    frame.write(sink.as_mut(), clock.elapsed, config.view_position);
    sync_pool(&pool, sink.as_mut());
}
