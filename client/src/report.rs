//! Frame budget and pose reporting for the headless run.

use bevy::log::{debug, info};
use bevy::prelude::*;
use shared::buoyancy::ShipPose;
use shared::sink::UniformTable;
use shared::waves::{OceanClock, OceanConfig, ShipTarget};
use shared::TIME_UNIFORM;

/// Counts frames, decides when to report and when to stop.
#[derive(Resource, Debug, Clone)]
pub struct FrameBudget {
    /// Frames to run, 0 for no limit
    pub limit: u32,
    pub report_every: u32,
    pub frames: u32,
}

impl FrameBudget {
    pub fn new(limit: u32, report_every: u32) -> Self {
        Self {
            limit,
            report_every,
            frames: 0,
        }
    }

    pub fn tick(&mut self) {
        self.frames += 1;
    }

    pub fn should_report(&self) -> bool {
        self.report_every > 0 && self.frames % self.report_every == 0
    }

    pub fn is_spent(&self) -> bool {
        self.limit > 0 && self.frames >= self.limit
    }
}

pub fn report_ship_pose(
    mut budget: ResMut<FrameBudget>,
    clock: Res<OceanClock>,
    config: Res<OceanConfig>,
    pose: Res<ShipPose>,
    target: Res<ShipTarget>,
    uniforms: Res<UniformTable>,
) {
    budget.tick();
    if !budget.should_report() {
        return;
    }

    let transform = pose.render_transform(config.ship.rotate_factor, config.ship.model_scale);
    info!(
        "frame {} t={:.2}s ship at {:.3?} front {:.3} side {:.3} (target {:.3} / {:.3})",
        budget.frames,
        clock.elapsed,
        pose.position,
        pose.front_angle,
        pose.side_angle,
        target.0.front_angle,
        target.0.side_angle,
    );
    debug!(
        "model transform {:?}, {} = {:?}, {} uniform writes",
        transform,
        TIME_UNIFORM,
        uniforms.value(TIME_UNIFORM),
        uniforms.writes()
    );
}

pub fn exit_when_budget_spent(budget: Res<FrameBudget>, mut exit: EventWriter<AppExit>) {
    if budget.is_spent() {
        info!("Ran {} frames, exiting", budget.frames);
        exit.write(AppExit::Success);
    }
}
