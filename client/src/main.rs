mod report;

use std::path::PathBuf;
use std::time::Duration;

use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use clap::Parser;
use report::{exit_when_budget_spent, report_ship_pose, FrameBudget};
use shared::{
    buoyancy::Smoothing,
    constants::CONFIG_LOAD_ERROR,
    sets::OceanSet,
    waves::{OceanConfig, OceanPlugin, WavePreset},
};

#[derive(Parser, Debug)]
#[command(version, about = "Headless ocean and floating ship simulation", long_about = None)]
struct Args {
    #[arg(short, long, help = "RON ocean config; overrides --preset")]
    config: Option<PathBuf>,

    #[arg(short, long, default_value = "harbor", help = "still, calm, harbor or storm")]
    preset: WavePreset,

    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    #[arg(short, long, default_value_t = 0, help = "Frames to run before exiting, 0 runs forever")]
    frames: u32,

    #[arg(long, default_value_t = 60)]
    report_every: u32,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "Smooth the ship pose over wall-clock time instead of per frame"
    )]
    time_constant: Option<f32>,
}

fn main() {
    let args = Args::parse();

    if !args.fps.is_finite() || args.fps <= 0.0 {
        eprintln!("Error: fps must be positive, got {}", args.fps);
        std::process::exit(1);
    }

    let mut config = match &args.config {
        Some(path) => match OceanConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{} {}: {err}", CONFIG_LOAD_ERROR, path.display());
                std::process::exit(1);
            }
        },
        None => OceanConfig::from_preset(args.preset),
    };

    match time_constant_smoothing(args.time_constant) {
        Ok(Some(smoothing)) => config.smoothing = smoothing,
        Ok(None) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }

    println!(
        "Starting ocean with {} waves at {} fps",
        config.waves.len(),
        args.fps
    );

    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / args.fps,
        ))),
    );
    app.add_plugins(LogPlugin::default());

    app.insert_resource(config)
        .insert_resource(FrameBudget::new(args.frames, args.report_every))
        .add_plugins(OceanPlugin)
        .add_systems(
            Update,
            (report_ship_pose, exit_when_budget_spent)
                .chain()
                .in_set(OceanSet::Render),
        )
        .run();
}

/// Smoothing requested by `--time-constant`, if any.
fn time_constant_smoothing(seconds: Option<f32>) -> Result<Option<Smoothing>, String> {
    let Some(seconds) = seconds else {
        return Ok(None);
    };
    let smoothing = Smoothing::TimeConstant { seconds };
    smoothing.validate()?;
    Ok(Some(smoothing))
}
