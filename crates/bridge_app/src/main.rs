//! # bridge_app: demo host
//!
//! Drives both cadences of the script bridge:
//!
//! 1. Load a scene (from `--scene` or the built-in demo scene).
//! 2. Start the audio thread: a sine oscillator session ticked per sample.
//! 3. Run the per-frame script loop on the main thread.
//! 4. Join the audio thread and report what it wrote.

mod audio;
mod demo;
mod frame;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use bridge_scene::Scene;
use bridge_script::{ScriptConfig, ScriptRuntime, find_entity_by_name};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use audio::AudioSettings;
use demo::{CameraFollow, Demo, PlayerController};
use frame::{FrameLoop, FrameLoopConfig};

#[derive(Parser)]
#[command(name = "bridge_app", about = "Script bridge demo host")]
struct Args {
    /// JSON scene description to load instead of the built-in scene
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Frames to run (0 = until interrupted)
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Target frames per second
    #[arg(long, default_value_t = 60.0, value_parser = parse_frame_rate)]
    frame_rate: f64,

    /// Audio samples to generate
    #[arg(long, default_value_t = 44_100)]
    samples: u64,

    /// Audio sample rate in Hz
    #[arg(long, default_value_t = 44_100)]
    sample_rate: u32,

    /// Audio output channels
    #[arg(long, default_value_t = 2)]
    channels: u32,

    /// Oscillator frequency in Hz
    #[arg(long, default_value_t = 440.0)]
    frequency: f32,

    /// Check entity handles when proxies are created
    #[arg(long)]
    validate_handles: bool,
}

fn parse_frame_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value.parse().map_err(|e| format!("{e}"))?;
    match frame::frame_duration(rate) {
        Some(_) => Ok(rate),
        None => Err(format!("{value} is not a positive frame rate")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bridge_app=info".parse()?))
        .init();

    let args = Args::parse();

    let scene = match &args.scene {
        Some(path) => {
            info!(path = %path.display(), "loading scene");
            Scene::load(path)?
        }
        None => demo::default_scene(),
    };

    let audio = audio::spawn(AudioSettings {
        samples: args.samples,
        sample_rate: args.sample_rate,
        channels: args.channels,
        frequency: args.frequency,
    })?;

    let config = ScriptConfig::from_env();
    let validate = config.validate_handles || args.validate_handles;
    let config = config.with_validate_handles(validate);
    let mut runtime = ScriptRuntime::new(config);

    match find_entity_by_name(&scene, "Player", validate) {
        Some(player) => {
            runtime.attach(
                player.id(),
                Demo::Player(PlayerController {
                    speed: 5.0,
                    boosting: false,
                }),
            );
        }
        None => warn!("scene has no entity named Player"),
    }
    if let Some(camera) = find_entity_by_name(&scene, "Camera", validate) {
        runtime.attach(
            camera.id(),
            Demo::Follow(CameraFollow {
                target: "Player".to_string(),
                base_size: 10.0,
            }),
        );
    }

    let mut frames = FrameLoop::new(
        FrameLoopConfig {
            frame_rate: args.frame_rate,
            max_frames: args.frames,
        },
        &scene,
        runtime,
    );
    frames.run();

    let summary = audio
        .join()
        .map_err(|_| anyhow!("audio thread panicked"))??;
    info!(
        samples = summary.samples,
        frames_written = summary.frames_written,
        peak = summary.peak,
        "audio session done"
    );

    info!(
        scene = scene.name(),
        frames = frames.frame_id(),
        behaviours = frames.runtime().behaviours().len(),
        "bridge_app shut down"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rate_argument() {
        let args = Args::try_parse_from(["bridge_app", "--frame-rate", "30"]).unwrap();
        assert_eq!(args.frame_rate, 30.0);
        assert_eq!(Args::try_parse_from(["bridge_app"]).unwrap().frame_rate, 60.0);

        for rate in ["0", "-5", "NaN", "inf", "fast"] {
            assert!(
                Args::try_parse_from(["bridge_app", "--frame-rate", rate]).is_err(),
                "{rate} accepted"
            );
        }
    }
}
