//! Per-frame script loop.
//!
//! Each frame drops behaviours whose entity was destroyed, then runs the
//! script runtime with the fixed frame timestep.

use std::time::{Duration, Instant};

use bridge_scene::Scene;
use bridge_script::{Behaviour, ScriptRuntime};
use tracing::{debug, error, info, warn};

/// Configuration for the frame loop.
#[derive(Debug, Clone)]
pub struct FrameLoopConfig {
    /// Target frames per second.
    pub frame_rate: f64,
    /// Maximum number of frames to run (0 = unlimited).
    pub max_frames: u64,
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            max_frames: 0,
        }
    }
}

impl FrameLoopConfig {
    /// Wall-clock budget of one frame, or `None` when `frame_rate` is not a
    /// finite positive number of frames per second.
    #[must_use]
    pub fn frame_duration(&self) -> Option<Duration> {
        frame_duration(self.frame_rate)
    }
}

/// Wall-clock budget of one frame at `frame_rate` frames per second.
#[must_use]
pub fn frame_duration(frame_rate: f64) -> Option<Duration> {
    if !(frame_rate.is_finite() && frame_rate > 0.0) {
        return None;
    }
    Duration::try_from_secs_f64(frame_rate.recip()).ok()
}

/// Drives a [`ScriptRuntime`] against a [`Scene`].
pub struct FrameLoop<'s, B> {
    frame_id: u64,
    config: FrameLoopConfig,
    scene: &'s Scene,
    runtime: ScriptRuntime<B>,
}

impl<'s, B: Behaviour> FrameLoop<'s, B> {
    #[must_use]
    pub fn new(config: FrameLoopConfig, scene: &'s Scene, runtime: ScriptRuntime<B>) -> Self {
        Self {
            frame_id: 0,
            config,
            scene,
            runtime,
        }
    }

    #[must_use]
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    #[must_use]
    pub fn runtime(&self) -> &ScriptRuntime<B> {
        &self.runtime
    }

    /// Run one frame with timestep `dt` seconds.
    pub fn frame(&mut self, dt: f64) {
        self.frame_id += 1;
        self.runtime.retain_live(self.scene);
        self.runtime.update(self.scene, dt as f32);
        debug!(
            frame_id = self.frame_id,
            dt,
            behaviours = self.runtime.behaviours().len(),
            "frame done"
        );
    }

    /// Run for the configured number of frames, or indefinitely.
    ///
    /// Runs nothing when the configured frame rate has no valid duration.
    pub fn run(&mut self) {
        let Some(frame_duration) = self.config.frame_duration() else {
            error!(frame_rate = self.config.frame_rate, "invalid frame rate, frame loop not started");
            return;
        };
        let mut frame_count = 0u64;

        info!(
            frame_rate = self.config.frame_rate,
            max_frames = self.config.max_frames,
            "starting frame loop"
        );

        loop {
            let start = Instant::now();

            self.frame(frame_duration.as_secs_f64());

            frame_count += 1;
            if self.config.max_frames > 0 && frame_count >= self.config.max_frames {
                info!(frames = frame_count, "frame loop complete");
                break;
            }

            let elapsed = start.elapsed();
            if elapsed < frame_duration {
                std::thread::sleep(frame_duration - elapsed);
            } else {
                warn!(
                    frame_id = self.frame_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = frame_duration.as_millis() as u64,
                    "frame exceeded time budget"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bridge_script::{ScriptConfig, ScriptContext};

    use super::*;

    #[derive(Default)]
    struct Ticks(u32);

    impl Behaviour for Ticks {
        fn on_update(&mut self, _ctx: &mut ScriptContext<'_, Self>, _ts: f32) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_frame_advances_counter() {
        let scene = Scene::default();
        let mut frames = FrameLoop::new(
            FrameLoopConfig::default(),
            &scene,
            ScriptRuntime::<Ticks>::new(ScriptConfig::default()),
        );
        frames.frame(1.0 / 60.0);
        frames.frame(1.0 / 60.0);
        assert_eq!(frames.frame_id(), 2);
    }

    #[test]
    fn test_run_limited_frames() {
        let scene = Scene::default();
        let entity = scene.create_entity("Counter");
        let mut runtime = ScriptRuntime::new(ScriptConfig::default());
        runtime.attach(entity, Ticks::default());

        let mut frames = FrameLoop::new(
            FrameLoopConfig {
                frame_rate: 1000.0,
                max_frames: 5,
            },
            &scene,
            runtime,
        );
        frames.run();

        assert_eq!(frames.frame_id(), 5);
        assert_eq!(frames.runtime().behaviours().get(entity).map(|t| t.0), Some(5));
    }

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(50.0), Some(Duration::from_millis(20)));
        assert_eq!(frame_duration(0.0), None);
        assert_eq!(frame_duration(-60.0), None);
        assert_eq!(frame_duration(f64::NAN), None);
        assert_eq!(frame_duration(f64::INFINITY), None);
        assert_eq!(frame_duration(1e-300), None);
    }

    #[test]
    fn test_invalid_frame_rate_runs_nothing() {
        let scene = Scene::default();
        let entity = scene.create_entity("Counter");

        for frame_rate in [0.0, -1.0, f64::NAN] {
            let mut runtime = ScriptRuntime::new(ScriptConfig::default());
            runtime.attach(entity, Ticks::default());
            let mut frames = FrameLoop::new(
                FrameLoopConfig {
                    frame_rate,
                    max_frames: 3,
                },
                &scene,
                runtime,
            );
            frames.run();

            assert_eq!(frames.frame_id(), 0);
            assert_eq!(frames.runtime().behaviours().get(entity).map(|t| t.0), Some(0));
        }
    }

    #[test]
    fn test_destroyed_entity_loses_behaviour() {
        let scene = Scene::default();
        let entity = scene.create_entity("Counter");
        let mut runtime = ScriptRuntime::new(ScriptConfig::default());
        runtime.attach(entity, Ticks::default());
        let mut frames = FrameLoop::new(FrameLoopConfig::default(), &scene, runtime);

        frames.frame(1.0 / 60.0);
        scene.destroy_entity(entity);
        frames.frame(1.0 / 60.0);

        assert!(frames.runtime().behaviours().is_empty());
    }
}
