//! The audio cadence: a sine oscillator session ticked on its own thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use bridge_audio::{AudioSession, ModuleRegistry, RecordingOutput, SessionConfig, SineOscillatorModule};
use tracing::info;

/// Parameters of the demo audio session.
#[derive(Debug, Clone)]
pub struct AudioSettings {
    pub samples: u64,
    pub sample_rate: u32,
    pub channels: u32,
    pub frequency: f32,
}

/// What the audio thread produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSummary {
    pub samples: u64,
    pub frames_written: usize,
    pub peak: f32,
}

/// Build and run a bounded session. Blocks until `samples` ticks are done.
///
/// # Errors
///
/// Fails if the oscillator cannot be instantiated or configured.
pub fn run_session(settings: &AudioSettings) -> Result<AudioSummary> {
    let output = Arc::new(RecordingOutput::new(settings.sample_rate, settings.channels));
    let mut session = AudioSession::new(
        SessionConfig::new("demo").with_max_samples(settings.samples),
        output.clone(),
        ModuleRegistry::with_builtin(),
    );

    let oscillator = session
        .instantiate(SineOscillatorModule::TYPE_NAME)
        .context("instantiating oscillator")?;
    session.set_control(oscillator, "frequency", settings.frequency)?;
    info!(
        module = %oscillator,
        frequency = settings.frequency,
        sample_rate = settings.sample_rate,
        "oscillator ready"
    );

    let samples = session.run();
    let frames = output.take_frames();
    let peak = frames
        .iter()
        .map(|frame| frame.left.abs().max(frame.right.abs()))
        .fold(0.0, f32::max);

    Ok(AudioSummary {
        samples,
        frames_written: frames.len(),
        peak,
    })
}

/// Run [`run_session`] on a dedicated audio thread.
///
/// # Errors
///
/// Fails if the thread cannot be spawned.
pub fn spawn(settings: AudioSettings) -> Result<JoinHandle<Result<AudioSummary>>> {
    thread::Builder::new()
        .name("audio".to_string())
        .spawn(move || run_session(&settings))
        .context("spawning audio thread")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_writes_every_sample() {
        let summary = run_session(&AudioSettings {
            samples: 441,
            sample_rate: 44_100,
            channels: 2,
            frequency: 441.0,
        })
        .unwrap();

        assert_eq!(summary.samples, 441);
        assert_eq!(summary.frames_written, 441);
        assert!((summary.peak - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_spawned_session() {
        let handle = spawn(AudioSettings {
            samples: 16,
            sample_rate: 48_000,
            channels: 2,
            frequency: 440.0,
        })
        .unwrap();
        let summary = handle.join().unwrap().unwrap();
        assert_eq!(summary.frames_written, 16);
    }
}
