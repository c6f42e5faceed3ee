//! The audio-side boundary: what modules may ask of the host audio engine.

use std::sync::{Arc, Mutex, PoisonError};

/// Services the host audio engine provides to modules.
///
/// Called from the host's audio thread, once or more per sample tick.
pub trait AudioHost: Send + Sync {
    /// Current sample rate in Hz.
    fn sample_rate(&self) -> u32;

    /// Number of output channels.
    fn channels(&self) -> u32;

    /// Push one output frame to the device.
    fn write_output(&self, left: f32, right: f32);
}

/// Read-only view of the host's stream properties.
///
/// Every accessor queries the host; nothing is cached, so a rate change
/// takes effect on the next tick.
#[derive(Clone)]
pub struct AudioProperties {
    host: Arc<dyn AudioHost>,
}

impl AudioProperties {
    #[must_use]
    pub fn new(host: Arc<dyn AudioHost>) -> Self {
        Self { host }
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.host.sample_rate()
    }

    #[must_use]
    pub fn channels(&self) -> u32 {
        self.host.channels()
    }
}

impl std::fmt::Debug for AudioProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioProperties").finish_non_exhaustive()
    }
}

/// One stereo frame written by an output module.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub left: f32,
    pub right: f32,
}

/// An [`AudioHost`] that stores every written frame instead of playing it.
#[derive(Debug)]
pub struct RecordingOutput {
    sample_rate: Mutex<u32>,
    channels: u32,
    frames: Mutex<Vec<Frame>>,
}

impl RecordingOutput {
    #[must_use]
    pub fn new(sample_rate: u32, channels: u32) -> Self {
        Self {
            sample_rate: Mutex::new(sample_rate),
            channels,
            frames: Mutex::new(Vec::new()),
        }
    }

    /// Change the reported sample rate.
    pub fn set_sample_rate(&self, sample_rate: u32) {
        *self
            .sample_rate
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = sample_rate;
    }

    /// Everything written so far.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain everything written so far.
    pub fn take_frames(&self) -> Vec<Frame> {
        std::mem::take(&mut *self.frames.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl AudioHost for RecordingOutput {
    fn sample_rate(&self) -> u32 {
        *self
            .sample_rate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn channels(&self) -> u32 {
        self.channels
    }

    fn write_output(&self, left: f32, right: f32) {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Frame { left, right });
    }
}
