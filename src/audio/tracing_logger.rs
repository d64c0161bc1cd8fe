//! [`AudioLogger`] backed by `tracing`

use super::{AudioLogger, AudioStream, AudioStreamModel};

/// Emits one debug event per callback; records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudioLogger;

impl AudioLogger for TracingAudioLogger {
    fn on_set_volume_requested(&self, audio_stream: AudioStream, volume: i32) {
        tracing::debug!(
            audio_stream = %audio_stream,
            volume,
            "set volume requested"
        );
    }

    fn on_volume_update_received(&self, audio_stream: AudioStream, model: &AudioStreamModel) {
        tracing::debug!(
            audio_stream = %audio_stream,
            volume = model.volume,
            min_volume = model.min_volume,
            max_volume = model.max_volume,
            is_muted = model.is_muted,
            "volume update received"
        );
    }
}
