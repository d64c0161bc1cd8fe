//! Recording test double for [`AudioLogger`]

use super::{AudioLogger, AudioStream, AudioStreamModel};
use crate::event_log::EventRecorder;
use crate::interaction::Interaction;
use crate::snapshot::Snapshot;

/// Fake logger that records each callback as one message
///
/// Only the stream is rendered; volume and model are ignored.
#[derive(Debug, Clone, Default)]
pub struct FakeAudioRepositoryLogger {
    recorder: EventRecorder,
}

impl FakeAudioRepositoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record into an existing recorder (shared with the test)
    pub fn from_recorder(recorder: EventRecorder) -> Self {
        Self { recorder }
    }

    /// All messages recorded so far
    pub fn logs(&self) -> Snapshot {
        self.recorder.snapshot()
    }

    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }
}

impl AudioLogger for FakeAudioRepositoryLogger {
    fn on_set_volume_requested(&self, audio_stream: AudioStream, _volume: i32) {
        self.recorder.record_interaction(
            &Interaction::new("onSetVolumeRequested").param("audioStream", audio_stream),
        );
    }

    fn on_volume_update_received(&self, audio_stream: AudioStream, _model: &AudioStreamModel) {
        self.recorder.record_interaction(
            &Interaction::new("onVolumeUpdateReceived").param("audioStream", audio_stream),
        );
    }
}
