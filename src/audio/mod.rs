//! # Audio volume observers
//!
//! Observer trait for an audio-volume repository plus two implementations:
//!
//! - [`FakeAudioRepositoryLogger`] - test double that records each callback
//! - [`TracingAudioLogger`] - emits structured `tracing` events
//!
//! ```rust
//! use eventrec::audio::{AudioLogger, AudioStream, FakeAudioRepositoryLogger};
//!
//! let logger = FakeAudioRepositoryLogger::new();
//! logger.on_set_volume_requested(AudioStream::Music, 5);
//! assert_eq!(logger.logs(), ["onSetVolumeRequested audioStream=STREAM_MUSIC"]);
//! ```

mod fake;
mod tracing_logger;

pub use fake::FakeAudioRepositoryLogger;
pub use tracing_logger::TracingAudioLogger;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Audio stream identifier
///
/// Named variants cover the platform's stream constants; anything else is
/// carried as a raw id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum AudioStream {
    /// Let the platform pick the stream
    DefaultStream,
    VoiceCall,
    System,
    Ring,
    Music,
    Alarm,
    Notification,
    BluetoothSco,
    SystemEnforced,
    Dtmf,
    Tts,
    Accessibility,
    Assistant,
    Other(i32),
}

impl AudioStream {
    /// Raw platform id
    pub fn id(self) -> i32 {
        match self {
            Self::DefaultStream => -1,
            Self::VoiceCall => 0,
            Self::System => 1,
            Self::Ring => 2,
            Self::Music => 3,
            Self::Alarm => 4,
            Self::Notification => 5,
            Self::BluetoothSco => 6,
            Self::SystemEnforced => 7,
            Self::Dtmf => 8,
            Self::Tts => 9,
            Self::Accessibility => 10,
            Self::Assistant => 11,
            Self::Other(id) => id,
        }
    }

    /// Platform constant name, if this is a known stream
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::DefaultStream => "STREAM_DEFAULT",
            Self::VoiceCall => "STREAM_VOICE_CALL",
            Self::System => "STREAM_SYSTEM",
            Self::Ring => "STREAM_RING",
            Self::Music => "STREAM_MUSIC",
            Self::Alarm => "STREAM_ALARM",
            Self::Notification => "STREAM_NOTIFICATION",
            Self::BluetoothSco => "STREAM_BLUETOOTH_SCO",
            Self::SystemEnforced => "STREAM_SYSTEM_ENFORCED",
            Self::Dtmf => "STREAM_DTMF",
            Self::Tts => "STREAM_TTS",
            Self::Accessibility => "STREAM_ACCESSIBILITY",
            Self::Assistant => "STREAM_ASSISTANT",
            Self::Other(_) => return None,
        };
        Some(name)
    }
}

impl From<i32> for AudioStream {
    fn from(id: i32) -> Self {
        match id {
            -1 => Self::DefaultStream,
            0 => Self::VoiceCall,
            1 => Self::System,
            2 => Self::Ring,
            3 => Self::Music,
            4 => Self::Alarm,
            5 => Self::Notification,
            6 => Self::BluetoothSco,
            7 => Self::SystemEnforced,
            8 => Self::Dtmf,
            9 => Self::Tts,
            10 => Self::Accessibility,
            11 => Self::Assistant,
            other => Self::Other(other),
        }
    }
}

impl From<AudioStream> for i32 {
    fn from(stream: AudioStream) -> Self {
        stream.id()
    }
}

impl fmt::Display for AudioStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNKNOWN_STREAM_{}", self.id()),
        }
    }
}

/// Volume state of one stream as reported by the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStreamModel {
    pub audio_stream: AudioStream,
    pub volume: i32,
    pub min_volume: i32,
    pub max_volume: i32,
    pub is_affected_by_mute: bool,
    pub is_affected_by_ringer_mode: bool,
    pub is_muted: bool,
}

impl AudioStreamModel {
    /// Unmuted model with the given range, affected by mute only
    pub fn new(audio_stream: AudioStream, volume: i32, min_volume: i32, max_volume: i32) -> Self {
        Self {
            audio_stream,
            volume,
            min_volume,
            max_volume,
            is_affected_by_mute: true,
            is_affected_by_ringer_mode: false,
            is_muted: false,
        }
    }

    pub fn muted(mut self, is_muted: bool) -> Self {
        self.is_muted = is_muted;
        self
    }
}

/// Observer notified by an audio-volume repository
///
/// Implementations must be callable from any thread.
pub trait AudioLogger: Send + Sync {
    fn on_set_volume_requested(&self, audio_stream: AudioStream, volume: i32);

    fn on_volume_update_received(&self, audio_stream: AudioStream, model: &AudioStreamModel);
}
