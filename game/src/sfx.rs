//! Sound effects over rodio.
//!
//! All audio is synthesized on the fly by `engine::audio`; there are no
//! sound assets. Playback goes through detached sinks and is fire-and-forget.

use std::error::Error;
use std::time::Duration;

use engine::audio::{game_over_notes, render_notes, render_tone, ToneSequencer, ToneSpec};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Shared SFX volume constants (0.0..=1.0).
///
/// These are validated by tests: the per-dot tones must sit under the
/// game-over cue.
pub const TONE_SFX_VOLUME: f32 = 0.35;
pub const GAME_OVER_SFX_VOLUME: f32 = 0.5;

pub const TONE_DURATION: Duration = Duration::from_millis(140);
const SAMPLE_RATE: u32 = 48_000;

/// Owns the audio device for the lifetime of the session.
///
/// Constructed once at startup and released exactly once when dropped;
/// callers keep it in an `Option` and run silently when no audio device is
/// available.
pub struct SoundEffects {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    tones: ToneSequencer,
    gain: f32,
}

impl SoundEffects {
    pub fn new(sfx_gain: f32) -> Result<Self, Box<dyn Error>> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            tones: ToneSequencer::new(),
            gain: sfx_gain.clamp(0.0, 1.0),
        })
    }

    /// Restarts the tone ladder; called when a new gesture begins.
    pub fn reset_tones(&mut self) {
        self.tones.reset();
    }

    /// One step of the tone ladder: up for an added dot, down for a removed
    /// one.
    pub fn play_tone(&mut self, added: bool) {
        let freq = self.tones.next(added);
        let samples = render_tone(freq, TONE_DURATION, SAMPLE_RATE, ToneSpec::default());
        self.play_samples(samples, TONE_SFX_VOLUME);
    }

    pub fn play_game_over(&self) {
        let samples = render_notes(&game_over_notes(), SAMPLE_RATE, ToneSpec::default());
        self.play_samples(samples, GAME_OVER_SFX_VOLUME);
    }

    fn play_samples(&self, samples: Vec<f32>, volume: f32) {
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.set_volume(volume * self.gain);
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
        sink.detach();
    }
}
