//! Pure tone synthesis.
//!
//! Everything here renders plain `f32` sample buffers; nothing touches an
//! audio device, so the whole module is testable without sound hardware.
//! Playback is the caller's concern.

use std::f32::consts::TAU;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
    Saw,
}

pub fn waveform_sample(wave: Waveform, phase: f32) -> f32 {
    match wave {
        Waveform::Sine => phase.sin(),
        Waveform::Triangle => (2.0 / std::f32::consts::PI) * phase.sin().asin(),
        Waveform::Square => {
            if phase.sin() >= 0.0 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Saw => 2.0 * (phase / TAU) - 1.0,
    }
}

/// Linear attack/release envelope over a normalized note position in `0..=1`.
pub fn envelope(pos: f32, attack: f32, release: f32) -> f32 {
    if attack > 0.0 && pos < attack {
        return pos / attack;
    }
    if release > 0.0 && pos > (1.0 - release) {
        return ((1.0 - pos) / release).max(0.0);
    }
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub gain: f32,
    /// Second-harmonic mix, `0..=1`. A little of it keeps pure sines from
    /// sounding flat on small speakers.
    pub harmonic_mix: f32,
    pub attack: f32,
    pub release: f32,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            waveform: Waveform::Sine,
            gain: 0.5,
            harmonic_mix: 0.3,
            attack: 0.08,
            release: 0.35,
        }
    }
}

/// Renders one mono tone at `freq_hz` into a sample buffer.
pub fn render_tone(freq_hz: f32, duration: Duration, sample_rate: u32, spec: ToneSpec) -> Vec<f32> {
    let sample_rate = sample_rate.max(1);
    let total = ((duration.as_secs_f64() * sample_rate as f64).round() as usize).max(1);
    let phase_delta = TAU * freq_hz / sample_rate as f32;

    let mut phase = 0.0f32;
    let mut out = Vec::with_capacity(total);
    for i in 0..total {
        let pos = i as f32 / total as f32;
        let env = envelope(pos, spec.attack, spec.release);
        let base = waveform_sample(spec.waveform, phase);
        let harmonic = waveform_sample(spec.waveform, (phase * 2.0) % TAU) * spec.harmonic_mix;
        out.push((base + harmonic) * spec.gain * env);
        phase = (phase + phase_delta) % TAU;
    }
    out
}

/// Renders a note sequence back to back into one buffer. `None` is a rest.
pub fn render_notes(
    notes: &[(Option<f32>, Duration)],
    sample_rate: u32,
    spec: ToneSpec,
) -> Vec<f32> {
    let mut out = Vec::new();
    for &(freq, duration) in notes {
        match freq {
            Some(freq_hz) => out.extend(render_tone(freq_hz, duration, sample_rate, spec)),
            None => {
                let rest =
                    ((duration.as_secs_f64() * sample_rate.max(1) as f64).round() as usize).max(1);
                out.extend(std::iter::repeat(0.0).take(rest));
            }
        }
    }
    out
}

/// Major-pentatonic ladder starting at C5, two octaves. Long drags keep
/// climbing until they pin at the top, mirroring the classic dots tone run.
pub const TONE_LADDER_HZ: [f32; 10] = [
    523.25, 587.33, 659.25, 783.99, 880.00, 1046.50, 1174.66, 1318.51, 1567.98, 1760.00,
];

/// Walks `TONE_LADDER_HZ` up and down as a selection grows and shrinks.
///
/// `reset()` must be called at the start of each gesture so the run begins
/// at the bottom of the ladder again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToneSequencer {
    step: usize,
}

impl ToneSequencer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Frequency for the next tone: ascending on an added dot, descending on
    /// a removed one. Clamps at both ends of the ladder.
    pub fn next(&mut self, ascending: bool) -> f32 {
        if ascending {
            let freq = TONE_LADDER_HZ[self.step];
            self.step = (self.step + 1).min(TONE_LADDER_HZ.len() - 1);
            freq
        } else {
            self.step = self.step.saturating_sub(1);
            TONE_LADDER_HZ[self.step]
        }
    }
}

/// Short descending end-of-game figure.
pub fn game_over_notes() -> Vec<(Option<f32>, Duration)> {
    let beat = Duration::from_millis(160);
    vec![
        (Some(659.25), beat),
        (Some(587.33), beat),
        (Some(523.25), beat),
        (None, Duration::from_millis(60)),
        (Some(392.00), Duration::from_millis(420)),
    ]
}
