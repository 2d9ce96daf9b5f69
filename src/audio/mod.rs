//! Procedural music loop
//!
//! A fixed bass/lead step sequence rendered as short oscillator notes. The
//! sequencer itself is platform-free; it hands [`ToneRequest`]s to an
//! [`AudioSink`] which owns the actual audio device (Web Audio on wasm32).

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebAudioSink;

use crate::tuning::Tuning;

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

/// One note to schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    /// Hz
    pub freq: f32,
    /// Seconds after "now" at which the note starts
    pub start_offset: f64,
    /// Seconds from start to the end of the release ramp
    pub duration: f64,
    pub waveform: Waveform,
    /// Gain at the top of the attack
    pub peak_gain: f32,
}

/// Envelope shape shared by every note
pub mod envelope {
    /// Attack ramp length (seconds)
    pub const ATTACK: f64 = 0.02;
    /// Start/end level; exponential ramps can't touch zero
    pub const FLOOR: f32 = 0.0001;
    /// Oscillator keeps running this long past the release (seconds)
    pub const STOP_TAIL: f64 = 0.02;
}

/// Output device for the music loop
pub trait AudioSink {
    /// Create the device (lazily, after a user gesture). Returns availability.
    fn open(&mut self) -> bool;
    /// Best-effort wake-up of a suspended device
    fn resume(&mut self);
    fn set_master_gain(&mut self, gain: f32);
    fn play_tone(&mut self, tone: &ToneRequest);
}

/// Sink for targets without audio; everything is silently dropped
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn open(&mut self) -> bool {
        false
    }

    fn resume(&mut self) {}

    fn set_master_gain(&mut self, _gain: f32) {}

    fn play_tone(&mut self, _tone: &ToneRequest) {}
}

/// Bass line (Hz), one note per step
pub const BASS: [f32; 8] = [55.0, 55.0, 82.41, 65.41, 55.0, 55.0, 98.0, 82.41];
/// Lead line (Hz)
pub const LEAD: [f32; 8] = [220.0, 246.94, 293.66, 246.94, 329.63, 293.66, 246.94, 196.0];

/// Notes played on a given step
pub fn step_tones(step: u32) -> Vec<ToneRequest> {
    let i = step as usize;
    let bass = BASS[i % BASS.len()];
    let lead = LEAD[i % LEAD.len()];

    let mut tones = Vec::with_capacity(3);
    tones.push(ToneRequest {
        freq: bass,
        start_offset: 0.0,
        duration: 0.16,
        waveform: Waveform::Square,
        peak_gain: 0.12,
    });
    if step % 2 == 0 {
        tones.push(ToneRequest {
            freq: lead,
            start_offset: 0.03,
            duration: 0.11,
            waveform: Waveform::Triangle,
            peak_gain: 0.08,
        });
    }
    if step % 4 == 3 {
        tones.push(ToneRequest {
            freq: lead * 2.0,
            start_offset: 0.07,
            duration: 0.08,
            waveform: Waveform::Sine,
            peak_gain: 0.05,
        });
    }
    tones
}

/// Looping soundtrack state: step counter plus mute flag
#[derive(Debug, Clone)]
pub struct MusicLoop {
    step: u32,
    started: bool,
    /// Device open failed; don't keep retrying on every gesture
    unavailable: bool,
    muted: bool,
    music_gain: f32,
    muted_gain: f32,
}

impl MusicLoop {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            step: 0,
            started: false,
            unavailable: false,
            muted: false,
            music_gain: tuning.music_gain,
            muted_gain: tuning.muted_gain,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    fn master_gain(&self) -> f32 {
        if self.muted { self.muted_gain } else { self.music_gain }
    }

    /// Open the device on first user input. Without audio this stays silent
    /// for the rest of the session.
    pub fn start(&mut self, sink: &mut dyn AudioSink) {
        if self.started || self.unavailable {
            return;
        }
        if !sink.open() {
            log::warn!("No audio device available - music disabled");
            self.unavailable = true;
            return;
        }
        sink.set_master_gain(self.master_gain());
        self.started = true;
        log::info!("Music started");
    }

    /// Emit the current step and advance. Does nothing until started.
    pub fn tick(&mut self, sink: &mut dyn AudioSink) {
        if !self.started {
            return;
        }
        sink.resume();
        for tone in step_tones(self.step) {
            sink.play_tone(&tone);
        }
        self.step = self.step.wrapping_add(1);
    }

    /// Flip mute; the sequencer keeps stepping either way
    pub fn toggle_mute(&mut self, sink: &mut dyn AudioSink) -> bool {
        self.muted = !self.muted;
        if self.started {
            sink.set_master_gain(self.master_gain());
        }
        log::info!("Music muted: {}", self.muted);
        self.muted
    }

    /// Text for the mute button
    pub fn mute_label(&self) -> &'static str {
        if self.muted {
            "Mute Music: On"
        } else {
            "Mute Music: Off"
        }
    }
}
