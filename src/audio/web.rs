//! Web Audio API sink
//!
//! Each note is its own oscillator → gain envelope → master gain chain.

use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorType};

use super::{AudioSink, ToneRequest, Waveform, envelope};

/// Audio sink backed by a lazily created `AudioContext`
#[derive(Default)]
pub struct WebAudioSink {
    ctx: Option<AudioContext>,
    master: Option<GainNode>,
}

impl WebAudioSink {
    pub fn new() -> Self {
        Self::default()
    }
}

fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Square => OscillatorType::Square,
        Waveform::Triangle => OscillatorType::Triangle,
    }
}

impl AudioSink for WebAudioSink {
    fn open(&mut self) -> bool {
        if self.ctx.is_some() {
            return true;
        }

        // Fails outside a secure context or without Web Audio support
        let Some(ctx) = AudioContext::new().ok() else {
            return false;
        };
        let Some(master) = ctx.create_gain().ok() else {
            return false;
        };
        if master
            .connect_with_audio_node(&ctx.destination())
            .is_err()
        {
            return false;
        }

        self.ctx = Some(ctx);
        self.master = Some(master);
        true
    }

    fn resume(&mut self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    fn set_master_gain(&mut self, gain: f32) {
        if let Some(master) = &self.master {
            master.gain().set_value(gain);
        }
    }

    fn play_tone(&mut self, tone: &ToneRequest) {
        let (Some(ctx), Some(master)) = (&self.ctx, &self.master) else {
            return;
        };
        let Some(osc) = ctx.create_oscillator().ok() else {
            return;
        };
        let Some(gain) = ctx.create_gain().ok() else {
            return;
        };

        osc.set_type(oscillator_type(tone.waveform));
        osc.frequency().set_value(tone.freq);

        let start = ctx.current_time() + tone.start_offset;
        let end = start + tone.duration;

        gain.gain().set_value_at_time(envelope::FLOOR, start).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(tone.peak_gain, start + envelope::ATTACK)
            .ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(envelope::FLOOR, end)
            .ok();

        if osc.connect_with_audio_node(&gain).is_err()
            || gain.connect_with_audio_node(master).is_err()
        {
            return;
        }

        osc.start_with_when(start).ok();
        osc.stop_with_when(end + envelope::STOP_TAIL).ok();
    }
}
