//! Session orchestration
//!
//! A [`Session`] owns one run's [`GameState`] plus the music loop and the
//! platform sinks. The platform layer feeds it three kinds of callbacks that
//! never overlap: render frames, key/pointer events, and music steps.

use rand::Rng;

use crate::audio::{AudioSink, MusicLoop};
use crate::hud::{DisplaySink, HudSnapshot};
use crate::platform::{Command, FrameClock, classify_key};
use crate::renderer::{Surface, draw_scene};
use crate::sim::{GameEvent, GameState, tick, try_move};
use crate::tuning::Tuning;

/// One play session: the current run plus everything that outlives restarts
pub struct Session<A: AudioSink, D: DisplaySink> {
    state: GameState,
    tuning: Tuning,
    clock: FrameClock,
    music: MusicLoop,
    audio: A,
    display: D,
}

impl<A: AudioSink, D: DisplaySink> Session<A, D> {
    /// Start the first run at time `now` (ms)
    pub fn new(tuning: Tuning, seed: u64, now: f64, audio: A, display: D) -> Self {
        log::info!("Starting session with seed: {}", seed);
        let mut session = Self {
            state: GameState::new(seed, tuning.clone(), now),
            clock: FrameClock::new(tuning.max_frame_step),
            music: MusicLoop::new(&tuning),
            tuning,
            audio,
            display,
        };
        session.refresh_hud();
        let label = session.music.mute_label();
        session.display.show_mute_label(label);
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn music(&self) -> &MusicLoop {
        &self.music
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Sequencer step interval (ms) for the platform timer
    pub fn music_step_ms(&self) -> u32 {
        self.tuning.music_step_ms
    }

    /// Throw the current run away and start a fresh one
    pub fn restart(&mut self, now: f64) {
        let seed = self.state.rng.random::<u64>();
        self.state = GameState::new(seed, self.tuning.clone(), now);
        log::info!("Game restarted with seed: {}", seed);
        self.refresh_hud();
    }

    /// Handle a key-down. Returns true for game keys so the caller can
    /// suppress the browser default.
    pub fn key_down(&mut self, key: &str, now: f64) -> bool {
        self.music.start(&mut self.audio);

        let Some(command) = classify_key(key) else {
            return false;
        };

        if self.state.is_over() {
            if command == Command::Restart {
                self.restart(now);
            }
            return true;
        }

        if let Command::Move(dir) = command {
            try_move(&mut self.state, dir, now);
            self.flush_events();
        }
        true
    }

    /// Any pointer press counts as the gesture that unlocks audio
    pub fn pointer_down(&mut self) {
        self.music.start(&mut self.audio);
    }

    /// Mute button
    pub fn toggle_mute(&mut self) {
        self.music.start(&mut self.audio);
        self.music.toggle_mute(&mut self.audio);
        let label = self.music.mute_label();
        self.display.show_mute_label(label);
    }

    /// Music timer callback
    pub fn music_tick(&mut self) {
        self.music.tick(&mut self.audio);
    }

    /// Render-clock callback: step the world by the clamped frame time, then draw
    pub fn frame(&mut self, now: f64, surface: &mut dyn Surface) {
        let dt = self.clock.advance(now);
        tick(&mut self.state, now, dt);
        self.flush_events();
        draw_scene(&self.state, surface);
    }

    fn refresh_hud(&mut self) {
        self.display.show_hud(&HudSnapshot::from_state(&self.state));
    }

    /// Log what happened since the last flush and update the HUD if needed
    fn flush_events(&mut self) {
        let events = self.state.drain_events();
        if events.is_empty() {
            return;
        }

        for event in &events {
            match event {
                GameEvent::CargoAcquired => log::info!("Cargo acquired"),
                GameEvent::Delivered { col, deliveries } => log::info!(
                    "Delivery {}/{} at column {}",
                    deliveries,
                    self.tuning.delivery_target,
                    col
                ),
                GameEvent::CashSpawned { col, row } => {
                    log::debug!("Cash spawned at ({}, {})", col, row)
                }
                GameEvent::CashCollected => log::info!("Cash collected"),
                GameEvent::Crashed { lives_left } => {
                    log::info!("Crashed, {} lives left", lives_left)
                }
                GameEvent::RunComplete => {
                    log::info!("Run complete with score {}", self.state.score)
                }
                GameEvent::Busted => log::info!("Busted with score {}", self.state.score),
            }
        }

        if events.iter().any(GameEvent::affects_hud) {
            self.refresh_hud();
        }
    }
}
