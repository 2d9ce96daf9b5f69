//! Data-driven game balance
//!
//! Every gameplay and audio constant that a designer might want to tweak lives
//! here. Overrides are plain JSON; missing fields keep their defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gameplay and audio tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at the start of a run
    pub starting_lives: u8,
    /// Deliveries needed to finish a run
    pub delivery_target: u32,
    /// Minimum time between accepted moves (ms)
    pub move_cooldown_ms: f64,
    /// Largest simulation step a single frame may take (seconds)
    pub max_frame_step: f32,

    // === Scoring ===
    pub cargo_score: u32,
    pub delivery_score: u32,
    pub cash_score: u32,

    // === Cash pickup timing ===
    /// Delay before the first pickup of a run (ms)
    pub cash_initial_delay_ms: f64,
    /// Cooldown after a pickup is collected (ms)
    pub cash_respawn_ms: f64,

    // === Music ===
    /// Sequencer step interval (ms)
    pub music_step_ms: u32,
    /// Master gain while audible
    pub music_gain: f32,
    /// Master gain while muted (exponential ramps can't reach zero)
    pub muted_gain: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            delivery_target: 5,
            move_cooldown_ms: 110.0,
            max_frame_step: 0.04,

            cargo_score: 25,
            delivery_score: 200,
            cash_score: 120,

            cash_initial_delay_ms: 1200.0,
            cash_respawn_ms: 3000.0,

            music_step_ms: 240,
            music_gain: 0.08,
            muted_gain: 0.0001,
        }
    }
}

/// Why a tuning override was rejected
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON, or a field had the wrong type
    Parse(serde_json::Error),
    /// A field parsed but its value is unusable
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "malformed tuning JSON: {}", e),
            TuningError::Invalid { field, reason } => {
                write!(f, "invalid tuning field `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse an override, falling back to defaults (with a warning) on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Err(e) => {
                log::warn!("{} - using default tuning", e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.starting_lives == 0 {
            return invalid("starting_lives", "must be at least 1");
        }
        if self.delivery_target == 0 {
            return invalid("delivery_target", "must be at least 1");
        }
        if !(self.move_cooldown_ms >= 0.0) {
            return invalid("move_cooldown_ms", "must be non-negative");
        }
        if !(self.max_frame_step > 0.0) {
            return invalid("max_frame_step", "must be positive");
        }
        if !(self.cash_initial_delay_ms >= 0.0) || !(self.cash_respawn_ms >= 0.0) {
            return invalid("cash_respawn_ms", "cash timings must be non-negative");
        }
        if self.music_step_ms == 0 {
            return invalid("music_step_ms", "must be positive");
        }
        if !(self.muted_gain > 0.0) {
            return invalid("muted_gain", "must be positive");
        }
        if !(self.music_gain > self.muted_gain) {
            return invalid("music_gain", "must be louder than muted_gain");
        }
        Ok(())
    }
}
