//! Stash Runner - a single-screen lane-crossing delivery game
//!
//! Core modules:
//! - `sim`: Game state, traffic, and interaction rules (no platform dependencies)
//! - `audio`: Procedural music loop and audio sinks
//! - `renderer`: Scene drawing onto an abstract 2D surface
//! - `hud`: Score/lives/cargo display snapshot
//! - `platform`: Input classification and frame timing
//! - `game`: Session orchestration (frame loop, input, restart)
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Session;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Tile edge length in pixels
    pub const TILE: f32 = 64.0;
    /// Grid columns
    pub const COLS: i32 = 15;
    /// Grid rows
    pub const ROWS: i32 = 10;

    /// Player start cell (bottom center)
    pub const START_COL: i32 = 7;
    pub const START_ROW: i32 = 9;

    /// Vehicles per lane
    pub const LANE_VEHICLES: usize = 5;
    /// Spacing between vehicles in a lane (tiles)
    pub const LANE_SPACING_TILES: f32 = 3.5;
    /// Maximum random re-entry offset for recycled vehicles (tiles)
    pub const RESPAWN_JITTER_TILES: f32 = 3.0;

    /// Delivery ring lifetime in milliseconds
    pub const DROP_FX_TTL_MS: f32 = 500.0;
}
