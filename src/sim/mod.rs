//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - Time comes in as arguments (ms for deadlines, seconds for `dt`)
//! - Randomness comes from the state's seeded RNG
//! - No rendering, audio, or DOM dependencies

pub mod collision;
pub mod grid;
pub mod resolve;
pub mod state;
pub mod tick;
pub mod traffic;

pub use collision::{Rect, first_hit};
pub use grid::{GRID, GridSpec, StashZone};
pub use resolve::{check_vehicle_hits, evaluate_tile_actions, spawn_cash_if_needed, try_move};
pub use state::{
    CashPickup, Direction, DropEffect, GameEvent, GamePhase, GameState, Player, StatusMessage,
    Vehicle,
};
pub use tick::{age_drop_effects, tick};
pub use traffic::{LANES, LaneConfig, build_traffic, lane_vehicles, update_vehicles};
