//! Interaction rules: moves, zone effects, crashes, and pickup spawning
//!
//! All functions here are no-ops once the run is over; only a restart
//! (a brand new [`GameState`]) brings the board back to life.

use rand::Rng;

use super::collision::first_hit;
use super::grid::GRID;
use super::state::{
    CashPickup, Direction, DropEffect, GameEvent, GamePhase, GameState, StatusMessage,
};

/// Apply a move request at time `now` (ms), subject to the move-rate gate.
///
/// Returns true if the move was accepted. Rejected moves leave the state
/// untouched, including the gate timestamp.
pub fn try_move(state: &mut GameState, dir: Direction, now: f64) -> bool {
    if state.is_over() {
        return false;
    }
    if let Some(last) = state.last_move_at {
        if now - last < state.tuning.move_cooldown_ms {
            return false;
        }
    }
    state.last_move_at = Some(now);

    let (dcol, drow) = dir.delta();
    state.player.step(dcol, drow);
    evaluate_tile_actions(state, now);
    true
}

/// Resolve whatever the player's current cell triggers
pub fn evaluate_tile_actions(state: &mut GameState, now: f64) {
    let (col, row) = (state.player.col, state.player.row);

    if GRID.is_stash(row, col) && !state.has_cargo {
        state.has_cargo = true;
        state.score += state.tuning.cargo_score;
        state.message = StatusMessage::CargoAcquired;
        state.push_event(GameEvent::CargoAcquired);
    }

    if GRID.is_drop_zone(row, col) && state.has_cargo {
        state.has_cargo = false;
        state.deliveries += 1;
        state.score += state.tuning.delivery_score;
        state.message = StatusMessage::Delivered;
        state.drop_effects.push(DropEffect::at_cell(col, row));
        state.push_event(GameEvent::Delivered {
            col,
            deliveries: state.deliveries,
        });

        if state.deliveries >= state.tuning.delivery_target {
            state.phase = GamePhase::Won;
            state.message = StatusMessage::RunComplete;
            state.push_event(GameEvent::RunComplete);
        }
    }

    if state.cash_pickup == Some(CashPickup { col, row }) {
        state.score += state.tuning.cash_score;
        state.message = StatusMessage::CashCollected;
        state.cash_pickup = None;
        state.cash_respawn_at = now + state.tuning.cash_respawn_ms;
        state.push_event(GameEvent::CashCollected);
    }
}

/// Check the player against traffic in their row.
///
/// At most one crash is resolved per call. Returns true on a crash.
pub fn check_vehicle_hits(state: &mut GameState) -> bool {
    if state.is_over() || !GRID.is_road_row(state.player.row) {
        return false;
    }

    let player_rect = state.player.rect();
    if first_hit(&player_rect, state.player.row, &state.vehicles).is_none() {
        return false;
    }

    state.lives = state.lives.saturating_sub(1);
    state.has_cargo = false;
    state.player.reset();

    if state.lives > 0 {
        state.message = StatusMessage::Smashed;
        state.push_event(GameEvent::Crashed {
            lives_left: state.lives,
        });
    } else {
        state.message = StatusMessage::Busted;
        state.phase = GamePhase::Lost;
        state.push_event(GameEvent::Crashed { lives_left: 0 });
        state.push_event(GameEvent::Busted);
    }
    true
}

/// Place a new cash pickup if none is active and the cooldown has passed
pub fn spawn_cash_if_needed(state: &mut GameState, now: f64) -> bool {
    if state.cash_pickup.is_some() || now < state.cash_respawn_at || state.is_over() {
        return false;
    }

    let row = state.rng.random_range(GRID.cash_rows());
    let col = state.rng.random_range(0..GRID.cols);
    state.cash_pickup = Some(CashPickup { col, row });
    state.push_event(GameEvent::CashSpawned { col, row });
    true
}
