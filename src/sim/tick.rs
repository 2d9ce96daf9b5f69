//! Per-frame simulation step
//!
//! Runs once per rendered frame with an already-clamped `dt`. Input is not
//! part of the tick; moves arrive separately through [`super::try_move`].

use super::resolve::{check_vehicle_hits, spawn_cash_if_needed};
use super::state::{DropEffect, GameState};
use super::traffic::update_vehicles;

/// Advance the world by `dt` seconds at wall time `now` (ms)
pub fn tick(state: &mut GameState, now: f64, dt: f32) {
    spawn_cash_if_needed(state, now);
    update_vehicles(&mut state.vehicles, dt, &mut state.rng);
    age_drop_effects(&mut state.drop_effects, dt * 1000.0);
    check_vehicle_hits(state);
}

/// Count down effect lifetimes and drop the expired ones.
///
/// Walks backwards so `swap_remove` only ever moves already-visited entries.
pub fn age_drop_effects(effects: &mut Vec<DropEffect>, elapsed_ms: f32) {
    for i in (0..effects.len()).rev() {
        effects[i].ttl_ms -= elapsed_ms;
        if effects[i].ttl_ms <= 0.0 {
            effects.swap_remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{CashPickup, GamePhase, Vehicle};
    use crate::sim::{Direction, try_move};
    use crate::tuning::Tuning;

    #[test]
    fn test_tick_moves_traffic() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        let before: Vec<f32> = state.vehicles.iter().map(|v| v.pos.x).collect();
        tick(&mut state, 16.0, 0.016);
        for (v, x0) in state.vehicles.iter().zip(before) {
            assert!((v.pos.x - (x0 + v.speed * 0.016)).abs() < 0.01);
        }
    }

    #[test]
    fn test_tick_spawns_cash_after_initial_delay() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        tick(&mut state, 1000.0, 0.016);
        assert!(state.cash_pickup.is_none());
        tick(&mut state, 1200.0, 0.016);
        assert!(state.cash_pickup.is_some());
    }

    #[test]
    fn test_tick_resolves_crash() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        state.vehicles.clear();
        try_move(&mut state, Direction::Up, 0.0);
        try_move(&mut state, Direction::Up, 200.0);
        // Parked on top of the player; zero dt keeps it there
        let x = state.player.pos.x;
        state.vehicles.push(Vehicle::new(7, x, 64.0, 0.0, 0));
        tick(&mut state, 300.0, 0.0);
        assert_eq!(state.lives, 2);
        assert_eq!(state.player.row, 9);
    }

    #[test]
    fn test_tick_frozen_after_game_over() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        state.phase = GamePhase::Won;
        tick(&mut state, 10_000.0, 0.016);
        assert!(state.cash_pickup.is_none());
    }

    #[test]
    fn test_drop_effects_expire() {
        let mut effects = vec![
            DropEffect::at_cell(1, 0),
            DropEffect::at_cell(7, 0),
            DropEffect::at_cell(13, 0),
        ];
        effects[1].ttl_ms = 100.0;

        age_drop_effects(&mut effects, 150.0);
        assert_eq!(effects.len(), 2);
        assert!(effects.iter().all(|fx| (fx.ttl_ms - 350.0).abs() < 0.001));

        age_drop_effects(&mut effects, 400.0);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_cash_not_respawned_during_cooldown() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        state.vehicles.clear();
        state.cash_pickup = Some(CashPickup { col: 7, row: 8 });
        try_move(&mut state, Direction::Up, 1000.0);
        assert!(state.cash_pickup.is_none());
        tick(&mut state, 3999.0, 0.016);
        assert!(state.cash_pickup.is_none());
        tick(&mut state, 4000.0, 0.016);
        assert!(state.cash_pickup.is_some());
    }
}
