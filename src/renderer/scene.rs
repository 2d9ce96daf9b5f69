//! Scene composition: map, traffic, pickups, effects, player, and overlays
//!
//! Draw order matters; later layers paint over earlier ones.

use glam::Vec2;

use super::Surface;
use super::palette::{colors, css_hex, drop_ring, fonts};
use crate::consts::TILE;
use crate::sim::{GRID, GamePhase, GameState};

/// Draw one full frame
pub fn draw_scene(state: &GameState, surface: &mut dyn Surface) {
    draw_map(surface);
    draw_vehicles(state, surface);
    draw_cash(state, surface);
    draw_drop_effects(state, surface);
    draw_player(state, surface);
    draw_message(state, surface);
    if state.is_over() {
        draw_overlay(state, surface);
    }
}

fn draw_map(surface: &mut dyn Surface) {
    let width = GRID.width();
    surface.clear(width, GRID.height());

    for row in 0..GRID.rows {
        let y = row as f32 * TILE;
        let fill = if row == 0 {
            colors::TOP_STRIP
        } else if GRID.is_road_row(row) {
            colors::ROAD
        } else {
            colors::SIDEWALK
        };
        surface.fill_rect(0.0, y, width, TILE, fill);

        if GRID.is_road_row(row) {
            let mid = y + TILE / 2.0;
            surface.dashed_line(
                Vec2::new(0.0, mid),
                Vec2::new(width, mid),
                [14.0, 18.0],
                colors::LANE_MARK,
            );
        }
    }

    // Stash bay
    let stash = GRID.stash;
    let x = stash.min_col as f32 * TILE;
    let y = stash.row as f32 * TILE;
    surface.fill_rect(x, y, stash.width() as f32 * TILE, TILE, colors::STASH);
    surface.fill_text("STASH", x + 10.0, y + 24.0, fonts::LABEL, colors::STASH_LABEL);

    // Drop pads along the top
    for &col in GRID.drop_cols {
        let x = col as f32 * TILE;
        surface.fill_rect(x + 8.0, 6.0, TILE - 16.0, TILE - 12.0, colors::DROP_PAD);
        surface.fill_text("DROP", x + 12.0, 28.0, fonts::LABEL, colors::DROP_LABEL);
    }
}

fn draw_vehicles(state: &GameState, surface: &mut dyn Surface) {
    for v in &state.vehicles {
        let (x, y, w, h) = (v.pos.x, v.pos.y, v.size.x, v.size.y);
        surface.fill_rect(x, y, w, h, &css_hex(v.color));
        surface.fill_rect(x + 6.0, y + h - 12.0, w - 12.0, 8.0, colors::VEHICLE_SHADOW);
        surface.fill_rect(x + 8.0, y + 6.0, w - 16.0, 10.0, colors::WINDSHIELD);
    }
}

fn draw_cash(state: &GameState, surface: &mut dyn Surface) {
    let Some(cash) = state.cash_pickup else {
        return;
    };
    let x = cash.col as f32 * TILE + TILE * 0.3;
    let y = cash.row as f32 * TILE + TILE * 0.25;
    surface.fill_rect(x, y, TILE * 0.4, TILE * 0.35, colors::CASH);
    surface.fill_text(
        "$",
        x + TILE * 0.15,
        y + TILE * 0.22,
        fonts::LABEL,
        colors::CASH_LABEL,
    );
}

fn draw_drop_effects(state: &GameState, surface: &mut dyn Surface) {
    for fx in &state.drop_effects {
        let age = fx.age();
        surface.stroke_circle(fx.pos, 8.0 + age * 34.0, &drop_ring(1.0 - age));
    }
}

fn draw_player(state: &GameState, surface: &mut dyn Surface) {
    let p = &state.player;
    let (x, y, w, h) = (p.pos.x, p.pos.y, p.size.x, p.size.y);
    surface.fill_rect(x, y, w, h, colors::PLAYER);
    surface.fill_rect(x + 8.0, y + 8.0, w - 16.0, 12.0, colors::PLAYER_ROOF);
    if state.has_cargo {
        surface.fill_rect(x + w - 12.0, y + 6.0, 10.0, 14.0, colors::CARGO);
    }
}

fn draw_message(state: &GameState, surface: &mut dyn Surface) {
    let (width, height) = (GRID.width(), GRID.height());
    surface.fill_rect(0.0, height - 30.0, width, 30.0, colors::MESSAGE_BAR);
    surface.fill_text(
        state.message.text(),
        10.0,
        height - 10.0,
        fonts::MESSAGE,
        colors::MESSAGE_TEXT,
    );
}

fn draw_overlay(state: &GameState, surface: &mut dyn Surface) {
    let (width, height) = (GRID.width(), GRID.height());
    surface.fill_rect(0.0, 0.0, width, height, colors::OVERLAY);

    let title = if state.phase == GamePhase::Won {
        "RUN COMPLETE"
    } else {
        "GAME OVER"
    };
    surface.fill_text(
        title,
        width / 2.0 - 150.0,
        height / 2.0 - 10.0,
        fonts::TITLE,
        colors::OVERLAY_TITLE,
    );
    surface.fill_text(
        "Press R to restart",
        width / 2.0 - 90.0,
        height / 2.0 + 30.0,
        fonts::SUBTITLE,
        colors::OVERLAY_TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::{CashPickup, DropEffect, StatusMessage};
    use crate::tuning::Tuning;

    fn render(state: &GameState) -> DrawList {
        let mut list = DrawList::new();
        draw_scene(state, &mut list);
        list
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let state = GameState::new(1, Tuning::default(), 0.0);
        let list = render(&state);
        assert_eq!(
            list.commands.first(),
            Some(&DrawCommand::Clear {
                width: 960.0,
                height: 640.0
            })
        );
    }

    #[test]
    fn test_lane_marks_on_road_rows_only() {
        let state = GameState::new(1, Tuning::default(), 0.0);
        let list = render(&state);
        let dashes = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DashedLine { .. }))
            .count();
        assert_eq!(dashes, GRID.road_rows.len());
    }

    #[test]
    fn test_labels_and_message() {
        let state = GameState::new(1, Tuning::default(), 0.0);
        let list = render(&state);
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts.iter().filter(|t| **t == "DROP").count(), 3);
        assert!(texts.contains(&"STASH"));
        assert_eq!(texts.last(), Some(&StatusMessage::Intro.text()));
        assert!(!texts.contains(&"GAME OVER"));
    }

    #[test]
    fn test_every_vehicle_drawn() {
        let state = GameState::new(1, Tuning::default(), 0.0);
        let list = render(&state);
        assert_eq!(list.rects_with_color(colors::WINDSHIELD).count(), state.vehicles.len());
    }

    #[test]
    fn test_cargo_badge_and_cash() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        assert_eq!(render(&state).rects_with_color(colors::CARGO).count(), 0);
        state.has_cargo = true;
        state.cash_pickup = Some(CashPickup { col: 3, row: 4 });
        let list = render(&state);
        assert_eq!(list.rects_with_color(colors::CARGO).count(), 1);
        assert_eq!(list.rects_with_color(colors::CASH).count(), 1);
        assert!(list.texts().any(|t| t == "$"));
    }

    #[test]
    fn test_drop_ring_grows_with_age() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        let mut fx = DropEffect::at_cell(7, 0);
        fx.ttl_ms = 250.0;
        state.drop_effects.push(fx);
        let list = render(&state);
        let ring = list
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::StrokeCircle { radius, .. } => Some(*radius),
                _ => None,
            })
            .unwrap();
        assert!((ring - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_overlay_titles() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        state.phase = GamePhase::Won;
        assert!(render(&state).texts().any(|t| t == "RUN COMPLETE"));

        state.phase = GamePhase::Lost;
        let list = render(&state);
        assert!(list.texts().any(|t| t == "GAME OVER"));
        assert!(list.texts().any(|t| t == "Press R to restart"));
    }
}
