//! Game state and core simulation types
//!
//! Everything a running session mutates lives in [`GameState`]; the platform
//! layer only ever borrows it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::grid::GRID;
use super::traffic::build_traffic;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// All deliveries made
    Won,
    /// Out of lives
    Lost,
}

/// One-step grid movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (dcol, drow)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Status line shown under the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    Intro,
    CargoAcquired,
    Delivered,
    RunComplete,
    CashCollected,
    Smashed,
    Busted,
}

impl StatusMessage {
    pub fn text(&self) -> &'static str {
        match self {
            StatusMessage::Intro => "Grab cargo at the stash near bottom center.",
            StatusMessage::CargoAcquired => {
                "Cargo acquired. Deliver it to one of the top drop zones."
            }
            StatusMessage::Delivered => "Drop complete. Return for more cargo.",
            StatusMessage::RunComplete => "You finished all runs. Press R to play again.",
            StatusMessage::CashCollected => "Stolen cash collected.",
            StatusMessage::Smashed => "Traffic smashed you. Try again.",
            StatusMessage::Busted => "Busted. Press R to restart.",
        }
    }
}

/// Things that happened during an update, drained by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CargoAcquired,
    Delivered { col: i32, deliveries: u32 },
    CashSpawned { col: i32, row: i32 },
    CashCollected,
    Crashed { lives_left: u8 },
    RunComplete,
    Busted,
}

impl GameEvent {
    /// Whether the HUD needs a refresh after this event
    pub fn affects_hud(&self) -> bool {
        !matches!(self, GameEvent::CashSpawned { .. })
    }
}

/// The player's vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub col: i32,
    pub row: i32,
    /// Top-left pixel position, derived from the cell
    pub pos: Vec2,
    pub size: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        let mut player = Self {
            col: START_COL,
            row: START_ROW,
            pos: Vec2::ZERO,
            size: Vec2::new(TILE * 0.58, TILE * 0.72),
        };
        player.sync_pixel_position();
        player
    }
}

impl Player {
    /// Recompute the pixel position after the cell changed
    pub fn sync_pixel_position(&mut self) {
        self.pos = Vec2::new(
            self.col as f32 * TILE + TILE * 0.2,
            self.row as f32 * TILE + TILE * 0.14,
        );
    }

    /// Move by a cell delta, clamped to the grid
    pub fn step(&mut self, dcol: i32, drow: i32) {
        let (col, row) = GRID.clamp_cell(self.col + dcol, self.row + drow);
        self.col = col;
        self.row = row;
        self.sync_pixel_position();
    }

    /// Back to the start cell
    pub fn reset(&mut self) {
        self.col = START_COL;
        self.row = START_ROW;
        self.sync_pixel_position();
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A traffic vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub row: i32,
    /// Top-left pixel position
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed in pixels/sec (sign = direction)
    pub speed: f32,
    /// 0xRRGGBB
    pub color: u32,
}

impl Vehicle {
    pub fn new(row: i32, x: f32, width: f32, speed: f32, color: u32) -> Self {
        Self {
            row,
            pos: Vec2::new(x, row as f32 * TILE + TILE * 0.2),
            size: Vec2::new(width, TILE * 0.6),
            speed,
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Bonus cash sitting on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashPickup {
    pub col: i32,
    pub row: i32,
}

/// Expanding ring shown where a delivery landed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropEffect {
    /// Tile center in pixels
    pub pos: Vec2,
    pub ttl_ms: f32,
}

impl DropEffect {
    pub fn at_cell(col: i32, row: i32) -> Self {
        Self {
            pos: Vec2::new(
                col as f32 * TILE + TILE / 2.0,
                row as f32 * TILE + TILE / 2.0,
            ),
            ttl_ms: DROP_FX_TTL_MS,
        }
    }

    /// 0.0 when fresh, 1.0 when expired
    pub fn age(&self) -> f32 {
        (1.0 - self.ttl_ms / DROP_FX_TTL_MS).clamp(0.0, 1.0)
    }
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this run was started with
    pub seed: u64,
    /// Jitter and pickup placement
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub score: u32,
    pub lives: u8,
    pub deliveries: u32,
    pub has_cargo: bool,
    pub phase: GamePhase,
    pub message: StatusMessage,
    /// Time of the last accepted move (ms), None before the first move
    pub last_move_at: Option<f64>,
    pub player: Player,
    /// All lanes, lane by lane
    pub vehicles: Vec<Vehicle>,
    pub drop_effects: Vec<DropEffect>,
    pub cash_pickup: Option<CashPickup>,
    /// No pickup may spawn before this time (ms)
    pub cash_respawn_at: f64,
    /// Pending events for the session to drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run starting at time `now` (ms)
    pub fn new(seed: u64, tuning: Tuning, now: f64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives: tuning.starting_lives,
            deliveries: 0,
            has_cargo: false,
            phase: GamePhase::Playing,
            message: StatusMessage::Intro,
            last_move_at: None,
            player: Player::default(),
            vehicles: build_traffic(),
            drop_effects: Vec::new(),
            cash_pickup: None,
            cash_respawn_at: now + tuning.cash_initial_delay_ms,
            events: Vec::new(),
            tuning,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(7, Tuning::default(), 1000.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.deliveries, 0);
        assert!(!state.has_cargo);
        assert!(!state.is_over());
        assert_eq!(state.message, StatusMessage::Intro);
        assert_eq!(state.vehicles.len(), 25);
        assert!(state.cash_pickup.is_none());
        assert_eq!(state.cash_respawn_at, 2200.0);
        assert_eq!((state.player.col, state.player.row), (START_COL, START_ROW));
    }

    #[test]
    fn test_player_pixel_position() {
        let mut player = Player::default();
        player.step(1, -1);
        assert_eq!((player.col, player.row), (8, 8));
        assert!((player.pos.x - (8.0 * 64.0 + 12.8)).abs() < 0.001);
        assert!((player.pos.y - (8.0 * 64.0 + 8.96)).abs() < 0.001);
    }

    #[test]
    fn test_player_step_clamps() {
        let mut player = Player::default();
        player.step(0, 1);
        assert_eq!(player.row, ROWS - 1);
        for _ in 0..20 {
            player.step(-1, 0);
        }
        assert_eq!(player.col, 0);
    }

    #[test]
    fn test_drop_effect_age() {
        let mut fx = DropEffect::at_cell(7, 0);
        assert_eq!(fx.pos, Vec2::new(480.0, 32.0));
        assert_eq!(fx.age(), 0.0);
        fx.ttl_ms = 250.0;
        assert!((fx.age() - 0.5).abs() < 0.001);
        fx.ttl_ms = -10.0;
        assert_eq!(fx.age(), 1.0);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }
}
