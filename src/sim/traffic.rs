//! Lane traffic: construction and the wrap-around conveyor

use rand::Rng;

use super::grid::GRID;
use super::state::Vehicle;
use crate::consts::*;

/// Static description of one lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneConfig {
    pub row: i32,
    /// Pixels/sec, sign is direction
    pub speed: f32,
    /// Vehicle length in tiles
    pub size_tiles: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// Lanes from top to bottom
pub const LANES: [LaneConfig; 5] = [
    LaneConfig { row: 1, speed: 180.0, size_tiles: 1.0, color: 0xeb5757 },
    LaneConfig { row: 2, speed: -220.0, size_tiles: 2.0, color: 0x5fd3ff },
    LaneConfig { row: 4, speed: 250.0, size_tiles: 1.3, color: 0xf3a95d },
    LaneConfig { row: 5, speed: -160.0, size_tiles: 1.5, color: 0x7ef099 },
    LaneConfig { row: 7, speed: 280.0, size_tiles: 1.0, color: 0xff6ce0 },
];

/// Evenly spaced vehicles for one lane, already queued up behind the
/// entry edge so the lane fills as soon as play starts
pub fn lane_vehicles(lane: &LaneConfig) -> Vec<Vehicle> {
    let spacing = TILE * LANE_SPACING_TILES;
    let width = TILE * lane.size_tiles;
    let dir = if lane.speed < 0.0 { -1.0 } else { 1.0 };
    let base = if dir > 0.0 { -width } else { GRID.width() + width };

    (0..LANE_VEHICLES)
        .map(|i| {
            let x = base + i as f32 * spacing * -dir;
            Vehicle::new(lane.row, x, width, lane.speed, lane.color)
        })
        .collect()
}

/// Every lane's vehicles, lane by lane
pub fn build_traffic() -> Vec<Vehicle> {
    LANES.iter().flat_map(lane_vehicles).collect()
}

impl Vehicle {
    /// Advance by `dt` seconds, recycling to the far side once fully off-screen
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        self.pos.x += self.speed * dt;

        let width = self.size.x;
        if self.speed > 0.0 && self.pos.x > GRID.width() + width {
            self.pos.x = -width - respawn_jitter(rng);
        } else if self.speed < 0.0 && self.pos.x < -width - TILE {
            self.pos.x = GRID.width() + respawn_jitter(rng);
        }
    }
}

/// Random extra gap so recycled vehicles don't re-enter in lockstep
fn respawn_jitter<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>() * TILE * RESPAWN_JITTER_TILES
}

/// Advance all traffic by one frame
pub fn update_vehicles<R: Rng + ?Sized>(vehicles: &mut [Vehicle], dt: f32, rng: &mut R) {
    for vehicle in vehicles.iter_mut() {
        vehicle.advance(dt, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_build_traffic_counts() {
        let vehicles = build_traffic();
        assert_eq!(vehicles.len(), LANES.len() * LANE_VEHICLES);
        for lane in &LANES {
            let in_lane = vehicles.iter().filter(|v| v.row == lane.row).count();
            assert_eq!(in_lane, LANE_VEHICLES);
        }
    }

    #[test]
    fn test_lane_spacing_rightward() {
        let vehicles = lane_vehicles(&LANES[0]);
        assert_eq!(vehicles[0].pos.x, -64.0);
        for pair in vehicles.windows(2) {
            assert!((pair[0].pos.x - pair[1].pos.x - 224.0).abs() < 0.001);
        }
        assert!(vehicles.iter().all(|v| v.speed == 180.0));
    }

    #[test]
    fn test_lane_spacing_leftward() {
        let vehicles = lane_vehicles(&LANES[1]);
        assert_eq!(vehicles[0].pos.x, 960.0 + 128.0);
        for pair in vehicles.windows(2) {
            assert!((pair[1].pos.x - pair[0].pos.x - 224.0).abs() < 0.001);
        }
        assert!(vehicles.iter().all(|v| v.size.x == 128.0));
    }

    #[test]
    fn test_advance_moves_by_speed() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut v = Vehicle::new(1, 100.0, 64.0, 180.0, 0);
        v.advance(0.5, &mut rng);
        assert!((v.pos.x - 190.0).abs() < 0.001);
    }

    #[test]
    fn test_rightward_wraps_to_left() {
        let mut rng = Pcg32::seed_from_u64(2);
        let w = 64.0;
        let mut v = Vehicle::new(1, GRID.width() + w - 1.0, w, 180.0, 0);
        v.advance(0.04, &mut rng);
        assert!(v.pos.x < -w, "expected x < -w, got {}", v.pos.x);
        assert!(v.pos.x > -w - TILE * RESPAWN_JITTER_TILES - 0.001);
    }

    #[test]
    fn test_leftward_wraps_to_right() {
        let mut rng = Pcg32::seed_from_u64(3);
        let w = 96.0;
        let mut v = Vehicle::new(5, -w - TILE + 1.0, w, -160.0, 0);
        v.advance(0.04, &mut rng);
        assert!(v.pos.x >= GRID.width());
        assert!(v.pos.x < GRID.width() + TILE * RESPAWN_JITTER_TILES);
    }

    #[test]
    fn test_on_screen_vehicle_not_recycled() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut v = Vehicle::new(4, 500.0, 83.2, 250.0, 0);
        v.advance(0.04, &mut rng);
        assert!((v.pos.x - 510.0).abs() < 0.001);
    }

    proptest! {
        #[test]
        fn prop_traffic_stays_on_conveyor(seed in any::<u64>(), frames in 1usize..600) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut vehicles = build_traffic();
            for _ in 0..frames {
                update_vehicles(&mut vehicles, 0.04, &mut rng);
            }
            // Initial queue length plus re-entry jitter plus one tile of slack
            let reach = LANE_VEHICLES as f32 * TILE * LANE_SPACING_TILES
                + TILE * (RESPAWN_JITTER_TILES + 1.0);
            for v in &vehicles {
                let w = v.size.x;
                prop_assert!(v.pos.x >= -w - reach);
                prop_assert!(v.pos.x <= GRID.width() + w + reach);
            }
        }
    }
}
