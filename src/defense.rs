//! Per-turn structure build decisions.
//!
//! The planner owns the match's regions and, every turn, turns their slot
//! tables into best-effort spawn attempts. Walls are always attempted before
//! turrets: a turret is only defensively meaningful once the wall in front of
//! it stands, even though the host engine enforces no such dependency. A
//! build that fails for lack of resources is simply dropped; the same rule
//! re-fires next turn, which is the only retry mechanism there is.

use crate::breach::*;
use crate::config::*;
use crate::game::*;
use crate::region::*;
use itertools::Itertools;
use log::*;

pub struct DefensePlanner {
    /// Regions whose walls and turrets are attempted every turn.
    primary: Vec<Region>,
    /// Region attempted only on gated turns.
    secondary: Region,
    /// Support cradle; built only through the explicit support play.
    cradle: Region,
}

impl DefensePlanner {
    pub fn new(primary: Vec<Region>, secondary: Region, cradle: Region) -> DefensePlanner {
        DefensePlanner {
            primary,
            secondary,
            cradle,
        }
    }

    /// Planner over the standard catalog layout: regions 1, 2 and 5 as the
    /// primary line, region 3 as the gated second line, region 6 as cradle.
    pub fn standard() -> DefensePlanner {
        use crate::catalog::*;
        DefensePlanner::new(
            vec![REGION_1.build(), REGION_2.build(), REGION_5.build()],
            REGION_3.build(),
            REGION_6.build(),
        )
    }

    /// Whether the secondary region is attempted on this turn.
    pub fn secondary_gate(turn_number: u32) -> bool {
        turn_number == 1 || turn_number % 2 == 0
    }

    /// Look up any owned region by number, for dynamic slot discovery.
    pub fn region_mut(&mut self, number: u8) -> Option<&mut Region> {
        self.primary
            .iter_mut()
            .chain(std::iter::once(&mut self.secondary))
            .chain(std::iter::once(&mut self.cradle))
            .find(|region| region.number() == number)
    }

    /// Attempt the base defenses: primary walls then primary turrets every
    /// turn, secondary walls then turrets on gated turns.
    pub fn apply_base(&self, game: &mut dyn GameApi) {
        let walls = self
            .primary
            .iter()
            .flat_map(|region| region.walls().iter().copied())
            .collect_vec();
        let turrets = self
            .primary
            .iter()
            .flat_map(|region| region.turrets().iter().copied())
            .collect_vec();

        let mut placed = game.attempt_spawn_all(UnitKind::Wall, &walls);
        placed += game.attempt_spawn_all(UnitKind::Turret, &turrets);

        if Self::secondary_gate(game.turn_number()) {
            placed += game.attempt_spawn_all(UnitKind::Wall, self.secondary.walls());
            placed += game.attempt_spawn_all(UnitKind::Turret, self.secondary.turrets());
        }

        debug!(
            "turn {}: base defenses placed {} structures",
            game.turn_number(),
            placed
        );
    }

    /// Attempt one turret above every breach recorded so far. Re-attempted
    /// on every turn; occupied cells are no-ops at the host layer.
    pub fn apply_reactive(&self, game: &mut dyn GameApi, tracker: &BreachTracker) {
        for target in tracker.reactive_targets() {
            game.attempt_spawn(UnitKind::Turret, target, 1);
        }
    }

    /// Optional play: fill the support cradle.
    pub fn apply_supports(&self, game: &mut dyn GameApi) {
        let placed = game.attempt_spawn_all(UnitKind::Support, self.cradle.supports());
        debug!("support play placed {} supports", placed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::*;
    use fnv::FnvHashSet;

    fn loc(x: u32, y: u32) -> Location {
        Location::from_coords(x, y)
    }

    /// Minimal host double: tracks occupancy, records every spawn attempt.
    struct RecordingGame {
        turn: u32,
        occupied: FnvHashSet<Location>,
        placed: Vec<(UnitKind, Location)>,
    }

    impl RecordingGame {
        fn at_turn(turn: u32) -> RecordingGame {
            RecordingGame {
                turn,
                occupied: FnvHashSet::default(),
                placed: Vec::new(),
            }
        }

        fn placed_of(&self, kind: UnitKind) -> Vec<Location> {
            self.placed
                .iter()
                .filter(|(k, _)| *k == kind)
                .map(|(_, l)| *l)
                .collect()
        }
    }

    impl GameApi for RecordingGame {
        fn turn_number(&self) -> u32 {
            self.turn
        }

        fn attempt_spawn(&mut self, kind: UnitKind, location: Location, count: u32) -> u32 {
            if kind.is_structure() {
                if !self.occupied.insert(location) {
                    return 0;
                }
                self.placed.push((kind, location));
                1
            } else {
                self.placed.push((kind, location));
                count
            }
        }

        fn find_path_to_edge(&self, _start: Location) -> Vec<Location> {
            Vec::new()
        }

        fn attackers_on(&self, _location: Location, _target_player: Player) -> usize {
            0
        }

        fn contains_stationary_unit(&self, location: Location) -> bool {
            self.occupied.contains(&location)
        }

        fn resource(&self, _kind: Resource) -> f32 {
            f32::INFINITY
        }

        fn submit_turn(&mut self) {}
    }

    #[test]
    fn secondary_gate_firing_set() {
        let fired: Vec<u32> = (0..=4).filter(|&t| DefensePlanner::secondary_gate(t)).collect();
        assert_eq!(fired, vec![0, 1, 2, 4]);
    }

    #[test]
    fn base_pass_places_walls_before_turrets() {
        let planner = DefensePlanner::standard();
        let mut game = RecordingGame::at_turn(3); // secondary gate closed
        planner.apply_base(&mut game);

        let first_turret = game
            .placed
            .iter()
            .position(|(k, _)| *k == UnitKind::Turret)
            .unwrap();
        assert!(game.placed[..first_turret]
            .iter()
            .all(|(k, _)| *k == UnitKind::Wall));
        // Secondary region untouched on a gated-off turn.
        assert!(!game.placed_of(UnitKind::Wall).contains(&loc(4, 10)));
        assert!(!game.placed_of(UnitKind::Turret).contains(&loc(20, 9)));
    }

    #[test]
    fn gated_turn_adds_the_secondary_region() {
        let planner = DefensePlanner::standard();
        let mut game = RecordingGame::at_turn(2);
        planner.apply_base(&mut game);
        assert!(game.placed_of(UnitKind::Wall).contains(&loc(4, 10)));
        assert!(game.placed_of(UnitKind::Turret).contains(&loc(20, 9)));
    }

    #[test]
    fn repeated_invocation_is_idempotent_against_occupancy() {
        let planner = DefensePlanner::standard();
        let mut game = RecordingGame::at_turn(0);
        planner.apply_base(&mut game);
        let placed_once = game.placed.len();
        planner.apply_base(&mut game);
        assert_eq!(game.placed.len(), placed_once);
    }

    #[test]
    fn reactive_pass_builds_above_each_breach() {
        let planner = DefensePlanner::standard();
        let mut tracker = BreachTracker::new();
        tracker.record_breach(loc(5, 12), Player::Opponent);
        tracker.record_breach(loc(21, 11), Player::Opponent);

        let mut game = RecordingGame::at_turn(4);
        planner.apply_reactive(&mut game, &tracker);
        assert_eq!(
            game.placed_of(UnitKind::Turret),
            vec![loc(5, 13), loc(21, 12)]
        );
    }

    #[test]
    fn support_play_fills_the_cradle() {
        let planner = DefensePlanner::standard();
        let mut game = RecordingGame::at_turn(0);
        planner.apply_supports(&mut game);
        assert_eq!(game.placed_of(UnitKind::Support).len(), 12);
    }

    #[test]
    fn discovered_slots_are_reachable_by_region_number() {
        let mut planner = DefensePlanner::standard();
        let region = planner.region_mut(3).unwrap();
        region.add_wall(loc(6, 10));
        let mut game = RecordingGame::at_turn(2);
        planner.apply_base(&mut game);
        assert!(game.placed_of(UnitKind::Wall).contains(&loc(6, 10)));
    }
}
