use crate::config::*;
use crate::location::*;

/// Trait seam to the host game engine.
/// Implementations exist for the live match harness and for offline (test) use.
///
/// All placement goes through [`attempt_spawn`](GameApi::attempt_spawn), which
/// is best-effort: the host checks affordability and occupancy itself and
/// silently places fewer units than requested (possibly zero). Nothing in
/// this crate pre-checks resources or retries within a turn.
pub trait GameApi {
    /// Current turn number; starts at 0 and increases monotonically.
    fn turn_number(&self) -> u32;

    /// Try to place `count` units at `location`. Returns the number actually
    /// placed; never signals resource insufficiency.
    fn attempt_spawn(&mut self, kind: UnitKind, location: Location, count: u32) -> u32;

    /// Best-effort placement of one unit at each location, in order.
    fn attempt_spawn_all(&mut self, kind: UnitKind, locations: &[Location]) -> u32 {
        locations
            .iter()
            .map(|&location| self.attempt_spawn(kind, location, 1))
            .sum()
    }

    /// Path a mobile unit deployed at `start` would take to the opposing
    /// edge, as an ordered cell sequence. Empty if unreachable.
    fn find_path_to_edge(&self, start: Location) -> Vec<Location>;

    /// Number of placed enemy structures able to hit a unit of
    /// `target_player` standing at `location`.
    fn attackers_on(&self, location: Location, target_player: Player) -> usize;

    /// Whether a stationary unit occupies `location`.
    fn contains_stationary_unit(&self, location: Location) -> bool;

    /// Current balance of the given resource kind.
    fn resource(&self, kind: Resource) -> f32;

    /// Finalize and transmit the turn's accumulated actions. Called exactly
    /// once per turn, after every build and deploy intent has been issued.
    fn submit_turn(&mut self);
}
