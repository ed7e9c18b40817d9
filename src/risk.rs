use crate::config::*;
use crate::game::*;
use crate::location::*;
use itertools::Itertools;
use std::cmp::Ordering;

/// Estimates incoming damage along a mobile unit's path to pick the safest
/// deploy cell.
///
/// The estimate is structural, not a simulation: for each cell of the
/// host-computed path, the number of enemy structures able to hit that cell
/// times the per-shot turret damage. A candidate whose path is empty
/// (unreachable) accumulates zero damage and therefore wins the minimum —
/// deliberate current behavior, not a guarantee of safety.
#[derive(Copy, Clone, Debug)]
pub struct DeploymentRisk {
    turret_damage: f32,
}

impl DeploymentRisk {
    pub fn new(turret_damage: f32) -> DeploymentRisk {
        DeploymentRisk { turret_damage }
    }

    pub fn from_catalog(catalog: &UnitCatalog) -> DeploymentRisk {
        DeploymentRisk::new(catalog.turret_damage())
    }

    /// Estimated damage taken along the path induced by deploying at `start`.
    pub fn path_damage(&self, game: &dyn GameApi, start: Location) -> f32 {
        game.find_path_to_edge(start)
            .iter()
            .map(|&cell| game.attackers_on(cell, Player::Us) as f32 * self.turret_damage)
            .sum()
    }

    /// The candidate with the lowest estimated path damage. Ties go to the
    /// earliest candidate in the input order; `None` only for no candidates.
    pub fn least_damage_location(
        &self,
        game: &dyn GameApi,
        candidates: &[Location],
    ) -> Option<Location> {
        candidates
            .iter()
            .map(|&candidate| self.path_damage(game, candidate))
            .position_min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|index| candidates[index])
    }
}
