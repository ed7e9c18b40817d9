//! Per-turn orchestration.
//!
//! One fixed script per turn: base defenses, reactive defenses, the scripted
//! turn-0 opening, the periodic risk-estimated scout wave, then exactly one
//! turn submission. Defenses always run before mobile deployments so
//! structure slots are claimed before troops spend anything, and submission
//! is always last — the one state-advancing call the host sees.

use crate::breach::*;
use crate::config::*;
use crate::constants::*;
use crate::defense::*;
use crate::game::*;
use crate::location::*;
use crate::risk::*;
use log::*;

/// Named deployment parameters of the turn script. These are configuration,
/// not control flow: override them to reshape the opening or the wave
/// without touching the script itself.
#[derive(Clone, Debug)]
pub struct StrategyConfig {
    /// Deploy cell for the one-off turn-0 scout opening.
    pub opening_spawn: Location,
    /// Scouts sent in the opening.
    pub opening_count: u32,
    /// Candidate deploy cells evaluated for each scout wave.
    pub wave_candidates: Vec<Location>,
    /// Scouts sent per wave.
    pub wave_size: u32,
    /// A wave is sent on every turn divisible by this; must be nonzero.
    pub wave_period: u32,
}

impl Default for StrategyConfig {
    fn default() -> StrategyConfig {
        StrategyConfig {
            opening_spawn: Location::from_coords(OPENING_SPAWN.0, OPENING_SPAWN.1),
            opening_count: OPENING_COUNT,
            wave_candidates: WAVE_CANDIDATES
                .iter()
                .map(|&(x, y)| Location::from_coords(x, y))
                .collect(),
            wave_size: WAVE_SIZE,
            wave_period: WAVE_PERIOD,
        }
    }
}

/// Owns the match-lifetime decision state and runs the per-turn script.
pub struct TurnOrchestrator {
    catalog: UnitCatalog,
    planner: DefensePlanner,
    tracker: BreachTracker,
    config: StrategyConfig,
}

impl TurnOrchestrator {
    pub fn new(
        catalog: UnitCatalog,
        planner: DefensePlanner,
        config: StrategyConfig,
    ) -> TurnOrchestrator {
        TurnOrchestrator {
            catalog,
            planner,
            tracker: BreachTracker::new(),
            config,
        }
    }

    /// Orchestrator over the standard layout with default script parameters.
    pub fn standard(catalog: UnitCatalog) -> TurnOrchestrator {
        TurnOrchestrator::new(catalog, DefensePlanner::standard(), StrategyConfig::default())
    }

    pub fn tracker(&self) -> &BreachTracker {
        &self.tracker
    }

    pub fn planner_mut(&mut self) -> &mut DefensePlanner {
        &mut self.planner
    }

    /// Action-frame hook. Called by the host many times per turn, strictly
    /// interleaved with turn processing; breaches recorded here feed the
    /// reactive pass from the next turn on. Unreadable payloads are logged
    /// and dropped, never fatal.
    pub fn on_action_frame(&mut self, payload: &str) {
        match self.tracker.ingest_frame(payload) {
            Ok(recorded) if recorded > 0 => {
                debug!(
                    "recorded {} breaches, {} total",
                    recorded,
                    self.tracker.breaches().len()
                );
            }
            Ok(_) => {}
            Err(err) => warn!("dropping unreadable action frame: {}", err),
        }
    }

    /// The per-turn script. Invoked once per turn by the host.
    pub fn on_turn(&mut self, game: &mut dyn GameApi) {
        let turn = game.turn_number();
        debug!("performing turn {}", turn);

        self.planner.apply_base(game);
        self.planner.apply_reactive(game, &self.tracker);

        if turn == 0 {
            game.attempt_spawn(
                UnitKind::Scout,
                self.config.opening_spawn,
                self.config.opening_count,
            );
        }

        if turn % self.config.wave_period == 0 {
            let risk = DeploymentRisk::from_catalog(&self.catalog);
            if let Some(best) = risk.least_damage_location(game, &self.config.wave_candidates) {
                debug!("scout wave from [{}, {}]", best.x(), best.y());
                game.attempt_spawn(UnitKind::Scout, best, self.config.wave_size);
            }
        }

        game.submit_turn();
    }

    /// Optional play: build a line of the cheapest structure along the
    /// demolisher row so demolishers hold range on the enemy front, then
    /// spawn as many demolishers behind it as resources allow.
    pub fn demolisher_line(&self, game: &mut dyn GameApi) {
        let cheapest = self.catalog.cheapest_structure();
        for x in (6..MAP_WIDTH as u32).rev() {
            game.attempt_spawn(cheapest, Location::from_coords(x, DEMOLISHER_LINE_Y), 1);
        }
        // Oversized count saturates against the mobile-point balance.
        let anchor = Location::from_coords(DEMOLISHER_LINE_SPAWN.0, DEMOLISHER_LINE_SPAWN.1);
        game.attempt_spawn(UnitKind::Demolisher, anchor, 1000);
    }

    /// Friendly edge cells not blocked by our own structures.
    pub fn deployable_edges(&self, game: &dyn GameApi) -> Vec<Location> {
        friendly_edges()
            .into_iter()
            .filter(|&location| !game.contains_stationary_unit(location))
            .collect()
    }
}
