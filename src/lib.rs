//! Per-turn decision engine for a two-player grid tower-defense match.
//!
//! The host harness owns the wire protocol, pathfinding and resource
//! accounting; it implements [`GameApi`] and drives a [`TurnOrchestrator`]
//! with one `on_turn` call per turn plus any number of interleaved
//! `on_action_frame` calls. Everything in between — region slot tables,
//! gated defense builds, breach reaction, deploy-risk estimation — is
//! deterministic rules over declarative data.

pub mod breach;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod defense;
pub mod game;
pub mod location;
pub mod region;
pub mod risk;
pub mod strategy;

pub use breach::{BreachTracker, FrameError};
pub use catalog::{standard_layout, RegionSpec};
pub use config::{ConfigError, Player, Resource, UnitCatalog, UnitKind};
pub use defense::DefensePlanner;
pub use game::GameApi;
pub use location::Location;
pub use region::{Region, StructureSlot};
pub use risk::DeploymentRisk;
pub use strategy::{StrategyConfig, TurnOrchestrator};
