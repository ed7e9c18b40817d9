//! Start-of-match configuration.
//!
//! The host engine sends one JSON config blob at match start. Everything the
//! decision engine needs from it — unit shorthands, costs, turret damage — is
//! resolved once into a [`UnitCatalog`] and injected into the components that
//! need it. Nothing here is consulted again after resolution.

use fnv::FnvHashMap;
use serde::Deserialize;
use thiserror::Error;

/// The two players sharing the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    Us,
    Opponent,
}

impl Player {
    /// Player index convention used by map queries (0 = us, 1 = opponent).
    pub fn index(self) -> u8 {
        match self {
            Player::Us => 0,
            Player::Opponent => 1,
        }
    }

    /// Owner convention used by action-frame events (1 = us, 2 = opponent).
    pub fn from_owner(owner: u64) -> Option<Player> {
        match owner {
            1 => Some(Player::Us),
            2 => Some(Player::Opponent),
            _ => None,
        }
    }
}

/// The two resource kinds: structure points fund stationary structures,
/// mobile points fund troops.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Resource {
    StructurePoints,
    MobilePoints,
}

impl Resource {
    pub fn index(self) -> usize {
        match self {
            Resource::StructurePoints => 0,
            Resource::MobilePoints => 1,
        }
    }
}

/// Every unit the engine can ask the host to place.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnitKind {
    Wall,
    Support,
    Turret,
    Scout,
    Demolisher,
    Interceptor,
}

impl UnitKind {
    /// Config-blob order: the host lists unit information in this sequence.
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Wall,
        UnitKind::Support,
        UnitKind::Turret,
        UnitKind::Scout,
        UnitKind::Demolisher,
        UnitKind::Interceptor,
    ];

    pub fn index(self) -> usize {
        match self {
            UnitKind::Wall => 0,
            UnitKind::Support => 1,
            UnitKind::Turret => 2,
            UnitKind::Scout => 3,
            UnitKind::Demolisher => 4,
            UnitKind::Interceptor => 5,
        }
    }

    pub fn is_structure(self) -> bool {
        matches!(self, UnitKind::Wall | UnitKind::Support | UnitKind::Turret)
    }

    pub fn is_mobile(self) -> bool {
        !self.is_structure()
    }
}

/// Failures while resolving the match config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed match config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config lists {got} unit entries, expected at least {expected}")]
    MissingUnits { got: usize, expected: usize },
}

#[derive(Deserialize)]
struct UnitInfo {
    shorthand: String,
    #[serde(default, rename = "cost1")]
    cost_structure: f32,
    #[serde(default, rename = "cost2")]
    cost_mobile: f32,
    #[serde(default, rename = "attackDamageWalker")]
    damage_walker: f32,
}

#[derive(Deserialize)]
struct MatchConfig {
    #[serde(rename = "unitInformation")]
    unit_information: Vec<UnitInfo>,
}

/// One resolved unit entry.
#[derive(Clone, Debug)]
pub struct UnitProfile {
    pub shorthand: String,
    pub cost_structure: f32,
    pub cost_mobile: f32,
    pub damage_walker: f32,
}

/// The per-match unit table, resolved once from the host's config blob.
#[derive(Clone, Debug)]
pub struct UnitCatalog {
    profiles: Vec<UnitProfile>,
    by_shorthand: FnvHashMap<String, UnitKind>,
}

impl UnitCatalog {
    /// Resolve the catalog from the raw JSON config payload.
    pub fn from_config(payload: &str) -> Result<UnitCatalog, ConfigError> {
        let config: MatchConfig = serde_json::from_str(payload)?;
        if config.unit_information.len() < UnitKind::ALL.len() {
            return Err(ConfigError::MissingUnits {
                got: config.unit_information.len(),
                expected: UnitKind::ALL.len(),
            });
        }

        let mut profiles = Vec::with_capacity(UnitKind::ALL.len());
        let mut by_shorthand = FnvHashMap::default();
        for (kind, info) in UnitKind::ALL.iter().zip(config.unit_information) {
            by_shorthand.insert(info.shorthand.clone(), *kind);
            profiles.push(UnitProfile {
                shorthand: info.shorthand,
                cost_structure: info.cost_structure,
                cost_mobile: info.cost_mobile,
                damage_walker: info.damage_walker,
            });
        }

        Ok(UnitCatalog {
            profiles,
            by_shorthand,
        })
    }

    pub fn profile(&self, kind: UnitKind) -> &UnitProfile {
        &self.profiles[kind.index()]
    }

    pub fn shorthand(&self, kind: UnitKind) -> &str {
        &self.profile(kind).shorthand
    }

    pub fn kind_for_shorthand(&self, shorthand: &str) -> Option<UnitKind> {
        self.by_shorthand.get(shorthand).copied()
    }

    pub fn cost(&self, kind: UnitKind, resource: Resource) -> f32 {
        let profile = self.profile(kind);
        match resource {
            Resource::StructurePoints => profile.cost_structure,
            Resource::MobilePoints => profile.cost_mobile,
        }
    }

    /// Damage a turret deals per shot to a walking unit.
    pub fn turret_damage(&self) -> f32 {
        self.profile(UnitKind::Turret).damage_walker
    }

    /// The structure with the lowest structure-point cost.
    pub fn cheapest_structure(&self) -> UnitKind {
        let mut cheapest = UnitKind::Wall;
        for kind in UnitKind::ALL {
            if kind.is_structure()
                && self.cost(kind, Resource::StructurePoints)
                    < self.cost(cheapest, Resource::StructurePoints)
            {
                cheapest = kind;
            }
        }
        cheapest
    }
}
