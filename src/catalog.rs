//! Declarative region catalog.
//!
//! Pure data: the pre-surveyed slot coordinates for each named region, per
//! structure category. The engine itself is layout-agnostic — regions are
//! built from a catalog once at match start and handed to the planner, so an
//! alternative layout is a data swap, not a code change.

use crate::location::*;
use crate::region::*;

/// Static slot tables for one region.
#[derive(Copy, Clone, Debug)]
pub struct RegionSpec {
    pub number: u8,
    pub valid_walls: &'static [(u8, u8)],
    pub valid_turrets: &'static [(u8, u8)],
    pub valid_supports: &'static [(u8, u8)],
}

impl RegionSpec {
    pub fn build(&self) -> Region {
        Region::new(
            self.number,
            Vec::new(),
            to_locations(self.valid_walls),
            to_locations(self.valid_turrets),
            to_locations(self.valid_supports),
        )
    }
}

fn to_locations(coords: &[(u8, u8)]) -> Vec<Location> {
    coords
        .iter()
        .map(|&(x, y)| Location::from_coords(x as u32, y as u32))
        .collect()
}

/// Central wall line with turrets tucked behind it.
pub const REGION_1: RegionSpec = RegionSpec {
    number: 1,
    valid_walls: &[
        (7, 13),
        (8, 13),
        (9, 13),
        (10, 13),
        (11, 13),
        (16, 13),
        (17, 13),
        (18, 13),
        (19, 12),
        (20, 12),
    ],
    valid_turrets: &[(8, 12), (10, 12), (17, 12), (19, 12)],
    valid_supports: &[(7, 12), (11, 12), (16, 12), (20, 12)],
};

/// Corner anchors on both flanks.
pub const REGION_2: RegionSpec = RegionSpec {
    number: 2,
    valid_walls: &[
        (0, 13),
        (1, 13),
        (2, 13),
        (3, 13),
        (3, 12),
        (27, 13),
        (26, 13),
        (25, 13),
        (24, 13),
        (24, 12),
    ],
    valid_turrets: &[(2, 12), (25, 12)],
    valid_supports: &[],
};

/// Second-line funnel walls, built up every other turn.
pub const REGION_3: RegionSpec = RegionSpec {
    number: 3,
    valid_walls: &[(4, 10), (5, 10), (22, 10), (23, 10)],
    valid_turrets: &[(20, 9), (7, 9)],
    valid_supports: &[],
};

/// Inner keep around the troop lanes.
pub const REGION_5: RegionSpec = RegionSpec {
    number: 5,
    valid_walls: &[
        (9, 7),
        (9, 8),
        (10, 8),
        (11, 8),
        (11, 7),
        (15, 7),
        (15, 8),
        (16, 8),
        (17, 8),
        (17, 7),
    ],
    valid_turrets: &[(11, 9), (16, 9)],
    valid_supports: &[],
};

/// Support cradle along the home edge.
pub const REGION_6: RegionSpec = RegionSpec {
    number: 6,
    valid_walls: &[],
    valid_turrets: &[],
    valid_supports: &[
        (13, 0),
        (14, 0),
        (12, 1),
        (13, 1),
        (14, 1),
        (15, 1),
        (11, 2),
        (12, 2),
        (13, 2),
        (14, 2),
        (15, 2),
        (16, 2),
    ],
};

/// All regions of the standard layout, in build order.
pub const STANDARD_REGIONS: [RegionSpec; 5] =
    [REGION_1, REGION_2, REGION_3, REGION_5, REGION_6];

/// Builds the standard layout's regions.
pub fn standard_layout() -> Vec<Region> {
    STANDARD_REGIONS.iter().map(RegionSpec::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_builds_every_region() {
        let regions = standard_layout();
        let numbers: Vec<u8> = regions.iter().map(Region::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn built_regions_mirror_their_spec_tables() {
        let region = REGION_1.build();
        assert_eq!(region.walls().len(), REGION_1.valid_walls.len());
        assert_eq!(region.turrets().len(), REGION_1.valid_turrets.len());
        assert_eq!(region.supports().len(), REGION_1.valid_supports.len());
        assert_eq!(region.walls()[0], Location::from_coords(7, 13));
        assert!(!region.is_empty(Location::from_coords(8, 12)));
        assert!(region.is_empty(Location::from_coords(0, 0)));
    }

    #[test]
    fn support_cradle_sits_on_the_home_edge() {
        let region = REGION_6.build();
        assert!(region.walls().is_empty());
        assert!(region.turrets().is_empty());
        assert!(region.supports().iter().all(|c| c.y() <= 2));
    }
}
