use crate::location::*;

/// The structure category a region slot is reserved for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StructureSlot {
    Wall,
    Turret,
    Support,
}

/// A named cluster of map cells reserved for specific structure categories.
///
/// A region owns one ordered slot list per category plus a free-form
/// membership list. Lists only ever grow: `add` appends without
/// de-duplication, and re-building an occupied slot is a no-op at the host
/// layer, so duplicates are harmless. The same coordinate appearing in two
/// categories (or two regions) is a caller error and is not validated here.
#[derive(Clone, Debug)]
pub struct Region {
    number: u8,
    coordinates: Vec<Location>,
    walls: Vec<Location>,
    turrets: Vec<Location>,
    supports: Vec<Location>,
}

impl Region {
    pub fn new(
        number: u8,
        coordinates: Vec<Location>,
        walls: Vec<Location>,
        turrets: Vec<Location>,
        supports: Vec<Location>,
    ) -> Region {
        Region {
            number,
            coordinates,
            walls,
            turrets,
            supports,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    fn slot_list(&self, slot: StructureSlot) -> &Vec<Location> {
        match slot {
            StructureSlot::Wall => &self.walls,
            StructureSlot::Turret => &self.turrets,
            StructureSlot::Support => &self.supports,
        }
    }

    /// Returns the coordinate if it is a slot of the given category.
    pub fn get(&self, location: Location, slot: StructureSlot) -> Option<Location> {
        self.slot_list(slot).iter().copied().find(|c| *c == location)
    }

    /// Appends a slot to the given category list.
    pub fn add(&mut self, location: Location, slot: StructureSlot) {
        match slot {
            StructureSlot::Wall => self.walls.push(location),
            StructureSlot::Turret => self.turrets.push(location),
            StructureSlot::Support => self.supports.push(location),
        }
    }

    pub fn add_wall(&mut self, location: Location) {
        self.add(location, StructureSlot::Wall);
    }

    pub fn add_turret(&mut self, location: Location) {
        self.add(location, StructureSlot::Turret);
    }

    pub fn add_support(&mut self, location: Location) {
        self.add(location, StructureSlot::Support);
    }

    /// True iff the coordinate is absent from all three category lists.
    pub fn is_empty(&self, location: Location) -> bool {
        self.get(location, StructureSlot::Wall).is_none()
            && self.get(location, StructureSlot::Turret).is_none()
            && self.get(location, StructureSlot::Support).is_none()
    }

    pub fn list(&self, slot: StructureSlot) -> &[Location] {
        self.slot_list(slot)
    }

    pub fn walls(&self) -> &[Location] {
        &self.walls
    }

    pub fn turrets(&self) -> &[Location] {
        &self.turrets
    }

    pub fn supports(&self) -> &[Location] {
        &self.supports
    }

    pub fn coordinates(&self) -> &[Location] {
        &self.coordinates
    }
}
