use crate::constants::*;
use serde::de::Error as _;
use serde::*;

/// A single cell on the shared arena grid.
///
/// Packed into a `u16` so locations are cheap to copy, hash and store in the
/// per-region slot lists. Equality is by value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct Location {
    packed: u16,
}

impl Location {
    pub fn from_coords(x: u32, y: u32) -> Self {
        Location {
            packed: ((x << 8) | y) as u16,
        }
    }

    #[inline]
    pub fn x(self) -> u8 {
        ((self.packed >> 8) & 0xFF) as u8
    }

    #[inline]
    pub fn y(self) -> u8 {
        (self.packed & 0xFF) as u8
    }

    #[inline]
    pub fn packed_repr(self) -> u16 {
        self.packed
    }

    #[inline]
    pub fn from_packed(packed: u16) -> Self {
        Location { packed }
    }

    /// Offset by a cell delta, returning `None` if the result leaves the arena.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Location> {
        let x = self.x() as i16 + dx as i16;
        let y = self.y() as i16 + dy as i16;
        if x >= 0 && y >= 0 && x < MAP_WIDTH as i16 && y < MAP_HEIGHT as i16 {
            Some(Location::from_coords(x as u32, y as u32))
        } else {
            None
        }
    }

    pub fn distance_to(self, other: Self) -> u8 {
        let dx = (self.x() as i8) - (other.x() as i8);
        let dy = (self.y() as i8) - (other.y() as i8);

        dx.abs().max(dy.abs()) as u8
    }
}

/// All deploy cells on the friendly half's two diagonal edges, bottom-left
/// edge first, each edge ordered from its corner upward.
pub fn friendly_edges() -> Vec<Location> {
    let mut edges = Vec::with_capacity(HALF_ARENA as usize * 2);
    // Bottom-left edge: (13, 0) up to (0, 13)
    for i in 0..HALF_ARENA {
        edges.push(Location::from_coords(
            (HALF_ARENA - 1 - i) as u32,
            i as u32,
        ));
    }
    // Bottom-right edge: (14, 0) up to (27, 13)
    for i in 0..HALF_ARENA {
        edges.push(Location::from_coords((HALF_ARENA + i) as u32, i as u32));
    }
    edges
}

// Wire form is the `[x, y]` pair the engine payloads use.
impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.x(), self.y()].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = <[u8; 2]>::deserialize(deserializer)?;
        if x >= MAP_WIDTH || y >= MAP_HEIGHT {
            return Err(D::Error::custom(format!(
                "location [{}, {}] outside the arena",
                x, y
            )));
        }
        Ok(Location::from_coords(x as u32, y as u32))
    }
}
