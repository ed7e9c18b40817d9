pub const MAP_WIDTH: u8 = 28;
pub const MAP_HEIGHT: u8 = 28;
pub const HALF_ARENA: u8 = 14;

/// Deploy cell for the turn-0 scripted scout opening.
pub const OPENING_SPAWN: (u32, u32) = (13, 0);
/// Scouts sent in the turn-0 opening.
pub const OPENING_COUNT: u32 = 5;

/// Candidate deploy cells evaluated for the periodic scout wave:
/// back-right and back-left of the friendly half.
pub const WAVE_CANDIDATES: [(u32, u32); 2] = [(17, 3), (10, 3)];
/// Scouts sent per wave.
pub const WAVE_SIZE: u32 = 5;
/// A wave is considered every this-many turns.
pub const WAVE_PERIOD: u32 = 3;

/// Anchor cell for the demolisher-line play, one row behind the line.
pub const DEMOLISHER_LINE_SPAWN: (u32, u32) = (24, 10);
/// Row the structure line is built along.
pub const DEMOLISHER_LINE_Y: u32 = 11;
