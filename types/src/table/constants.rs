/// Number of faces on the cube; picks and rolls are in `1..=CUBE_FACES`.
pub const CUBE_FACES: u8 = 6;

/// Maximum name length for table players
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum seats at a single table
pub const MAX_PLAYERS: usize = 8;

/// Starting bankroll for the default (two-seat) table
pub const DEFAULT_STARTING_BANKROLL: i64 = 200;

/// Starting ante for the default table
pub const DEFAULT_STARTING_MIN_BET: u64 = 10;

/// Ante increase applied at each escalation step
pub const DEFAULT_BET_INCREMENT: u64 = 5;

/// Resolved rounds between escalation steps
pub const DEFAULT_ROUNDS_PER_STEP: u64 = 5;

// Solo-room preset. The single-seat room runs a faster, harsher schedule
// and boots the player to the lobby once the ante can no longer be covered.
pub const SOLO_STARTING_BANKROLL: i64 = 100;
pub const SOLO_STARTING_MIN_BET: u64 = 20;
pub const SOLO_BET_INCREMENT: u64 = 10;
pub const SOLO_ROUNDS_PER_STEP: u64 = 3;
