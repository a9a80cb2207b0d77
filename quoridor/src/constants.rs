pub const DEFAULT_BOARD_SIZE: usize = 9;
pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 11;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

pub const MAX_PLAYERS: usize = 4;
pub const TWO_PLAYER_WALLS: usize = 10;
pub const FOUR_PLAYER_WALLS: usize = 5;

pub const ASCII_LETTER_A: u8 = b'A';

/// Games that run longer than this are abandoned as draws.
pub const MAX_NUMBER_OF_MOVES: usize = 200;
