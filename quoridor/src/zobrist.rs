use super::action::{Orientation, Wall};
use super::constants::{MAX_CELLS, MAX_PLAYERS, TWO_PLAYER_WALLS};
use super::coordinate::Coordinate;

struct ZobristKeys {
    pawn: [[u64; MAX_CELLS]; MAX_PLAYERS],
    wall: [[u64; MAX_CELLS]; 2],
    walls_remaining: [[u64; TWO_PLAYER_WALLS + 1]; MAX_PLAYERS],
    to_move: [u64; MAX_PLAYERS],
}

const fn xorshift64(mut state: u64) -> u64 {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

impl ZobristKeys {
    const fn new() -> Self {
        let mut state = 0x2545_F491_4F6C_DD1Du64;

        let mut pawn = [[0u64; MAX_CELLS]; MAX_PLAYERS];
        let mut player = 0;
        while player < MAX_PLAYERS {
            let mut cell = 0;
            while cell < MAX_CELLS {
                state = xorshift64(state);
                pawn[player][cell] = state;
                cell += 1;
            }
            player += 1;
        }

        let mut wall = [[0u64; MAX_CELLS]; 2];
        let mut orientation = 0;
        while orientation < 2 {
            let mut cell = 0;
            while cell < MAX_CELLS {
                state = xorshift64(state);
                wall[orientation][cell] = state;
                cell += 1;
            }
            orientation += 1;
        }

        let mut walls_remaining = [[0u64; TWO_PLAYER_WALLS + 1]; MAX_PLAYERS];
        let mut player = 0;
        while player < MAX_PLAYERS {
            let mut count = 0;
            while count <= TWO_PLAYER_WALLS {
                state = xorshift64(state);
                walls_remaining[player][count] = state;
                count += 1;
            }
            player += 1;
        }

        let mut to_move = [0u64; MAX_PLAYERS];
        let mut player = 0;
        while player < MAX_PLAYERS {
            state = xorshift64(state);
            to_move[player] = state;
            player += 1;
        }

        Self {
            pawn,
            wall,
            walls_remaining,
            to_move,
        }
    }
}

static KEYS: ZobristKeys = ZobristKeys::new();

/// Incrementally maintained hash of pawn positions, placed walls, walls remaining and the player to
/// move. Every update is an involution, so applying the same update again reverts it.
#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub struct Zobrist {
    hash: u64,
}

impl Zobrist {
    /// Hash of a position where no walls have been placed.
    pub fn initial(
        board_size: usize,
        pawns: &[Coordinate],
        walls_remaining: &[usize],
        player_to_move: usize,
    ) -> Self {
        let pawn_hash = pawns
            .iter()
            .enumerate()
            .fold(0, |hash, (i, pawn)| hash ^ KEYS.pawn[i][pawn.index(board_size)]);

        let walls_hash = walls_remaining
            .iter()
            .enumerate()
            .fold(0, |hash, (i, count)| hash ^ KEYS.walls_remaining[i][*count]);

        Zobrist {
            hash: pawn_hash ^ walls_hash ^ KEYS.to_move[player_to_move - 1],
        }
    }

    pub fn move_pawn(&self, board_size: usize, player: usize, from: &Coordinate, to: &Coordinate) -> Self {
        let keys = &KEYS.pawn[player - 1];
        let hash = self.hash ^ keys[from.index(board_size)] ^ keys[to.index(board_size)];

        Zobrist { hash }
    }

    /// Toggles the wall and moves the player's wall count between `walls_before` and one fewer.
    pub fn place_wall(&self, board_size: usize, player: usize, wall: &Wall, walls_before: usize) -> Self {
        let orientation = match wall.orientation {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        };
        let counts = &KEYS.walls_remaining[player - 1];

        let hash = self.hash
            ^ KEYS.wall[orientation][wall.anchor.index(board_size)]
            ^ counts[walls_before]
            ^ counts[walls_before - 1];

        Zobrist { hash }
    }

    pub fn pass_turn(&self, from_player: usize, to_player: usize) -> Self {
        let hash = self.hash ^ KEYS.to_move[from_player - 1] ^ KEYS.to_move[to_player - 1];

        Zobrist { hash }
    }

    pub fn board_state_hash(&self) -> u64 {
        self.hash
    }
}
