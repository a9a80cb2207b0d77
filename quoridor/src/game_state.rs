use std::fmt;

use anyhow::{bail, Result};
use log::debug;

use super::action::{Action, Orientation, Wall};
use super::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use super::coordinate::{position_to_coord, Coordinate};
use super::geometry::{Geometry, WallBoards};
use super::player::{seats, Goal, Seat};
use super::reason::Reason;
use super::zobrist::Zobrist;

/// What changed when a move was applied. Handing the record back to `undo_move` reverses the move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub player: usize,
    pub kind: MoveKind,
    /// Whether the move ended the game in the mover's favour.
    pub won: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Pawn { from: Coordinate, to: Coordinate },
    Wall(Wall),
}

impl MoveRecord {
    pub fn action(&self) -> Action {
        match self.kind {
            MoveKind::Pawn { to, .. } => Action::MovePawn(to),
            MoveKind::Wall(wall) => Action::PlaceWall(wall),
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.action())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    geometry: Geometry,
    seats: Vec<Seat>,
    pawns: Vec<Coordinate>,
    walls_remaining: Vec<usize>,
    walls: WallBoards,
    current_player: usize,
    winner: Option<usize>,
    move_history: Vec<MoveRecord>,
    zobrist: Zobrist,
}

impl GameState {
    /// A standard two player game on a 9x9 board.
    pub fn initial() -> Self {
        Self::build(DEFAULT_BOARD_SIZE, 2)
    }

    pub fn new(board_size: usize, num_players: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) || board_size % 2 == 0 {
            bail!(
                "Board size must be odd and between {} and {}, found {}",
                MIN_BOARD_SIZE,
                MAX_BOARD_SIZE,
                board_size
            );
        }

        if num_players != 2 && num_players != 4 {
            bail!("Only 2 or 4 players are supported, found {}", num_players);
        }

        Ok(Self::build(board_size, num_players))
    }

    fn build(board_size: usize, num_players: usize) -> Self {
        let geometry = Geometry::new(board_size);
        let seats = seats(board_size, num_players);
        let pawns = seats.iter().map(|s| s.start).collect::<Vec<_>>();
        let walls_remaining = seats.iter().map(|s| s.walls).collect::<Vec<_>>();
        let zobrist = Zobrist::initial(board_size, &pawns, &walls_remaining, 1);

        Self {
            geometry,
            seats,
            pawns,
            walls_remaining,
            walls: WallBoards::default(),
            current_player: 1,
            winner: None,
            move_history: Vec::new(),
            zobrist,
        }
    }

    /// Parses and applies a move token for the player to move.
    ///
    /// On failure the state is left exactly as it was.
    pub fn apply_move(&mut self, token: &str) -> Result<MoveRecord, Reason> {
        if self.is_game_over() {
            return Err(Reason::GameOver);
        }

        let action = token.parse::<Action>()?;

        self.apply_action(&action)
    }

    pub fn apply_action(&mut self, action: &Action) -> Result<MoveRecord, Reason> {
        if self.is_game_over() {
            return Err(Reason::GameOver);
        }

        let player = self.current_player;

        let record = match action {
            Action::MovePawn(target) => {
                self.check_pawn_move(player, target)?;
                self.move_pawn(player, *target)
            }
            Action::PlaceWall(wall) => {
                self.check_wall_placement(player, wall)?;
                self.place_wall(player, *wall)
            }
        };

        if !record.won {
            self.increment_turn();
        }

        self.move_history.push(record);

        Ok(record)
    }

    /// Reverses the most recently applied move.
    ///
    /// # Panics
    ///
    /// When `record` is not the last applied move, or when the game was already won before it.
    pub fn undo_move(&mut self, record: MoveRecord) {
        let last = self.move_history.pop();
        assert_eq!(
            last,
            Some(record),
            "Moves must be undone in reverse order of application"
        );
        assert!(
            self.winner.is_none() || record.won,
            "Cannot undo a move made after the game was won"
        );

        if self.current_player != record.player {
            self.zobrist = self.zobrist.pass_turn(self.current_player, record.player);
            self.current_player = record.player;
        }

        let board_size = self.board_size();

        match record.kind {
            MoveKind::Pawn { from, to } => {
                self.zobrist = self.zobrist.move_pawn(board_size, record.player, &from, &to);
                self.pawns[record.player - 1] = from;
            }
            MoveKind::Wall(wall) => {
                let walls_before = self.walls_remaining[record.player - 1] + 1;
                self.zobrist = self
                    .zobrist
                    .place_wall(board_size, record.player, &wall, walls_before);
                self.walls_remaining[record.player - 1] = walls_before;
                let bit = self.geometry.bit(&wall.anchor);
                *self.wall_board_mut(wall.orientation) &= !bit;
            }
        }

        self.winner = None;
    }

    fn move_pawn(&mut self, player: usize, target: Coordinate) -> MoveRecord {
        let from = self.pawns[player - 1];
        self.zobrist = self
            .zobrist
            .move_pawn(self.board_size(), player, &from, &target);
        self.pawns[player - 1] = target;

        let won = self.seats[player - 1].goal.is_reached(&target);
        if won {
            debug!("Player {} reached their goal at {}", player, target);
            self.winner = Some(player);
        }

        MoveRecord {
            player,
            kind: MoveKind::Pawn { from, to: target },
            won,
        }
    }

    fn place_wall(&mut self, player: usize, wall: Wall) -> MoveRecord {
        let walls_before = self.walls_remaining[player - 1];
        self.zobrist = self
            .zobrist
            .place_wall(self.board_size(), player, &wall, walls_before);
        self.walls_remaining[player - 1] = walls_before - 1;
        let bit = self.geometry.bit(&wall.anchor);
        *self.wall_board_mut(wall.orientation) |= bit;

        MoveRecord {
            player,
            kind: MoveKind::Wall(wall),
            won: false,
        }
    }

    fn increment_turn(&mut self) {
        let next = self.current_player % self.num_players() + 1;
        self.zobrist = self.zobrist.pass_turn(self.current_player, next);
        self.current_player = next;
    }

    fn wall_board_mut(&mut self, orientation: Orientation) -> &mut u128 {
        match orientation {
            Orientation::Horizontal => &mut self.walls.horizontal,
            Orientation::Vertical => &mut self.walls.vertical,
        }
    }

    pub fn board_size(&self) -> usize {
        self.geometry.size()
    }

    pub fn num_players(&self) -> usize {
        self.seats.len()
    }

    /// Player numbers in turn order.
    pub fn players(&self) -> impl Iterator<Item = usize> {
        1..=self.num_players()
    }

    pub fn opponents(&self, player: usize) -> impl Iterator<Item = usize> {
        self.players().filter(move |p| *p != player)
    }

    pub fn pawn_position(&self, player: usize) -> Option<Coordinate> {
        self.pawns.get(player.wrapping_sub(1)).copied()
    }

    pub fn pawn_coord(&self, player: usize) -> Option<String> {
        self.pawn_position(player)
            .and_then(|pos| position_to_coord(&pos, self.board_size()))
    }

    /// Zero for players not in the game.
    pub fn walls_remaining(&self, player: usize) -> usize {
        self.walls_remaining
            .get(player.wrapping_sub(1))
            .copied()
            .unwrap_or(0)
    }

    pub fn goal(&self, player: usize) -> Option<Goal> {
        self.seats.get(player.wrapping_sub(1)).map(|s| s.goal)
    }

    /// Placed walls ordered by orientation, column, then row.
    pub fn placed_walls(&self) -> Vec<Wall> {
        let horizontal = self
            .geometry
            .coords(self.walls.horizontal)
            .map(|c| Wall::new(Orientation::Horizontal, c.row, c.col));
        let vertical = self
            .geometry
            .coords(self.walls.vertical)
            .map(|c| Wall::new(Orientation::Vertical, c.row, c.col));

        let mut walls = horizontal.chain(vertical).collect::<Vec<_>>();
        walls.sort_by_key(Wall::sort_key);
        walls
    }

    pub fn placed_wall_strings(&self) -> Vec<String> {
        self.placed_walls().iter().map(|w| w.to_string()).collect()
    }

    pub fn has_wall(&self, wall: &Wall) -> bool {
        let board = match wall.orientation {
            Orientation::Horizontal => self.walls.horizontal,
            Orientation::Vertical => self.walls.vertical,
        };

        wall.is_on_board(self.board_size()) && board & self.geometry.bit(&wall.anchor) != 0
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn move_number(&self) -> usize {
        self.move_history.len()
    }

    pub fn transposition_hash(&self) -> u64 {
        self.zobrist.board_state_hash()
    }

    pub(crate) fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub(crate) fn walls(&self) -> &WallBoards {
        &self.walls
    }

    pub(crate) fn seat(&self, player: usize) -> Option<&Seat> {
        self.seats.get(player.wrapping_sub(1))
    }

    /// Bit board of every pawn except `player`'s.
    pub(crate) fn other_pawns(&self, player: usize) -> u128 {
        self.pawns
            .iter()
            .enumerate()
            .filter(|(i, _)| i + 1 != player)
            .fold(0, |board, (_, pawn)| board | self.geometry.bit(pawn))
    }
}

impl engine::TranspositionHash for GameState {
    fn transposition_hash(&self) -> u64 {
        self.zobrist.board_state_hash()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
