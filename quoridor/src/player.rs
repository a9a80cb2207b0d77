use serde::Serialize;

use super::constants::{FOUR_PLAYER_WALLS, TWO_PLAYER_WALLS};
use super::coordinate::Coordinate;
use super::geometry::Geometry;

/// The line a player must reach to win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Goal {
    Row(usize),
    Column(usize),
}

impl Goal {
    pub fn is_reached(&self, coord: &Coordinate) -> bool {
        match self {
            Goal::Row(row) => coord.row == *row,
            Goal::Column(col) => coord.col == *col,
        }
    }

    /// Straight line distance to the goal, ignoring walls.
    pub fn distance(&self, coord: &Coordinate) -> usize {
        match self {
            Goal::Row(row) => coord.row.abs_diff(*row),
            Goal::Column(col) => coord.col.abs_diff(*col),
        }
    }

    pub fn mask(&self, geometry: &Geometry) -> u128 {
        match self {
            Goal::Row(row) => geometry.row_mask(*row),
            Goal::Column(col) => geometry.column_mask(*col),
        }
    }
}

/// Where a player starts, what they race towards, and their wall budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seat {
    pub player: usize,
    pub start: Coordinate,
    pub goal: Goal,
    pub walls: usize,
}

/// Seats for a game, indexed by player number minus one.
///
/// Player 1 starts mid south and races north, player 2 the reverse. With four players, player 3
/// starts mid west racing east and player 4 the reverse.
pub fn seats(board_size: usize, num_players: usize) -> Vec<Seat> {
    let last = board_size - 1;
    let mid = board_size / 2;
    let walls = if num_players > 2 {
        FOUR_PLAYER_WALLS
    } else {
        TWO_PLAYER_WALLS
    };

    let layout = [
        (Coordinate::new(0, mid), Goal::Row(last)),
        (Coordinate::new(last, mid), Goal::Row(0)),
        (Coordinate::new(mid, 0), Goal::Column(last)),
        (Coordinate::new(mid, last), Goal::Column(0)),
    ];

    layout
        .iter()
        .take(num_players)
        .enumerate()
        .map(|(i, (start, goal))| Seat {
            player: i + 1,
            start: *start,
            goal: *goal,
            walls,
        })
        .collect()
}
