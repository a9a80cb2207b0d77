use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use super::constants::ASCII_LETTER_A;
use super::coordinate::Coordinate;
use super::game_state::GameState;
use super::geometry::Direction;

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let geometry = self.geometry();
        let walls = self.walls();
        let size = geometry.size();

        let blocked_north = geometry.blocked(Direction::North, walls);
        let blocked_east = geometry.blocked(Direction::East, walls);
        let is_set = |board: u128, row: usize, col: usize| {
            board & geometry.bit(&Coordinate::new(row, col)) != 0
        };

        writeln!(f)?;
        writeln!(f, "   +{}", "---+".repeat(size))?;

        for row in (0..size).rev() {
            write!(f, "{:>2} |", row + 1)?;

            for col in 0..size {
                let coord = Coordinate::new(row, col);
                let pawn = self
                    .players()
                    .find(|p| self.pawn_position(*p) == Some(coord))
                    .map_or(' ', |p| (b'0' + p as u8) as char);
                let side = if is_set(blocked_east, row, col) {
                    "█"
                } else {
                    "|"
                };

                write!(f, " {} {}", pawn, side)?;
            }

            writeln!(f)?;
            write!(f, "   +")?;

            for col in 0..size {
                if row == 0 {
                    write!(f, "---+")?;
                    continue;
                }

                // Edges between this row and the one below, keyed by the lower cell.
                let below = row - 1;
                let edge = if is_set(blocked_north, below, col) {
                    "■■■"
                } else {
                    "---"
                };
                let corner = if is_set(walls.horizontal, below, col) {
                    "■"
                } else if is_set(walls.vertical, below, col) {
                    "█"
                } else {
                    "+"
                };

                write!(f, "{}{}", edge, corner)?;
            }

            writeln!(f)?;
        }

        let col_letters = (0..size)
            .map(|col| (ASCII_LETTER_A + col as u8) as char)
            .join("   ");

        writeln!(f, "     {}", col_letters)?;
        writeln!(f)?;
        writeln!(
            f,
            "  {}",
            self.players()
                .map(|p| format!("P{}: {}", p, self.walls_remaining(p)))
                .join("  ")
        )?;

        Ok(())
    }
}
