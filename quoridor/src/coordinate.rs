use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::constants::ASCII_LETTER_A;
use super::reason::Reason;

static COORDINATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z])([0-9]+)$").unwrap());

/// A cell on the board.
///
/// Row 0 is rank `1`, the home row of player 1. Column 0 is file `A`. Ordering is row major, which
/// is also the order of the cell's bit on a bit board.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }

    pub fn index(&self, board_size: usize) -> usize {
        self.row * board_size + self.col
    }

    pub fn from_index(index: usize, board_size: usize) -> Self {
        Self {
            row: index / board_size,
            col: index % board_size,
        }
    }

    /// Number of orthogonal steps between two cells, ignoring walls.
    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn col_letter(&self) -> char {
        (ASCII_LETTER_A + self.col as u8) as char
    }
}

/// Parses an algebraic coordinate such as `E2`, returning `None` when it is malformed or off a board of
/// `board_size`.
pub fn coord_to_position(text: &str, board_size: usize) -> Option<Coordinate> {
    text.parse::<Coordinate>()
        .ok()
        .filter(|coord| coord.is_on_board(board_size))
}

pub fn position_to_coord(position: &Coordinate, board_size: usize) -> Option<String> {
    if position.is_on_board(board_size) {
        Some(position.to_string())
    } else {
        None
    }
}

impl FromStr for Coordinate {
    type Err = Reason;

    /// Accepts a column letter followed by a 1 based row number. Bounds are left to the caller since
    /// they depend on the board size.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let cap = COORDINATE_RE
            .captures(&upper)
            .ok_or(Reason::InvalidCoordinate)?;

        let col = (cap[1].as_bytes()[0] - ASCII_LETTER_A) as usize;
        let row = cap[2]
            .parse::<usize>()
            .ok()
            .filter(|row| *row >= 1)
            .ok_or(Reason::InvalidCoordinate)?;

        Ok(Coordinate::new(row - 1, col))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.col_letter(), self.row + 1)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_e2() {
        assert_eq!("E2".parse::<Coordinate>(), Ok(Coordinate::new(1, 4)));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("a1".parse::<Coordinate>(), Ok(Coordinate::new(0, 0)));
        assert_eq!("i9".parse::<Coordinate>(), Ok(Coordinate::new(8, 8)));
    }

    #[test]
    fn test_parse_multi_digit_row() {
        assert_eq!("K11".parse::<Coordinate>(), Ok(Coordinate::new(10, 10)));
        assert_eq!("E05".parse::<Coordinate>(), Ok(Coordinate::new(4, 4)));
    }

    #[test]
    fn test_parse_malformed() {
        for text in ["", "E", "5E", "E0", "EE", "E-1", "E2X", "$2", "E 2"] {
            assert_eq!(
                text.parse::<Coordinate>(),
                Err(Reason::InvalidCoordinate),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn test_coord_to_position_bounds() {
        assert_eq!(coord_to_position("I9", 9), Some(Coordinate::new(8, 8)));
        assert_eq!(coord_to_position("J1", 9), None);
        assert_eq!(coord_to_position("A10", 9), None);
        assert_eq!(coord_to_position("C3", 3), Some(Coordinate::new(2, 2)));
        assert_eq!(coord_to_position("nonsense", 9), None);
    }

    #[test]
    fn test_position_to_coord() {
        assert_eq!(
            position_to_coord(&Coordinate::new(0, 4), 9),
            Some("E1".to_string())
        );
        assert_eq!(
            position_to_coord(&Coordinate::new(8, 4), 9),
            Some("E9".to_string())
        );
        assert_eq!(position_to_coord(&Coordinate::new(9, 0), 9), None);
        assert_eq!(position_to_coord(&Coordinate::new(0, 9), 9), None);
    }

    #[test]
    fn test_coordinate_to_from_index_all() {
        for board_size in [3, 5, 9, 11] {
            for index in 0..board_size * board_size {
                let coord = Coordinate::from_index(index, board_size);

                assert!(coord.is_on_board(board_size));
                assert_eq!(coord.index(board_size), index);
                assert_eq!(
                    coord_to_position(&coord.to_string(), board_size),
                    Some(coord)
                );
            }
        }
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut coords = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 2),
            Coordinate::new(0, 1),
        ];
        coords.sort();

        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(1, 0)
            ]
        );
    }
}
