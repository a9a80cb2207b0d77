use std::fmt;
use std::str::FromStr;

use super::coordinate::Coordinate;
use super::reason::Reason;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = Reason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H" => Ok(Orientation::Horizontal),
            "V" => Ok(Orientation::Vertical),
            _ => Err(Reason::InvalidOrientation),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "H"),
            Orientation::Vertical => write!(f, "V"),
        }
    }
}

/// A two cell long wall identified by the lower left cell it borders.
///
/// A horizontal wall at `(r, c)` separates rows `r` and `r + 1` across columns `c` and `c + 1`. A
/// vertical wall at `(r, c)` separates columns `c` and `c + 1` across rows `r` and `r + 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub orientation: Orientation,
    pub anchor: Coordinate,
}

impl Wall {
    pub fn new(orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            orientation,
            anchor: Coordinate::new(row, col),
        }
    }

    pub fn horizontal(row: usize, col: usize) -> Self {
        Self::new(Orientation::Horizontal, row, col)
    }

    pub fn vertical(row: usize, col: usize) -> Self {
        Self::new(Orientation::Vertical, row, col)
    }

    /// The anchor must leave room for the second half of the wall.
    pub fn is_on_board(&self, board_size: usize) -> bool {
        self.anchor.row + 1 < board_size && self.anchor.col + 1 < board_size
    }

    /// Walls are listed by orientation, then column, then row, matching the order of their tokens.
    pub fn sort_key(&self) -> (Orientation, usize, usize) {
        (self.orientation, self.anchor.col, self.anchor.row)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WALL {} {}", self.orientation, self.anchor)
    }
}

impl fmt::Debug for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MovePawn(Coordinate),
    PlaceWall(Wall),
}

impl Action {
    pub fn is_pawn_move(&self) -> bool {
        matches!(self, Action::MovePawn(_))
    }
}

impl From<Wall> for Action {
    fn from(wall: Wall) -> Self {
        Action::PlaceWall(wall)
    }
}

impl FromStr for Action {
    type Err = Reason;

    /// Parses `MOVE <coord>` or `WALL <H|V> <coord>`, ignoring case and surrounding whitespace.
    ///
    /// Only the grammar is checked here. A well formed coordinate may still be off the board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let parts = upper.split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            ["MOVE", coord] => Ok(Action::MovePawn(coord.parse::<Coordinate>()?)),
            ["WALL", orientation, coord] => {
                let orientation = orientation.parse::<Orientation>()?;
                let anchor = coord
                    .parse::<Coordinate>()
                    .map_err(|_| Reason::WallOffBoard)?;

                Ok(Action::PlaceWall(Wall {
                    orientation,
                    anchor,
                }))
            }
            _ => Err(Reason::InvalidFormat),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::MovePawn(coord) => write!(f, "MOVE {}", coord),
            Action::PlaceWall(wall) => write!(f, "{}", wall),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
