use super::coordinate::Coordinate;

/// Bit board layout for a square board of a given size.
///
/// Bit `row * size + col` represents a cell. Wall boards use the same layout, keyed by the anchor
/// cell of the wall. Only the lowest `size * size` bits are ever set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    size: usize,
    cells: u128,
    anchors: u128,
    first_column: u128,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher rows.
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn perpendicular(&self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::East, Direction::West],
            Direction::East | Direction::West => [Direction::North, Direction::South],
        }
    }
}

/// Placed walls, one bit board per orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WallBoards {
    pub horizontal: u128,
    pub vertical: u128,
}

/// For each direction, the cells whose edge on that side is open.
#[derive(Clone, Copy, Debug)]
pub struct MoveMasks {
    north: u128,
    south: u128,
    east: u128,
    west: u128,
}

impl Geometry {
    pub fn new(size: usize) -> Self {
        let mut cells = 0u128;
        let mut anchors = 0u128;
        let mut first_column = 0u128;

        for row in 0..size {
            first_column |= 1 << (row * size);

            for col in 0..size {
                let bit = 1u128 << (row * size + col);
                cells |= bit;

                if row + 1 < size && col + 1 < size {
                    anchors |= bit;
                }
            }
        }

        Self {
            size,
            cells,
            anchors,
            first_column,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells that may anchor a wall, every cell except the last row and column.
    pub fn anchors(&self) -> u128 {
        self.anchors
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn bit(&self, coord: &Coordinate) -> u128 {
        1 << coord.index(self.size)
    }

    pub fn row_mask(&self, row: usize) -> u128 {
        let row_bits = (1u128 << self.size) - 1;
        row_bits << (row * self.size)
    }

    pub fn column_mask(&self, col: usize) -> u128 {
        self.first_column << col
    }

    /// Moves every set bit `d_row` rows and `d_col` columns. Bits leaving the board are dropped rather
    /// than wrapping onto the neighbouring row.
    pub fn shift(&self, board: u128, d_row: isize, d_col: isize) -> u128 {
        let mut board = board & self.cells;

        if d_col > 0 {
            for col in self.size.saturating_sub(d_col as usize)..self.size {
                board &= !self.column_mask(col);
            }
        } else if d_col < 0 {
            for col in 0..(d_col.unsigned_abs()).min(self.size) {
                board &= !self.column_mask(col);
            }
        }

        let offset = d_row * self.size as isize + d_col;
        let shifted = if offset >= 0 {
            board << offset as u32
        } else {
            board >> offset.unsigned_abs() as u32
        };

        shifted & self.cells
    }

    /// Cells whose edge in `direction` is crossed by a wall.
    pub fn blocked(&self, direction: Direction, walls: &WallBoards) -> u128 {
        match direction {
            Direction::North => walls.horizontal | self.shift(walls.horizontal, 0, 1),
            Direction::South => self.shift(self.blocked(Direction::North, walls), 1, 0),
            Direction::East => walls.vertical | self.shift(walls.vertical, 1, 0),
            Direction::West => self.shift(self.blocked(Direction::East, walls), 0, 1),
        }
    }

    pub fn move_masks(&self, walls: &WallBoards) -> MoveMasks {
        MoveMasks {
            north: self.cells & !self.blocked(Direction::North, walls),
            south: self.cells & !self.blocked(Direction::South, walls),
            east: self.cells & !self.blocked(Direction::East, walls),
            west: self.cells & !self.blocked(Direction::West, walls),
        }
    }

    /// Iterates the cells of a bit board in ascending order.
    pub fn coords(&self, board: u128) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        let mut board = board & self.cells;

        std::iter::from_fn(move || {
            if board == 0 {
                return None;
            }

            let index = board.trailing_zeros() as usize;
            board &= board - 1;

            Some(Coordinate::from_index(index, size))
        })
    }
}

impl MoveMasks {
    /// Cells reached from `from` by one step in `direction` without crossing a wall.
    pub fn step(&self, geometry: &Geometry, from: u128, direction: Direction) -> u128 {
        let open = match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        };
        let (d_row, d_col) = direction.delta();

        geometry.shift(from & open, d_row, d_col)
    }

    /// Cells reached from `from` by one step in any direction.
    pub fn expand(&self, geometry: &Geometry, from: u128) -> u128 {
        Direction::ALL
            .iter()
            .fold(0, |reached, direction| {
                reached | self.step(geometry, from, *direction)
            })
    }
}
