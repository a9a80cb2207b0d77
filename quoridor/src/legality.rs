use super::action::{Orientation, Wall};
use super::coordinate::Coordinate;
use super::game_state::GameState;
use super::geometry::Direction;
use super::reason::Reason;

impl GameState {
    /// Cells `player` may move their pawn to, in row major order.
    ///
    /// Empty once the game is over or for players not in the game.
    pub fn valid_pawn_moves(&self, player: usize) -> Vec<Coordinate> {
        self.geometry().coords(self.pawn_move_board(player)).collect()
    }

    fn pawn_move_board(&self, player: usize) -> u128 {
        let pawn = match self.pawn_position(player) {
            Some(pawn) if !self.is_game_over() => pawn,
            _ => return 0,
        };

        let geometry = self.geometry();
        let masks = geometry.move_masks(self.walls());
        let own = geometry.bit(&pawn);
        let others = self.other_pawns(player);

        Direction::ALL.iter().fold(0, |moves, direction| {
            let step = masks.step(geometry, own, *direction);

            if step & others == 0 {
                return moves | step;
            }

            // An adjacent pawn with no wall in between may be jumped.
            let straight = masks.step(geometry, step, *direction);
            if straight != 0 && straight & others == 0 {
                return moves | straight;
            }

            let diagonals = direction
                .perpendicular()
                .iter()
                .fold(0, |diagonals, side| {
                    diagonals | masks.step(geometry, step, *side)
                });

            moves | (diagonals & !others & !own)
        })
    }

    /// Accepts `target` only if it is one of `valid_pawn_moves`, otherwise explains why not.
    pub fn check_pawn_move(&self, player: usize, target: &Coordinate) -> Result<(), Reason> {
        let geometry = self.geometry();

        if !target.is_on_board(geometry.size()) {
            return Err(Reason::PawnOffBoard);
        }

        let target_bit = geometry.bit(target);

        if self.pawn_move_board(player) & target_bit != 0 {
            return Ok(());
        }

        if self.other_pawns(player) & target_bit != 0 {
            return Err(Reason::PawnOccupied);
        }

        let is_wall_blocked_step = self.pawn_position(player).map_or(false, |pawn| {
            let masks = geometry.move_masks(self.walls());

            pawn.manhattan_distance(target) == 1
                && Direction::ALL
                    .iter()
                    .all(|d| masks.step(geometry, geometry.bit(&pawn), *d) & target_bit == 0)
        });

        if is_wall_blocked_step {
            Err(Reason::PawnWallBlock)
        } else {
            Err(Reason::PawnNotAdjacentOrJump)
        }
    }

    /// Every wall `player` may legally place, ordered by orientation, column, then row.
    pub fn valid_wall_placements(&self, player: usize) -> Vec<Wall> {
        if self.is_game_over() || self.walls_remaining(player) == 0 {
            return Vec::new();
        }

        let geometry = self.geometry();
        let mut walls = Vec::new();

        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let candidates = self.unobstructed_anchors(orientation);
            let mut connecting = self.connecting_anchors(orientation, candidates);
            let mut blocking = 0u128;

            while connecting != 0 {
                let remaining = connecting & (connecting - 1);
                let candidate_bit = connecting ^ remaining;
                let index = candidate_bit.trailing_zeros() as usize;
                let anchor = Coordinate::from_index(index, geometry.size());

                if self.would_block_any_player(&Wall {
                    orientation,
                    anchor,
                }) {
                    blocking |= candidate_bit;
                }

                connecting = remaining;
            }

            walls.extend(
                geometry
                    .coords(candidates & !blocking)
                    .map(|anchor| Wall {
                        orientation,
                        anchor,
                    }),
            );
        }

        walls.sort_by_key(Wall::sort_key);
        walls
    }

    /// Checks a single wall for `player`, reporting the first failing rule in the order: walls left,
    /// on the placement grid, exact overlap, conflict with a neighbouring wall, then reachability.
    pub fn check_wall_placement(&self, player: usize, wall: &Wall) -> Result<(), Reason> {
        if self.walls_remaining(player) == 0 {
            return Err(Reason::WallNoWallsLeft);
        }

        if !wall.is_on_board(self.board_size()) {
            return Err(Reason::WallOffBoard);
        }

        if self.has_wall(wall) {
            return Err(Reason::WallOverlap);
        }

        let bit = self.geometry().bit(&wall.anchor);
        if self.conflicting_anchors(wall.orientation) & bit != 0 {
            return Err(Reason::WallConflict);
        }

        if self.would_block_any_player(wall) {
            return Err(Reason::WallPathBlock);
        }

        Ok(())
    }

    /// Anchors where a wall of `orientation` would overlap, cross, or share half its length with a
    /// placed wall.
    fn conflicting_anchors(&self, orientation: Orientation) -> u128 {
        let geometry = self.geometry();
        let walls = self.walls();

        match orientation {
            Orientation::Horizontal => {
                walls.horizontal
                    | geometry.shift(walls.horizontal, 0, 1)
                    | geometry.shift(walls.horizontal, 0, -1)
                    | walls.vertical
            }
            Orientation::Vertical => {
                walls.vertical
                    | geometry.shift(walls.vertical, 1, 0)
                    | geometry.shift(walls.vertical, -1, 0)
                    | walls.horizontal
            }
        }
    }

    fn unobstructed_anchors(&self, orientation: Orientation) -> u128 {
        self.geometry().anchors() & !self.conflicting_anchors(orientation)
    }

    /// Candidates touching existing walls or the board edge at two or more of their ends and middle.
    ///
    /// A wall touching the rest of the obstacles at a single point cannot enclose anything, so only
    /// these candidates need a reachability check.
    fn connecting_anchors(&self, orientation: Orientation, candidates: u128) -> u128 {
        let geometry = self.geometry();
        let size = geometry.size();
        let h = self.walls().horizontal;
        let v = self.walls().vertical;
        let shift = |board: u128, d_row: isize, d_col: isize| geometry.shift(board, d_row, d_col);

        let (first_end, middle, second_end) = match orientation {
            Orientation::Horizontal => {
                let left = shift(h, 0, 2)
                    | shift(v, 0, 1)
                    | shift(v, -1, 1)
                    | shift(v, 1, 1)
                    | geometry.column_mask(0);
                let middle = shift(v, 1, 0) | shift(v, -1, 0);
                let right = shift(h, 0, -2)
                    | shift(v, 0, -1)
                    | shift(v, 1, -1)
                    | shift(v, -1, -1)
                    | geometry.column_mask(size - 2);

                (left, middle, right)
            }
            Orientation::Vertical => {
                let bottom = shift(v, 2, 0)
                    | shift(h, 1, 1)
                    | shift(h, 1, 0)
                    | shift(h, 1, -1)
                    | geometry.row_mask(0);
                let middle = shift(h, 0, 1) | shift(h, 0, -1);
                let top = shift(v, -2, 0)
                    | shift(h, -1, 1)
                    | shift(h, -1, 0)
                    | shift(h, -1, -1)
                    | geometry.row_mask(size - 2);

                (bottom, middle, top)
            }
        };

        candidates
            & ((first_end & middle) | (first_end & second_end) | (middle & second_end))
    }
}

#[cfg(test)]
mod tests {
    use super::super::action::{Orientation, Wall};
    use super::super::game_state::GameState;
    use super::super::reason::Reason;

    fn brute_force_wall_placements(game_state: &GameState, player: usize) -> Vec<Wall> {
        let size = game_state.board_size();
        let mut walls = Vec::new();

        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for row in 0..size - 1 {
                for col in 0..size - 1 {
                    let wall = Wall::new(orientation, row, col);
                    if game_state.check_wall_placement(player, &wall).is_ok() {
                        walls.push(wall);
                    }
                }
            }
        }

        walls.sort_by_key(Wall::sort_key);
        walls
    }

    #[test]
    fn test_initial_wall_count() {
        let game_state = GameState::initial();

        assert_eq!(game_state.valid_wall_placements(1).len(), 128);
    }

    #[test]
    fn test_walls_are_sorted() {
        let game_state = GameState::initial();
        let walls = game_state.valid_wall_placements(1);

        assert_eq!(walls[0].to_string(), "WALL H A1");
        assert_eq!(walls[1].to_string(), "WALL H A2");
        assert_eq!(walls[8].to_string(), "WALL H B1");
        assert_eq!(walls[64].to_string(), "WALL V A1");
    }

    #[test]
    fn test_connecting_prefilter_matches_brute_force() {
        let mut game_state = GameState::new(5, 2).unwrap();

        for token in [
            "WALL H A2",
            "WALL V B1",
            "WALL H C4",
            "WALL V D3",
            "WALL H C2",
        ] {
            game_state.apply_move(token).unwrap();

            for player in 1..=2 {
                assert_eq!(
                    game_state.valid_wall_placements(player),
                    brute_force_wall_placements(&game_state, player),
                    "after {}",
                    token
                );
            }
        }
    }

    #[test]
    fn test_conflicts() {
        let mut game_state = GameState::initial();
        game_state.apply_move("WALL H E5").unwrap();

        let conflicts = [
            Wall::horizontal(4, 3),
            Wall::horizontal(4, 5),
            Wall::vertical(4, 4),
        ];
        for wall in conflicts {
            assert_eq!(
                game_state.check_wall_placement(2, &wall),
                Err(Reason::WallConflict),
                "{}",
                wall
            );
        }

        assert_eq!(
            game_state.check_wall_placement(2, &Wall::horizontal(4, 4)),
            Err(Reason::WallOverlap)
        );
        assert_eq!(game_state.check_wall_placement(2, &Wall::horizontal(4, 6)), Ok(()));
        assert_eq!(game_state.check_wall_placement(2, &Wall::vertical(3, 4)), Ok(()));
        assert_eq!(game_state.check_wall_placement(2, &Wall::vertical(4, 5)), Ok(()));
    }

    #[test]
    fn test_vertical_conflicts() {
        let mut game_state = GameState::initial();
        game_state.apply_move("WALL V E5").unwrap();

        for wall in [
            Wall::vertical(3, 4),
            Wall::vertical(5, 4),
            Wall::horizontal(4, 4),
        ] {
            assert_eq!(
                game_state.check_wall_placement(2, &wall),
                Err(Reason::WallConflict)
            );
        }

        assert_eq!(game_state.check_wall_placement(2, &Wall::vertical(6, 4)), Ok(()));
    }

    #[test]
    fn test_wall_off_board() {
        let game_state = GameState::initial();

        assert_eq!(
            game_state.check_wall_placement(1, &Wall::horizontal(8, 0)),
            Err(Reason::WallOffBoard)
        );
        assert_eq!(
            game_state.check_wall_placement(1, &Wall::vertical(0, 8)),
            Err(Reason::WallOffBoard)
        );
    }

    #[test]
    fn test_unknown_player_has_no_walls() {
        let game_state = GameState::initial();

        assert_eq!(
            game_state.check_wall_placement(3, &Wall::horizontal(0, 0)),
            Err(Reason::WallNoWallsLeft)
        );
        assert!(game_state.valid_wall_placements(3).is_empty());
    }
}
