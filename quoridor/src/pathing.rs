use super::action::{Orientation, Wall};
use super::geometry::{Geometry, WallBoards};
use super::game_state::GameState;

/// Flood fills outward from `start` one step at a time. The number of steps taken when the goal is
/// first touched is the length of the shortest path. Pawns never block a path.
fn flood_fill(geometry: &Geometry, walls: &WallBoards, start: u128, goal: u128) -> Option<usize> {
    let masks = geometry.move_masks(walls);
    let mut reached = start;
    let mut steps = 0;

    loop {
        if reached & goal != 0 {
            return Some(steps);
        }

        let expanded = reached | masks.expand(geometry, reached);

        // No progress means the goal is sealed off.
        if expanded == reached {
            return None;
        }

        reached = expanded;
        steps += 1;
    }
}

pub(crate) fn with_wall(walls: &WallBoards, geometry: &Geometry, wall: &Wall) -> WallBoards {
    let bit = geometry.bit(&wall.anchor);

    match wall.orientation {
        Orientation::Horizontal => WallBoards {
            horizontal: walls.horizontal | bit,
            ..*walls
        },
        Orientation::Vertical => WallBoards {
            vertical: walls.vertical | bit,
            ..*walls
        },
    }
}

impl GameState {
    pub fn has_path(&self, player: usize) -> bool {
        self.shortest_path_length(player).is_some()
    }

    /// Number of steps to the player's goal line, `None` when it is unreachable or the player is unknown.
    pub fn shortest_path_length(&self, player: usize) -> Option<usize> {
        self.shortest_path_length_with(player, self.walls())
    }

    pub(crate) fn shortest_path_length_with(&self, player: usize, walls: &WallBoards) -> Option<usize> {
        let seat = self.seat(player)?;
        let pawn = self.pawn_position(player)?;
        let geometry = self.geometry();

        flood_fill(
            geometry,
            walls,
            geometry.bit(&pawn),
            seat.goal.mask(geometry),
        )
    }

    /// Whether adding `wall` would leave any player without a route to their goal. The state itself is
    /// not modified.
    pub fn would_block_any_player(&self, wall: &Wall) -> bool {
        let walls = with_wall(self.walls(), self.geometry(), wall);

        self.players()
            .any(|player| self.shortest_path_length_with(player, &walls).is_none())
    }
}
