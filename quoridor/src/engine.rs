use std::cmp::Reverse;

use engine::GameEngine;
use itertools::Itertools;

use super::action::{Action, Wall};
use super::game_state::{GameState, MoveRecord};
use super::pathing::with_wall;
use super::reason::Reason;

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;
    type Undo = MoveRecord;
    type Rejection = Reason;

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        ordered_actions(game_state)
    }

    fn apply(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> Result<Self::Undo, Self::Rejection> {
        game_state.apply_action(action)
    }

    fn undo(&self, game_state: &mut Self::State, undo: Self::Undo) {
        game_state.undo_move(undo);
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.current_player()
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.is_game_over()
    }
}

/// Every legal action for the player to move, most promising first.
///
/// Pawn moves come first, those that bring the mover closest to their goal line leading. Walls follow,
/// those that lengthen the opponents' paths the most relative to the mover's own leading. Ties keep
/// the natural order of the moves.
pub fn ordered_actions(game_state: &GameState) -> Vec<Action> {
    let player = game_state.current_player();
    let unreachable = game_state.geometry().cell_count();
    let walls = game_state.walls();
    let path_length = |length: Option<usize>| length.unwrap_or(unreachable) as isize;

    let current = path_length(game_state.shortest_path_length(player));

    let goal = game_state.goal(player);
    let pawn_moves = game_state
        .valid_pawn_moves(player)
        .into_iter()
        .sorted_by_key(|target| goal.map_or(0, |goal| goal.distance(target)))
        .map(Action::MovePawn);

    let opponent_paths = game_state
        .opponents(player)
        .map(|opponent| (opponent, path_length(game_state.shortest_path_length(opponent))))
        .collect::<Vec<_>>();

    let wall_score = |wall: &Wall| {
        let walls = with_wall(walls, game_state.geometry(), wall);
        let own_increase =
            path_length(game_state.shortest_path_length_with(player, &walls)) - current;
        let opponent_increase = opponent_paths
            .iter()
            .map(|(opponent, before)| {
                path_length(game_state.shortest_path_length_with(*opponent, &walls)) - before
            })
            .sum::<isize>();

        opponent_increase - own_increase
    };

    let wall_moves = game_state
        .valid_wall_placements(player)
        .into_iter()
        .sorted_by_cached_key(|wall| Reverse(wall_score(wall)))
        .map(Action::PlaceWall);

    pawn_moves.chain(wall_moves).collect()
}
