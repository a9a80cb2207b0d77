use engine::Evaluator;

use super::game_state::GameState;
use super::options::SearchOptions;

/// Scores positions by how much closer a player is to their goal than their opponents.
///
/// With two players the score is the path length difference, plus a small weight on walls still in
/// hand, plus a bonus that grows as the player nears the goal. With more players only the player's
/// own path and walls are considered.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoridorEvaluator {
    wall_weight: f32,
    proximity_bonus: f32,
}

impl QuoridorEvaluator {
    pub fn new(options: &SearchOptions) -> Self {
        Self {
            wall_weight: options.wall_weight,
            proximity_bonus: options.proximity_bonus,
        }
    }

    pub fn evaluate(&self, game_state: &GameState, perspective: usize) -> f32 {
        if let Some(winner) = game_state.winner() {
            return if winner == perspective {
                f32::INFINITY
            } else {
                f32::NEG_INFINITY
            };
        }

        let own_path = match game_state.shortest_path_length(perspective) {
            Some(length) => length as f32,
            None => return f32::NEG_INFINITY,
        };
        let own_walls = game_state.walls_remaining(perspective) as f32;

        let proximity = if own_path > 0.0 {
            self.proximity_bonus / own_path
        } else {
            0.0
        };

        if game_state.num_players() > 2 {
            return -own_path + self.wall_weight * own_walls + proximity;
        }

        let opponent = match game_state.opponents(perspective).next() {
            Some(opponent) => opponent,
            None => return own_path,
        };
        let opponent_path = match game_state.shortest_path_length(opponent) {
            Some(length) => length as f32,
            None => return f32::INFINITY,
        };
        let opponent_walls = game_state.walls_remaining(opponent) as f32;

        (opponent_path - own_path) + self.wall_weight * (own_walls - opponent_walls) + proximity
    }
}

impl Default for QuoridorEvaluator {
    fn default() -> Self {
        Self::new(&SearchOptions::default())
    }
}

impl Evaluator for QuoridorEvaluator {
    type State = GameState;

    fn evaluate(&self, game_state: &Self::State, perspective: usize) -> f32 {
        QuoridorEvaluator::evaluate(self, game_state, perspective)
    }
}
