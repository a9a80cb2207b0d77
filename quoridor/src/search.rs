use alphabeta::{AlphaBeta, SearchResult};
use log::{error, info};

use super::action::Action;
use super::engine::Engine;
use super::evaluation::QuoridorEvaluator;
use super::game_state::GameState;
use super::options::SearchOptions;

/// Picks a move for the player to move, searching `max_depth` plies with the default weights.
///
/// `game_state` is used as scratch space during the search and holds its original contents again on
/// return. `None` means the player to move has no legal move, which a well formed game never
/// reaches.
pub fn find_best_move(game_state: &mut GameState, max_depth: usize) -> Option<Action> {
    let options = SearchOptions {
        max_depth,
        ..SearchOptions::default()
    };

    search(game_state, &options).map(|result| result.action)
}

pub fn search(game_state: &mut GameState, options: &SearchOptions) -> Option<SearchResult<Action>> {
    if game_state.is_game_over() {
        error!(
            "Cannot search a finished game. Player {:?} has already won.",
            game_state.winner()
        );
        return None;
    }

    let engine = Engine::new();
    let evaluator = QuoridorEvaluator::new(options);
    let mut alpha_beta = AlphaBeta::new(&engine, &evaluator);

    let result = alpha_beta.search(game_state, options.max_depth);

    match &result {
        Some(result) => info!(
            "Player {} plays {} (value {:.3}, {} nodes, {:?})",
            game_state.current_player(),
            result.action,
            result.value,
            result.stats.nodes,
            result.stats.elapsed
        ),
        None => error!(
            "Player {} has no legal move at move {}",
            game_state.current_player(),
            game_state.move_number()
        ),
    }

    result
}
