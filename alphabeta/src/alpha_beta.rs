use std::fmt::Debug;
use std::time::{Duration, Instant};

use engine::{Evaluator, GameEngine, TranspositionHash};
use log::{debug, error, warn};

use super::transposition_table::{Bound, TranspositionTable, ANY_DEPTH};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchStats {
    pub nodes: usize,
    pub transposition_hits: usize,
    pub rejected_actions: usize,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<A> {
    pub action: A,
    pub value: f32,
    pub depth: usize,
    pub stats: SearchStats,
}

/// Minimax search with alpha-beta pruning and a transposition table.
///
/// The searching player is fixed for the duration of a search. Nodes where that player moves
/// maximize, every other node minimizes. The state handed to `search` is mutated in place and
/// is returned to its original contents before `search` returns.
pub struct AlphaBeta<'a, E, V> {
    engine: &'a E,
    evaluator: &'a V,
    transposition_table: TranspositionTable,
    stats: SearchStats,
    perspective: usize,
}

impl<'a, S, A, E, V> AlphaBeta<'a, E, V>
where
    S: TranspositionHash,
    A: Clone + Debug,
    E: GameEngine<State = S, Action = A>,
    E::Rejection: Debug,
    V: Evaluator<State = S>,
{
    pub fn new(engine: &'a E, evaluator: &'a V) -> Self {
        Self {
            engine,
            evaluator,
            transposition_table: TranspositionTable::new(),
            stats: SearchStats::default(),
            perspective: 0,
        }
    }

    /// Chooses an action for the player to move, looking `max_depth` plies ahead.
    ///
    /// Returns `None` only when the player to move has no legal action at all.
    pub fn search(&mut self, game_state: &mut S, max_depth: usize) -> Option<SearchResult<A>> {
        let start = Instant::now();
        let max_depth = max_depth.max(1);

        self.transposition_table.clear();
        self.stats = SearchStats::default();
        self.perspective = self.engine.player_to_move(game_state);

        let actions = self.engine.legal_actions(game_state);

        if actions.is_empty() {
            error!(
                "Player {} has no legal actions to search. This indicates a corrupted game state.",
                self.perspective
            );
            return None;
        }

        let mut best_action = actions[0].clone();
        let mut best_value = f32::NEG_INFINITY;
        let mut alpha = f32::NEG_INFINITY;
        let beta = f32::INFINITY;

        for action in actions {
            let undo = match self.engine.apply(game_state, &action) {
                Ok(undo) => undo,
                Err(rejection) => {
                    self.stats.rejected_actions += 1;
                    warn!("Skipping rejected root action {:?}: {:?}", action, rejection);
                    continue;
                }
            };

            self.stats.nodes += 1;
            let value = self.alpha_beta(game_state, max_depth - 1, alpha, beta);
            self.engine.undo(game_state, undo);

            if value > best_value {
                best_value = value;
                best_action = action;
            }

            alpha = alpha.max(value);
        }

        self.stats.elapsed = start.elapsed();

        debug!(
            "Searched depth {} for player {}: best {:?} value {} nodes {} tt hits {} in {:?}",
            max_depth,
            self.perspective,
            best_action,
            best_value,
            self.stats.nodes,
            self.stats.transposition_hits,
            self.stats.elapsed
        );

        Some(SearchResult {
            action: best_action,
            value: best_value,
            depth: max_depth,
            stats: self.stats.clone(),
        })
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn alpha_beta(&mut self, game_state: &mut S, depth: usize, mut alpha: f32, mut beta: f32) -> f32 {
        let hash = game_state.transposition_hash();

        if let Some(value) = self.transposition_table.probe(hash, depth, alpha, beta) {
            self.stats.transposition_hits += 1;
            return value;
        }

        if self.engine.is_terminal(game_state) {
            let value = self.evaluator.evaluate(game_state, self.perspective);
            self.transposition_table
                .store(hash, ANY_DEPTH, value, Bound::Exact);
            return value;
        }

        if depth == 0 {
            let value = self.evaluator.evaluate(game_state, self.perspective);
            self.transposition_table.store(hash, 0, value, Bound::Exact);
            return value;
        }

        let maximizing = self.engine.player_to_move(game_state) == self.perspective;
        let actions = self.engine.legal_actions(game_state);

        if actions.is_empty() {
            error!(
                "Player {} has no legal actions during search.",
                self.engine.player_to_move(game_state)
            );
            return if maximizing {
                f32::NEG_INFINITY
            } else {
                f32::INFINITY
            };
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best = if maximizing {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };

        for action in actions {
            let undo = match self.engine.apply(game_state, &action) {
                Ok(undo) => undo,
                Err(rejection) => {
                    self.stats.rejected_actions += 1;
                    warn!("Skipping rejected action {:?}: {:?}", action, rejection);
                    continue;
                }
            };

            self.stats.nodes += 1;
            let value = self.alpha_beta(game_state, depth - 1, alpha, beta);
            self.engine.undo(game_state, undo);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if beta <= alpha {
                break;
            }
        }

        let bound = if best <= alpha_orig {
            Bound::Upper
        } else if best >= beta_orig {
            Bound::Lower
        } else {
            Bound::Exact
        };

        self.transposition_table.store(hash, depth, best, bound);

        best
    }
}
