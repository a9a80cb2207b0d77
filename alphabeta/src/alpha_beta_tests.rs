use engine::{Evaluator, GameEngine};

use super::alpha_beta::AlphaBeta;
use super::take_away_game::{Take, TakeAwayEngine, TakeAwayEvaluator, TakeAwayState};

fn minimax(
    engine: &TakeAwayEngine,
    evaluator: &TakeAwayEvaluator,
    game_state: &TakeAwayState,
    depth: usize,
    perspective: usize,
) -> f32 {
    if engine.is_terminal(game_state) || depth == 0 {
        return evaluator.evaluate(game_state, perspective);
    }

    let maximizing = engine.player_to_move(game_state) == perspective;
    let values = engine.legal_actions(game_state).into_iter().map(|action| {
        let mut next = game_state.clone();
        engine.apply(&mut next, &action).unwrap();
        minimax(engine, evaluator, &next, depth - 1, perspective)
    });

    if maximizing {
        values.fold(f32::NEG_INFINITY, f32::max)
    } else {
        values.fold(f32::INFINITY, f32::min)
    }
}

#[test]
fn test_takes_one_from_four() {
    let engine = TakeAwayEngine::new();
    let evaluator = TakeAwayEvaluator;
    let mut game_state = TakeAwayState::new(4);

    let mut search = AlphaBeta::new(&engine, &evaluator);
    let result = search.search(&mut game_state, 4).unwrap();

    assert_eq!(result.action, Take(1));
    assert_eq!(result.value, f32::INFINITY);
}

#[test]
fn test_takes_two_from_five() {
    let engine = TakeAwayEngine::new();
    let evaluator = TakeAwayEvaluator;
    let mut game_state = TakeAwayState::new(5);

    let mut search = AlphaBeta::new(&engine, &evaluator);
    let result = search.search(&mut game_state, 5).unwrap();

    assert_eq!(result.action, Take(2));
    assert_eq!(result.value, f32::INFINITY);
}

#[test]
fn test_lost_position_keeps_first_action() {
    let engine = TakeAwayEngine::new();
    let evaluator = TakeAwayEvaluator;
    let mut game_state = TakeAwayState::new(3);

    let mut search = AlphaBeta::new(&engine, &evaluator);
    let result = search.search(&mut game_state, 3).unwrap();

    assert_eq!(result.action, Take(1));
    assert_eq!(result.value, f32::NEG_INFINITY);
}

#[test]
fn test_second_player_searches_from_own_perspective() {
    let engine = TakeAwayEngine::new();
    let evaluator = TakeAwayEvaluator;
    let mut game_state = TakeAwayState {
        p1_turn: false,
        pile: 2,
    };

    let mut search = AlphaBeta::new(&engine, &evaluator);
    let result = search.search(&mut game_state, 1).unwrap();

    assert_eq!(result.action, Take(2));
    assert_eq!(result.value, f32::INFINITY);
}

#[test]
fn test_matches_plain_minimax() {
    let engine = TakeAwayEngine::new();
    let evaluator = TakeAwayEvaluator;

    for pile in 1..=14 {
        for p1_turn in [true, false] {
            for depth in 1..=7 {
                let mut game_state = TakeAwayState { p1_turn, pile };
                let perspective = game_state.player_to_move();
                let expected = minimax(&engine, &evaluator, &game_state, depth, perspective);

                let mut search = AlphaBeta::new(&engine, &evaluator);
                let result = search.search(&mut game_state, depth).unwrap();

                assert_eq!(
                    result.value, expected,
                    "pile {} p1_turn {} depth {}",
                    pile, p1_turn, depth
                );
            }
        }
    }
}

#[test]
fn test_search_restores_state() {
    let engine = TakeAwayEngine::new();
    let evaluator = TakeAwayEvaluator;
    let mut game_state = TakeAwayState::new(11);
    let before = game_state.clone();

    let mut search = AlphaBeta::new(&engine, &evaluator);
    search.search(&mut game_state, 6).unwrap();

    assert_eq!(game_state, before);
}

#[test]
fn test_rejected_actions_are_skipped() {
    let engine = TakeAwayEngine {
        offer_illegal: true,
    };
    let evaluator = TakeAwayEvaluator;
    let mut game_state = TakeAwayState::new(4);
    let before = game_state.clone();

    let mut search = AlphaBeta::new(&engine, &evaluator);
    let result = search.search(&mut game_state, 4).unwrap();

    assert_eq!(result.action, Take(1));
    assert!(result.stats.rejected_actions > 0);
    assert_eq!(game_state, before);
}

#[test]
fn test_no_actions_returns_none() {
    let engine = TakeAwayEngine::new();
    let evaluator = TakeAwayEvaluator;
    let mut game_state = TakeAwayState::new(0);

    let mut search = AlphaBeta::new(&engine, &evaluator);

    assert!(search.search(&mut game_state, 3).is_none());
}

#[test]
fn test_transposition_table_is_used() {
    let engine = TakeAwayEngine::new();
    let evaluator = TakeAwayEvaluator;
    let mut game_state = TakeAwayState::new(20);

    let mut search = AlphaBeta::new(&engine, &evaluator);
    let result = search.search(&mut game_state, 8).unwrap();

    assert!(result.stats.transposition_hits > 0);
    assert_eq!(search.stats(), &result.stats);
}
