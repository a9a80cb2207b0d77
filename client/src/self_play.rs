use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use common::{Config, ConfigLoader};
use log::{error, info, warn};
use quoridor::constants::MAX_NUMBER_OF_MOVES;
use quoridor::{ordered_actions, search, Action, GameOptions, GameSnapshot, GameState, SearchOptions};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Clone, Debug)]
pub struct SelfPlayOptions {
    pub num_games: usize,
    pub parallelism: usize,
    /// Opening plies chosen at random so that games differ from one another.
    pub random_opening_plies: usize,
    pub seed: u64,
}

impl Config for SelfPlayOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let options = Self {
            num_games: config
                .get("num_games")
                .and_then(|v| v.as_usize())
                .unwrap_or(1),
            parallelism: config
                .get("parallelism")
                .and_then(|v| v.as_usize())
                .unwrap_or(1),
            random_opening_plies: config
                .get("random_opening_plies")
                .and_then(|v| v.as_usize())
                .unwrap_or(0),
            seed: config
                .get("seed")
                .and_then(|v| v.as_usize())
                .unwrap_or(0) as u64,
        };

        if options.parallelism == 0 {
            return Err(anyhow!("parallelism must be at least 1"));
        }

        Ok(options)
    }
}

#[derive(Serialize)]
pub struct GameResult {
    pub game: usize,
    pub winner: Option<usize>,
    pub actions: Vec<Action>,
    pub final_state: GameSnapshot,
}

/// Plays every configured game, spreading them over `parallelism` blocking workers that each own
/// their own game state.
pub async fn play_self(
    self_play_options: &SelfPlayOptions,
    game_options: &GameOptions,
    search_options: &SearchOptions,
) -> Result<()> {
    let start = Instant::now();
    let parallelism = self_play_options.parallelism.min(self_play_options.num_games.max(1));

    let handles = (0..parallelism)
        .map(|worker| {
            let games = (worker..self_play_options.num_games)
                .step_by(parallelism)
                .collect::<Vec<_>>();
            let self_play_options = self_play_options.clone();
            let game_options = game_options.clone();
            let search_options = search_options.clone();

            tokio::task::spawn_blocking(move || {
                info!("Starting worker {} with {} games", worker, games.len());

                games
                    .into_iter()
                    .map(|game| play_one(game, &self_play_options, &game_options, &search_options))
                    .collect::<Result<Vec<_>>>()
            })
        })
        .collect::<Vec<_>>();

    let mut wins = vec![0usize; game_options.num_players + 1];

    for handle in handles {
        let results = handle.await.context("Self play worker stopped unexpectedly")??;

        for result in results {
            info!("{}", serde_json::to_string(&result)?);
            wins[result.winner.unwrap_or(0)] += 1;
        }
    }

    let summary = wins
        .iter()
        .enumerate()
        .skip(1)
        .map(|(player, count)| format!("P{}: {}", player, count))
        .collect::<Vec<_>>()
        .join(", ");

    info!(
        "Played {} games in {:?}. Wins {}, unfinished: {}",
        self_play_options.num_games,
        start.elapsed(),
        summary,
        wins[0]
    );

    Ok(())
}

fn play_one(
    game: usize,
    self_play_options: &SelfPlayOptions,
    game_options: &GameOptions,
    search_options: &SearchOptions,
) -> Result<GameResult> {
    let mut rng = StdRng::seed_from_u64(self_play_options.seed.wrapping_add(game as u64));
    let mut game_state = GameState::new(game_options.board_size, game_options.num_players)?;
    let mut actions = Vec::new();

    while !game_state.is_game_over() && game_state.move_number() < MAX_NUMBER_OF_MOVES {
        let action = if game_state.move_number() < self_play_options.random_opening_plies {
            ordered_actions(&game_state).choose(&mut rng).copied()
        } else {
            search(&mut game_state, search_options).map(|result| result.action)
        };

        let action = match action {
            Some(action) => action,
            None => {
                error!(
                    "Game {}: player {} has no legal move, abandoning the game",
                    game,
                    game_state.current_player()
                );
                break;
            }
        };

        game_state
            .apply_action(&action)
            .map_err(|reason| anyhow!("Game {}: {} was rejected: {}", game, action, reason))?;
        actions.push(action);
    }

    if !game_state.is_game_over() {
        warn!("Game {} ended after {} moves without a winner", game, game_state.move_number());
    }

    Ok(GameResult {
        game,
        winner: game_state.winner(),
        actions,
        final_state: game_state.snapshot(),
    })
}
