mod cli;
mod play;
mod self_play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use common::{get_env_usize, ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use quoridor::{GameOptions, SearchOptions};
use self_play::{play_self, SelfPlayOptions};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut builder = tokio::runtime::Builder::new_multi_thread();

    builder.enable_all();

    if let Some(worker_threads) = get_env_usize("TOKIO_THREADS")? {
        builder.worker_threads(worker_threads);
    }

    info!("{:?}", builder);

    builder
        .build()
        .context("Failed to start the tokio runtime")?
        .block_on(async_main())?;

    Ok(())
}

async fn async_main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::SelfPlay(self_play_args) => {
            let config_path = self_play_args.config.relative_to_cwd()?;
            let config = ConfigLoader::new(config_path, "self_play".to_string())?;

            let mut self_play_options: SelfPlayOptions = config.load()?;
            let game_options: GameOptions = config.load()?;
            let search_options: SearchOptions = config.load()?;

            if let Some(games) = self_play_args.games {
                self_play_options.num_games = games;
            }

            info!("{:?} {:?} {:?}", self_play_options, game_options, search_options);

            play_self(&self_play_options, &game_options, &search_options).await?
        }
        Commands::Play(play_args) => {
            let config_path = play_args.config.relative_to_cwd()?;
            let config = ConfigLoader::new(config_path, "play".to_string())?;

            let game_options: GameOptions = config.load()?;
            let search_options: SearchOptions = config.load()?;
            let human = play_args.player;

            tokio::task::spawn_blocking(move || {
                play::play_interactive(human, &game_options, &search_options)
            })
            .await
            .context("Interactive game stopped unexpectedly")??
        }
    }

    Ok(())
}
