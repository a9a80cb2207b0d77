use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Quoridor Client")]
#[clap(about = "Plays Quoridor against itself or against you", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    SelfPlay(SelfPlayCommand),
    Play(PlayCommand),
}

#[derive(Args)]
#[clap(about = "Plays bot against bot games, several at a time, and logs each result.", long_about = None)]
pub struct SelfPlayCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,

    /// Overrides the configured number of games.
    #[clap(short, long)]
    pub games: Option<usize>,
}

#[derive(Args)]
#[clap(about = "Plays against the bot, reading moves such as `MOVE E2` or `WALL H E5` from stdin.", long_about = None)]
pub struct PlayCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,

    /// The seat you play from, 1 moves first.
    #[clap(short = 'p', long, default_value_t = 1)]
    pub player: usize,
}
