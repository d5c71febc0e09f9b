//! Strictly Germs - agent self-play
//!
//! Pits two agents against each other headlessly and reports the tally.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use strictly_germs::{Agent, GameConfig, GameState, Outcome, Player, Strategy};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Strictly Germs self-play - run agent-vs-agent games
#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(about = "Run agent-vs-agent germ war games", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a game configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board side length (overrides the config file)
    #[arg(short, long)]
    size: Option<usize>,

    /// Number of games to play
    #[arg(short, long, default_value = "10")]
    games: u32,

    /// Base seed for the random agents (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Strategy for player A
    #[arg(long, default_value = "heuristic")]
    player_a: Strategy,

    /// Strategy for player B
    #[arg(long, default_value = "random")]
    player_b: Strategy,

    /// Abandon a game after this many moves (jumps can cycle)
    #[arg(long, default_value = "2000")]
    max_moves: u32,

    /// Print the final snapshot of each game as JSON
    #[arg(long)]
    json: bool,
}

/// Tally of finished games.
#[derive(Debug, Default)]
struct Tally {
    a_wins: u32,
    b_wins: u32,
    draws: u32,
    abandoned: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let size = cli.size.unwrap_or(*config.board_size());
    let seed = cli.seed.or(*config.seed());

    info!(
        size,
        games = cli.games,
        player_a = %cli.player_a,
        player_b = %cli.player_b,
        "Starting self-play"
    );

    let mut tally = Tally::default();
    for game in 0..cli.games {
        let game_seed = seed.map(|s| s.wrapping_add(2 * u64::from(game)));
        match play_one(&cli, size, game_seed)? {
            Some(state) => {
                match state.winner() {
                    Some(Outcome::Winner(Player::A)) => tally.a_wins += 1,
                    Some(Outcome::Winner(Player::B)) => tally.b_wins += 1,
                    Some(Outcome::Draw) => tally.draws += 1,
                    None => bail!("Game {} ended without an outcome", game),
                }
                if cli.json {
                    println!("{}", serde_json::to_string(&state.snapshot())?);
                }
            }
            None => tally.abandoned += 1,
        }
    }

    info!(?tally, "Self-play finished");
    println!(
        "A ({}): {}  B ({}): {}  draws: {}  abandoned: {}",
        cli.player_a, tally.a_wins, cli.player_b, tally.b_wins, tally.draws, tally.abandoned
    );
    Ok(())
}

/// Plays one game; `None` if it hit the move cap.
#[instrument(skip(cli))]
fn play_one(cli: &Cli, size: usize, seed: Option<u64>) -> Result<Option<GameState>> {
    let mut agent_a = cli.player_a.build(seed);
    let mut agent_b = cli.player_b.build(seed.map(|s| s.wrapping_add(1)));
    let mut state = GameState::new(size)?;

    for _ in 0..cli.max_moves {
        if state.is_terminal() {
            debug!(outcome = ?state.winner(), "Game over");
            return Ok(Some(state));
        }
        let agent = match state.current_player() {
            Player::A => &mut agent_a,
            Player::B => &mut agent_b,
        };
        let Some(action) = agent.select_move(&state) else {
            bail!("{} had no move on a live board", agent.name());
        };
        state.try_apply_move(action.target.row, action.target.col)?;
    }

    if state.is_terminal() {
        return Ok(Some(state));
    }
    debug!(board = %state.board().display(), "Move cap reached");
    Ok(None)
}
