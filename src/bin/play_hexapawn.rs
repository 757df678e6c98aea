//! Play Hexapawn against the minimax agent.
//!
//! The human plays X and moves first. Moves are typed as two coordinates,
//! e.g. `A3-A2` or `B3 C2`. Bad input is reported and asked for again.
//!
//! `HEXAPAWN_SEED` and `HEXAPAWN_DEPTH` override the agent's seed and
//! depth limit. Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use hexapawn::{Agent, GameState, MinimaxAgent, MinimaxConfig, Move, Player, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const HUMAN: Player = Player::X;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut bot = MinimaxAgent::new(config_from_env());
    info!(config = ?bot.config(), "starting game");

    let mut game = GameState::new_game();
    let mut lines = io::stdin().lock().lines();

    while !game.is_over() {
        print!("{}", game.board());

        let mv = if game.next_player() == HUMAN {
            match read_move(&game, &mut lines)? {
                Some(mv) => mv,
                None => {
                    println!();
                    return Ok(());
                }
            }
        } else {
            match bot.select_move(&game)? {
                Some(mv) => {
                    let stats = bot.stats();
                    debug!(
                        nodes = stats.nodes_visited,
                        hit_rate = stats.cache_hit_rate(),
                        nodes_per_second = stats.nodes_per_second(),
                        "bot searched"
                    );
                    println!("-- {mv}");
                    mv
                }
                None => break,
            }
        };

        game = game.try_apply_move(mv)?;
    }

    print!("{}", game.board());
    match game.winner() {
        None => println!("It's a draw."),
        Some(winner) => println!("Winner: {winner}"),
    }
    Ok(())
}

/// Prompt until a legal move is entered. `None` on end of input.
fn read_move(
    game: &GameState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<Move>> {
    loop {
        print!("-- ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;

        match line.parse::<Move>() {
            Ok(mv) if game.is_legal(mv) => return Ok(Some(mv)),
            Ok(mv) => println!("{} cannot play {mv}", game.next_player()),
            Err(err) => println!("{err}"),
        }
    }
}

fn config_from_env() -> MinimaxConfig {
    let mut config = MinimaxConfig::default();
    if let Some(seed) = env_parse("HEXAPAWN_SEED") {
        config = config.with_seed(seed);
    }
    if let Some(depth) = env_parse("HEXAPAWN_DEPTH") {
        config = config.with_max_depth(depth);
    }
    config
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        warn!(key, value = %raw, "ignoring unparseable environment variable");
    }
    parsed
}
