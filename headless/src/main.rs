//! Headless host for the Pong simulation core
//!
//! Drives a `GameSession` on a simulated 60 Hz clock, steering any human
//! paddles with the opponent heuristic. With `--emit`, every tick is written
//! to stdout as COBS-framed postcard messages for an external renderer.

mod autopilot;
mod clock;
mod frames;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{
    Config, Difficulty, Direction, GameSession, InputState, Params, PlayerMode, RoundMode, Side,
    Snapshot, Winner,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use autopilot::Autopilot;
use clock::SimClock;

#[derive(Parser, Debug)]
#[command(name = "pong-headless")]
#[command(about = "Run the Pong simulation without a renderer")]
struct Cli {
    /// Player mode: single or multiplayer
    #[arg(long, default_value = "single")]
    players: String,

    /// Round mode: score or timed
    #[arg(long, default_value = "score")]
    round: String,

    /// Timed round length in seconds (switches to a timed round)
    #[arg(long)]
    duration_secs: Option<u64>,

    /// Points needed to win
    #[arg(long, default_value_t = Params::WIN_SCORE)]
    max_score: u8,

    /// Computer opponent difficulty: easy, medium, hard or expert
    #[arg(long, default_value = "medium")]
    difficulty: String,

    /// Difficulty of the autopilot steering human paddles
    #[arg(long, default_value = "hard")]
    autopilot: String,

    /// RNG seed for the serve direction (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if the round is still running
    #[arg(long, default_value_t = 216_000)]
    max_ticks: u64,

    /// Write COBS-framed messages to stdout
    #[arg(long)]
    emit: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for emitted frames
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let report = run(&cli, &mut out)?;
    out.flush().context("Failed to flush stdout")?;

    let snap = report.last;
    let (left_label, right_label) = report.players.labels();
    match snap.winner {
        Some(Winner::Left) => info!("{left_label} wins {}-{}", snap.left_score, snap.right_score),
        Some(Winner::Right) => {
            info!("{right_label} wins {}-{}", snap.right_score, snap.left_score)
        }
        Some(Winner::Tie) => info!("Tie {}-{}", snap.left_score, snap.right_score),
        None => warn!(
            ticks = snap.tick,
            "Stopped before the round finished at {}-{}", snap.left_score, snap.right_score
        ),
    }

    Ok(())
}

struct RoundReport {
    players: PlayerMode,
    last: Snapshot,
}

fn build_session(cli: &Cli) -> GameSession {
    let mut session = match cli.seed {
        Some(seed) => GameSession::new(Config::new(), seed),
        None => GameSession::with_entropy(Config::new()),
    };

    // Unknown values are logged and ignored by the session
    session.set_player_mode_str(&cli.players);
    session.set_difficulty_str(&cli.difficulty);
    session.set_round_mode_str(&cli.round);
    if let Some(secs) = cli.duration_secs {
        session.set_round_mode(RoundMode::Timed {
            duration_ms: secs.saturating_mul(1000),
        });
    }
    session.set_max_score(cli.max_score);
    session
}

/// Play one round, writing frames to `out` when emitting.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<RoundReport> {
    let difficulty: Difficulty = cli
        .autopilot
        .parse()
        .with_context(|| format!("Invalid autopilot difficulty '{}'", cli.autopilot))?;

    let mut session = build_session(cli);
    let players = session.config().players;
    let two_player = players == PlayerMode::TwoPlayer;
    let court_height = session.court().height;
    let left = Autopilot::new(Side::Left, difficulty);
    let right = Autopilot::new(Side::Right, difficulty);

    info!(
        %players,
        round = ?session.config().round,
        max_score = session.score().max_score(),
        "Starting round"
    );

    let mut clock = SimClock::default();
    session.start(clock.now_ms());
    let mut snap = session.snapshot();

    while !snap.game_over && snap.tick < cli.max_ticks {
        let right_dir = if two_player {
            right.direction(&snap, court_height)
        } else {
            Direction::Stop
        };
        let input = InputState::new(left.direction(&snap, court_height), right_dir);
        snap = session.tick(clock.advance(), &input);

        if snap.events.left_scored || snap.events.right_scored {
            debug!(
                left = snap.left_score,
                right = snap.right_score,
                tick = snap.tick,
                secs_left = ?snap.time_remaining_secs(),
                "Point"
            );
        }

        if cli.emit {
            for msg in frames::messages(&snap) {
                let bytes = msg.to_cobs().context("Failed to encode message")?;
                out.write_all(&bytes).context("Failed to write frame")?;
            }
        }
    }

    Ok(RoundReport {
        players,
        last: snap,
    })
}
