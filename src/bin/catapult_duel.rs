//! Headless Catapult Wars duel
//!
//! Plays a full match between the AI and a scripted human "autopilot" that
//! drags a random distance at the start of each of its turns and releases
//! one tick later. Useful for checking animation sheets and tuning against the
//! real turn engine without a renderer.
//!
//! Run with: cargo run --bin catapult_duel -- --seed 7

use std::path::PathBuf;
use std::process;

use clap::Parser;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use catapult_wars_engine::animation::{default_definitions, load_definitions};
use catapult_wars_engine::audio::{AudioSink, LogAudio, SilentAudio};
use catapult_wars_engine::game::{Duel, DuelEvent, GameConfig};

#[derive(Parser)]
#[command(name = "catapult-duel")]
#[command(about = "Run a headless Catapult Wars match (human autopilot vs AI)", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for wind, AI shots and the autopilot
    #[arg(short, long, default_value = "1")]
    seed: u64,

    /// Game config JSON (missing fields keep their defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Animation definition JSON (defaults to the built-in sheet)
    #[arg(short, long)]
    animations: Option<PathBuf>,

    /// Seconds per tick
    #[arg(long, default_value = "0.0166667")]
    dt: f32,

    /// Give up after this many ticks
    #[arg(long, default_value = "200000")]
    max_ticks: u64,

    /// Print every duel event as a JSON line
    #[arg(long)]
    events: bool,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Outcome of a finished run.
struct Summary {
    ticks: u64,
    scores: (u32, u32),
    winner: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    match run(&cli) {
        Ok(summary) => {
            if !cli.quiet {
                let winner = summary.winner.as_deref().unwrap_or("nobody");
                println!(
                    "Match over after {} ticks: {} - {} (winner: {})",
                    summary.ticks, summary.scores.0, summary.scores.1, winner
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Summary, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let definitions = match &cli.animations {
        Some(path) => load_definitions(path)?,
        None => default_definitions(),
    };
    if !cli.dt.is_finite() || cli.dt <= 0.0 {
        return Err(format!("--dt must be positive, got {}", cli.dt).into());
    }

    let mut duel = Duel::new(config, &definitions, cli.seed)?;
    let mut autopilot = ChaCha8Rng::seed_from_u64(cli.seed.wrapping_add(1));
    let mut audio: Box<dyn AudioSink> = if cli.quiet {
        Box::new(SilentAudio)
    } else {
        Box::new(LogAudio)
    };

    let mut ticks = 0;
    let mut aiming = false;
    while !duel.is_game_over() {
        if ticks >= cli.max_ticks {
            return Err(format!("no winner after {} ticks", cli.max_ticks).into());
        }

        let events = duel.update(cli.dt, audio.as_mut())?;
        ticks += 1;

        if cli.events {
            for event in &events {
                println!("{}", serde_json::to_string(event)?);
            }
        }

        // Pull back on the turn's first tick, let go on the next
        if aiming {
            aiming = false;
            if let Some(velocity) = duel.release()? {
                log::info!("[Autopilot] shot at {:.0} px/s", velocity);
            }
        }
        let turn_started = events
            .iter()
            .any(|e| matches!(e, DuelEvent::TurnChanged { player, .. } if *player == duel.human()));
        if turn_started {
            aiming = pull_back(&mut duel, &mut autopilot)?;
        }
    }

    let scores = duel.scores()?;
    let winner = match duel.winner() {
        Some(id) => Some(duel.field().player(id)?.name.clone()),
        None => None,
    };
    Ok(Summary {
        ticks,
        scores,
        winner,
    })
}

/// Drag a random distance to the right. Returns true if the drag was taken.
fn pull_back(duel: &mut Duel, rng: &mut ChaCha8Rng) -> catapult_wars_engine::Result<bool> {
    let strength: f32 = rng.gen_range(0.3..1.0);
    let start = Vec2::new(100.0, 200.0);
    let reach = duel.field().config().max_drag_distance * strength;

    if !duel.begin_drag(start)? {
        return Ok(false);
    }
    duel.drag_to(start + Vec2::new(reach, 0.0))?;
    log::debug!("[Autopilot] drag {:.0} px", reach);
    Ok(true)
}
