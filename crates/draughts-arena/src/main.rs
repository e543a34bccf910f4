use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use draughts_arena::config::{ArenaConfig, PresetConfig};
use draughts_arena::game_runner::{random_seed, GameRunner};
use draughts_arena::json_output;
use draughts_bot::Difficulty;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "draughts-arena")]
#[command(about = "Self-play arena for the heuristic draughts bot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a match between two bots
    Match {
        /// Light bot difficulty (easy, medium, hard)
        #[arg(short, long)]
        light: Option<Difficulty>,
        /// Dark bot difficulty (easy, medium, hard)
        #[arg(short, long)]
        dark: Option<Difficulty>,
        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,
        /// Preset from arena.toml to start from
        #[arg(short, long)]
        preset: Option<String>,
        /// Base seed; game i uses seed + i
        #[arg(short, long)]
        seed: Option<u64>,
        /// Plies after which a game is scored a draw
        #[arg(long)]
        max_plies: Option<usize>,
        /// Write a JSON report to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            light,
            dark,
            games,
            preset,
            seed,
            max_plies,
            json,
        } => {
            let base = match &preset {
                Some(name) => {
                    let config = ArenaConfig::load().context("loading arena.toml")?;
                    tracing::info!("Using preset: {}", name);
                    config.get_preset(name)?.clone()
                }
                None => PresetConfig::default(),
            };

            let light = light.unwrap_or(base.light);
            let dark = dark.unwrap_or(base.dark);
            let games = games.unwrap_or(base.games);
            let max_plies = max_plies.unwrap_or(base.max_plies);
            let seed = seed.or(base.seed).unwrap_or_else(random_seed);
            if games == 0 {
                bail!("a match needs at least one game");
            }

            tracing::info!(%light, %dark, games, seed, max_plies, "starting match");
            let report = GameRunner::new(light, dark, max_plies).play_match(games, seed)?;

            println!(
                "\nSession Results: Light:{} Draw:{} Dark:{}",
                report.summary.light_wins, report.summary.draws, report.summary.dark_wins
            );

            if let Some(path) = json {
                json_output::write_json(&path, &report)
                    .with_context(|| format!("writing {}", path.display()))?;
                tracing::info!("Report written to {}", path.display());
            }
        }
    }

    Ok(())
}
