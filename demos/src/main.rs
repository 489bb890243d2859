//! `labyrinth`: run the maze solver headlessly on a level file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use labyrinth_core::Level;
use labyrinth_demos::{DemoConfig, Overlay, Simulation, compare, render};
use labyrinth_paths::AlgorithmKind;

const DEFAULT_LEVEL: &str = include_str!("../levels/level1.txt");

/// Headless maze solver: autosolve a level while enemies wander.
#[derive(Parser, Debug)]
#[command(name = "labyrinth", version)]
struct Cli {
    /// TOML file with run settings; flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Block size in pixels
    #[arg(long, global = true)]
    block_size: Option<i32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Autosolve a level, stepping on a simulated clock
    Run(RunArgs),
    /// Solve a level once with every algorithm and compare the results
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Level file (defaults to the bundled first level)
    level: Option<PathBuf>,

    /// Search algorithm: dfs, bfs, greedy or astar
    #[arg(long, short)]
    algorithm: Option<AlgorithmKind>,

    /// Search algorithm used when the next step is blocked
    #[arg(long)]
    replan: Option<AlgorithmKind>,

    /// Random seed for enemy motion
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate before giving up
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Milliseconds between automatic steps
    #[arg(long)]
    step_delay_ms: Option<u64>,

    /// Milliseconds between enemy moves
    #[arg(long)]
    enemy_delay_ms: Option<u64>,

    /// Print the maze after every step
    #[arg(long)]
    trace: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Level file (defaults to the bundled first level)
    level: Option<PathBuf>,

    /// Also print each path and its explored cells
    #[arg(long)]
    render: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(bs) = cli.block_size {
        cfg.block_size = bs;
    }

    match cli.command {
        Command::Run(args) => run(cfg, args),
        Command::Compare(args) => {
            let level = load_level(args.level.as_ref(), cfg.block_size)?;
            print_comparison(&level, args.render);
            Ok(())
        }
    }
}

fn load_level(path: Option<&PathBuf>, block_size: i32) -> Result<Level> {
    match path {
        Some(p) => Level::load(p, block_size).with_context(|| format!("loading {}", p.display())),
        None => Level::parse(DEFAULT_LEVEL, block_size).context("parsing bundled level"),
    }
}

fn run(mut cfg: DemoConfig, args: RunArgs) -> Result<()> {
    if let Some(v) = args.max_ticks {
        cfg.max_ticks = v;
    }
    if let Some(v) = args.step_delay_ms {
        cfg.step_delay_ms = v;
    }
    if let Some(v) = args.enemy_delay_ms {
        cfg.enemy_delay_ms = v;
    }
    if let Some(kind) = args.replan {
        cfg.replan_algorithm = kind.label().to_string();
    }
    let algorithm = match args.algorithm {
        Some(kind) => kind,
        None => cfg.algorithm()?,
    };
    let seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let level = load_level(args.level.as_ref(), cfg.block_size)?;
    tracing::info!(%algorithm, seed, "starting run");

    let sim = Simulation::new(level.clone(), &cfg, algorithm, seed)?;
    let trace = args.trace;
    let outcome = sim.run(|sim| {
        if trace {
            let path: Vec<_> = sim.state().solver().path().iter().copied().collect();
            let overlay = Overlay {
                player: Some(sim.state().player()),
                enemies: sim.enemies(),
                path: &path,
                ..Overlay::default()
            };
            println!("{}", render(sim.level(), &overlay));
        }
    });

    let overlay = Overlay {
        player: outcome.trail.last().copied().or(Some(level.player())),
        path: &outcome.trail,
        ..Overlay::default()
    };
    print!("{}", render(&level, &overlay));
    println!(
        "{algorithm} (seed {seed}): {} after {:.2}s",
        if outcome.reached_goal { "reached the exit" } else { "gave up" },
        outcome.elapsed.as_secs_f64()
    );
    println!(
        "  planned {} steps, moved {}, replanned {}, failed {}, caught {}",
        outcome.planned_steps, outcome.moves, outcome.replans, outcome.failures, outcome.catches
    );
    Ok(())
}

fn print_comparison(level: &Level, show: bool) {
    println!("{:<8} {:>6} {:>9}", "algo", "steps", "explored");
    for r in compare(level) {
        let steps = r.steps().map_or_else(|| "-".to_string(), |s| s.to_string());
        println!("{:<8} {:>6} {:>9}", r.algorithm.label(), steps, r.explored.len());
        if show {
            let overlay = Overlay {
                player: Some(level.player()),
                enemies: level.enemies(),
                path: &r.path,
                explored: &r.explored,
            };
            println!("{}", render(level, &overlay));
        }
    }
}
