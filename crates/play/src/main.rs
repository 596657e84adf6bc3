//! Play chess against the classical engine in the terminal.
//!
//! Moves are typed as `<rank><file><rank><file>`, e.g. `2e4e` for e2-e4.

use std::env;
use std::io;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use chess_core::{Board, Color};
use chess_play::run_game;
use classical_engine::{ClassicalEngine, EngineConfig};

fn print_usage() {
    println!("ML-chess terminal game");
    println!();
    println!("Usage:");
    println!("  chess [--config <path>] [--depth <n>] [--print-config]");
    println!();
    println!("Options:");
    println!("  --config, -c <path>  Load engine settings from a TOML file");
    println!("  --depth, -d <n>      Override the engine's search depth");
    println!("  --print-config       Print the effective configuration and exit");
    println!();
    println!("Enter moves as <rank><file><rank><file>, e.g. 2e4e. Type 'quit' to leave.");
}

struct Options {
    config: EngineConfig,
    print_config: bool,
}

fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut config_path = None;
    let mut depth = None;
    let mut print_config = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let path = args.get(i).context("--config needs a path")?;
                config_path = Some(path.clone());
            }
            "--depth" | "-d" => {
                i += 1;
                let value = args.get(i).context("--depth needs a number")?;
                let parsed: u8 = value
                    .parse()
                    .with_context(|| format!("invalid depth '{value}'"))?;
                depth = Some(parsed);
            }
            "--print-config" => print_config = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => bail!("unknown argument '{other}'"),
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => EngineConfig::load(&path)?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = depth {
        config.search_depth = depth;
    }
    config.validate()?;

    Ok(Some(Options {
        config,
        print_config,
    }))
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = parse_args(&args)? else {
        return Ok(());
    };

    if options.print_config {
        print!("{}", options.config.to_toml_string()?);
        return Ok(());
    }

    let mut engine = ClassicalEngine::from_config(options.config)?;
    let mut board = Board::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_game(&mut board, &mut engine, Color::White, stdin.lock(), &mut stdout)?;
    Ok(())
}
