use std::path::PathBuf;

use ai_2048_bridge::board::Board;
use ai_2048_bridge::config::ResolverConfig;
use ai_2048_bridge::resolver::{resolve_move, NativeResolver};
use anyhow::Context;
use clap::Parser;
use env_logger::Env;

/// Boards used when none is given on the command line.
const DEMO_BOARDS: [[u64; 16]; 2] = [
    [
        8, 2, 4, 2,
        2, 2, 4, 8,
        128, 64, 32, 16,
        256, 512, 1024, 2048,
    ],
    [
        0, 0, 0, 0,
        8, 4, 2, 2,
        16, 32, 64, 128,
        2048, 1024, 512, 256,
    ],
];

#[derive(Debug, Parser)]
#[command(
    name = "ai-2048-bridge",
    version,
    about = "Encode a 2048 board and ask the native engine for the best move"
)]
struct Args {
    /// 16 tile values, row-major, separated by commas or spaces (demo boards if omitted)
    #[arg(value_name = "CELL")]
    cells: Vec<String>,

    /// Native engine library
    #[arg(long, value_name = "PATH", env = "LIB2048_PATH")]
    lib: Option<PathBuf>,

    /// Exported decision function
    #[arg(long, value_name = "NAME")]
    symbol: Option<String>,

    /// TOML file with `library` and `symbol` keys
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the decoded grid after the encoded board
    #[arg(long)]
    show: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut config = match &args.config {
        Some(path) => ResolverConfig::from_toml(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => ResolverConfig::default(),
    };
    if let Some(lib) = args.lib {
        config.library = lib;
    }
    if let Some(symbol) = args.symbol {
        config.symbol = symbol;
    }

    let boards: Vec<Board> = if args.cells.is_empty() {
        DEMO_BOARDS.iter().copied().map(Board::new).collect()
    } else {
        vec![args.cells.join(" ").parse::<Board>().context("invalid board")?]
    };

    let engine = NativeResolver::from_config(&config)?;
    for board in boards {
        let encoded = board.encode();
        println!("{:x}", encoded);
        if args.show {
            print!("{}", encoded);
        }
        match resolve_move(&engine, encoded) {
            Some(dir) => println!("{}", dir),
            None => println!("NONE"),
        }
    }
    Ok(())
}
