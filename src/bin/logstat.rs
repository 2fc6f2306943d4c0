use std::io::{self, BufWriter};
use std::path::PathBuf;

use ai_2048_bridge::stats::{self, write_report, ReportFormat};
use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

#[derive(Debug, Parser)]
#[command(
    name = "logstat",
    version,
    about = "Count how often each highest tile occurs in a 2048 game log"
)]
struct Args {
    /// Game log CSV with rows `moves,score,max_tile,board`; a missing file counts as empty
    logfile: PathBuf,

    /// `BASIC` prints BASIC DATA statements; anything else prints `tile,count` lines
    #[arg(allow_hyphen_values = true)]
    mode: Option<String>,

    /// Ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

impl Args {
    fn format(&self) -> ReportFormat {
        ReportFormat::from_arg(self.mode.as_deref())
    }
}

/// Exit status for a failed parse: usage problems exit 1; --help and --version exit 0.
fn parse_exit_code(e: &clap::Error) -> i32 {
    if e.use_stderr() { 1 } else { 0 }
}

fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = parse_exit_code(&e);
            let _ = e.print();
            std::process::exit(code);
        }
    };
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let table = stats::aggregate_path(&args.logfile)
        .with_context(|| format!("failed to read game log {}", args.logfile.display()))?;
    info!(
        "{}: {} game(s), {} distinct tile(s)",
        args.logfile.display(),
        table.total(),
        table.len()
    );

    let stdout = io::stdout();
    write_report(&table, args.format(), BufWriter::new(stdout.lock()))?;
    Ok(())
}
