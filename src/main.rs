//! # Keypad
//!
//! Scientific calculator keypad for the terminal.
//!

mod term;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "keypad")]
#[command(about = "Scientific calculator keypad", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Keys to press, then print the display and exit (e.g. `12 + 3 =`)
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Do not style the display
    #[arg(long)]
    plain: bool,

    /// Log filter directive (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let filter = match &cli.log {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if cli.keys.is_empty() {
        term::main(cli.plain);
    } else {
        std::process::exit(term::batch(&cli.keys, cli.plain));
    }
}
