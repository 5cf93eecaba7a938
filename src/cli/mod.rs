mod args;
mod config;
mod global;
mod handlers;
mod input;

use args::{ConfigAction, ListArgs, TransformArgs};
use clap::{Parser, Subcommand};
use decipher::{CodecError, Mode};
use global::GlobalArgs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "decipher")]
#[command(version)]
#[command(about = "Encode and decode text with classical ciphers: hex, base64, rot13, atbash, morse, railfence, vigenere", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text with an algorithm
    Encode(TransformArgs),
    /// Decode text with an algorithm
    Decode(TransformArgs),
    /// List available algorithms
    List(ListArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.global);

    match dispatch(cli.command, &cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(err.as_ref(), cli.global.use_color());
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(global)?;

    match command {
        Commands::Encode(args) => handlers::transform::handle(Mode::Encode, args, global, &config),
        Commands::Decode(args) => handlers::transform::handle(Mode::Decode, args, global, &config),
        Commands::List(args) => handlers::list::handle(args, global),
        Commands::Config { action } => handlers::config::handle(action, global, &config),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the flag-derived level.
fn init_logging(global: &GlobalArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(global.log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(global.use_color())
        .try_init();
}

fn report(err: &(dyn std::error::Error + 'static), use_color: bool) {
    if let Some(codec_err) = err.downcast_ref::<CodecError>() {
        eprintln!("{}", codec_err.render(use_color));
    } else if use_color {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", err);
    } else {
        eprintln!("error: {}", err);
    }
}
