#![doc = include_str!("../README.md")]

mod config;
mod server;
mod telemetry;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, Config, Mode, ServerConfig, normalize_args};
use godsays::{PhraseGenerator, PhraseSource};
use telemetry::init_telemetry;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<ExitCode> {
    // Load from .env
    let _ = dotenvy::dotenv();

    let args = match CliArgs::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(err) => {
            // `-help` and `-version` land here too and must exit cleanly.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            err.print()?;
            return Ok(code);
        }
    };
    let config = Config::try_from(args)?;

    #[allow(clippy::cast_possible_wrap)]
    let generator = PhraseGenerator::new(config.amount as i64)
        .context("failed to initialize God Says")?;

    match config.mode {
        Mode::Print => {
            print_phrase(&generator.speak())?;
            Ok(ExitCode::SUCCESS)
        }
        Mode::Serve(server_config) => {
            serve(server_config, Arc::new(generator))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Writes the phrase to stdout. A closed pipe (`godsays | head -c0`) is not
/// an error.
fn print_phrase(phrase: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    match writeln!(stdout, "{phrase}").and_then(|()| stdout.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

fn serve(config: ServerConfig, generator: Arc<dyn PhraseSource>) -> anyhow::Result<()> {
    init_telemetry()?;
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?
        .block_on(server::run(config, generator))
}
