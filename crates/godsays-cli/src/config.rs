use anyhow::bail;
use clap::Parser;
use godsays::{DEFAULT_AMOUNT, MAX_AMOUNT, MIN_AMOUNT, parse_amount};
use std::ffi::OsString;
use std::time::Duration;

/// Long flags that may also be spelled with a single dash (`-amount 5`).
const LONG_FLAGS: &[&str] = &[
    "amount",
    "help",
    "host",
    "http",
    "port",
    "request-timeout",
    "shutdown-timeout",
    "version",
];

const EXAMPLES: &str = "\
Examples:
  godsays                      # Generate 32 words (default)
  godsays -amount 10           # Generate 10 words
  godsays -amount 100          # Generate 100 words

HTTP server:
  godsays -http                # Serve on 127.0.0.1:3333
  godsays -http -host 0.0.0.0  # Serve on all interfaces
  godsays -http -port 8080     # Serve on port 8080";

/// Command line arguments for the `godsays` binary.
///
/// Without `--http` the binary prints one phrase and exits. With it, the same
/// generator is served over HTTP until the process receives Ctrl+C or
/// SIGTERM. Server settings may also come from the environment or a `.env`
/// file.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "godsays",
    version,
    about = "Rust port of Terry Davis' \"god says\" program from TempleOS.\n\
             Generates random words from the Happy wordlist.",
    after_help = EXAMPLES
)]
pub struct CliArgs {
    /// Number of words to generate (1 - 1000).
    ///
    /// In server mode this becomes the default for requests that do not pass
    /// an `amount` query parameter.
    #[arg(
        long,
        env = "GODSAYS_AMOUNT",
        default_value_t = DEFAULT_AMOUNT,
        value_parser = parse_amount,
        allow_hyphen_values = true
    )]
    pub amount: usize,

    /// Start an HTTP server instead of printing a single phrase.
    #[arg(long, default_value_t = false)]
    pub http: bool,

    /// Host the HTTP server binds to.
    ///
    /// Environment variable: `GODSAYS_HOST`
    #[arg(long, env = "GODSAYS_HOST", default_value_t = String::from("127.0.0.1"))]
    pub host: String,

    /// Port the HTTP server listens on.
    ///
    /// Environment variable: `GODSAYS_PORT`
    #[arg(long, env = "GODSAYS_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Seconds a single request may take before it is answered with 503.
    ///
    /// Environment variable: `GODSAYS_REQUEST_TIMEOUT`
    #[arg(long, env = "GODSAYS_REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,

    /// Seconds to wait for in-flight requests after a shutdown signal.
    ///
    /// Environment variable: `GODSAYS_SHUTDOWN_TIMEOUT`
    #[arg(long, env = "GODSAYS_SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,
}

/// What the binary should do once arguments are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print one phrase to stdout.
    Print,
    /// Serve phrases over HTTP.
    Serve(ServerConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub amount: usize,
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub server_addr: String,
    pub request_timeout: Duration,
    pub shutdown_timeout: Duration,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        // clap already ran `parse_amount`, but the value may have been built
        // by hand.
        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&args.amount) {
            bail!("amount must be between {MIN_AMOUNT} and {MAX_AMOUNT}");
        }

        if !args.http {
            return Ok(Self {
                amount: args.amount,
                mode: Mode::Print,
            });
        }

        if args.host.trim().is_empty() {
            bail!("GODSAYS_HOST must not be empty");
        }
        if args.request_timeout == 0 {
            bail!("GODSAYS_REQUEST_TIMEOUT must be greater than 0");
        }
        if args.shutdown_timeout == 0 {
            bail!("GODSAYS_SHUTDOWN_TIMEOUT must be greater than 0");
        }

        Ok(Self {
            amount: args.amount,
            mode: Mode::Serve(ServerConfig {
                server_addr: join_host_port(args.host.trim(), args.port),
                request_timeout: Duration::from_secs(args.request_timeout),
                shutdown_timeout: Duration::from_secs(args.shutdown_timeout),
            }),
        })
    }
}

fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Rewrites Go-style single-dash long flags (`-amount`, `-http=true`) into
/// the double-dash form clap understands.
///
/// Only names in [`LONG_FLAGS`] are rewritten, so values such as `-1` are left
/// alone. Everything after a bare `--` is passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if LONG_FLAGS.contains(&name) {
                        OsString::from(format!("-{text}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
