//! Walk through `stctok` one pass at a time.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=stctok=trace`).

use std::io;
use std::process::ExitCode;

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use stctok::demo::{self, DEFAULT_BUFFER_SIZE, DEFAULT_DELIMS, DEFAULT_INPUT, DemoConfig};
use stctok::stctok::BreakPolicy;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(version, about = "Tokenize a string with stctok, printing every pass")]
struct Args {
    /// String to tokenize.
    #[arg(default_value = DEFAULT_INPUT)]
    input: String,

    /// Break characters; any one of them ends a token.
    #[arg(default_value = DEFAULT_DELIMS)]
    delims: String,

    /// Treat a run of break characters as a single separator.
    #[arg(long)]
    collapse: bool,

    /// Token buffer capacity in bytes, terminator included.
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    buffer_size: usize,
}

impl From<Args> for DemoConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            delims: args.delims,
            policy: if args.collapse {
                BreakPolicy::Collapse
            } else {
                BreakPolicy::EmitEmpty
            },
            buffer_size: args.buffer_size,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let config = DemoConfig::from(Args::parse());
    if let Err(err) = demo::run(&config, &mut io::stdout().lock()) {
        error!(%err, "walkthrough aborted");
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use clap::error::ErrorKind;
    use stctok::demo::DemoConfig;
    use stctok::stctok::BreakPolicy;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let config = DemoConfig::from(Args::try_parse_from(["stctok"]).unwrap());
        assert_eq!(config.input, "1,,,,5,,,,9");
        assert_eq!(config.delims, ",");
        assert_eq!(config.buffer_size, 256);
        assert_eq!(config.policy, BreakPolicy::EmitEmpty);
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_positional_arguments_and_collapse() {
        let args = Args::try_parse_from(["stctok", "a;b c", "; ", "--collapse", "--buffer-size", "8"])
            .unwrap();
        let config = DemoConfig::from(args);
        assert_eq!(config.input, "a;b c");
        assert_eq!(config.delims, "; ");
        assert_eq!(config.buffer_size, 8);
        assert_eq!(config.policy, BreakPolicy::Collapse);
    }

    #[test]
    fn test_zero_buffer_size_rejected() {
        let err = Args::try_parse_from(["stctok", "--buffer-size", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
