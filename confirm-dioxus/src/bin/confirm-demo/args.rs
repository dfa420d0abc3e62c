//! Command-line argument parsing.

use std::path::PathBuf;

/// Where to load configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The platform config directory (`confirm-dioxus/confirm.toml`).
    Default,
    /// An explicit file given on the command line.
    File(PathBuf),
}

/// Parse command-line arguments into a config source.
pub fn parse_args() -> ConfigSource {
    parse(std::env::args().skip(1))
}

fn parse(mut args: impl Iterator<Item = String>) -> ConfigSource {
    let Some(first) = args.next() else {
        return ConfigSource::Default;
    };

    // Runs before logging is set up.
    let extra = args.count();
    if extra > 0 {
        eprintln!("Ignoring {extra} extra argument(s) after {first}");
    }

    ConfigSource::File(PathBuf::from(first))
}
