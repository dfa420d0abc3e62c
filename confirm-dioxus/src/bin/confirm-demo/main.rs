//! Entry point for the confirm-demo binary.

mod args;
mod tracing_setup;

use anyhow::Result;
use confirm_dioxus::ConfirmConfig;

use crate::args::ConfigSource;

fn main() -> Result<()> {
    let source = args::parse_args();
    let loaded = match &source {
        ConfigSource::Default => ConfirmConfig::load_default(),
        ConfigSource::File(path) => ConfirmConfig::load_from(path),
    };
    let config = loaded.unwrap_or_else(|err| {
        eprintln!("Warning: {err}");
        eprintln!("Using default configuration");
        ConfirmConfig::default()
    });

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    tracing_setup::init(&config.logging);

    log::info!("Starting confirm-demo");

    confirm_dioxus::launch(config)
}
