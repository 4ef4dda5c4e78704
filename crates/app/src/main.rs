use anyhow::Result;
use clap::Parser;

use voxdoc_engine::{CenterNameLexicon, HookDispatcher};
use voxdoc_foundation::real_wall_clock;
use voxdoc_json::{EventRouter, StdoutSink};

mod replay;

/// Serialize recognition results as one JSON document per utterance.
#[derive(Parser, Debug)]
#[command(name = "voxdoc", version, about)]
struct Cli {
    /// Enable JSON document output. Without this switch the event stream is
    /// consumed but nothing is assembled or printed.
    #[arg(long)]
    json: bool,

    /// Number of canned utterances to replay through the pipeline.
    #[arg(long, default_value_t = 1)]
    utterances: u32,
}

fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_level)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut dispatcher = HookDispatcher::new();
    if cli.json {
        let router = EventRouter::new(
            CenterNameLexicon::new(),
            real_wall_clock(),
            StdoutSink::new(),
        );
        dispatcher.attach(Box::new(router));
        tracing::info!("JSON document output enabled");
    } else {
        tracing::info!("JSON document output disabled, pass --json to enable");
    }

    for _ in 0..cli.utterances {
        replay::replay_utterance(&mut dispatcher);
    }
    Ok(())
}
