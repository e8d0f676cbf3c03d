use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use wayfinder::core::config::{self, CliOverrides, ResolvedConfig};
use wayfinder::demo::{DemoCoordinator, DemoRoute, scripted_walk};
use wayfinder::{CoordinatorHost, StartPolicy};

#[derive(Parser)]
#[command(name = "wayfinder", about = "Coordinator-driven navigation demo")]
struct Args {
    /// Maximum navigation stack depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Fail instead of continuing when the initial route cannot be pushed
    #[arg(long)]
    strict_start: bool,

    /// Log every dispatched action
    #[arg(long)]
    log_actions: bool,

    /// Config file (defaults to ~/.wayfinder/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run the scripted walk without a terminal UI and print the final state as JSON
    #[arg(long)]
    headless: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            max_depth: self.max_depth,
            start_policy: self.strict_start.then_some(StartPolicy::Strict),
            log_actions: self.log_actions.then_some(true),
        }
    }
}

/// Screens send from a separate task; the host delivers on this one.
async fn run_headless(config: &ResolvedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut host = CoordinatorHost::with_config(DemoCoordinator::default(), config);
    host.start(DemoRoute::Inbox)?;

    let dispatcher = host.dispatcher();
    let producer = tokio::spawn(async move {
        for action in scripted_walk() {
            dispatcher.send(action);
        }
    });

    while !host.coordinator().quit_requested && host.step().await {}
    producer.await?;

    println!("{}", serde_json::to_string_pretty(&host.snapshot())?);
    log::info!("Headless walk finished: {}", host.coordinator().status);
    host.cleanup();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - writes to wayfinder.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("wayfinder.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    let resolved = config::resolve(&file_config, &args.overrides());
    log::info!("Wayfinder starting up with {:?}", resolved);

    if args.headless {
        run_headless(&resolved).await
    } else {
        wayfinder::tui::run(&resolved)?;
        Ok(())
    }
}
