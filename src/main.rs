mod benchmark;
mod cli;
mod config;
mod routines;
mod sheets;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::cli::Cli;
use crate::config::publisher_config::PublisherConfig;
use crate::routines::publish_benchmark::PublishBenchmarkRoutine;
use crate::routines::routine::Routine;

fn setup_tracing() {
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    Registry::default()
        .with(Targets::new().with_target("benchmark_publisher", tracing::Level::TRACE))
        .with(stderr_layer)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let cli = Cli::parse();

    let config = match PublisherConfig::load(&cli) {
        Ok(config) => config,
        Err(report) => {
            tracing::error!("❌ configuration: {:?}", report);
            return ExitCode::FAILURE;
        }
    };

    let routine = PublishBenchmarkRoutine::new(config);
    match routine.run().await {
        Ok(()) => {
            tracing::info!("✅ {}: OK", routine.name());
            ExitCode::SUCCESS
        }
        Err(report) => {
            tracing::error!("❌ {}: {:?}", routine.name(), report);
            ExitCode::FAILURE
        }
    }
}
