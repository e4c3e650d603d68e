//! pushdigest: render pushed upload files as PDF summaries and post them to Slack.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use pushdigest::config;
use pushdigest::env;
use pushdigest::pipeline;
use pushdigest::progress;
use pushdigest::slack;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, OutputFormat};
use config::Config;
use env::Env;
use pipeline::UploadPipeline;
use progress::ProgressReporter;
use slack::{DisabledUploader, SlackUploader, Uploader};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Configuration is resolved once here and injected everywhere below.
    let mut config = Config::load(Some(cli.path.as_path()), cli.config.as_deref(), &Env::real())
        .context("failed to load configuration")?;
    if let Some(event_path) = cli.event.clone() {
        config.event_path = Some(event_path);
    }

    let event = pipeline::load_event(&config)
        .await
        .context("failed to load push event")?;

    let uploader: Box<dyn Uploader> = if cli.no_upload {
        Box::new(DisabledUploader)
    } else {
        Box::new(
            SlackUploader::from_config(&config.slack).context("failed to set up Slack uploader")?,
        )
    };

    let show_progress = !cli.quiet && cli.format == OutputFormat::Terminal;
    let progress = ProgressReporter::new(show_progress);

    match UploadPipeline::new(&config, uploader.as_ref(), &progress)
        .run(&event, &cli.path)
        .await
    {
        Ok(summary) => {
            print!("{}", cli.format.render(&summary));
            Ok(())
        }
        Err(aborted) => {
            // Report the responses already received before failing the run.
            print!("{}", cli.format.render(&aborted.completed));
            Err(aborted.into())
        }
    }
}
