//! Cram CLI Application
//!
//! Command-line interface for generating study plans and tracking progress
//! through them.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();
    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Cram started");

    match command {
        Generate(args) => cli.generate(args).await,
        Show(args) => cli.show(args),
        Toggle(args) => cli.toggle(args),
        Schema => cli.schema(),
    }
}
