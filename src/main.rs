//! Book advisor front-end shell.
//!
//! # Architecture Overview
//!
//! ```text
//!     address / stdin command
//!     ────────────────────────┐
//!                             ▼
//!                      ┌─────────────┐    ┌──────────────┐    ┌───────────┐
//!                      │ navigation  │───▶│   routing    │───▶│    app    │──▶ rendered page
//!                      │ event loop  │    │   router     │    │   views   │    (stdout)
//!                      └─────────────┘    └──────────────┘    └───────────┘
//!                             │                   ▲
//!                             ▼                   │
//!                      ┌─────────────┐    ┌──────────────┐
//!                      │   history   │    │    config    │
//!                      └─────────────┘    └──────────────┘
//! ```
//!
//! Each stdin line is a navigation command: a path, `push <path>`,
//! `replace <path>`, `back` or `forward`.

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use bookadvisor::config::{load_config, AppConfig};
use bookadvisor::lifecycle::bootstrap;
use bookadvisor::navigation::{NavigationEvent, Navigator};
use bookadvisor::observability::init_logging;

#[derive(Parser)]
#[command(name = "bookadvisor")]
#[command(about = "Book advisor front-end shell", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial address (base path included). Defaults to the app root.
    #[arg(short, long)]
    location: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    init_logging(&config.observability)?;

    tracing::info!("bookadvisor v{} starting", env!("CARGO_PKG_VERSION"));

    let mut app = bootstrap(&config, cli.location.as_deref())?;
    println!("{}", app.mount()?);

    let (navigator, mut rx) = Navigator::channel();
    let input = tokio::spawn(read_commands(navigator));

    app.run(&mut rx, |page| println!("{page}")).await?;
    input.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Forward stdin lines to the navigation loop until EOF.
async fn read_commands(navigator: Navigator) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<NavigationEvent>() {
            Ok(event) => {
                if !navigator.send(event) {
                    break;
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}
