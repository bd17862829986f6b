//! Reactions Demo
//!
//! Hosts a reaction picker with five reactions and plays one press, hold,
//! drag, and release through it, logging what the user would see.
//!
//! Run with: cargo run -p reactions_demo -- --hover 1

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod screen;

use screen::{ReactionScreen, REACTIONS};

#[derive(Parser)]
#[command(name = "reactions-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hold-and-drag reaction picker demo", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Reaction shown on the trigger before anything is picked
    #[arg(short, long)]
    default_reaction: Option<usize>,

    /// Reaction to release over; omit to let go over the trigger
    #[arg(long)]
    hover: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if let Some(index) = cli.hover {
        if index >= REACTIONS.len() {
            bail!(
                "--hover {} is out of range, there are {} reactions",
                index,
                REACTIONS.len()
            );
        }
    }

    let mut screen = ReactionScreen::new(cli.default_reaction)?;
    info!(
        reactions = screen.picker().len(),
        default = ?cli.default_reaction,
        "screen ready"
    );

    screen.run_gesture(cli.hover);

    match screen.committed().last() {
        Some(reaction) => info!("picked {} ({})", reaction.label(), reaction.icon()),
        None => info!("nothing picked"),
    }

    Ok(())
}
