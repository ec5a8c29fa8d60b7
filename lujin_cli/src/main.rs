use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::optimize::OptimizeArgs;

mod optimize;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reorder the waypoints of a `{"waypoints": [[x, y], ...]}` file into a
    /// greedy nearest-neighbour route starting at the first waypoint. The
    /// route is an approximation, not a guaranteed shortest route.
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args)?,
    }

    Ok(())
}
