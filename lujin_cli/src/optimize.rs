use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Args;
use lujin_optimizer::{
    json::types::{JsonOptimizeRequest, JsonWaypoints},
    optimize::{OptimizeParams, optimize_waypoints},
    solver::search_parameters::{SearchParameters, Termination},
    utils::time::parse_duration,
};
use tracing::info;

#[derive(Args)]
pub struct OptimizeArgs {
    /// JSON file with a `waypoints` array
    #[arg(short, long)]
    input: PathBuf,

    /// Search budget (e.g. "30s", "PT1M", "10")
    #[arg(short, long, value_parser = parse_duration, default_value = "30s")]
    timeout: jiff::SignedDuration,

    /// Maximum number of route extension steps
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Write the reordered waypoints here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl OptimizeArgs {
    fn params(&self) -> OptimizeParams {
        let mut search = SearchParameters::with_time_limit(self.timeout);
        if let Some(iterations) = self.iterations {
            search.terminations.push(Termination::Iterations(iterations));
        }

        OptimizeParams { search }
    }
}

pub fn run(args: OptimizeArgs) -> Result<(), anyhow::Error> {
    info!("Optimizing waypoints from {:?}", args.input);

    let file = File::open(&args.input)
        .with_context(|| format!("could not open {}", args.input.display()))?;
    let request: JsonOptimizeRequest = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("{} is not a valid request", args.input.display()))?;

    let input = JsonWaypoints::parse(&request.waypoints)?;
    let route = optimize_waypoints(input.waypoints(), &args.params())?;

    info!(
        waypoints = input.len(),
        route_length = route.len(),
        distance = route.distance(),
        "Route found"
    );

    let response = input.to_response(&route);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &response)?;
            writer.flush()?;
            info!("Route written to {:?}", path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, &response)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}
