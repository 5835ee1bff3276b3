use clap::Parser;
use graph_irv::{
    Error,
    batch::run_batch,
    fs::{ZoneReport, append_reports, load_graph, write_zone, zone_path},
    statistics::EstimatorStats,
    zone::{ZoneParams, estimate_exclusion_zone},
};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Plausible IRV winners on graph voting models
#[derive(Parser, Debug)]
#[command(name = "graph-irv")]
#[command(
    about = "Estimates which nodes can win an instant-runoff election on a graph",
    long_about = None
)]
struct Args {
    /// Graph files in the plain-text adjacency format
    #[arg(required = true)]
    graphs: Vec<PathBuf>,

    /// Approximation slack of the stopping rule
    #[arg(long, default_value_t = 0.01)]
    epsilon: f64,

    /// Failure probability of the stopping rule
    #[arg(long, default_value_t = 0.01)]
    delta: f64,

    /// Probability that a node joins a trial's candidate subset
    #[arg(long, default_value_t = 0.5)]
    inclusion_probability: f64,

    /// Seed of the random generator, shared by every input file
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Directory receiving one `zone-<graph file>` per input
    #[arg(short, long, default_value = "zones")]
    output_dir: PathBuf,

    /// Number of graphs processed concurrently
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Append a JSON line per graph to this file
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Draw a progress bar while loss graphs are built
    #[arg(long)]
    progress: bool,

    /// Log directive, e.g. `info` or `graph_irv=debug`
    #[arg(long, default_value = "info")]
    log: String,
}

fn process_graph(graph_path: &Path, args: &Args, params: ZoneParams) -> Result<ZoneReport, Error> {
    let start_time = Instant::now();
    let graph = load_graph(graph_path)?;
    info!(
        path = %graph_path.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let zone = estimate_exclusion_zone(&graph, params, &mut rng)?;

    let output = zone_path(&args.output_dir, graph_path);
    write_zone(&output, &zone)?;

    let elapsed = start_time.elapsed().as_secs_f64();
    info!(
        path = %graph_path.display(),
        output = %output.display(),
        zone_size = zone.len(),
        elapsed_secs = elapsed,
        "zone written"
    );

    Ok(ZoneReport::new(
        graph_path.display().to_string(),
        graph.len(),
        graph.edge_count(),
        params,
        &zone,
        elapsed,
    ))
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let filter = EnvFilter::from_default_env().add_directive(args.log.parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let params = ZoneParams::new(args.epsilon, args.delta)
        .with_inclusion_probability(args.inclusion_probability)
        .with_progress(args.progress);
    params.validate()?;

    std::fs::create_dir_all(&args.output_dir)?;

    let num_graphs = args.graphs.len();
    let num_threads = args.threads.max(1).min(num_graphs);
    info!(
        graphs = num_graphs,
        threads = num_threads,
        patience = params.patience(),
        "starting"
    );

    let start_time = Instant::now();
    let args = Arc::new(args);
    let job_args = Arc::clone(&args);
    let mut outcome = run_batch(num_graphs, num_threads, move |index| {
        let graph_path = &job_args.graphs[index];
        process_graph(graph_path, &job_args, params).inspect_err(|e| {
            error!(path = %graph_path.display(), "{e}");
        })
    });

    let reports: Vec<ZoneReport> = std::mem::take(&mut outcome.completed)
        .into_iter()
        .map(|(_, report)| report)
        .collect();
    let failure = outcome.into_first_failure();

    if let Some(summary) = &args.summary {
        append_reports(summary, &reports)?;
    }
    if let Some(e) = failure {
        return Err(e);
    }

    let combined_stats = reports
        .iter()
        .fold(EstimatorStats::new(), |acc, report| acc.merge(&report.stats));
    info!(
        graphs = reports.len(),
        seed_elections = combined_stats.get_seed_elections(),
        trials = combined_stats.get_trials(),
        eliminations = combined_stats.get_eliminations(),
        growth_events = combined_stats.get_growth_events(),
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "all graphs done"
    );
    Ok(())
}
