use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use salesman::{
    cities::{generate_cities, DEFAULT_EXTENT},
    rng::RandomNumberGenerator,
    AnnealingOptions, EvolutionOptions, GeneticAlgorithm, Method, SimulatedAnnealing, Solution,
};

/// Solve a random Euclidean TSP instance with simulated annealing or a genetic algorithm.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Number of cities
    #[arg(short = 'n', long, default_value_t = 25)]
    n_cities: usize,

    /// Seed for the city generator and the solver
    #[arg(short, long, default_value_t = 123)]
    seed: u64,

    /// Algorithm: 'sa' (simulated annealing) or 'ga' (genetic algorithm)
    #[arg(short, long, default_value = "sa")]
    method: Method,

    /// Initial temperature for SA
    #[arg(long, default_value_t = 50.0)]
    sa_initial_temp: f64,

    /// Geometric cooling factor for SA
    #[arg(long, default_value_t = 0.995)]
    sa_alpha: f64,

    /// Stopping temperature for SA
    #[arg(long, default_value_t = 1e-3)]
    sa_stopping_temp: f64,

    /// Iterations per temperature level for SA
    #[arg(long, default_value_t = 200)]
    sa_iter_per_temp: usize,

    /// Maximum total iterations for SA
    #[arg(long, default_value_t = 20_000)]
    sa_max_iter: usize,

    /// Population size for GA
    #[arg(long, default_value_t = 100)]
    ga_pop_size: usize,

    /// Number of generations for GA
    #[arg(long, default_value_t = 500)]
    ga_generations: usize,

    /// Crossover rate for GA
    #[arg(long, default_value_t = 0.8)]
    ga_crossover_rate: f64,

    /// Per-gene mutation rate for GA
    #[arg(long, default_value_t = 0.02)]
    ga_mutation_rate: f64,

    /// Elite individuals kept each generation for GA
    #[arg(long, default_value_t = 1)]
    ga_elitism: usize,

    /// Tournament size for GA selection
    #[arg(long, default_value_t = 3)]
    ga_tournament_k: usize,

    /// Log progress at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(solution: &Solution) {
    println!("Best cost found: {:.4}", solution.cost);
    println!("{}", solution.info);
    println!("Route (indices): {:?}", solution.route);
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut rng = RandomNumberGenerator::from_seed(args.seed);
    let coords = generate_cities(args.n_cities, DEFAULT_EXTENT, &mut rng)?;

    let solution = match args.method {
        Method::Annealing => {
            println!(
                "Running simulated annealing (SA) for TSP with {} cities (seed={})",
                args.n_cities, args.seed
            );
            println!(
                "SA parameters: initial_temp={}, alpha={}, stopping_temp={}, iter_per_temp={}, max_iter={}",
                args.sa_initial_temp,
                args.sa_alpha,
                args.sa_stopping_temp,
                args.sa_iter_per_temp,
                args.sa_max_iter
            );

            let options = AnnealingOptions::new(
                args.sa_initial_temp,
                args.sa_alpha,
                args.sa_stopping_temp,
                args.sa_iter_per_temp,
                args.sa_max_iter,
            )
            .with_seed(args.seed);
            SimulatedAnnealing::new(options)?.run(&coords)?
        }
        Method::Genetic => {
            println!(
                "Running genetic algorithm (GA) for TSP with {} cities (seed={})",
                args.n_cities, args.seed
            );
            println!(
                "GA parameters: pop_size={}, generations={}, crossover_rate={}, mutation_rate={}, elitism={}, tournament_k={}",
                args.ga_pop_size,
                args.ga_generations,
                args.ga_crossover_rate,
                args.ga_mutation_rate,
                args.ga_elitism,
                args.ga_tournament_k
            );

            let options = EvolutionOptions::new(
                args.ga_pop_size,
                args.ga_generations,
                args.ga_crossover_rate,
                args.ga_mutation_rate,
                args.ga_elitism,
                args.ga_tournament_k,
            )
            .with_seed(args.seed);
            GeneticAlgorithm::new(options)?.run(&coords)?
        }
    };

    report(&solution);
    Ok(())
}
