use anyhow::Result;
use clap::Parser;
use log::info;

use percolate::stats::PercolationStats;

/// Percolate - Monte Carlo estimation of the site percolation threshold
///
/// Repeatedly opens random sites on an n-by-n grid until an open path connects
/// the top row to the bottom row, records the fraction of open sites at that
/// moment, and reports mean, stddev, and a 95% confidence interval over
/// independent trials.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension n (the grid has n*n sites)
    #[clap(short = 'n', long = "size", default_value = "200")]
    size: usize,

    /// Number of independent trials
    #[clap(short = 'T', long = "trials", default_value = "100")]
    trials: usize,

    /// RNG seed for reproducible runs (entropy-seeded if not given)
    #[clap(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of threads for parallel trials (0 = rayon default)
    #[clap(short = 't', long = "threads", default_value = "0")]
    threads: usize,

    /// Quiet mode (print only the mean)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()?;
    }

    info!(
        "running {} trials on a {}x{} grid",
        args.trials, args.size, args.size
    );
    let stats = PercolationStats::run(args.size, args.trials, args.seed)?;

    if args.quiet {
        println!("{}", stats.mean());
        return Ok(());
    }

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
