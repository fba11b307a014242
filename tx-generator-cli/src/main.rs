use std::error::Error;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use env_logger::{Builder, Env, Target};
use rand::thread_rng;

use tx_generator::batch::generate_batch;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Total number of transactions to generate
    #[clap(long, default_value = "2000000")]
    pub(crate) count: usize,

    /// Number of transactions per batch file
    #[clap(long, default_value = "1000")]
    pub(crate) batch_size: NonZeroUsize,

    /// Output directory for the batch files and manifest
    #[clap(long, default_value = "data")]
    pub(crate) output_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Progress reporting goes through `log`; default it on and to stdout
    // so a plain invocation shows the run, RUST_LOG still overrides.
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut rng = thread_rng();
    generate_batch(
        &mut rng,
        Utc::now().naive_utc(),
        cli.count,
        &cli.output_dir,
        cli.batch_size,
    )?;

    Ok(())
}
