//! Writes a small deterministic sample dataset to `resources/sample`,
//! handy for eyeballing the output format.
//! Can be run with `cargo run --example seeded`

use std::num::NonZeroUsize;
use std::path::Path;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tx_generator::batch::generate_batch;

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    generate_batch(
        &mut rng,
        Utc::now().naive_utc(),
        100,
        Path::new("resources/sample"),
        NonZeroUsize::new(25).unwrap(),
    )
    .unwrap();
}
