//! CLI entry point for randomized flood fill region partitioning

use clap::Parser;
use regionfill::io::cli::{Cli, PartitionRunner};

fn main() -> regionfill::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut runner = PartitionRunner::new(cli);
    runner.process()
}
