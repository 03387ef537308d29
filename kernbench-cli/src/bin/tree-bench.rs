//! TreeBench: recursive binary-tree allocation benchmark.

use clap::Parser;
use kernbench_cli::SizeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "tree-bench",
    about = "Build and discard binary trees of varying depth, reporting checksums"
)]
struct Cli {
    #[command(flatten)]
    args: SizeArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = kernbench_cli::run_tree(&cli.args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
