//! NBodySim: 5-body gravitational simulation benchmark.

use clap::Parser;
use kernbench_cli::SizeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "nbody-sim",
    about = "Integrate the Sun and four gas giants, printing system energy"
)]
struct Cli {
    #[command(flatten)]
    args: SizeArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = kernbench_cli::run_nbody(&cli.args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
