//! SpectralNorm: power-iteration spectral-norm estimation benchmark.

use clap::Parser;
use kernbench_cli::SizeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "spectral-norm",
    about = "Estimate the dominant singular value of the implicit matrix"
)]
struct Cli {
    #[command(flatten)]
    args: SizeArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = kernbench_cli::run_spectral(&cli.args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
