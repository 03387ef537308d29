//! FractalRaster: escape-time fractal rasterization benchmark.

use clap::Parser;
use kernbench_cli::SizeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "fractal-raster",
    about = "Render an escape-time fractal as a packed P4 bitmap on stdout"
)]
struct Cli {
    #[command(flatten)]
    args: SizeArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = kernbench_cli::run_fractal(&cli.args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
