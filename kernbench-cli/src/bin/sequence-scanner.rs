//! SequenceScanner: DNA motif search and substitution benchmark.

use clap::Parser;
use kernbench_cli::StreamArgs;

#[derive(Parser, Debug)]
#[command(
    name = "sequence-scanner",
    about = "Count DNA motifs and apply the substitution chain to FASTA text from stdin"
)]
struct Cli {
    #[command(flatten)]
    args: StreamArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = kernbench_cli::run_sequence(&cli.args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
