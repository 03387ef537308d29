#![warn(missing_docs)]
//! Kernbench CLI
//!
//! Argument parsing, logging setup, and the entry points used by the five
//! kernel binaries. Each binary is a thin `main` that parses its arguments
//! and calls the matching `run_*` function here.
//!
//! All contract output goes to stdout as raw bytes; logging goes to stderr
//! so stdout stays byte-exact. Malformed or non-positive size arguments are
//! rejected at the clap layer with a usage error rather than propagated into
//! loop bounds.

use clap::Args;
use kernbench_kernels::{fractal, nbody, sequence, spectral, tree};
use std::io::{self, Write};
use tracing::debug;

/// Default size for TreeBench when no argument is given.
const DEFAULT_TREE_DEPTH: u32 = 10;
/// Default raster side length for FractalRaster.
const DEFAULT_RASTER_SIZE: u32 = 200;
/// Default step count for NBodySim.
const DEFAULT_NBODY_STEPS: u32 = 1000;
/// Default matrix dimension for SpectralNorm.
const DEFAULT_SPECTRAL_DIM: u32 = 100;

/// Arguments shared by the size-taking kernel binaries.
#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Problem size (positive integer); each kernel has its own default
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub n: Option<u32>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the stream-consuming scanner binary.
#[derive(Args, Debug)]
pub struct StreamArgs {
    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialize tracing output on stderr.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        "kernbench_kernels=debug,kernbench_cli=debug"
    } else {
        "kernbench_kernels=info,kernbench_cli=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run TreeBench against stdout.
pub fn run_tree(args: &SizeArgs) -> anyhow::Result<()> {
    init_logging(args.verbose);
    let mut out = io::stdout().lock();
    tree::run(args.n.unwrap_or(DEFAULT_TREE_DEPTH), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run FractalRaster against stdout.
pub fn run_fractal(args: &SizeArgs) -> anyhow::Result<()> {
    init_logging(args.verbose);
    let mut out = io::stdout().lock();
    fractal::run(args.n.unwrap_or(DEFAULT_RASTER_SIZE), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run NBodySim against stdout.
pub fn run_nbody(args: &SizeArgs) -> anyhow::Result<()> {
    init_logging(args.verbose);
    let mut out = io::stdout().lock();
    nbody::run(args.n.unwrap_or(DEFAULT_NBODY_STEPS), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run SequenceScanner, reading FASTA text from stdin to completion.
pub fn run_sequence(args: &StreamArgs) -> anyhow::Result<()> {
    init_logging(args.verbose);
    debug!("reading stdin to completion");
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    sequence::run(&mut input, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run SpectralNorm against stdout.
pub fn run_spectral(args: &SizeArgs) -> anyhow::Result<()> {
    init_logging(args.verbose);
    let mut out = io::stdout().lock();
    spectral::run(args.n.unwrap_or(DEFAULT_SPECTRAL_DIM), &mut out)?;
    out.flush()?;
    Ok(())
}
