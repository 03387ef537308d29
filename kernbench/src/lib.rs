#![warn(missing_docs)]
//! # Kernbench
//!
//! A reference suite of five self-contained computational kernels used to
//! compare raw execution performance across language implementations:
//!
//! - **TreeBench** - recursive binary-tree allocation and traversal
//! - **FractalRaster** - escape-time fractal rasterization to a packed bitmap
//! - **NBodySim** - 5-body gravitational simulation in discrete time steps
//! - **SequenceScanner** - DNA motif search and a chained substitution pass
//! - **SpectralNorm** - power-iteration estimate of a dominant singular value
//!
//! Each kernel is deterministic and single-threaded; its output must match
//! the reference exactly (integer/text results) or within floating-point
//! tolerance (physics/linear-algebra results) regardless of implementation
//! language. The kernels are independent: they share no data structures and
//! no runtime state, and each ships as its own binary taking one optional
//! size parameter.
//!
//! ## Library use
//!
//! ```ignore
//! let mut out = Vec::new();
//! kernbench::tree::run(10, &mut out)?;
//! ```

// Re-export the kernel modules and error type
pub use kernbench_kernels::{KernelError, fractal, nbody, sequence, spectral, tree};

// Re-export the CLI entry points used by the five binaries
pub use kernbench_cli::{
    SizeArgs, StreamArgs, init_logging, run_fractal, run_nbody, run_sequence, run_spectral,
    run_tree,
};
