#![warn(missing_docs)]
//! Kernbench Kernels
//!
//! The five computational kernels of the kernbench reference suite:
//! - [`tree`] - recursive binary-tree allocation and traversal
//! - [`fractal`] - escape-time fractal rasterization
//! - [`nbody`] - 5-body gravitational simulation
//! - [`sequence`] - DNA motif search and substitution chain
//! - [`spectral`] - spectral-norm estimation via power iteration
//!
//! Every kernel is deterministic and single-threaded: given the same size
//! parameter (or input stream), the driver produces byte-identical output.
//! Floating-point accumulation order is part of that contract, so none of
//! the loops here may be reordered or parallelized.
//!
//! Each module exposes its pure compute core plus a `run` driver that writes
//! the kernel's output contract to any [`std::io::Write`] sink.

pub mod fractal;
pub mod nbody;
pub mod sequence;
pub mod spectral;
pub mod tree;

use thiserror::Error;

/// Errors surfaced by kernel drivers.
///
/// The taxonomy is deliberately small: kernels either complete and emit all
/// of their output, or fail the whole run. There is no partial-output or
/// retry semantics.
#[derive(Debug, Error)]
pub enum KernelError {
    /// The input stream could not be read to completion.
    #[error("failed to read input stream: {0}")]
    Input(#[source] std::io::Error),

    /// The output stream rejected a write.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// A motif or substitution pattern failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern text as declared.
        pattern: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}
