//! Spectral-norm estimation via power iteration.
//!
//! The matrix A is defined implicitly by [`eval_a`] and is not symmetric in
//! value, but composing A with its transpose yields a symmetric
//! positive-semidefinite operator, so power iteration on AᵗA converges to
//! the square of the dominant singular value.

use crate::KernelError;
use std::io::Write;
use tracing::debug;

/// Number of power-iteration rounds performed by the driver.
const ITERATIONS: u32 = 10;

/// Entry `A[i][j]` of the implicit matrix.
///
/// Integer arithmetic inside the denominator, as the reference does; note
/// `eval_a(i, j) != eval_a(j, i)` in general.
pub fn eval_a(i: usize, j: usize) -> f64 {
    1.0 / ((i + j) * (i + j + 1) / 2 + i + 1) as f64
}

/// `v = A * u`.
fn eval_a_times_u(u: &[f64], v: &mut [f64]) {
    let n = u.len();
    for i in 0..n {
        v[i] = 0.0;
        for j in 0..n {
            v[i] += eval_a(i, j) * u[j];
        }
    }
}

/// `v = Aᵗ * u` (transpose multiplication).
fn eval_at_times_u(u: &[f64], v: &mut [f64]) {
    let n = u.len();
    for i in 0..n {
        v[i] = 0.0;
        for j in 0..n {
            v[i] += eval_a(j, i) * u[j];
        }
    }
}

/// `v = AᵗA * u`, through scratch buffer `w`.
fn eval_ata_times_u(u: &[f64], v: &mut [f64], w: &mut [f64]) {
    eval_a_times_u(u, w);
    eval_at_times_u(w, v);
}

/// Estimate the spectral norm of the `n` x `n` implicit matrix.
///
/// Starts from the all-ones vector, alternates `v = AᵗA·u` and `u = AᵗA·v`
/// for [`ITERATIONS`] rounds, and returns the Rayleigh-quotient
/// approximation `sqrt((u·v) / (v·v))`.
pub fn estimate(n: usize) -> f64 {
    debug!(n, "estimating spectral norm");
    let mut u = vec![1.0; n];
    let mut v = vec![0.0; n];
    let mut w = vec![0.0; n];

    for _ in 0..ITERATIONS {
        eval_ata_times_u(&u, &mut v, &mut w);
        eval_ata_times_u(&v, &mut u, &mut w);
    }

    let mut vbv = 0.0;
    let mut vv = 0.0;
    for i in 0..n {
        vbv += u[i] * v[i];
        vv += v[i] * v[i];
    }

    (vbv / vv).sqrt()
}

/// Run the driver: one line, the estimate with nine fractional digits.
pub fn run(n: u32, out: &mut impl Write) -> Result<(), KernelError> {
    writeln!(out, "{:.9}", estimate(n as usize))?;
    Ok(())
}
