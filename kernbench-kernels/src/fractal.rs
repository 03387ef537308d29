//! Escape-time fractal rasterizer.
//!
//! Renders a square monochrome raster of the classic escape-time set and
//! emits it as a packed 1-bit-per-pixel bitmap (PBM "P4"). The escape test
//! uses a specific off-by-one convention that reference outputs depend on,
//! so the iteration loop below must not be rearranged.

use crate::KernelError;
use std::io::Write;
use tracing::debug;

/// Maximum number of recurrence iterations per point.
const MAX_ITER: u32 = 50;

/// Squared escape radius; a point has escaped once `zr^2 + zi^2` exceeds it.
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Render a `size` x `size` raster, one bit per pixel.
///
/// Bits are packed MSB-first; each row is padded to a byte boundary, so a row
/// occupies `size.div_ceil(8)` bytes. Bit 1 means the point remained bounded
/// after [`MAX_ITER`] iterations.
pub fn render(size: u32) -> Vec<u8> {
    let size = size as usize;
    let row_bytes = size.div_ceil(8);
    let mut data = Vec::with_capacity(row_bytes * size);

    for y in 0..size {
        let ci = 2.0 * y as f64 / size as f64 - 1.0;
        let mut byte_acc: u8 = 0;
        let mut bit_count: u32 = 0;

        for x in 0..size {
            let cr = 2.0 * x as f64 / size as f64 - 1.5;

            let mut zr = 0.0;
            let mut zi = 0.0;
            // tr/ti lag one update behind: the loop condition tests the
            // squares from the previous completed iteration, and the output
            // bit reflects their state when the loop exits.
            let mut tr = 0.0;
            let mut ti = 0.0;

            let mut i = 0;
            while i < MAX_ITER && tr + ti <= ESCAPE_RADIUS_SQ {
                zi = 2.0 * zr * zi + ci;
                zr = tr - ti + cr;
                tr = zr * zr;
                ti = zi * zi;
                i += 1;
            }

            byte_acc <<= 1;
            if tr + ti <= ESCAPE_RADIUS_SQ {
                byte_acc |= 1;
            }
            bit_count += 1;

            if bit_count == 8 {
                data.push(byte_acc);
                byte_acc = 0;
                bit_count = 0;
            }
        }

        // End of row: left-shift the partial accumulator so the pixel bits
        // sit in the high positions, low bits zero-filled.
        if bit_count > 0 {
            data.push(byte_acc << (8 - bit_count));
        }
    }

    data
}

/// Run the rasterizer driver: P4 header, then the packed raster bytes.
pub fn run(size: u32, out: &mut impl Write) -> Result<(), KernelError> {
    debug!(size, "rendering raster");
    write!(out, "P4\n{size} {size}\n")?;
    out.write_all(&render(size))?;
    Ok(())
}
