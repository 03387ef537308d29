//! Integration tests for the kernbench suite.
//!
//! These exercise the kernel drivers end to end through their `io::Write`
//! sinks and pin down the exact output contracts the binaries ship.

use kernbench::{fractal, nbody, sequence, spectral, tree};

/// TreeBench transcript at the default size.
#[test]
fn tree_bench_default_transcript() {
    let mut out = Vec::new();
    tree::run(10, &mut out).unwrap();

    let expected = "stretch tree of depth 11\t check: 11\n\
                    1024\t trees of depth 4\t check: 4096\n\
                    256\t trees of depth 6\t check: 1536\n\
                    64\t trees of depth 8\t check: 512\n\
                    16\t trees of depth 10\t check: 160\n\
                    long lived tree of depth 10\t check: 10\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

/// FractalRaster output is the two-line ASCII header plus the packed rows.
#[test]
fn fractal_raster_header_and_payload_size() {
    let mut out = Vec::new();
    fractal::run(200, &mut out).unwrap();

    let header = b"P4\n200 200\n";
    assert_eq!(&out[..header.len()], header);
    // 200 bits per row pack into 25 bytes, 200 rows.
    assert_eq!(out.len() - header.len(), 25 * 200);
}

/// Odd sizes pad every row to a byte boundary.
#[test]
fn fractal_raster_odd_size_padding() {
    let mut out = Vec::new();
    fractal::run(13, &mut out).unwrap();

    let header = b"P4\n13 13\n";
    assert_eq!(&out[..header.len()], header);
    assert_eq!(out.len() - header.len(), 2 * 13);
}

/// NBodySim reference energies at the default step count.
#[test]
fn nbody_sim_reference_energies() {
    let mut out = Vec::new();
    nbody::run(1000, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "-0.169075164\n-0.169087605\n"
    );
}

/// With zero steps the two energy lines are identical.
#[test]
fn nbody_sim_zero_steps() {
    let mut out = Vec::new();
    nbody::run(0, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
}

/// SequenceScanner contract: 11 count lines, a blank, then three lengths.
#[test]
fn sequence_scanner_output_shape() {
    // 11 raw bytes (no trailing newline), 8 of sequence.
    let mut input = &b">h\nagggtaaa"[..];
    let mut out = Vec::new();
    sequence::run(&mut input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[0], "agggtaaa|tttaccct 1");
    assert_eq!(lines[11], "");
    assert_eq!(&lines[12..], ["11", "8", "8"]);
}

/// The substitution chain shortens a sequence with matching tokens.
#[test]
fn sequence_scanner_substitution_chain() {
    let mut input = &b">header\ncaNxcaN\n"[..];
    let mut out = Vec::new();
    sequence::run(&mut input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // caNxcaN -> <3>x<3> -> |x| -> "-", so the final length is 1.
    assert_eq!(&lines[12..], ["16", "7", "1"]);
}

/// SpectralNorm reference value at the default dimension.
#[test]
fn spectral_norm_reference_value() {
    let mut out = Vec::new();
    spectral::run(100, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1.274219991\n");
}

/// Running any kernel twice with the same parameter is byte-identical.
#[test]
fn kernels_are_idempotent() {
    let run_twice = |f: &dyn Fn(&mut Vec<u8>)| {
        let mut first = Vec::new();
        let mut second = Vec::new();
        f(&mut first);
        f(&mut second);
        assert_eq!(first, second);
    };

    run_twice(&|out| tree::run(6, out).unwrap());
    run_twice(&|out| fractal::run(32, out).unwrap());
    run_twice(&|out| nbody::run(100, out).unwrap());
    run_twice(&|out| spectral::run(30, out).unwrap());
    run_twice(&|out| {
        let mut input = &b">x\nacgtACGT\n"[..];
        sequence::run(&mut input, out).unwrap();
    });
}
