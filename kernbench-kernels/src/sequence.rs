//! DNA motif search and substitution chain.
//!
//! Consumes FASTA-style text, strips header lines and newlines, counts the
//! fixed set of motif patterns case-insensitively, then applies a chain of
//! substitutions where each step operates on the previous step's result.
//! Input is fully buffered before any processing begins; this is the one
//! blocking operation in the suite.

use crate::KernelError;
use regex::Regex;
use std::io::{Read, Write};
use tracing::debug;

/// The 11 motif patterns, counted case-insensitively in declared order.
pub const MOTIF_PATTERNS: [&str; 11] = [
    "agggtaaa|tttaccct",
    "aggggtaaaa|tttacccct",
    "agggggtaaaaa|tttaacccct",
    "[cgt]gggtaaa|tttaccc[acg]",
    "a[act]ggtaaa|tttacc[agt]t",
    "ag[act]gtaaa|tttac[agt]ct",
    "agg[act]taaa|ttta[agt]cct",
    "aggg[acg]aaa|ttt[cgt]ccct",
    "agggt[cgt]aa|tt[acg]accct",
    "agggta[cgt]a|t[acg]taccct",
    "agggtaa[cgt]|[acg]ttaccct",
];

/// Substitution chain, applied in order; case-sensitive by design.
const SUBSTITUTIONS: [(&str, &str); 5] = [
    (r"tHa[Nt]", "<4>"),
    (r"aND|caN|Ha[DS]|WaS", "<3>"),
    (r"a[NSt]|BY", "<2>"),
    (r"<[^>]*>", "|"),
    (r"\|[^|][^|]*\|", "-"),
];

fn compile(pattern: &str) -> Result<Regex, KernelError> {
    Regex::new(pattern).map_err(|source| KernelError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Strip FASTA header lines (`>` to end of line) and all newlines.
pub fn strip_sequence(input: &str) -> Result<String, KernelError> {
    Ok(compile(r">.*\n|\n")?.replace_all(input, "").into_owned())
}

/// Count non-overlapping case-insensitive matches, leftmost-first.
pub fn count_matches(pattern: &str, sequence: &str) -> Result<usize, KernelError> {
    Ok(compile(&format!("(?i){pattern}"))?
        .find_iter(sequence)
        .count())
}

/// Apply the five-step substitution chain and return the final string.
pub fn substitute(sequence: &str) -> Result<String, KernelError> {
    let mut result = sequence.to_string();
    for (pattern, replacement) in SUBSTITUTIONS {
        result = compile(pattern)?.replace_all(&result, replacement).into_owned();
    }
    Ok(result)
}

/// Run the scanner driver.
///
/// Reads `input` to completion, prints one `"<pattern> <count>"` line per
/// motif, then a blank line followed by the raw length, the stripped length,
/// and the length after the substitution chain.
pub fn run(input: &mut impl Read, out: &mut impl Write) -> Result<(), KernelError> {
    let mut raw = String::new();
    input.read_to_string(&mut raw).map_err(KernelError::Input)?;

    let initial_length = raw.len();
    let sequence = strip_sequence(&raw)?;
    let code_length = sequence.len();
    debug!(initial_length, code_length, "stripped sequence");

    for pattern in MOTIF_PATTERNS {
        writeln!(out, "{} {}", pattern, count_matches(pattern, &sequence)?)?;
    }

    let result = substitute(&sequence)?;

    writeln!(out)?;
    writeln!(out, "{initial_length}")?;
    writeln!(out, "{code_length}")?;
    writeln!(out, "{}", result.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_headers_and_newlines() {
        let stripped = strip_sequence(">header one\nACGT\nacgt\n>two\nNNNN\n").unwrap();
        assert_eq!(stripped, "ACGTacgtNNNN");
    }

    #[test]
    fn empty_and_header_only_input_is_valid() {
        assert_eq!(strip_sequence("").unwrap(), "");
        assert_eq!(strip_sequence(">only a header\n").unwrap(), "");
        for pattern in MOTIF_PATTERNS {
            assert_eq!(count_matches(pattern, "").unwrap(), 0);
        }
    }

    #[test]
    fn motif_counting_is_case_insensitive() {
        assert_eq!(count_matches(MOTIF_PATTERNS[0], "AGGGTAAA").unwrap(), 1);
        assert_eq!(count_matches(MOTIF_PATTERNS[0], "agggtaaa").unwrap(), 1);
        assert_eq!(count_matches(MOTIF_PATTERNS[0], "tttAccct").unwrap(), 1);
    }

    #[test]
    fn motif_counting_is_non_overlapping() {
        // Two back-to-back occurrences count as two, nothing more.
        assert_eq!(
            count_matches(MOTIF_PATTERNS[0], "agggtaaaagggtaaa").unwrap(),
            2
        );
    }

    #[test]
    fn substitution_chain_is_sequential() {
        // "caNxcaN" -> "<3>x<3>" -> "|x|" -> "-"; the last step only fires
        // because the fourth produced its delimiters first.
        assert_eq!(substitute("caNxcaN").unwrap(), "-");

        // "aNDtHaN": tHaN -> <4>, then aND -> <3>, then tags -> "||",
        // which the run-collapse step leaves alone (no interior character).
        assert_eq!(substitute("aNDtHaN").unwrap(), "||");
    }

    #[test]
    fn substitutions_are_case_sensitive() {
        // Lowercase "and" must not match the aND alternation.
        assert_eq!(substitute("and").unwrap(), "and");
    }

    #[test]
    fn driver_output_for_single_motif() {
        // 11 raw bytes (no trailing newline), 8 of sequence.
        let mut input = &b">h\nagggtaaa"[..];
        let mut out = Vec::new();
        run(&mut input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "agggtaaa|tttaccct 1");
        for line in &lines[1..11] {
            assert!(line.ends_with(" 0"), "unexpected count in {line:?}");
        }
        assert_eq!(lines[11], "");
        assert_eq!(lines[12], "11"); // raw input length
        assert_eq!(lines[13], "8"); // stripped length
        assert_eq!(lines[14], "8"); // no substitution applies
    }

    #[test]
    fn driver_output_for_empty_input() {
        let mut input = &b""[..];
        let mut out = Vec::new();
        run(&mut input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        for line in &lines[..11] {
            assert!(line.ends_with(" 0"));
        }
        assert_eq!(&lines[12..], ["0", "0", "0"]);
    }
}
