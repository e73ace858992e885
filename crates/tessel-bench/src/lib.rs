//! Benchmark input helpers for the Tessel storage core.
//!
//! Provides deterministic payload generation so benchmark runs are
//! comparable across machines and revisions without pulling in an RNG
//! dependency.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Generate `len` deterministic, non-repeating-looking bytes from `seed`.
///
/// Uses a splitmix-style scramble; the same `(len, seed)` pair always
/// produces the same payload.
pub fn pattern_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        out.push((state >> 56) as u8);
    }
    out
}
