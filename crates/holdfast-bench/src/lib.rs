//! Benchmark profiles and utilities for Holdfast.
//!
//! - [`filled_array`]: an array whose slot `i` holds `i`
//! - [`access_pattern`]: deterministic index stream with a controllable
//!   share of out-of-range indices
//! - [`handle_chain`]: a vector of independently owned handles

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use holdfast_array::BoundedArray;
use holdfast_owned::Owned;

/// Build an array of `capacity` slots where slot `i` holds `i as u64`.
pub fn filled_array(capacity: usize) -> BoundedArray<u64> {
    let mut array = BoundedArray::new(capacity);
    for i in 0..capacity {
        // In range by construction.
        let _ = array.set(i, i as u64);
    }
    array
}

/// Generate `len` deterministic indices for an array of `capacity` slots.
///
/// Roughly `miss_percent` percent of the indices are at or above
/// `capacity`, so they exercise the rejection path. The rest are spread
/// over `0..capacity` with a simple hash of the seed. With `capacity == 0`
/// every index is a miss.
pub fn access_pattern(len: usize, capacity: usize, miss_percent: u8, seed: u64) -> Vec<usize> {
    let mut state = seed;
    let mut indices = Vec::with_capacity(len);
    for _ in 0..len {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let roll = (state >> 33) % 100;
        let slot = ((state >> 11) % capacity.max(1) as u64) as usize;
        if capacity == 0 || roll < miss_percent as u64 {
            indices.push(capacity.saturating_add(slot));
        } else {
            indices.push(slot);
        }
    }
    indices
}

/// Allocate `n` handles, each owning its position.
pub fn handle_chain(n: usize) -> Vec<Owned<u64>> {
    (0..n as u64).map(Owned::new).collect()
}
