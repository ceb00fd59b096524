#![no_main]

use libfuzzer_sys::fuzz_target;
use sparsering::ds::SparseRing;

// Fuzz sliding-window advancement patterns
//
// Drives the buffer with a mostly increasing key stream plus bounded
// backwards jitter, checking the window law (key span < capacity) and that
// the in-order traversal is strictly increasing after every step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 128).max(2);
    let mut ring = SparseRing::new(capacity);
    let mut clock: u64 = 0;

    for &byte in &data[1..] {
        let advance = (byte >> 4) as u64;
        let jitter = (byte & 0x0f) as u64;
        clock += advance;
        let key = clock.saturating_sub(jitter);

        let accepted = ring.put(key, byte as u32).is_ok();
        if let Some(last) = ring.last_key() {
            // a rejected key must have been below the representable window
            assert!(accepted || last.saturating_sub(key) >= capacity as u64);
        }

        if let (Some(min), Some(max)) = (ring.first_key(), ring.last_key()) {
            assert!(max - min < capacity as u64);
        }

        let mut prev: Option<u64> = None;
        for (k, _) in ring.iter() {
            if let Some(p) = prev {
                assert!(k > p, "iteration order not strictly increasing");
            }
            prev = Some(k);
        }

        ring.debug_validate_invariants();
    }
});
