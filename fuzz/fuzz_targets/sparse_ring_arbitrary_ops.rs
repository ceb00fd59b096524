#![no_main]

use libfuzzer_sys::fuzz_target;
use sparsering::ds::SparseRing;

// Fuzz arbitrary operation sequences on SparseRing
//
// Tests random sequences of put, get, contains_key, remove_before, clear,
// and iteration to find edge cases and invariant violations.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 64).max(1);
    let mut ring = SparseRing::new(capacity);

    let mut idx = 1;
    while idx + 2 < data.len() {
        let op = data[idx] % 6;
        let key = u16::from_le_bytes([data[idx + 1], data[idx + 2]]) as u64;
        let value = data[idx + 1] as u32;

        match op {
            0 | 1 => {
                let _ = ring.put(key, value);
            }
            2 => {
                let _ = ring.get(key);
            }
            3 => {
                let _ = ring.contains_key(key);
            }
            4 => {
                ring.remove_before(key);
            }
            _ => {
                if key % 17 == 0 {
                    ring.clear();
                } else {
                    let _ = ring.iter().count();
                }
            }
        }

        ring.debug_validate_invariants();
        assert!(ring.len() <= ring.capacity());

        idx += 3;
    }
});
