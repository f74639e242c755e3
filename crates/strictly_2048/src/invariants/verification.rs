//! Formal verification of line merging using the Kani model checker.
//!
//! These proof harnesses check the merge rules for every line of valid
//! tiles, not just the hand-picked cases in the unit tests.

#[cfg(kani)]
mod proofs {
    use crate::rules::merge_line;
    use crate::types::is_valid_tile;

    fn any_line() -> [u32; 4] {
        let exponents: [u8; 4] = kani::any();
        exponents.map(|e| {
            kani::assume(e <= 17);
            if e == 0 { 0 } else { 1u32 << e }
        })
    }

    /// Merging conserves the line total and only ever adds merged value.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_merge_conserves_value() {
        let line = any_line();
        let (merged, gained) = merge_line(line);

        let before: u64 = line.iter().map(|&v| u64::from(v)).sum();
        let after: u64 = merged.iter().map(|&v| u64::from(v)).sum();
        assert_eq!(before, after);
        assert!(gained <= after);
    }

    /// Merged lines are compacted toward the leading edge and stay valid.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_merge_compacts() {
        let line = any_line();
        let (merged, _) = merge_line(line);

        for i in 0..3 {
            assert!(merged[i] != 0 || merged[i + 1] == 0);
        }
        for value in merged {
            assert!(is_valid_tile(value));
        }
    }
}
