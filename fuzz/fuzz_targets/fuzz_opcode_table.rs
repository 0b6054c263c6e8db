//! Fuzz target for opcode table parsing.
//!
//! Arbitrary text must either build a table or produce an error, never panic.

#![no_main]

use cpu6502::OpcodeTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        if let Ok(table) = OpcodeTable::from_csv(source) {
            for entry in table.iter().filter(|e| e.is_defined()) {
                assert!((1..=3).contains(&entry.bytes));
                assert!(entry.cycles > 0);
            }
        }
    }
});
