//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, runs a short burst of
//! steps, and checks that a failing step leaves the machine untouched.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU register state
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    status: u8,
}

/// Memory regions seeded from the fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes at the PC location
    program: [u8; 16],
    /// Zero page contents (pointers for the indirect modes)
    zero_page: [u8; 256],
    /// Region targeted by absolute operands
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset vector -> 0x8000
    memory.write(0x0FFC, 0x00);
    memory.write(0x0FFD, 0x80);

    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x4000, &input.memory.main_memory);

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_status(input.cpu_state.status);

    for _ in 0..input.steps {
        let before = (cpu.a(), cpu.x(), cpu.y(), cpu.pc(), cpu.status(), cpu.cycles());

        if cpu.step().is_err() {
            let after = (cpu.a(), cpu.x(), cpu.y(), cpu.pc(), cpu.status(), cpu.cycles());
            assert_eq!(before, after, "failed step mutated CPU state");
            assert_eq!(cpu.remaining_cycles(), 0);
            break;
        }

        assert_eq!(cpu.sp(), 0xFF);
    }
});
