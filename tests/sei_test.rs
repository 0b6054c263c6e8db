//! Tests for the SEI (Set Interrupt Disable) and CLI (Clear Interrupt Disable) instructions.

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0x0FFC, 0x00);
    memory.write(0x0FFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_sei_sets_interrupt_disable() {
    let mut cpu = setup_cpu();

    // SEI
    cpu.memory_mut().write(0x8000, 0x78);

    cpu.step().unwrap();

    assert!(cpu.flag_i());
    assert_eq!(cpu.status(), 0x04);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.remaining_cycles(), 1);
}

#[test]
fn test_cli_clears_only_interrupt_disable() {
    let mut cpu = setup_cpu();

    // CLI
    cpu.memory_mut().write(0x8000, 0x58);
    cpu.set_status(0xFF);

    cpu.step().unwrap();

    assert!(!cpu.flag_i());
    assert_eq!(cpu.status(), 0xFB);
    assert_eq!(cpu.pc(), 0x8001);
}
