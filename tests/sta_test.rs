//! Tests for the STA (Store Accumulator) instruction.
//!
//! Tests cover:
//! - All 7 addressing modes
//! - Flags left untouched
//! - Immediate-mode rejection with a custom table

use std::sync::Arc;

use cpu6502::{Access, AddressingMode, ExecutionError, FlatMemory, MemoryBus, OpcodeTable, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0x0FFC, 0x00);
    memory.write(0x0FFD, 0x80);
    CPU::new(memory)
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();

    // STA $10
    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.set_a(0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.remaining_cycles(), 2);
}

#[test]
fn test_sta_zero_page_x_wraps() {
    let mut cpu = setup_cpu();

    // STA $FF,X with X = 0x01 -> $0000
    cpu.memory_mut().write(0x8000, 0x95);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.set_a(0x5A);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0000), 0x5A);
    assert_eq!(cpu.memory().read(0x0100), 0x00);
}

#[test]
fn test_sta_absolute() {
    let mut cpu = setup_cpu();

    // STA $1234
    cpu.memory_mut().write(0x8000, 0x8D);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.set_a(0x99);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1234), 0x99);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.remaining_cycles(), 3);
}

#[test]
fn test_sta_absolute_x_and_y() {
    let mut cpu = setup_cpu();

    // STA $2000,X ; STA $2000,Y
    cpu.memory_mut()
        .load(0x8000, &[0x9D, 0x00, 0x20, 0x99, 0x00, 0x20]);
    cpu.set_a(0x01);
    cpu.set_x(0x03);
    cpu.set_y(0x07);

    cpu.step_instruction().unwrap();
    cpu.step_instruction().unwrap();

    assert_eq!(cpu.memory().read(0x2003), 0x01);
    assert_eq!(cpu.memory().read(0x2007), 0x01);
    assert_eq!(cpu.pc(), 0x8006);
}

#[test]
fn test_sta_indirect_x() {
    let mut cpu = setup_cpu();

    // STA ($40,X) with X = 0x02: pointer at $42/$43 -> $3456
    cpu.memory_mut().write(0x8000, 0x81);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0042, 0x56);
    cpu.memory_mut().write(0x0043, 0x34);
    cpu.set_a(0xC0);
    cpu.set_x(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x3456), 0xC0);
    assert_eq!(cpu.remaining_cycles(), 5);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = setup_cpu();

    // STA ($40),Y with Y = 0x04: pointer $3456 -> $345A
    cpu.memory_mut().write(0x8000, 0x91);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0040, 0x56);
    cpu.memory_mut().write(0x0041, 0x34);
    cpu.set_a(0xC1);
    cpu.set_y(0x04);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x345A), 0xC1);
    assert_eq!(cpu.remaining_cycles(), 5);
}

// ========== Flag Tests ==========

#[test]
fn test_sta_does_not_affect_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.set_a(0x00);
    cpu.set_status(0b1100_0011);

    cpu.step().unwrap();

    assert_eq!(cpu.status(), 0b1100_0011);
}

#[test]
fn test_sta_immediate_is_rejected() {
    let table = OpcodeTable::from_csv("0x89,STA,IMM,2,2").unwrap();
    let mut memory = FlatMemory::new();
    memory.write(0x0FFC, 0x00);
    memory.write(0x0FFD, 0x80);
    memory.write(0x8000, 0x89);
    memory.write(0x8001, 0x10);

    let mut cpu = CPU::with_table(memory, Arc::new(table));
    cpu.set_a(0x42);

    assert_eq!(
        cpu.step(),
        Err(ExecutionError::UnsupportedAddressingMode {
            mode: AddressingMode::Immediate,
            access: Access::Write,
        })
    );
    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert_eq!(cpu.memory().read(0x8001), 0x10);
    assert_eq!(cpu.pc(), 0x8000);
}
