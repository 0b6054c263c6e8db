//! Tests for the ASL (Arithmetic Shift Left) instruction.

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0x0FFC, 0x00);
    memory.write(0x0FFD, 0x80);
    CPU::new(memory)
}

// ========== Accumulator Mode Tests ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();

    // ASL A
    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.set_a(0x41);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x82);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.remaining_cycles(), 1);
}

#[test]
fn test_asl_accumulator_carry_out_and_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.set_a(0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_asl_ignores_carry_in() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x02);
    assert!(!cpu.flag_c());
}

// ========== Memory Mode Tests ==========

#[test]
fn test_asl_zero_page() {
    let mut cpu = setup_cpu();

    // ASL $10
    cpu.memory_mut().write(0x8000, 0x06);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0xC0);
    cpu.set_a(0x55);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x80);
    assert_eq!(cpu.a(), 0x55);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cpu.remaining_cycles(), 4);
}

#[test]
fn test_asl_absolute_x() {
    let mut cpu = setup_cpu();

    // ASL $2000,X with X = 0x01
    cpu.memory_mut().write(0x8000, 0x1E);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2001, 0x03);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x2001), 0x06);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.remaining_cycles(), 6);
}
