//! Tests for the ROL (Rotate Left) instruction.

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0x0FFC, 0x00);
    memory.write(0x0FFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_rol_accumulator_carry_in() {
    let mut cpu = setup_cpu();

    // ROL A
    cpu.memory_mut().write(0x8000, 0x2A);
    cpu.set_a(0x40);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.remaining_cycles(), 1);
}

#[test]
fn test_rol_accumulator_carry_out() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x2A);
    cpu.set_a(0x80);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_rol_nine_times_restores_value() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x2A; 9]);
    cpu.set_a(0xA5);
    cpu.set_flag_c(false);

    for _ in 0..9 {
        cpu.step_instruction().unwrap();
    }

    assert_eq!(cpu.a(), 0xA5);
    assert!(!cpu.flag_c());
}

#[test]
fn test_rol_zero_page() {
    let mut cpu = setup_cpu();

    // ROL $80
    cpu.memory_mut().write(0x8000, 0x26);
    cpu.memory_mut().write(0x8001, 0x80);
    cpu.memory_mut().write(0x0080, 0x01);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0080), 0x03);
    assert!(!cpu.flag_c());
    assert_eq!(cpu.remaining_cycles(), 4);
}
