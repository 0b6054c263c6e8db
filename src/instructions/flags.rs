//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and touch only their own bit.

use crate::{ExecutionError, MemoryBus, OpcodeEntry, Status, CPU};

fn write_flag<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
    flag: Status,
    value: bool,
) -> Result<(), ExecutionError> {
    cpu.status.set(flag, value);
    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// Addressing Mode: Implied
/// Opcode: 0x18
/// Bytes: 1
/// Cycles: 2
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0FFC, 0x00);
/// memory.write(0x0FFD, 0x80);
/// memory.write(0x8000, 0x18); // CLC
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_flag_c(true);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.flag_c(), false);
/// assert_eq!(cpu.pc(), 0x8001);
/// assert_eq!(cpu.remaining_cycles(), 1);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    write_flag(cpu, entry, Status::CARRY, false)
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    write_flag(cpu, entry, Status::CARRY, true)
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    write_flag(cpu, entry, Status::INTERRUPT_DISABLE, false)
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    write_flag(cpu, entry, Status::INTERRUPT_DISABLE, true)
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    write_flag(cpu, entry, Status::DECIMAL, false)
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// Only records the bit; ADC and SBC stay binary.
pub(crate) fn execute_sed<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    write_flag(cpu, entry, Status::DECIMAL, true)
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no matching "set overflow" instruction.
pub(crate) fn execute_clv<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    write_flag(cpu, entry, Status::OVERFLOW, false)
}
