//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and comparison operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Compare register with memory
//! - BIT: Bit test
//!
//! Arithmetic is always binary. The decimal flag is stored but ignored.

use crate::{ExecutionError, MemoryBus, OpcodeEntry, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. Updates all
/// relevant flags.
///
/// # Flag Behavior
///
/// - Carry (C): carry out of bit 7 of the widened sum
/// - Overflow (V): both operands share a sign and the result's sign differs
/// - Zero (Z), Negative (N): from the result
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `entry` - The decoded opcode entry for this ADC instruction
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(entry.addressing_mode)?;

    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.status.carry() as u16;
    let result = sum as u8;

    cpu.status.set_carry(sum > 0xFF);
    // V = (A^result) & (M^result) & 0x80
    cpu.status
        .set_overflow((a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.status.set_negative_zero(result);
    cpu.a = result;

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`. The carry flag is the inverted borrow.
///
/// # Flag Behavior
///
/// - Carry (C): set if no borrow occurred
/// - Overflow (V): operands differ in sign and the result's sign differs from A
/// - Zero (Z), Negative (N): from the result
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(entry.addressing_mode)?;

    let a = cpu.a;
    let borrow = 1 - cpu.status.carry() as i16;
    let difference = a as i16 - value as i16 - borrow;
    let result = difference as u8;

    cpu.status.set_carry(difference >= 0);
    // V = (A^M) & (A^result) & 0x80
    cpu.status
        .set_overflow((a ^ value) & (a ^ result) & 0x80 != 0);
    cpu.status.set_negative_zero(result);
    cpu.a = result;

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the AND (Logical AND) instruction.
///
/// Performs a bitwise AND between the accumulator and the operand.
/// Updates Z and N flags.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(entry.addressing_mode)?;

    cpu.a &= value;
    cpu.status.set_negative_zero(cpu.a);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(entry.addressing_mode)?;

    cpu.a |= value;
    cpu.status.set_negative_zero(cpu.a);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(entry.addressing_mode)?;

    cpu.a ^= value;
    cpu.status.set_negative_zero(cpu.a);

    cpu.advance_pc(entry);
    Ok(())
}

/// Shared compare: `register - operand` without carry-in, register untouched.
///
/// - Carry (C): set if register >= operand (unsigned)
/// - Zero (Z): set if register == operand
/// - Negative (N): bit 7 of the wrapped difference
fn compare<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
    register: u8,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(entry.addressing_mode)?;

    let result = register.wrapping_sub(value);
    cpu.status.set_carry(register >= value);
    cpu.status.set_negative_zero(result);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let register = cpu.a;
    compare(cpu, entry, register)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let register = cpu.x;
    compare(cpu, entry, register)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let register = cpu.y;
    compare(cpu, entry, register)
}

/// Executes the BIT (Bit Test) instruction.
///
/// Tests bits of the operand against the accumulator without changing it.
///
/// # Flag Behavior
///
/// - Negative (N): bit 7 of the operand
/// - Overflow (V): bit 6 of the operand
/// - Zero (Z): set if `A & M == 0`
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(entry.addressing_mode)?;

    cpu.status.set_negative(value);
    cpu.status.set_overflow(value & 0x40 != 0);
    cpu.status.set_zero(cpu.a & value);

    cpu.advance_pc(entry);
    Ok(())
}
