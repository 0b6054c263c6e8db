//! # Shift and Rotate Instructions
//!
//! This module implements shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Each works on the accumulator (Accumulator mode) or on memory
//! (read-modify-write). The bit shifted out lands in carry; rotates shift the
//! previous carry in. Z and N come from the result.

use crate::{ExecutionError, MemoryBus, OpcodeEntry, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// # Flag Behavior
///
/// - Carry (C): old bit 7
/// - Zero (Z), Negative (N): from the result
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let (old, result) = cpu.modify_operand(entry.addressing_mode, |v| v << 1)?;

    cpu.status.set_carry(old & 0x80 != 0);
    cpu.status.set_negative_zero(result);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Carry receives old bit 0; N is always cleared since bit 7 becomes 0.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let (old, result) = cpu.modify_operand(entry.addressing_mode, |v| v >> 1)?;

    cpu.status.set_carry(old & 0x01 != 0);
    cpu.status.set_negative_zero(result);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let carry_in = cpu.status.carry();
    let (old, result) =
        cpu.modify_operand(entry.addressing_mode, |v| (v << 1) | carry_in)?;

    cpu.status.set_carry(old & 0x80 != 0);
    cpu.status.set_negative_zero(result);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let carry_in = cpu.status.carry() << 7;
    let (old, result) =
        cpu.modify_operand(entry.addressing_mode, |v| (v >> 1) | carry_in)?;

    cpu.status.set_carry(old & 0x01 != 0);
    cpu.status.set_negative_zero(result);

    cpu.advance_pc(entry);
    Ok(())
}
