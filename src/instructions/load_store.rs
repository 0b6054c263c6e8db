//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set Z and N from the loaded value. Stores affect no flags.

use crate::{ExecutionError, MemoryBus, OpcodeEntry, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `entry` - The decoded opcode entry for this LDA instruction
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(entry.addressing_mode)?;

    cpu.a = value;
    cpu.status.set_negative_zero(value);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA, with X as the destination.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(entry.addressing_mode)?;

    cpu.x = value;
    cpu.status.set_negative_zero(value);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA, with Y as the destination.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(entry.addressing_mode)?;

    cpu.y = value;
    cpu.status.set_negative_zero(value);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the contents of the accumulator into memory at the address specified
/// by the addressing mode.
///
/// # Flag Behavior
///
/// - No flags affected
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.write_operand(entry.addressing_mode, cpu.a)?;

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.write_operand(entry.addressing_mode, cpu.x)?;

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.write_operand(entry.addressing_mode, cpu.y)?;

    cpu.advance_pc(entry);
    Ok(())
}
