//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Memory, read-modify-write
//! - INX, INY, DEX, DEY: Index registers
//!
//! All wrap at 8 bits and set Z and N from the new value.

use crate::{ExecutionError, MemoryBus, OpcodeEntry, CPU};

/// Executes the INC (Increment Memory) instruction.
///
/// Adds one to the value held at a specified memory location,
/// setting the zero and negative flags as appropriate.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `entry` - The decoded opcode entry for this INC instruction
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let (_, result) = cpu.modify_operand(entry.addressing_mode, |v| v.wrapping_add(1))?;
    cpu.status.set_negative_zero(result);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Subtracts one from the value held at a specified memory location,
/// setting the zero and negative flags as appropriate.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let (_, result) = cpu.modify_operand(entry.addressing_mode, |v| v.wrapping_sub(1))?;
    cpu.status.set_negative_zero(result);

    cpu.advance_pc(entry);
    Ok(())
}

pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_negative_zero(cpu.x);

    cpu.advance_pc(entry);
    Ok(())
}

pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_negative_zero(cpu.y);

    cpu.advance_pc(entry);
    Ok(())
}

pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_negative_zero(cpu.x);

    cpu.advance_pc(entry);
    Ok(())
}

pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_negative_zero(cpu.y);

    cpu.advance_pc(entry);
    Ok(())
}
