//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//!
//! Each copies the source register and sets Z and N from the copied value.
//! TSX and TXS involve the stack pointer and are not provided.

use crate::{ExecutionError, MemoryBus, OpcodeEntry, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `entry` - The decoded opcode entry for this TAX instruction
pub(crate) fn execute_tax<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.x = cpu.a;
    cpu.status.set_negative_zero(cpu.x);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.y = cpu.a;
    cpu.status.set_negative_zero(cpu.y);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.a = cpu.x;
    cpu.status.set_negative_zero(cpu.a);

    cpu.advance_pc(entry);
    Ok(())
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.a = cpu.y;
    cpu.status.set_negative_zero(cpu.a);

    cpu.advance_pc(entry);
    Ok(())
}
