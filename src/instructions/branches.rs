//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Carry clear / set
//! - BEQ / BNE: Zero set / clear
//! - BMI / BPL: Negative set / clear
//! - BVC / BVS: Overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the address after the branch. A taken branch sets PC to the
//! target; an untaken one steps over the instruction. No flags are affected.

use crate::{ExecutionError, MemoryBus, OpcodeEntry, Status, CPU};

/// Branches if `flag` is in the `expected` state.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `entry` - The decoded opcode entry for the branch
/// * `flag` - Status bit the branch tests
/// * `expected` - Value of that bit that takes the branch
fn branch_if<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
    flag: Status,
    expected: bool,
) -> Result<(), ExecutionError> {
    if cpu.status.is_set(flag) == expected {
        cpu.pc = cpu.effective_address(entry.addressing_mode)?;
    } else {
        cpu.advance_pc(entry);
    }
    Ok(())
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    branch_if(cpu, entry, Status::CARRY, false)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    branch_if(cpu, entry, Status::CARRY, true)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    branch_if(cpu, entry, Status::ZERO, true)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    branch_if(cpu, entry, Status::ZERO, false)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    branch_if(cpu, entry, Status::NEGATIVE, true)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    branch_if(cpu, entry, Status::NEGATIVE, false)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    branch_if(cpu, entry, Status::OVERFLOW, false)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    branch_if(cpu, entry, Status::OVERFLOW, true)
}
