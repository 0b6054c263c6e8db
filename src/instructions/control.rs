//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - NOP: No operation
//!
//! Subroutine calls, returns and BRK need the stack and are not provided.

use crate::{AddressingMode, Access, ExecutionError, MemoryBus, OpcodeEntry, CPU};

/// Executes the JMP (Jump) instruction.
///
/// JMP sets the program counter to the address specified by the operand.
/// The length-based advance does not apply.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// Flags affected: None
///
/// Note: The Indirect addressing mode has a hardware bug in the original 6502:
/// If the low byte of the indirect address is 0xFF, the high byte is read from
/// the same page (wraps within page) instead of crossing to the next page.
/// For example, JMP ($10FF) reads from $10FF and $1000 (not $1100).
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let target = match entry.addressing_mode {
        mode @ (AddressingMode::Absolute | AddressingMode::Indirect) => {
            cpu.effective_address(mode)?
        }
        mode => {
            return Err(ExecutionError::UnsupportedAddressingMode {
                mode,
                access: Access::Read,
            })
        }
    };

    cpu.pc = target;
    Ok(())
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    cpu.advance_pc(entry);
    Ok(())
}
