//! # 6502 CPU Core
//!
//! An instruction-stepped NMOS 6502 CPU core driven one cycle unit at a time
//! against an external memory bus.
//!
//! The crate provides the processor state, a trait-based memory bus
//! abstraction, a table-driven decoder built from tabular opcode metadata,
//! and the instruction semantics for the load/store, arithmetic, logical,
//! increment/decrement, shift, compare and branch families.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Reset vector lives at 0x0FFC/0x0FFD and points at 0x0200
//! memory.write(0x0FFC, 0x00); // Low byte
//! memory.write(0x0FFD, 0x02); // High byte
//!
//! // LDA #$80
//! memory.write(0x0200, 0xA9);
//! memory.write(0x0201, 0x80);
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x0200);
//! assert_eq!(cpu.sp(), 0xFF);
//!
//! cpu.step().unwrap();
//! assert_eq!(cpu.a(), 0x80);
//! assert!(cpu.flag_n());
//! assert_eq!(cpu.pc(), 0x0202);
//! ```
//!
//! ## Execution Model
//!
//! Each call to [`CPU::step`] is one cycle unit. A step either burns one idle
//! cycle left over from the previous instruction, or fetches, decodes and
//! executes the next instruction in full and then schedules its remaining
//! cycles as idle time. There is no per-cycle bus activity.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch/decode/dispatch loop
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `opcodes` - Opcode metadata table built from CSV rows
//! - `addressing` - Addressing modes and effective-address resolution
//! - `status` - Processor status flag register

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{Access, AddressingMode};
pub use cpu::{CPU, RESET_VECTOR, STACK_POINTER_INIT};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Instruction, OpcodeEntry, OpcodeTable, OpcodeTableError};
pub use status::Status;

#[cfg(feature = "wasm")]
pub use wasm::Emulator6502;

/// Errors that can occur during CPU execution.
///
/// A step that fails leaves registers, flags, the program counter and the
/// bus exactly as they were before the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte has no entry in the opcode table.
    InvalidOpcode(u8),

    /// The opcode is recognized but no behavior is registered for its
    /// instruction kind.
    ///
    /// Contains the instruction mnemonic.
    UnsupportedInstruction(&'static str),

    /// An instruction was dispatched with an addressing mode that cannot be
    /// resolved in the requested direction (e.g. a store to an immediate).
    ///
    /// This points at a mismatch between the opcode table and the
    /// instruction behaviors rather than a recoverable runtime condition.
    UnsupportedAddressingMode {
        /// The addressing mode that was requested.
        mode: AddressingMode,
        /// Whether the operand was being read or written.
        access: Access,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::InvalidOpcode(opcode) => {
                write!(f, "invalid opcode: 0x{:02X}", opcode)
            }
            ExecutionError::UnsupportedInstruction(mnemonic) => {
                write!(f, "unsupported instruction: {}", mnemonic)
            }
            ExecutionError::UnsupportedAddressingMode { mode, access } => {
                write!(f, "addressing mode {:?} does not support {}", mode, access)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
