//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns an instruction's operand bytes into an operand
//! value or an effective address.
//!
//! Resolution always works relative to the program counter at the start of the
//! instruction (the address of the opcode byte). It never moves the program
//! counter; advancing past the instruction is the job of the instruction itself.

use crate::{ExecutionError, MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, INX, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (offset is relative to the address after the branch)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X register (16-bit add, no page penalty).
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register (16-bit add, no page penalty).
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40 within zero page, read the 16-bit
    /// pointer stored there, load from the result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit pointer from ZP 0x40, add Y, load from result)
    IndirectY,
}

impl AddressingMode {
    /// Parses the short mode code used by the opcode metadata rows.
    ///
    /// ```
    /// use cpu6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::from_code("INDY"), Some(AddressingMode::IndirectY));
    /// assert_eq!(AddressingMode::from_code("XYZ"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        let mode = match code {
            "IMP" => AddressingMode::Implicit,
            "ACC" => AddressingMode::Accumulator,
            "IMM" => AddressingMode::Immediate,
            "ZP" => AddressingMode::ZeroPage,
            "ZPX" => AddressingMode::ZeroPageX,
            "ZPY" => AddressingMode::ZeroPageY,
            "REL" => AddressingMode::Relative,
            "ABS" => AddressingMode::Absolute,
            "ABSX" => AddressingMode::AbsoluteX,
            "ABSY" => AddressingMode::AbsoluteY,
            "IND" => AddressingMode::Indirect,
            "INDX" => AddressingMode::IndirectX,
            "INDY" => AddressingMode::IndirectY,
            _ => return None,
        };
        Some(mode)
    }

    /// Number of operand bytes following the opcode.
    pub fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Direction of an operand access, carried by
/// [`ExecutionError::UnsupportedAddressingMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Read,
    Write,
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Access::Read => f.write_str("read"),
            Access::Write => f.write_str("write"),
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Reads the first operand byte (PC+1).
    fn operand_byte(&self) -> u8 {
        self.memory.read(self.pc.wrapping_add(1))
    }

    /// Reads the two operand bytes (PC+1, PC+2) as a little-endian word.
    fn operand_word(&self) -> u16 {
        self.read_word(self.pc.wrapping_add(1))
    }

    /// Reads a little-endian word at `addr`, `addr + 1`.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian pointer from zero page; the high byte wraps
    /// within page zero.
    fn zero_page_word(&self, ptr: u8) -> u16 {
        let lo = self.memory.read(ptr as u16) as u16;
        let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    fn resolve(&self, mode: AddressingMode, access: Access) -> Result<u16, ExecutionError> {
        let addr = match mode {
            AddressingMode::ZeroPage => self.operand_byte() as u16,
            AddressingMode::ZeroPageX => self.operand_byte().wrapping_add(self.x) as u16,
            AddressingMode::ZeroPageY => self.operand_byte().wrapping_add(self.y) as u16,
            AddressingMode::Absolute => self.operand_word(),
            AddressingMode::AbsoluteX => self.operand_word().wrapping_add(self.x as u16),
            AddressingMode::AbsoluteY => self.operand_word().wrapping_add(self.y as u16),
            AddressingMode::IndirectX => {
                let ptr = self.operand_byte().wrapping_add(self.x);
                self.zero_page_word(ptr)
            }
            AddressingMode::IndirectY => {
                let base = self.zero_page_word(self.operand_byte());
                base.wrapping_add(self.y as u16)
            }
            AddressingMode::Indirect if access == Access::Read => {
                let ptr = self.operand_word();
                // NMOS bug: the high byte never crosses the pointer's page.
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let lo = self.memory.read(ptr) as u16;
                let hi = self.memory.read(hi_addr) as u16;
                (hi << 8) | lo
            }
            AddressingMode::Relative if access == Access::Read => {
                let offset = self.operand_byte() as i8;
                self.pc
                    .wrapping_add(1 + mode.operand_bytes() as u16)
                    .wrapping_add_signed(offset as i16)
            }
            _ => return Err(ExecutionError::UnsupportedAddressingMode { mode, access }),
        };
        Ok(addr)
    }

    /// Resolves the effective address for `mode` without touching the bus
    /// beyond operand and pointer reads.
    ///
    /// `Indirect` yields the jump target and `Relative` yields the branch
    /// target. Modes without an address (Implicit, Accumulator, Immediate)
    /// fail with `UnsupportedAddressingMode`.
    pub fn effective_address(&self, mode: AddressingMode) -> Result<u16, ExecutionError> {
        self.resolve(mode, Access::Read)
    }

    /// Reads the 8-bit operand for `mode`.
    pub fn read_operand(&self, mode: AddressingMode) -> Result<u8, ExecutionError> {
        match mode {
            AddressingMode::Immediate => Ok(self.operand_byte()),
            AddressingMode::Accumulator => Ok(self.a),
            AddressingMode::Indirect | AddressingMode::Relative => {
                Err(ExecutionError::UnsupportedAddressingMode {
                    mode,
                    access: Access::Read,
                })
            }
            _ => Ok(self.memory.read(self.resolve(mode, Access::Read)?)),
        }
    }

    /// Writes `value` to the location `mode` resolves to.
    ///
    /// Immediate, Implicit, Relative and Indirect have no writable location
    /// and fail with `UnsupportedAddressingMode` before anything is written.
    pub fn write_operand(&mut self, mode: AddressingMode, value: u8) -> Result<(), ExecutionError> {
        if mode == AddressingMode::Accumulator {
            self.a = value;
            return Ok(());
        }
        let addr = self.resolve(mode, Access::Write)?;
        self.memory.write(addr, value);
        Ok(())
    }

    /// Read-modify-write on the operand location: reads the old value,
    /// stores `f(old)` and returns `(old, new)`.
    ///
    /// The location is resolved once and checked for writability before the
    /// first bus access.
    pub(crate) fn modify_operand(
        &mut self,
        mode: AddressingMode,
        f: impl FnOnce(u8) -> u8,
    ) -> Result<(u8, u8), ExecutionError> {
        if mode == AddressingMode::Accumulator {
            let old = self.a;
            self.a = f(old);
            return Ok((old, self.a));
        }
        let addr = self.resolve(mode, Access::Write)?;
        let old = self.memory.read(addr);
        let new = f(old);
        self.memory.write(addr, new);
        Ok((old, new))
    }
}
