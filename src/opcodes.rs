//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for instruction decoding.
//!
//! The table is built from tabular metadata rows, one per defined opcode:
//!
//! ```text
//! opcode,mnemonic,mode,bytes,cycles
//! 0xA9,LDA,IMM,2,2
//! ```
//!
//! The built-in rows (`optable.csv`) cover the 151 documented NMOS 6502
//! opcodes. Every other byte maps to [`Instruction::Undefined`] with the
//! mnemonic `"???"`.
//!
//! A table is immutable once built. CPUs share one through an `Arc`.

use std::sync::{Arc, OnceLock};

use crate::addressing::AddressingMode;

/// Built-in metadata rows for the documented NMOS 6502 opcodes.
const BUILTIN_ROWS: &str = include_str!("optable.csv");

macro_rules! instructions {
    ($($variant:ident),+ $(,)?) => {
        /// Instruction kind, independent of addressing mode.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Instruction {
            $($variant,)+
            /// Marker for opcode bytes with no table entry.
            Undefined,
        }

        impl Instruction {
            /// Every defined instruction kind, in declaration order.
            pub const ALL: &'static [Instruction] = &[$(Instruction::$variant,)+];

            /// Number of instruction kinds including `Undefined`.
            pub const COUNT: usize = Self::ALL.len() + 1;

            /// Three-letter mnemonic, `"???"` for `Undefined`.
            pub fn mnemonic(self) -> &'static str {
                match self {
                    $(Instruction::$variant => stringify!($variant),)+
                    Instruction::Undefined => "???",
                }
            }

            /// Looks up an instruction kind by its upper-case mnemonic.
            pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
                match mnemonic {
                    $(stringify!($variant) => Some(Instruction::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

instructions! {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC,
    CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP,
    JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI,
    RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Instruction, OpcodeTable};
///
/// let table = OpcodeTable::builtin();
/// let lda_imm = table.lookup(0xA9);
/// assert_eq!(lda_imm.instruction, Instruction::LDA);
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.bytes, 2);
/// assert_eq!(lda_imm.cycles, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// The opcode byte this entry describes.
    pub opcode: u8,

    /// Instruction kind, `Instruction::Undefined` for unassigned bytes.
    pub instruction: Instruction,

    /// Instruction mnemonic (e.g., "LDA", "???" for unassigned bytes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub bytes: u8,

    /// Base cycle cost. Zero for unassigned bytes.
    pub cycles: u8,
}

impl OpcodeEntry {
    fn undefined(opcode: u8) -> Self {
        Self {
            opcode,
            instruction: Instruction::Undefined,
            mnemonic: Instruction::Undefined.mnemonic(),
            addressing_mode: AddressingMode::Implicit,
            bytes: 1,
            cycles: 0,
        }
    }

    /// Returns true if the opcode byte has a table entry.
    pub fn is_defined(&self) -> bool {
        self.instruction != Instruction::Undefined
    }
}

/// Errors raised while building an [`OpcodeTable`] from metadata rows.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpcodeTableError {
    /// Wrong column count or a field that does not parse.
    MalformedRow { line: usize, reason: String },
    /// The mnemonic column names no known instruction.
    UnknownMnemonic { line: usize, mnemonic: String },
    /// The mode column is not one of the known mode codes.
    UnknownAddressingMode { line: usize, code: String },
    /// The byte length disagrees with the addressing mode's operand size.
    LengthMismatch {
        line: usize,
        opcode: u8,
        mode: AddressingMode,
        bytes: u8,
    },
    /// The same opcode byte appears on more than one row.
    DuplicateOpcode { line: usize, opcode: u8 },
}

impl std::fmt::Display for OpcodeTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OpcodeTableError::MalformedRow { line, reason } => {
                write!(f, "line {}: malformed row: {}", line, reason)
            }
            OpcodeTableError::UnknownMnemonic { line, mnemonic } => {
                write!(f, "line {}: unknown mnemonic '{}'", line, mnemonic)
            }
            OpcodeTableError::UnknownAddressingMode { line, code } => {
                write!(f, "line {}: unknown addressing mode '{}'", line, code)
            }
            OpcodeTableError::LengthMismatch {
                line,
                opcode,
                mode,
                bytes,
            } => write!(
                f,
                "line {}: opcode 0x{:02X} is {} bytes but {:?} needs {}",
                line,
                opcode,
                bytes,
                mode,
                1 + mode.operand_bytes()
            ),
            OpcodeTableError::DuplicateOpcode { line, opcode } => {
                write!(f, "line {}: opcode 0x{:02X} defined twice", line, opcode)
            }
        }
    }
}

impl std::error::Error for OpcodeTableError {}

/// Immutable 256-entry opcode table indexed by opcode byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeTable {
    entries: [OpcodeEntry; 256],
}

impl OpcodeTable {
    /// Builds a table from metadata rows.
    ///
    /// Each row is `opcode,mnemonic,mode,bytes,cycles` with the opcode written
    /// as `0xNN`. Blank lines and a header row starting with `opcode` are
    /// skipped. Any other malformed row fails the whole build.
    ///
    /// ```
    /// use cpu6502::{Instruction, OpcodeTable};
    ///
    /// let table = OpcodeTable::from_csv("opcode,mnemonic,mode,bytes,cycles\n0xEA,NOP,IMP,1,2\n").unwrap();
    /// assert_eq!(table.lookup(0xEA).instruction, Instruction::NOP);
    /// assert!(!table.lookup(0xA9).is_defined());
    /// ```
    pub fn from_csv(source: &str) -> Result<Self, OpcodeTableError> {
        let mut entries: [OpcodeEntry; 256] =
            std::array::from_fn(|opcode| OpcodeEntry::undefined(opcode as u8));

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let row = raw.trim();
            if row.is_empty() || row.starts_with("opcode") {
                continue;
            }

            let entry = parse_row(line, row)?;
            let slot = &mut entries[entry.opcode as usize];
            if slot.is_defined() {
                return Err(OpcodeTableError::DuplicateOpcode {
                    line,
                    opcode: entry.opcode,
                });
            }
            *slot = entry;
        }

        let table = Self { entries };
        log::debug!("opcode table built: {} defined opcodes", table.defined_count());
        Ok(table)
    }

    /// Returns the shared table built from the documented NMOS 6502 rows.
    ///
    /// The rows are parsed on first use. The built-in rows ship with the
    /// crate, so a parse failure is a data-integrity fault and panics.
    pub fn builtin() -> Arc<OpcodeTable> {
        static BUILTIN: OnceLock<Arc<OpcodeTable>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| match OpcodeTable::from_csv(BUILTIN_ROWS) {
                Ok(table) => Arc::new(table),
                Err(err) => panic!("built-in opcode table is malformed: {}", err),
            })
            .clone()
    }

    /// Returns the entry for `opcode`. Total over all byte values.
    pub fn lookup(&self, opcode: u8) -> &OpcodeEntry {
        &self.entries[opcode as usize]
    }

    /// Iterates all 256 entries in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = &OpcodeEntry> {
        self.entries.iter()
    }

    /// Number of opcode bytes with a table entry.
    pub fn defined_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_defined()).count()
    }
}

fn parse_row(line: usize, row: &str) -> Result<OpcodeEntry, OpcodeTableError> {
    let malformed = |reason: String| OpcodeTableError::MalformedRow { line, reason };

    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() != 5 {
        return Err(malformed(format!("expected 5 fields, found {}", fields.len())));
    }

    let hex = fields[0]
        .strip_prefix("0x")
        .or_else(|| fields[0].strip_prefix("0X"))
        .ok_or_else(|| malformed(format!("opcode '{}' lacks 0x prefix", fields[0])))?;
    let opcode = u8::from_str_radix(hex, 16)
        .map_err(|e| malformed(format!("opcode '{}': {}", fields[0], e)))?;

    let instruction =
        Instruction::from_mnemonic(fields[1]).ok_or_else(|| OpcodeTableError::UnknownMnemonic {
            line,
            mnemonic: fields[1].to_string(),
        })?;

    let addressing_mode = AddressingMode::from_code(fields[2]).ok_or_else(|| {
        OpcodeTableError::UnknownAddressingMode {
            line,
            code: fields[2].to_string(),
        }
    })?;

    let bytes: u8 = fields[3]
        .parse()
        .map_err(|e| malformed(format!("byte length '{}': {}", fields[3], e)))?;
    let cycles: u8 = fields[4]
        .parse()
        .map_err(|e| malformed(format!("cycle count '{}': {}", fields[4], e)))?;

    if bytes != 1 + addressing_mode.operand_bytes() {
        return Err(OpcodeTableError::LengthMismatch {
            line,
            opcode,
            mode: addressing_mode,
            bytes,
        });
    }
    if cycles == 0 {
        return Err(malformed("cycle count must be at least 1".to_string()));
    }

    Ok(OpcodeEntry {
        opcode,
        instruction,
        mnemonic: instruction.mnemonic(),
        addressing_mode,
        bytes,
        cycles,
    })
}
