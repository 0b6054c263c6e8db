//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of the supported 6502 instructions,
//! organized by category. Each instruction is a standalone function that takes a
//! mutable reference to the CPU and the decoded opcode entry (addressing mode,
//! byte length, cycles).
//!
//! Every handler resolves its operand location before mutating anything, so a
//! failing handler leaves the CPU and bus untouched. Handlers advance the
//! program counter themselves; jumps and taken branches set it directly.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic, logic and compare (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branches (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow (JMP, NOP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA)
//!
//! BRK, JSR, RTS, RTI, the stack instructions and TSX/TXS have no handler and
//! fail with `UnsupportedInstruction`.

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod transfer;

use crate::{ExecutionError, Instruction, MemoryBus, OpcodeEntry, CPU};

/// Behavior for one instruction kind.
pub(crate) type Handler<M> = fn(&mut CPU<M>, &OpcodeEntry) -> Result<(), ExecutionError>;

/// Instruction kind -> handler, indexed by `Instruction` discriminant.
pub(crate) struct DispatchTable<M: MemoryBus> {
    handlers: [Option<Handler<M>>; Instruction::COUNT],
}

impl<M: MemoryBus> DispatchTable<M> {
    pub(crate) fn new() -> Self {
        let mut table = Self {
            handlers: [None; Instruction::COUNT],
        };

        table.register(Instruction::LDA, load_store::execute_lda);
        table.register(Instruction::LDX, load_store::execute_ldx);
        table.register(Instruction::LDY, load_store::execute_ldy);
        table.register(Instruction::STA, load_store::execute_sta);
        table.register(Instruction::STX, load_store::execute_stx);
        table.register(Instruction::STY, load_store::execute_sty);

        table.register(Instruction::ADC, alu::execute_adc);
        table.register(Instruction::SBC, alu::execute_sbc);
        table.register(Instruction::AND, alu::execute_and);
        table.register(Instruction::ORA, alu::execute_ora);
        table.register(Instruction::EOR, alu::execute_eor);
        table.register(Instruction::CMP, alu::execute_cmp);
        table.register(Instruction::CPX, alu::execute_cpx);
        table.register(Instruction::CPY, alu::execute_cpy);
        table.register(Instruction::BIT, alu::execute_bit);

        table.register(Instruction::INC, inc_dec::execute_inc);
        table.register(Instruction::DEC, inc_dec::execute_dec);
        table.register(Instruction::INX, inc_dec::execute_inx);
        table.register(Instruction::INY, inc_dec::execute_iny);
        table.register(Instruction::DEX, inc_dec::execute_dex);
        table.register(Instruction::DEY, inc_dec::execute_dey);

        table.register(Instruction::ASL, shifts::execute_asl);
        table.register(Instruction::LSR, shifts::execute_lsr);
        table.register(Instruction::ROL, shifts::execute_rol);
        table.register(Instruction::ROR, shifts::execute_ror);

        table.register(Instruction::BCC, branches::execute_bcc);
        table.register(Instruction::BCS, branches::execute_bcs);
        table.register(Instruction::BEQ, branches::execute_beq);
        table.register(Instruction::BNE, branches::execute_bne);
        table.register(Instruction::BMI, branches::execute_bmi);
        table.register(Instruction::BPL, branches::execute_bpl);
        table.register(Instruction::BVC, branches::execute_bvc);
        table.register(Instruction::BVS, branches::execute_bvs);

        table.register(Instruction::JMP, control::execute_jmp);
        table.register(Instruction::NOP, control::execute_nop);

        table.register(Instruction::CLC, flags::execute_clc);
        table.register(Instruction::SEC, flags::execute_sec);
        table.register(Instruction::CLI, flags::execute_cli);
        table.register(Instruction::SEI, flags::execute_sei);
        table.register(Instruction::CLD, flags::execute_cld);
        table.register(Instruction::SED, flags::execute_sed);
        table.register(Instruction::CLV, flags::execute_clv);

        table.register(Instruction::TAX, transfer::execute_tax);
        table.register(Instruction::TAY, transfer::execute_tay);
        table.register(Instruction::TXA, transfer::execute_txa);
        table.register(Instruction::TYA, transfer::execute_tya);

        table
    }

    fn register(&mut self, instruction: Instruction, handler: Handler<M>) {
        self.handlers[instruction as usize] = Some(handler);
    }

    pub(crate) fn get(&self, instruction: Instruction) -> Option<Handler<M>> {
        self.handlers[instruction as usize]
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Moves PC past the current instruction.
    pub(crate) fn advance_pc(&mut self, entry: &OpcodeEntry) {
        self.pc = self.pc.wrapping_add(entry.bytes as u16);
    }
}
