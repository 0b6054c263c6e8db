//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): initialized to 0xFF and otherwise untouched
//! - **Status flags**: N, V, B, D, I, Z, C packed into a [`Status`] byte
//! - **Remaining cycles**: idle cycles left over from the last instruction
//!
//! ## Execution Model
//!
//! `step()` is one cycle unit and runs a two-state machine:
//!
//! - **Idle**: `remaining_cycles > 0`. The step burns one cycle and touches nothing else.
//! - **Fetch/dispatch**: `remaining_cycles == 0`. The step fetches the opcode at PC,
//!   looks it up, runs the instruction to completion and schedules
//!   `cycles - 1` idle steps.
//!
//! There is no halt state; the CPU runs for as long as the caller keeps stepping.

use std::sync::Arc;

use crate::instructions::DispatchTable;
use crate::{ExecutionError, MemoryBus, OpcodeTable, Status};

/// Address of the little-endian reset vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0x0FFC;

/// Stack pointer value after construction.
pub const STACK_POINTER_INIT: u8 = 0xFF;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. The CPU
/// owns its register state exclusively; the opcode table is shared.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0FFC, 0x00); // Low byte
/// memory.write(0x0FFD, 0x80); // High byte (PC = 0x8000)
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status(), 0x00);
/// assert_eq!(cpu.remaining_cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) status: Status,

    /// Idle cycles left before the next fetch
    pub(crate) remaining_cycles: u8,

    /// Successful steps since construction
    pub(crate) cycles: u64,

    /// Decoder metadata, shared between CPUs
    table: Arc<OpcodeTable>,

    /// Instruction kind -> behavior
    handlers: DispatchTable<M>,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU on `memory` using the built-in opcode table.
    ///
    /// Construction reads the reset vector at 0x0FFC/0x0FFD (little-endian)
    /// into the program counter, sets SP to 0xFF and zeroes A, X, Y and the
    /// status byte.
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0FFC, 0x34);
    /// mem.write(0x0FFD, 0x12);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x1234);
    /// ```
    pub fn new(memory: M) -> Self {
        Self::with_table(memory, OpcodeTable::builtin())
    }

    /// Creates a new CPU on `memory` that decodes with `table`.
    pub fn with_table(memory: M, table: Arc<OpcodeTable>) -> Self {
        let pc_low = memory.read(RESET_VECTOR) as u16;
        let pc_high = memory.read(RESET_VECTOR.wrapping_add(1)) as u16;
        let pc = (pc_high << 8) | pc_low;

        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp: STACK_POINTER_INIT,
            status: Status::empty(),
            remaining_cycles: 0,
            cycles: 0,
            table,
            handlers: DispatchTable::new(),
            memory,
        }
    }

    /// Advances the processor by one cycle unit.
    ///
    /// 1. If idle cycles remain, burn one and return.
    /// 2. Fetch the opcode byte at PC and look it up in the opcode table.
    /// 3. Dispatch to the behavior registered for the instruction kind.
    /// 4. Schedule `cycles - 1` idle steps (this step counts as the first).
    ///
    /// # Errors
    ///
    /// - `InvalidOpcode(byte)` if the fetched byte has no table entry
    /// - `UnsupportedInstruction(mnemonic)` if no behavior is registered
    /// - `UnsupportedAddressingMode { .. }` if the table pairs an instruction
    ///   with a mode its behavior cannot resolve
    ///
    /// On error nothing is mutated: registers, flags, PC, the bus and the
    /// cycle counters are as they were.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus, ExecutionError};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0000, 0x02); // no such opcode
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), Err(ExecutionError::InvalidOpcode(0x02)));
    /// assert_eq!(cpu.pc(), 0x0000);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        if self.remaining_cycles > 0 {
            self.remaining_cycles -= 1;
            self.cycles += 1;
            return Ok(());
        }

        // Fetch
        let opcode = self.memory.read(self.pc);

        // Decode
        let entry = *self.table.lookup(opcode);
        if !entry.is_defined() {
            log::debug!("invalid opcode 0x{:02X} at 0x{:04X}", opcode, self.pc);
            return Err(ExecutionError::InvalidOpcode(opcode));
        }

        let handler = self.handlers.get(entry.instruction).ok_or_else(|| {
            log::debug!("unsupported instruction {} at 0x{:04X}", entry.mnemonic, self.pc);
            ExecutionError::UnsupportedInstruction(entry.mnemonic)
        })?;

        log::trace!(
            "{:04X}  {:02X}  {} {:?}",
            self.pc,
            opcode,
            entry.mnemonic,
            entry.addressing_mode
        );

        // Execute
        handler(self, &entry).inspect_err(|err| log::debug!("step failed: {}", err))?;

        self.remaining_cycles = entry.cycles.saturating_sub(1);
        self.cycles += 1;
        Ok(())
    }

    /// Runs to the next instruction boundary past one whole instruction.
    ///
    /// Burns any pending idle cycles, executes the next instruction, then
    /// burns that instruction's idle cycles. Returns the number of cycle
    /// units consumed.
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0000, 0xAD); // LDA $1234 (4 cycles)
    /// mem.write(0x0001, 0x34);
    /// mem.write(0x0002, 0x12);
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step_instruction(), Ok(4));
    /// assert_eq!(cpu.remaining_cycles(), 0);
    /// ```
    pub fn step_instruction(&mut self) -> Result<u32, ExecutionError> {
        let mut consumed = 0;
        while self.remaining_cycles > 0 {
            self.step()?;
            consumed += 1;
        }

        self.step()?;
        consumed += 1;

        while self.remaining_cycles > 0 {
            self.step()?;
            consumed += 1;
        }
        Ok(consumed)
    }

    /// Calls [`step`](Self::step) `cycle_budget` times, stopping at the first error.
    ///
    /// Returns the number of cycle units run, which equals the budget on success.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        for _ in 0..cycle_budget {
            self.step()?;
        }
        Ok(cycle_budget)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> Status {
        self.status
    }

    /// Idle cycle units left before the next fetch.
    pub fn remaining_cycles(&self) -> u8 {
        self.remaining_cycles
    }

    /// Returns the number of successful steps since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the opcode table this CPU decodes with.
    pub fn table(&self) -> &Arc<OpcodeTable> {
        &self.table
    }

    // ========== Status Flag Getters ==========

    pub fn flag_n(&self) -> bool {
        self.status.is_set(Status::NEGATIVE)
    }

    pub fn flag_v(&self) -> bool {
        self.status.is_set(Status::OVERFLOW)
    }

    pub fn flag_b(&self) -> bool {
        self.status.is_set(Status::BREAK)
    }

    pub fn flag_d(&self) -> bool {
        self.status.is_set(Status::DECIMAL)
    }

    pub fn flag_i(&self) -> bool {
        self.status.is_set(Status::INTERRUPT_DISABLE)
    }

    pub fn flag_z(&self) -> bool {
        self.status.is_set(Status::ZERO)
    }

    pub fn flag_c(&self) -> bool {
        self.status.is_set(Status::CARRY)
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter. Intended for instruction boundaries.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Replaces the whole status byte, unused bits included.
    pub fn set_status(&mut self, value: u8) {
        self.status = Status::from_bits_retain(value);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.status.set(Status::NEGATIVE, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.status.set(Status::OVERFLOW, value);
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.status.set(Status::BREAK, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.status.set(Status::DECIMAL, value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.status.set(Status::INTERRUPT_DISABLE, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.status.set(Status::ZERO, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.status.set(Status::CARRY, value);
    }

    // ========== Memory Access ==========

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlatMemory, Instruction};

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0x0FFC, 0x00);
        mem.write(0x0FFD, 0x80);
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.remaining_cycles(), 0);
    }

    #[test]
    fn test_idle_steps_do_not_touch_state() {
        let mut cpu = setup_cpu();
        // LDA $1234 (4 cycles), then LDA #$01
        cpu.memory_mut().load(0x8000, &[0xAD, 0x34, 0x12, 0xA9, 0x01]);
        cpu.memory_mut().write(0x1234, 0x55);

        cpu.step().unwrap();
        assert_eq!(cpu.a(), 0x55);
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.remaining_cycles(), 3);

        for expected in [2, 1, 0] {
            cpu.step().unwrap();
            assert_eq!(cpu.remaining_cycles(), expected);
            assert_eq!(cpu.a(), 0x55);
            assert_eq!(cpu.pc(), 0x8003);
        }

        cpu.step().unwrap();
        assert_eq!(cpu.a(), 0x01);
        assert_eq!(cpu.cycles(), 5);
    }

    #[test]
    fn test_unsupported_instruction_leaves_state() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x00); // BRK has no behavior
        cpu.set_a(0x12);

        assert_eq!(
            cpu.step(),
            Err(ExecutionError::UnsupportedInstruction("BRK"))
        );
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.a(), 0x12);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.remaining_cycles(), 0);
    }

    #[test]
    fn test_custom_table_decodes_only_its_rows() {
        let table = OpcodeTable::from_csv("0xEA,NOP,IMP,1,3").unwrap();
        let mut mem = FlatMemory::new();
        mem.load(0x0000, &[0xEA, 0xA9, 0x01]);

        let mut cpu = CPU::with_table(mem, Arc::new(table));
        assert_eq!(cpu.table().lookup(0xEA).instruction, Instruction::NOP);
        assert_eq!(cpu.step_instruction(), Ok(3));
        assert_eq!(cpu.step(), Err(ExecutionError::InvalidOpcode(0xA9)));
        assert_eq!(cpu.pc(), 0x0001);
    }

    #[test]
    fn test_run_for_cycles_stops_on_error() {
        let mut cpu = setup_cpu();
        // NOP, NOP, then an undefined byte
        cpu.memory_mut().load(0x8000, &[0xEA, 0xEA, 0xFF]);

        assert_eq!(cpu.run_for_cycles(4), Ok(4));
        assert_eq!(cpu.pc(), 0x8002);
        assert_eq!(cpu.run_for_cycles(4), Err(ExecutionError::InvalidOpcode(0xFF)));
        assert_eq!(cpu.cycles(), 4);
    }

    #[test]
    fn test_borrowed_bus() {
        let mut mem = FlatMemory::new();
        mem.load(0x0000, &[0xA9, 0x42, 0x85, 0x10]);
        {
            let mut cpu = CPU::new(&mut mem);
            cpu.step_instruction().unwrap();
            cpu.step_instruction().unwrap();
        }
        assert_eq!(mem.read(0x0010), 0x42);
    }
}
