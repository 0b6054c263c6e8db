//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection
//! and memory access over a flat 64KB address space.

use crate::{ExecutionError, FlatMemory, MemoryBus, CPU, RESET_VECTOR};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Browser-facing 6502 emulator over flat memory.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator with zeroed memory (PC starts at 0x0000)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new()),
            program_start: 0x0000,
            program_end: 0x0000,
        }
    }

    /// Advance one cycle unit
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step().map_err(JsError::from)
    }

    /// Execute one whole instruction and return the cycles it consumed
    pub fn step_instruction(&mut self) -> Result<u32, JsError> {
        self.cpu.step_instruction().map_err(JsError::from)
    }

    /// Run a number of cycle units and return how many ran
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for_cycles(cycles as u64)
            .map(|c| c as u32)
            .map_err(JsError::from)
    }

    /// Rebuild the CPU on the current memory, re-reading the reset vector
    pub fn reset(&mut self) {
        let memory = std::mem::take(self.cpu.memory_mut());
        self.cpu = CPU::with_table(memory, self.cpu.table().clone());
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn remaining_cycles(&self) -> u8 {
        self.cpu.remaining_cycles()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as u16) << 8;
        let bytes: Vec<u8> = (0..256).map(|i| self.cpu.memory().read(start + i)).collect();
        js_sys::Uint8Array::from(bytes.as_slice())
    }

    /// Load a program, point the reset vector at it and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        let memory = self.cpu.memory_mut();
        memory.load(start_addr, program);
        memory.write(RESET_VECTOR, start_addr as u8);
        memory.write(RESET_VECTOR.wrapping_add(1), (start_addr >> 8) as u8);

        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u16);
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
