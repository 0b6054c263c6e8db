//! # Memory Bus Abstraction
//!
//! The core has no memory map of its own. It talks to whatever implements
//! [`MemoryBus`], and [`FlatMemory`] is the plain 64 KiB RAM used by tests and
//! the wasm wrapper.
//!
//! There are no bus errors: every 16-bit address can be read and written,
//! and any side effect beyond the addressed byte belongs to the implementation.
//!
//! A CPU can own its bus (`CPU<FlatMemory>`) or drive a borrowed one
//! (`CPU<&mut FlatMemory>`) through the blanket implementation for `&mut B`.

/// The CPU's view of the 16-bit address space.
///
/// Every opcode fetch, operand read, pointer fetch and store the core makes
/// goes through one of these two methods. Accesses cannot fail.
///
/// ```
/// use cpu6502::{MemoryBus, CPU};
///
/// /// 2KB of RAM mirrored across the whole address space.
/// struct MirroredRam([u8; 0x800]);
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         self.0[(addr & 0x07FF) as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.0[(addr & 0x07FF) as usize] = value;
///     }
/// }
///
/// let mut ram = MirroredRam([0; 0x800]);
/// ram.write(0x07FC, 0x00); // mirrors onto the reset vector at 0x0FFC
/// ram.write(0x07FD, 0x03);
///
/// let cpu = CPU::new(ram);
/// assert_eq!(cpu.pc(), 0x0300);
/// ```
pub trait MemoryBus {
    /// Returns the byte at `addr`. Unmapped addresses return whatever the
    /// implementation chooses; this must not panic.
    fn read(&self, addr: u16) -> u8;

    /// Stores `value` at `addr`. Read-only or unmapped locations may drop it.
    fn write(&mut self, addr: u16, value: u8);
}

impl<B: MemoryBus + ?Sized> MemoryBus for &mut B {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

impl<B: MemoryBus + ?Sized> MemoryBus for Box<B> {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

/// 64 KiB of zero-initialized RAM covering every address.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0FFC, 0x00); // Reset vector low byte
/// memory.write(0x0FFD, 0x80); // Reset vector high byte (PC = 0x8000)
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    bytes: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Returns zeroed memory.
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; 0x10000]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping at 0xFFFF.
    ///
    /// ```
    /// use cpu6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFF, &[0x11, 0x22]);
    /// assert_eq!(mem.read(0xFFFF), 0x11);
    /// assert_eq!(mem.read(0x0000), 0x22);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            let addr = start.wrapping_add(offset as u16);
            self.bytes[addr as usize] = byte;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}
