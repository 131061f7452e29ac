//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from its
//! memory implementation, plus the 8 KiB `Memory` address space used by default.
//!
//! ## Design Principles
//!
//! - No bus errors - reads/writes always succeed
//! - Addresses are 16-bit; the implementation decides how to fold them into its
//!   storage
//! - Simple signatures for WASM compatibility
//!
//! ## Address Space
//!
//! The 6507 only brings 13 address lines out of the package, so every 16-bit
//! address the engine computes is folded into 8 KiB by `Memory`
//! (`addr & 0x1FFF`). An out-of-range address therefore mirrors instead of
//! faulting.
//!
//! The region constants below describe the intended layout of that space. The
//! engine never enforces or special-cases them.

/// Size of the addressable memory in bytes.
pub const MEMORY_SIZE: usize = 8 * 1024;

/// Mask applied to every address before it reaches the backing array.
pub const ADDRESS_MASK: u16 = (MEMORY_SIZE - 1) as u16;

/// Start of the video RAM window.
pub const VRAM_START: u16 = 0x00;
/// End of the video RAM window (inclusive).
pub const VRAM_END: u16 = 0x7F;

/// Start of general purpose RAM.
pub const RAM_START: u16 = 0x80;
/// End of general purpose RAM (inclusive).
pub const RAM_END: u16 = 0xFF;

/// Top of the stack. The stack pointer starts here and grows downward.
pub const STACK_START: u16 = 0x01FF;
/// Bottom of the stack page.
pub const STACK_END: u16 = 0x0100;

/// Start of the RIOT (RAM/IO/timer) register window.
pub const RIOT_START: u16 = 0x200;
/// End of the RIOT register window (inclusive).
pub const RIOT_END: u16 = 0x2FF;

/// Start of cartridge ROM.
pub const ROM_START: u16 = 0x1000;
/// End of cartridge ROM (inclusive).
pub const ROM_END: u16 = 0x1FFF;

/// Memory bus trait for CPU to read/write bytes.
///
/// The engine routes every data access (operands, pointers, stack) through this
/// trait. The instruction stream is separate and never goes through the bus.
///
/// # Examples
///
/// ```
/// use lib6507::{MemoryBus, Memory};
///
/// let mut mem = Memory::new();
/// mem.write(0x0080, 0x42);
/// assert_eq!(mem.read(0x0080), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use lib6507::MemoryBus;
///
/// struct RecordingMemory {
///     data: [u8; 256],
///     writes: Vec<(u16, u8)>,
/// }
///
/// impl MemoryBus for RecordingMemory {
///     fn read(&self, addr: u16) -> u8 {
///         self.data[(addr & 0xFF) as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.writes.push((addr, value));
///         self.data[(addr & 0xFF) as usize] = value;
///     }
///
///     fn clear(&mut self) {
///         self.data = [0; 256];
///         self.writes.clear();
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. Implementations fold addresses that fall
    /// outside their storage back into range.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic.
    fn write(&mut self, addr: u16, value: u8);

    /// Zeroes every byte. Called by `Cpu::reset`.
    fn clear(&mut self);
}

/// Flat 8 KiB memory with 13-bit address mirroring.
///
/// # Examples
///
/// ```
/// use lib6507::{Memory, MemoryBus};
///
/// let mut mem = Memory::new();
/// mem.write(0x1FFF, 0xAB);
///
/// // 0x3FFF and 0x1FFF are the same cell once the top bits are dropped
/// assert_eq!(mem.read(0x3FFF), 0xAB);
/// ```
#[derive(Clone)]
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Creates a new memory with all bytes set to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Returns the backing bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    #[inline]
    fn index(addr: u16) -> usize {
        (addr & ADDRESS_MASK) as usize
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("non_zero_bytes", &used)
            .finish()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> u8 {
        self.data[Self::index(addr)]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[Self::index(addr)] = value;
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_read_write() {
        let mut mem = Memory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0x1FFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours untouched
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_memory_mirrors_above_8k() {
        let mut mem = Memory::new();

        mem.write(0x2000, 0x11);
        assert_eq!(mem.read(0x0000), 0x11);

        mem.write(0xFFFF, 0x22);
        assert_eq!(mem.read(0x1FFF), 0x22);
        assert_eq!(mem.read(0x7FFF), 0x22);
    }

    #[test]
    fn test_memory_clear() {
        let mut mem = Memory::new();
        mem.write(RAM_START, 0x01);
        mem.write(ROM_END, 0x02);

        mem.clear();

        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_region_constants_fit_address_space() {
        for addr in [VRAM_END, RAM_END, STACK_START, RIOT_END, ROM_END] {
            assert!((addr as usize) < MEMORY_SIZE);
        }
        assert_eq!(ADDRESS_MASK, 0x1FFF);
    }
}
