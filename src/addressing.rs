//! # Addressing Modes
//!
//! This module defines the addressing modes used by the opcode table and the
//! arithmetic that turns an instruction's operand bytes into a value or an
//! effective address.
//!
//! Operand bytes are read from the instruction stream at `pc + 1` and `pc + 2`.
//! Pointers for the indirect modes are read from data memory through the
//! `MemoryBus`.

use crate::{Cpu, MemoryBus};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address plus X.
    ///
    /// The sum is a 16-bit value and is not wrapped back into the zero page,
    /// so `$F0,X` with X = 0x20 addresses 0x0110.
    ZeroPageX,

    /// Zero page address plus Y, with the same 16-bit sum as `ZeroPageX`.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address, low byte first.
    ///
    /// Example: LDA $1234 is encoded `AD 34 12`
    Absolute,

    /// 16-bit address plus X (16-bit wraparound).
    AbsoluteX,

    /// 16-bit address plus Y (16-bit wraparound).
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: `(ZP + X) & 0xFF`, then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: dereference ZP, then add Y to the low byte and carry
    /// into the high byte.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

/// A resolved operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// Value taken straight from the instruction stream.
    Immediate(u8),
    /// The accumulator itself.
    Accumulator,
    /// A data memory address.
    Address(u16),
    /// No operand (implied, relative, indirect jump).
    Implied,
}

impl<M: MemoryBus> Cpu<M> {
    /// Reads the stream byte at `pc + offset`. Bytes past the end read as 0x00.
    #[inline]
    pub(crate) fn stream_byte(&self, stream: &[u8], offset: usize) -> u8 {
        stream
            .get(self.pc as usize + offset)
            .copied()
            .unwrap_or(0x00)
    }

    /// Assembles the little-endian 16-bit operand at `pc + 1`.
    #[inline]
    fn stream_word(&self, stream: &[u8]) -> u16 {
        u16::from_le_bytes([self.stream_byte(stream, 1), self.stream_byte(stream, 2)])
    }

    /// Resolves the operand for `mode` at the current program counter.
    pub(crate) fn resolve_operand(&self, mode: AddressingMode, stream: &[u8]) -> Operand {
        match mode {
            AddressingMode::Implicit | AddressingMode::Relative | AddressingMode::Indirect => {
                Operand::Implied
            }
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.stream_byte(stream, 1)),
            AddressingMode::ZeroPage => Operand::Address(self.stream_byte(stream, 1) as u16),
            AddressingMode::ZeroPageX => {
                Operand::Address(self.stream_byte(stream, 1) as u16 + self.x as u16)
            }
            AddressingMode::ZeroPageY => {
                Operand::Address(self.stream_byte(stream, 1) as u16 + self.y as u16)
            }
            AddressingMode::Absolute => Operand::Address(self.stream_word(stream)),
            AddressingMode::AbsoluteX => {
                Operand::Address(self.stream_word(stream).wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                Operand::Address(self.stream_word(stream).wrapping_add(self.y as u16))
            }
            AddressingMode::IndirectX => Operand::Address(self.indexed_indirect(stream)),
            AddressingMode::IndirectY => Operand::Address(self.indirect_indexed(stream)),
        }
    }

    /// Reads the value an instruction operates on.
    ///
    /// Implied operands read as 0; no instruction that reads a value uses them.
    pub(crate) fn read_operand(&self, mode: AddressingMode, stream: &[u8]) -> u8 {
        match self.resolve_operand(mode, stream) {
            Operand::Immediate(value) => value,
            Operand::Accumulator => self.acc,
            Operand::Address(addr) => self.memory.read(addr),
            Operand::Implied => 0x00,
        }
    }

    /// `(zp,X)`: the zero page index wraps at 256, the pointer's high byte is
    /// read from the following cell without wrapping.
    fn indexed_indirect(&self, stream: &[u8]) -> u16 {
        let base = self.stream_byte(stream, 1).wrapping_add(self.x) as u16;
        let low = self.memory.read(base);
        let high = self.memory.read(base + 1);
        u16::from_le_bytes([low, high])
    }

    /// `(zp),Y`: Y is added to the pointer's low byte and the carry out of that
    /// addition is added to the high byte (8-bit).
    fn indirect_indexed(&self, stream: &[u8]) -> u16 {
        let zp = self.stream_byte(stream, 1) as u16;
        let (low, carry) = self.memory.read(zp).overflowing_add(self.y);
        let high = self.memory.read(zp + 1).wrapping_add(carry as u8);
        u16::from_le_bytes([low, high])
    }
}
