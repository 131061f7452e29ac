//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode metadata table that serves as the
//! single source of truth for what the engine recognizes.
//!
//! The table covers:
//! - **150 implemented opcodes** - every documented NMOS 6502 opcode except `SBC $NN`
//! - **1 documented but unhandled opcode** - `SBC $NN` (0xE5)
//! - **105 illegal/undocumented opcodes** - marked with "???" mnemonic
//!
//! Anything with `implemented: false` is executed as a 1-byte no-op.
//!
//! A few entries deliberately differ from the hardware encoding, because they
//! record what the engine does rather than what a real 6502 does:
//!
//! - `JMP ($NNNN)` (0x6C) reports a length of 2
//! - `CPX $NN` (0xE4) reports a length of 3
//! - `LDY $NN,X` (0xB4) is indexed by Y

use crate::addressing::AddressingMode;

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use lib6507::{OPCODE_TABLE, AddressingMode};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(lda_imm.implemented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode the engine resolves for this opcode.
    pub addressing_mode: AddressingMode,

    /// Instruction length in bytes as reported by the engine (1-3).
    pub size_bytes: u8,

    /// Whether the engine recognizes this opcode.
    pub implemented: bool,
}

impl OpcodeMetadata {
    /// Returns true for the undocumented opcodes.
    pub fn is_illegal(&self) -> bool {
        self.mnemonic == ILLEGAL.mnemonic
    }
}

const fn op(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    size_bytes: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        size_bytes,
        implemented: true,
    }
}

const fn unhandled(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        size_bytes: 1,
        implemented: false,
    }
}

const ILLEGAL: OpcodeMetadata = unhandled("???", AddressingMode::Implicit);

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use lib6507::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.size_bytes, 1);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(!illegal.implemented);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op("BRK", AddressingMode::Implicit, 1),
    // 0x01
    op("ORA", AddressingMode::IndirectX, 2),
    // 0x02
    ILLEGAL,
    // 0x03
    ILLEGAL,
    // 0x04
    ILLEGAL,
    // 0x05
    op("ORA", AddressingMode::ZeroPage, 2),
    // 0x06
    op("ASL", AddressingMode::ZeroPage, 2),
    // 0x07
    ILLEGAL,
    // 0x08
    op("PHP", AddressingMode::Implicit, 1),
    // 0x09
    op("ORA", AddressingMode::Immediate, 2),
    // 0x0A
    op("ASL", AddressingMode::Accumulator, 1),
    // 0x0B
    ILLEGAL,
    // 0x0C
    ILLEGAL,
    // 0x0D
    op("ORA", AddressingMode::Absolute, 3),
    // 0x0E
    op("ASL", AddressingMode::Absolute, 3),
    // 0x0F
    ILLEGAL,
    // 0x10
    op("BPL", AddressingMode::Relative, 2),
    // 0x11
    op("ORA", AddressingMode::IndirectY, 2),
    // 0x12
    ILLEGAL,
    // 0x13
    ILLEGAL,
    // 0x14
    ILLEGAL,
    // 0x15
    op("ORA", AddressingMode::ZeroPageX, 2),
    // 0x16
    op("ASL", AddressingMode::ZeroPageX, 2),
    // 0x17
    ILLEGAL,
    // 0x18
    op("CLC", AddressingMode::Implicit, 1),
    // 0x19
    op("ORA", AddressingMode::AbsoluteY, 3),
    // 0x1A
    ILLEGAL,
    // 0x1B
    ILLEGAL,
    // 0x1C
    ILLEGAL,
    // 0x1D
    op("ORA", AddressingMode::AbsoluteX, 3),
    // 0x1E
    op("ASL", AddressingMode::AbsoluteX, 3),
    // 0x1F
    ILLEGAL,
    // 0x20
    op("JSR", AddressingMode::Absolute, 3),
    // 0x21
    op("AND", AddressingMode::IndirectX, 2),
    // 0x22
    ILLEGAL,
    // 0x23
    ILLEGAL,
    // 0x24
    op("BIT", AddressingMode::ZeroPage, 2),
    // 0x25
    op("AND", AddressingMode::ZeroPage, 2),
    // 0x26
    op("ROL", AddressingMode::ZeroPage, 2),
    // 0x27
    ILLEGAL,
    // 0x28
    op("PLP", AddressingMode::Implicit, 1),
    // 0x29
    op("AND", AddressingMode::Immediate, 2),
    // 0x2A
    op("ROL", AddressingMode::Accumulator, 1),
    // 0x2B
    ILLEGAL,
    // 0x2C
    op("BIT", AddressingMode::Absolute, 3),
    // 0x2D
    op("AND", AddressingMode::Absolute, 3),
    // 0x2E
    op("ROL", AddressingMode::Absolute, 3),
    // 0x2F
    ILLEGAL,
    // 0x30
    op("BMI", AddressingMode::Relative, 2),
    // 0x31
    op("AND", AddressingMode::IndirectY, 2),
    // 0x32
    ILLEGAL,
    // 0x33
    ILLEGAL,
    // 0x34
    ILLEGAL,
    // 0x35
    op("AND", AddressingMode::ZeroPageX, 2),
    // 0x36
    op("ROL", AddressingMode::ZeroPageX, 2),
    // 0x37
    ILLEGAL,
    // 0x38
    op("SEC", AddressingMode::Implicit, 1),
    // 0x39
    op("AND", AddressingMode::AbsoluteY, 3),
    // 0x3A
    ILLEGAL,
    // 0x3B
    ILLEGAL,
    // 0x3C
    ILLEGAL,
    // 0x3D
    op("AND", AddressingMode::AbsoluteX, 3),
    // 0x3E
    op("ROL", AddressingMode::AbsoluteX, 3),
    // 0x3F
    ILLEGAL,
    // 0x40
    op("RTI", AddressingMode::Implicit, 1),
    // 0x41
    op("EOR", AddressingMode::IndirectX, 2),
    // 0x42
    ILLEGAL,
    // 0x43
    ILLEGAL,
    // 0x44
    ILLEGAL,
    // 0x45
    op("EOR", AddressingMode::ZeroPage, 2),
    // 0x46
    op("LSR", AddressingMode::ZeroPage, 2),
    // 0x47
    ILLEGAL,
    // 0x48
    op("PHA", AddressingMode::Implicit, 1),
    // 0x49
    op("EOR", AddressingMode::Immediate, 2),
    // 0x4A
    op("LSR", AddressingMode::Accumulator, 1),
    // 0x4B
    ILLEGAL,
    // 0x4C
    op("JMP", AddressingMode::Absolute, 3),
    // 0x4D
    op("EOR", AddressingMode::Absolute, 3),
    // 0x4E
    op("LSR", AddressingMode::Absolute, 3),
    // 0x4F
    ILLEGAL,
    // 0x50
    op("BVC", AddressingMode::Relative, 2),
    // 0x51
    op("EOR", AddressingMode::IndirectY, 2),
    // 0x52
    ILLEGAL,
    // 0x53
    ILLEGAL,
    // 0x54
    ILLEGAL,
    // 0x55
    op("EOR", AddressingMode::ZeroPageX, 2),
    // 0x56
    op("LSR", AddressingMode::ZeroPageX, 2),
    // 0x57
    ILLEGAL,
    // 0x58
    op("CLI", AddressingMode::Implicit, 1),
    // 0x59
    op("EOR", AddressingMode::AbsoluteY, 3),
    // 0x5A
    ILLEGAL,
    // 0x5B
    ILLEGAL,
    // 0x5C
    ILLEGAL,
    // 0x5D
    op("EOR", AddressingMode::AbsoluteX, 3),
    // 0x5E
    op("LSR", AddressingMode::AbsoluteX, 3),
    // 0x5F
    ILLEGAL,
    // 0x60
    op("RTS", AddressingMode::Implicit, 1),
    // 0x61
    op("ADC", AddressingMode::IndirectX, 2),
    // 0x62
    ILLEGAL,
    // 0x63
    ILLEGAL,
    // 0x64
    ILLEGAL,
    // 0x65
    op("ADC", AddressingMode::ZeroPage, 2),
    // 0x66
    op("ROR", AddressingMode::ZeroPage, 2),
    // 0x67
    ILLEGAL,
    // 0x68
    op("PLA", AddressingMode::Implicit, 1),
    // 0x69
    op("ADC", AddressingMode::Immediate, 2),
    // 0x6A
    op("ROR", AddressingMode::Accumulator, 1),
    // 0x6B
    ILLEGAL,
    // 0x6C - reports 2 bytes
    op("JMP", AddressingMode::Indirect, 2),
    // 0x6D
    op("ADC", AddressingMode::Absolute, 3),
    // 0x6E
    op("ROR", AddressingMode::Absolute, 3),
    // 0x6F
    ILLEGAL,
    // 0x70
    op("BVS", AddressingMode::Relative, 2),
    // 0x71
    op("ADC", AddressingMode::IndirectY, 2),
    // 0x72
    ILLEGAL,
    // 0x73
    ILLEGAL,
    // 0x74
    ILLEGAL,
    // 0x75
    op("ADC", AddressingMode::ZeroPageX, 2),
    // 0x76
    op("ROR", AddressingMode::ZeroPageX, 2),
    // 0x77
    ILLEGAL,
    // 0x78
    op("SEI", AddressingMode::Implicit, 1),
    // 0x79
    op("ADC", AddressingMode::AbsoluteY, 3),
    // 0x7A
    ILLEGAL,
    // 0x7B
    ILLEGAL,
    // 0x7C
    ILLEGAL,
    // 0x7D
    op("ADC", AddressingMode::AbsoluteX, 3),
    // 0x7E
    op("ROR", AddressingMode::AbsoluteX, 3),
    // 0x7F
    ILLEGAL,
    // 0x80
    ILLEGAL,
    // 0x81
    op("STA", AddressingMode::IndirectX, 2),
    // 0x82
    ILLEGAL,
    // 0x83
    ILLEGAL,
    // 0x84
    op("STY", AddressingMode::ZeroPage, 2),
    // 0x85
    op("STA", AddressingMode::ZeroPage, 2),
    // 0x86
    op("STX", AddressingMode::ZeroPage, 2),
    // 0x87
    ILLEGAL,
    // 0x88
    op("DEY", AddressingMode::Implicit, 1),
    // 0x89
    ILLEGAL,
    // 0x8A
    op("TXA", AddressingMode::Implicit, 1),
    // 0x8B
    ILLEGAL,
    // 0x8C
    op("STY", AddressingMode::Absolute, 3),
    // 0x8D
    op("STA", AddressingMode::Absolute, 3),
    // 0x8E
    op("STX", AddressingMode::Absolute, 3),
    // 0x8F
    ILLEGAL,
    // 0x90
    op("BCC", AddressingMode::Relative, 2),
    // 0x91
    op("STA", AddressingMode::IndirectY, 2),
    // 0x92
    ILLEGAL,
    // 0x93
    ILLEGAL,
    // 0x94
    op("STY", AddressingMode::ZeroPageX, 2),
    // 0x95
    op("STA", AddressingMode::ZeroPageX, 2),
    // 0x96
    op("STX", AddressingMode::ZeroPageY, 2),
    // 0x97
    ILLEGAL,
    // 0x98
    op("TYA", AddressingMode::Implicit, 1),
    // 0x99
    op("STA", AddressingMode::AbsoluteY, 3),
    // 0x9A
    op("TXS", AddressingMode::Implicit, 1),
    // 0x9B
    ILLEGAL,
    // 0x9C
    ILLEGAL,
    // 0x9D
    op("STA", AddressingMode::AbsoluteX, 3),
    // 0x9E
    ILLEGAL,
    // 0x9F
    ILLEGAL,
    // 0xA0
    op("LDY", AddressingMode::Immediate, 2),
    // 0xA1
    op("LDA", AddressingMode::IndirectX, 2),
    // 0xA2
    op("LDX", AddressingMode::Immediate, 2),
    // 0xA3
    ILLEGAL,
    // 0xA4
    op("LDY", AddressingMode::ZeroPage, 2),
    // 0xA5
    op("LDA", AddressingMode::ZeroPage, 2),
    // 0xA6
    op("LDX", AddressingMode::ZeroPage, 2),
    // 0xA7
    ILLEGAL,
    // 0xA8
    op("TAY", AddressingMode::Implicit, 1),
    // 0xA9
    op("LDA", AddressingMode::Immediate, 2),
    // 0xAA
    op("TAX", AddressingMode::Implicit, 1),
    // 0xAB
    ILLEGAL,
    // 0xAC
    op("LDY", AddressingMode::Absolute, 3),
    // 0xAD
    op("LDA", AddressingMode::Absolute, 3),
    // 0xAE
    op("LDX", AddressingMode::Absolute, 3),
    // 0xAF
    ILLEGAL,
    // 0xB0
    op("BCS", AddressingMode::Relative, 2),
    // 0xB1
    op("LDA", AddressingMode::IndirectY, 2),
    // 0xB2
    ILLEGAL,
    // 0xB3
    ILLEGAL,
    // 0xB4 - indexed by Y
    op("LDY", AddressingMode::ZeroPageY, 2),
    // 0xB5
    op("LDA", AddressingMode::ZeroPageX, 2),
    // 0xB6
    op("LDX", AddressingMode::ZeroPageY, 2),
    // 0xB7
    ILLEGAL,
    // 0xB8
    op("CLV", AddressingMode::Implicit, 1),
    // 0xB9
    op("LDA", AddressingMode::AbsoluteY, 3),
    // 0xBA
    op("TSX", AddressingMode::Implicit, 1),
    // 0xBB
    ILLEGAL,
    // 0xBC
    op("LDY", AddressingMode::AbsoluteX, 3),
    // 0xBD
    op("LDA", AddressingMode::AbsoluteX, 3),
    // 0xBE
    op("LDX", AddressingMode::AbsoluteY, 3),
    // 0xBF
    ILLEGAL,
    // 0xC0
    op("CPY", AddressingMode::Immediate, 2),
    // 0xC1
    op("CMP", AddressingMode::IndirectX, 2),
    // 0xC2
    ILLEGAL,
    // 0xC3
    ILLEGAL,
    // 0xC4
    op("CPY", AddressingMode::ZeroPage, 2),
    // 0xC5
    op("CMP", AddressingMode::ZeroPage, 2),
    // 0xC6
    op("DEC", AddressingMode::ZeroPage, 2),
    // 0xC7
    ILLEGAL,
    // 0xC8
    op("INY", AddressingMode::Implicit, 1),
    // 0xC9
    op("CMP", AddressingMode::Immediate, 2),
    // 0xCA
    op("DEX", AddressingMode::Implicit, 1),
    // 0xCB
    ILLEGAL,
    // 0xCC
    op("CPY", AddressingMode::Absolute, 3),
    // 0xCD
    op("CMP", AddressingMode::Absolute, 3),
    // 0xCE
    op("DEC", AddressingMode::Absolute, 3),
    // 0xCF
    ILLEGAL,
    // 0xD0
    op("BNE", AddressingMode::Relative, 2),
    // 0xD1
    op("CMP", AddressingMode::IndirectY, 2),
    // 0xD2
    ILLEGAL,
    // 0xD3
    ILLEGAL,
    // 0xD4
    ILLEGAL,
    // 0xD5
    op("CMP", AddressingMode::ZeroPageX, 2),
    // 0xD6
    op("DEC", AddressingMode::ZeroPageX, 2),
    // 0xD7
    ILLEGAL,
    // 0xD8
    op("CLD", AddressingMode::Implicit, 1),
    // 0xD9
    op("CMP", AddressingMode::AbsoluteY, 3),
    // 0xDA
    ILLEGAL,
    // 0xDB
    ILLEGAL,
    // 0xDC
    ILLEGAL,
    // 0xDD
    op("CMP", AddressingMode::AbsoluteX, 3),
    // 0xDE - no write-back
    op("DEC", AddressingMode::AbsoluteX, 3),
    // 0xDF
    ILLEGAL,
    // 0xE0
    op("CPX", AddressingMode::Immediate, 2),
    // 0xE1
    op("SBC", AddressingMode::IndirectX, 2),
    // 0xE2
    ILLEGAL,
    // 0xE3
    ILLEGAL,
    // 0xE4 - reports 3 bytes
    op("CPX", AddressingMode::ZeroPage, 3),
    // 0xE5 - not handled by the engine
    unhandled("SBC", AddressingMode::ZeroPage),
    // 0xE6
    op("INC", AddressingMode::ZeroPage, 2),
    // 0xE7
    ILLEGAL,
    // 0xE8
    op("INX", AddressingMode::Implicit, 1),
    // 0xE9
    op("SBC", AddressingMode::Immediate, 2),
    // 0xEA
    op("NOP", AddressingMode::Implicit, 1),
    // 0xEB
    ILLEGAL,
    // 0xEC
    op("CPX", AddressingMode::Absolute, 3),
    // 0xED
    op("SBC", AddressingMode::Absolute, 3),
    // 0xEE
    op("INC", AddressingMode::Absolute, 3),
    // 0xEF
    ILLEGAL,
    // 0xF0
    op("BEQ", AddressingMode::Relative, 2),
    // 0xF1
    op("SBC", AddressingMode::IndirectY, 2),
    // 0xF2
    ILLEGAL,
    // 0xF3
    ILLEGAL,
    // 0xF4
    ILLEGAL,
    // 0xF5
    op("SBC", AddressingMode::ZeroPageX, 2),
    // 0xF6
    op("INC", AddressingMode::ZeroPageX, 2),
    // 0xF7
    ILLEGAL,
    // 0xF8
    op("SED", AddressingMode::Implicit, 1),
    // 0xF9
    op("SBC", AddressingMode::AbsoluteY, 3),
    // 0xFA
    ILLEGAL,
    // 0xFB
    ILLEGAL,
    // 0xFC
    ILLEGAL,
    // 0xFD
    op("SBC", AddressingMode::AbsoluteX, 3),
    // 0xFE
    op("INC", AddressingMode::AbsoluteX, 3),
    // 0xFF
    ILLEGAL,
];
