//! # Instruction Implementations
//!
//! This module contains the implementations of all recognized instructions,
//! organized by category. Each instruction is a standalone function that takes
//! a mutable reference to the CPU and, where it has an operand, the instruction
//! stream and opcode byte. None of them touch the program counter.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR) plus the
//!   inert compare group (CMP, CPX, CPY, BIT)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (BRK, Bxx, JMP, JSR, RTS, RTI, NOP),
//!   decoded for length only
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
