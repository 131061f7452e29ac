//! # 6507 Instruction Engine
//!
//! A decode/execute engine for a 6502-family CPU with an 8 KiB (13-bit) address
//! space, as found in the 6507.
//!
//! Given a byte stream of machine code and the CPU state, the engine interprets
//! the instruction at the program counter, mutates registers, flags and memory,
//! and reports how many bytes the instruction occupied.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib6507::Cpu;
//!
//! let mut cpu = Cpu::new();
//! assert_eq!(cpu.sp(), 0x01FF);
//!
//! // LDA #$05; LDA #$FF
//! let program = [0xA9, 0x05, 0xA9, 0xFF];
//! cpu.run(&program).unwrap();
//!
//! assert_eq!(cpu.acc(), 0xFF);
//! assert!(cpu.status().sign);
//! assert!(!cpu.status().zero);
//! assert_eq!(cpu.pc(), 4);
//! ```
//!
//! ## Architecture
//!
//! - **Separate code and data**: the program is an immutable slice indexed by
//!   the program counter; loads, stores and the stack go to data memory
//! - **Infallible decoding**: unknown opcodes are 1-byte no-ops
//! - **Table-Driven Design**: all opcode metadata in a single source of truth
//! - **Linear execution**: branches, jumps, calls, returns and interrupts are
//!   decoded for their length only
//! - **Memory abstraction**: data memory sits behind the `MemoryBus` trait
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait, 8 KiB memory and region constants
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing mode enumeration and operand resolution
//! - `status` - Status flags and their pack/unpack rules

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// WebAssembly bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::Cpu;
pub use memory::{Memory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
pub use status::Status;

/// Errors that can occur when running a program.
///
/// Decoding a single instruction never fails; only the run loop can reject its
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The program is longer than the 16-bit program counter can address.
    ///
    /// Contains the program length in bytes.
    ProgramTooLarge(usize),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::ProgramTooLarge(len) => {
                write!(
                    f,
                    "Program of {} bytes exceeds the 65536 byte program counter range",
                    len
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
