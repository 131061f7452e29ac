//! # Control Flow Instructions
//!
//! BRK, the conditional branches (BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ),
//! JMP, JSR, RTS, RTI and NOP.
//!
//! The engine decodes these for their length only. Branches are never taken,
//! jumps never redirect, JSR/RTS never touch the stack, BRK does not push or
//! vector, and RTI restores nothing. Execution through this engine is linear.

use log::trace;

use crate::{Cpu, MemoryBus, OPCODE_TABLE};

/// Executes a control flow instruction: no state changes.
pub(crate) fn execute_control<M: MemoryBus>(cpu: &Cpu<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.mnemonic != "NOP" {
        trace!(
            "{:04X}  {} falls through without changing control flow",
            cpu.pc,
            metadata.mnemonic
        );
    }
}
