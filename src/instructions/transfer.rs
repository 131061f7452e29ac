//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies:
//! - TAX, TAY, TXA, TYA: update sign/zero from the destination
//! - TSX, TXS: no flag effect
//!
//! The stack pointer is 16 bits wide. TSX copies its low byte; TXS replaces the
//! whole pointer with X, clearing the high byte.

use crate::{Cpu, MemoryBus};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.acc;
    cpu.status.update_zero_sign(cpu.x as u16);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.acc;
    cpu.status.update_zero_sign(cpu.y as u16);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.acc = cpu.x;
    cpu.status.update_zero_sign(cpu.acc as u16);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.acc = cpu.y;
    cpu.status.update_zero_sign(cpu.acc as u16);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = (cpu.sp & 0xFF) as u8;
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.sp = cpu.x as u16;
}
