//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The stack pointer holds a full 16-bit address, starting at 0x01FF. A push
//! writes at `sp` and then decrements; a pull increments and then reads. The
//! pointer is not confined to page 1: it wraps as a 16-bit value and the memory
//! bus folds the address into range.

use crate::{Cpu, MemoryBus, Status};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: None
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.acc;
    cpu.push(value);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags affected: None
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.acc = cpu.pull();
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes `Status::to_byte()`; bit 5 is 0.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.status.to_byte();
    cpu.push(status);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Unpacks with `Status::from_stack_byte`, which swaps sign and overflow
/// relative to PHP.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let byte = cpu.pull();
    cpu.status = Status::from_stack_byte(byte);
}
