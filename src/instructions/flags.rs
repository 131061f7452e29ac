//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! Each one changes exactly one flag and nothing else.

use crate::{Cpu, MemoryBus};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.carry = false;
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.carry = true;
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.interrupt = false;
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.interrupt = true;
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.decimal = false;
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// Arithmetic stays binary regardless.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.decimal = true;
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.overflow = false;
}
