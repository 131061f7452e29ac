//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ORA, AND, EOR: bitwise logic into the accumulator
//! - ADC, SBC: 8-bit add/subtract through a 16-bit intermediate
//! - CMP, CPX, CPY, BIT: decoded for length only, no effect
//!
//! ## Arithmetic
//!
//! ADC and SBC ignore the incoming carry and the decimal flag. The intermediate
//! is `acc + m` or `acc - m` computed on `u16` (so a borrow wraps to 0xFFxx),
//! and all four of sign, zero, overflow and carry are derived from it by
//! `Status::update_arithmetic`. Carry there means "the intermediate does not fit
//! in a signed byte", not the unsigned carry-out of a real 6502.
//!
//! ## Logical `$NNNN,Y` Forms
//!
//! `ORA $NNNN,Y`, `AND $NNNN,Y` and `EOR $NNNN,Y` update flags with the
//! arithmetic rule instead of the sign/zero rule used by their other forms.

use crate::{AddressingMode, Cpu, MemoryBus, OPCODE_TABLE};

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    logical(cpu, stream, opcode, |a, m| a | m);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    logical(cpu, stream, opcode, |a, m| a & m);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    logical(cpu, stream, opcode, |a, m| a ^ m);
}

fn logical<M, F>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8, op: F)
where
    M: MemoryBus,
    F: FnOnce(u8, u8) -> u8,
{
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.read_operand(metadata.addressing_mode, stream);
    let result = op(cpu.acc, value);

    if metadata.addressing_mode == AddressingMode::AbsoluteY {
        cpu.status.update_arithmetic(result as u16, cpu.acc, value);
    } else {
        cpu.status.update_zero_sign(result as u16);
    }

    cpu.acc = result;
}

/// Executes the ADC (Add) instruction.
///
/// Computes `acc + m` without the carry input.
///
/// # Flag Behavior
///
/// - Sign, Zero: from the low byte of the sum
/// - Overflow: operands share a sign and the result's sign differs
/// - Carry: the 16-bit sum is above 127
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.read_operand(metadata.addressing_mode, stream);
    let result = cpu.acc as u16 + value as u16;

    cpu.status.update_arithmetic(result, cpu.acc, value);
    cpu.acc = result as u8;
}

/// Executes the SBC (Subtract) instruction.
///
/// Computes `acc - m` without the borrow input.
///
/// # Flag Behavior
///
/// Same rule as ADC, applied to the wrapped 16-bit difference. Whenever
/// `m > acc` the difference is 0xFF01 or above, so carry is set.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.read_operand(metadata.addressing_mode, stream);
    let result = (cpu.acc as u16).wrapping_sub(value as u16);

    cpu.status.update_arithmetic(result, cpu.acc, value);
    cpu.acc = result as u8;
}

/// CMP, CPX, CPY and BIT: no register, flag or memory effect.
pub(crate) fn execute_compare<M: MemoryBus>(_cpu: &mut Cpu<M>, _stream: &[u8], _opcode: u8) {}
