//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC: Increment Memory
//! - DEC: Decrement Memory
//! - INX, INY: Increment X/Y Register
//! - DEX, DEY: Decrement X/Y Register
//!
//! All of them wrap at 8 bits and update sign/zero only.

use crate::addressing::Operand;
use crate::{AddressingMode, Cpu, MemoryBus, OPCODE_TABLE};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if let Operand::Address(addr) = cpu.resolve_operand(metadata.addressing_mode, stream) {
        let result = cpu.memory.read(addr).wrapping_add(1);
        cpu.status.update_zero_sign(result as u16);
        cpu.memory.write(addr, result);
    }
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// `DEC $NNNN,X` (0xDE) sets the flags from the decremented value but never
/// writes it back; memory is unchanged.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if let Operand::Address(addr) = cpu.resolve_operand(metadata.addressing_mode, stream) {
        let result = cpu.memory.read(addr).wrapping_sub(1);
        cpu.status.update_zero_sign(result as u16);

        if metadata.addressing_mode != AddressingMode::AbsoluteX {
            cpu.memory.write(addr, result);
        }
    }
}

/// Executes the INX (Increment X) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.update_zero_sign(cpu.x as u16);
}

/// Executes the INY (Increment Y) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.update_zero_sign(cpu.y as u16);
}

/// Executes the DEX (Decrement X) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.update_zero_sign(cpu.x as u16);
}

/// Executes the DEY (Decrement Y) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.update_zero_sign(cpu.y as u16);
}
