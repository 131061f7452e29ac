//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set the sign and zero flags from the loaded value. Stores affect no flags.

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus, OPCODE_TABLE};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero: Set if A = 0
/// - Sign: Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.read_operand(metadata.addressing_mode, stream);
    cpu.acc = value;
    cpu.status.update_zero_sign(value as u16);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.read_operand(metadata.addressing_mode, stream);
    cpu.x = value;
    cpu.status.update_zero_sign(value as u16);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA. Note that `LDY $NN,X` (0xB4) is listed as
/// `ZeroPageY` in the opcode table and so adds Y, not X, to the operand.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.read_operand(metadata.addressing_mode, stream);
    cpu.y = value;
    cpu.status.update_zero_sign(value as u16);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    let value = cpu.acc;
    store(cpu, stream, opcode, value);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    let value = cpu.x;
    store(cpu, stream, opcode, value);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    let value = cpu.y;
    store(cpu, stream, opcode, value);
}

fn store<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8, value: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if let Operand::Address(addr) = cpu.resolve_operand(metadata.addressing_mode, stream) {
        cpu.memory.write(addr, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cpu, MemoryBus};

    #[test]
    fn test_lda_immediate_sets_flags() {
        let mut cpu = Cpu::new();

        cpu.execute(&[0xA9, 0x00]);
        assert!(cpu.status().zero);
        assert!(!cpu.status().sign);

        cpu.execute(&[0xA9, 0x80]);
        assert!(!cpu.status().zero);
        assert!(cpu.status().sign);
    }

    #[test]
    fn test_ldy_zero_page_x_uses_y() {
        let mut cpu = Cpu::new();
        cpu.set_x(0x01);
        cpu.set_y(0x02);
        cpu.memory_mut().write(0x0011, 0xAA);
        cpu.memory_mut().write(0x0012, 0xBB);

        cpu.execute(&[0xB4, 0x10]);

        assert_eq!(cpu.y(), 0xBB);
    }

    #[test]
    fn test_store_leaves_flags() {
        let mut cpu = Cpu::new();
        cpu.set_x(0x00);
        cpu.status_mut().sign = true;

        cpu.execute(&[0x86, 0x80]);

        assert_eq!(cpu.read_memory(0x0080), 0x00);
        assert!(cpu.status().sign);
        assert!(!cpu.status().zero);
    }
}
