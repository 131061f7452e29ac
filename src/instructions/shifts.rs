//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Every variant captures the outgoing bit into carry before shifting, writes the
//! result back to the accumulator or memory, and recomputes sign/zero.
//!
//! The rotates feed the carry they just captured back into the vacated bit, so
//! `ROL`/`ROR` behave as 8-bit circular rotates and the previous carry is lost.

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus, Status, OPCODE_TABLE};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    read_modify_write(cpu, stream, opcode, |status, value| {
        status.carry = value & 0x80 != 0;
        value << 1
    });
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry, bit 7 becomes 0, and the sign flag is cleared after the
/// sign/zero update.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    read_modify_write(cpu, stream, opcode, |status, value| {
        status.carry = value & 0x01 != 0;
        value >> 1
    });
    cpu.status.sign = false;
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Bit 7 goes to carry and, from there, into bit 0.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    read_modify_write(cpu, stream, opcode, |status, value| {
        status.carry = value & 0x80 != 0;
        (value << 1) | status.carry as u8
    });
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Bit 0 goes to carry and, from there, into bit 7.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8) {
    read_modify_write(cpu, stream, opcode, |status, value| {
        status.carry = value & 0x01 != 0;
        (value >> 1) | ((status.carry as u8) << 7)
    });
}

/// Applies `shift` to the accumulator or the addressed memory cell, writes the
/// result back and updates sign/zero from it.
fn read_modify_write<M, F>(cpu: &mut Cpu<M>, stream: &[u8], opcode: u8, shift: F)
where
    M: MemoryBus,
    F: FnOnce(&mut Status, u8) -> u8,
{
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = match cpu.resolve_operand(metadata.addressing_mode, stream) {
        Operand::Address(addr) => {
            let value = cpu.memory.read(addr);
            let result = shift(&mut cpu.status, value);
            cpu.memory.write(addr, result);
            result
        }
        _ => {
            let result = shift(&mut cpu.status, cpu.acc);
            cpu.acc = result;
            result
        }
    };

    cpu.status.update_zero_sign(result as u16);
}

#[cfg(test)]
mod tests {
    use crate::{Cpu, MemoryBus};

    #[test]
    fn test_asl_accumulator() {
        let mut cpu = Cpu::new();
        cpu.set_acc(0x81);

        assert_eq!(cpu.execute(&[0x0A]), 1);

        assert_eq!(cpu.acc(), 0x02);
        assert!(cpu.status().carry);
        assert!(!cpu.status().sign);
    }

    #[test]
    fn test_lsr_clears_sign() {
        let mut cpu = Cpu::new();
        cpu.set_acc(0x01);
        cpu.status_mut().sign = true;

        cpu.execute(&[0x4A]);

        assert_eq!(cpu.acc(), 0x00);
        assert!(cpu.status().carry);
        assert!(cpu.status().zero);
        assert!(!cpu.status().sign);
    }

    #[test]
    fn test_rol_rotates_bit_7_into_bit_0() {
        let mut cpu = Cpu::new();
        cpu.memory_mut().write(0x0080, 0x80);

        cpu.execute(&[0x26, 0x80]);

        assert_eq!(cpu.read_memory(0x0080), 0x01);
        assert!(cpu.status().carry);
        assert!(!cpu.status().zero);
    }

    #[test]
    fn test_rol_ignores_previous_carry() {
        let mut cpu = Cpu::new();
        cpu.set_acc(0x01);
        cpu.status_mut().carry = true;

        cpu.execute(&[0x2A]);

        assert_eq!(cpu.acc(), 0x02);
        assert!(!cpu.status().carry);
    }

    #[test]
    fn test_ror_rotates_bit_0_into_bit_7() {
        let mut cpu = Cpu::new();
        cpu.set_acc(0x01);

        cpu.execute(&[0x6A]);

        assert_eq!(cpu.acc(), 0x80);
        assert!(cpu.status().carry);
        assert!(cpu.status().sign);
    }
}
