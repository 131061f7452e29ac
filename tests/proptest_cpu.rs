//! Property-based tests for the instruction engine.
//!
//! These tests check the invariants every instruction must keep over random
//! register, flag and operand values: reported lengths, the program counter
//! staying put, unknown opcodes being no-ops, and the flag rules of the loads,
//! shifts and arithmetic.

use lib6507::{Cpu, Status, OPCODE_TABLE};
use proptest::prelude::*;

/// Helper function to create a CPU from arbitrary register values
fn setup_cpu(acc: u8, x: u8, y: u8, status_byte: u8) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.set_acc(acc);
    cpu.set_x(x);
    cpu.set_y(y);
    cpu.set_status(Status::from_stack_byte(status_byte));
    cpu
}

// ========== Decoding ==========

proptest! {
    /// Property: execute reports the table length and never moves pc
    #[test]
    fn prop_length_matches_table(
        opcode in 0u8..=255u8,
        operand1 in 0u8..=255u8,
        operand2 in 0u8..=255u8,
        acc in 0u8..=255u8,
        x in 0u8..=255u8,
        y in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu(acc, x, y, 0);

        let len = cpu.execute(&[opcode, operand1, operand2]);

        prop_assert_eq!(len, OPCODE_TABLE[opcode as usize].size_bytes);
        prop_assert!((1..=3).contains(&len));
        prop_assert_eq!(cpu.pc(), 0);
    }

    /// Property: unimplemented opcodes change nothing
    #[test]
    fn prop_unimplemented_opcodes_are_noops(
        index in 0usize..106,
        operand in 0u8..=255u8,
        acc in 0u8..=255u8,
        x in 0u8..=255u8,
        y in 0u8..=255u8,
        status_byte in 0u8..=255u8,
    ) {
        let unimplemented: Vec<u8> = (0..=255u8)
            .filter(|&op| !OPCODE_TABLE[op as usize].implemented)
            .collect();
        prop_assume!(index < unimplemented.len());
        let opcode = unimplemented[index];

        let mut cpu = setup_cpu(acc, x, y, status_byte);
        let before = cpu.clone();

        prop_assert_eq!(cpu.execute(&[opcode, operand, operand]), 1);

        prop_assert_eq!(cpu.acc(), before.acc());
        prop_assert_eq!(cpu.x(), before.x());
        prop_assert_eq!(cpu.y(), before.y());
        prop_assert_eq!(cpu.sp(), before.sp());
        prop_assert_eq!(cpu.status(), before.status());
        prop_assert_eq!(cpu.memory().as_slice(), before.memory().as_slice());
    }
}

// ========== Loads ==========

proptest! {
    /// Property: immediate loads set sign and zero from the loaded value
    #[test]
    fn prop_immediate_load_flags(
        opcode in prop::sample::select(vec![0xA9u8, 0xA2, 0xA0]),
        value in 0u8..=255u8,
        status_byte in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu(0x00, 0x00, 0x00, status_byte);
        let before = cpu.status();

        cpu.execute(&[opcode, value]);

        let loaded = match opcode {
            0xA9 => cpu.acc(),
            0xA2 => cpu.x(),
            _ => cpu.y(),
        };
        prop_assert_eq!(loaded, value);
        prop_assert_eq!(cpu.status().zero, value == 0);
        prop_assert_eq!(cpu.status().sign, value & 0x80 != 0);
        prop_assert_eq!(cpu.status().carry, before.carry);
        prop_assert_eq!(cpu.status().overflow, before.overflow);
    }

    /// Property: store then load through the same address returns the value
    #[test]
    fn prop_store_load_absolute(addr in 0u16..=0xFFFF, value in 0u8..=255u8) {
        let mut cpu = setup_cpu(value, 0x00, 0x00, 0);
        let [low, high] = addr.to_le_bytes();

        cpu.execute(&[0x8D, low, high]);
        cpu.set_acc(!value);
        cpu.execute(&[0xAD, low, high]);

        prop_assert_eq!(cpu.acc(), value);
        prop_assert_eq!(cpu.read_memory(addr & 0x1FFF), value);
    }
}

// ========== Shifts ==========

proptest! {
    /// Property: ASL/LSR carry out the bit they shift off
    #[test]
    fn prop_shift_carry_out(value in 0u8..=255u8, status_byte in 0u8..=255u8) {
        let mut cpu = setup_cpu(value, 0x00, 0x00, status_byte);
        cpu.execute(&[0x0A]);
        prop_assert_eq!(cpu.acc(), value << 1);
        prop_assert_eq!(cpu.status().carry, value & 0x80 != 0);

        let mut cpu = setup_cpu(value, 0x00, 0x00, status_byte);
        cpu.execute(&[0x4A]);
        prop_assert_eq!(cpu.acc(), value >> 1);
        prop_assert_eq!(cpu.status().carry, value & 0x01 != 0);
        prop_assert!(!cpu.status().sign);
    }

    /// Property: ROL/ROR are 8-bit rotates regardless of the incoming carry
    #[test]
    fn prop_rotates_are_circular(value in 0u8..=255u8, carry in any::<bool>()) {
        let mut cpu = setup_cpu(value, 0x00, 0x00, 0);
        cpu.status_mut().carry = carry;
        cpu.execute(&[0x2A]);
        prop_assert_eq!(cpu.acc(), value.rotate_left(1));

        let mut cpu = setup_cpu(value, 0x00, 0x00, 0);
        cpu.status_mut().carry = carry;
        cpu.execute(&[0x6A]);
        prop_assert_eq!(cpu.acc(), value.rotate_right(1));
    }
}

// ========== Arithmetic ==========

proptest! {
    /// Property: ADC adds without carry-in and sets carry above 127
    #[test]
    fn prop_adc(acc in 0u8..=255u8, operand in 0u8..=255u8, carry in any::<bool>()) {
        let mut cpu = setup_cpu(acc, 0x00, 0x00, 0);
        cpu.status_mut().carry = carry;

        cpu.execute(&[0x69, operand]);

        let wide = acc as u16 + operand as u16;
        prop_assert_eq!(cpu.acc(), wide as u8);
        prop_assert_eq!(cpu.status().carry, wide > 0x7F);
        prop_assert_eq!(cpu.status().zero, wide as u8 == 0);

        let same_sign = (acc ^ operand) & 0x80 == 0;
        let sign_changed = (acc ^ wide as u8) & 0x80 != 0;
        prop_assert_eq!(cpu.status().overflow, same_sign && sign_changed);
    }

    /// Property: SBC subtracts without borrow-in and sets carry on a borrow
    #[test]
    fn prop_sbc(acc in 0u8..=255u8, operand in 0u8..=255u8, carry in any::<bool>()) {
        let mut cpu = setup_cpu(acc, 0x00, 0x00, 0);
        cpu.status_mut().carry = carry;

        cpu.execute(&[0xE9, operand]);

        prop_assert_eq!(cpu.acc(), acc.wrapping_sub(operand));
        if operand > acc {
            prop_assert!(cpu.status().carry);
        }
        prop_assert_eq!(cpu.status().sign, acc.wrapping_sub(operand) & 0x80 != 0);
    }
}

// ========== Stack ==========

proptest! {
    /// Property: PHA then PLA restores the accumulator and stack pointer
    #[test]
    fn prop_push_pull_roundtrip(value in 0u8..=255u8, sp in 0u16..=0xFFFF) {
        let mut cpu = setup_cpu(value, 0x00, 0x00, 0);
        cpu.set_sp(sp);

        cpu.execute(&[0x48]);
        cpu.set_acc(!value);
        cpu.execute(&[0x68]);

        prop_assert_eq!(cpu.acc(), value);
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: PHP then PLP keeps every flag except sign and overflow,
    /// which trade places
    #[test]
    fn prop_php_plp_swaps(status_byte in 0u8..=255u8) {
        let mut cpu = setup_cpu(0x00, 0x00, 0x00, status_byte);
        let before = cpu.status();

        cpu.execute(&[0x08]);
        cpu.execute(&[0x28]);

        let after = cpu.status();
        prop_assert_eq!(after.sign, before.overflow);
        prop_assert_eq!(after.overflow, before.sign);
        prop_assert_eq!(after.breakpoint, before.breakpoint);
        prop_assert_eq!(after.decimal, before.decimal);
        prop_assert_eq!(after.interrupt, before.interrupt);
        prop_assert_eq!(after.zero, before.zero);
        prop_assert_eq!(after.carry, before.carry);
    }
}
