//! Tests for the instructions that decode without effect.
//!
//! Tests cover:
//! - Branches, jumps, calls, returns, BRK and RTI leaving every register,
//!   flag and memory byte unchanged
//! - Their reported lengths
//! - CMP, CPX, CPY and BIT being inert
//! - NOP

use lib6507::{Cpu, MemoryBus, Status};

/// Helper function to create a CPU with every register and flag non-default
fn setup_cpu() -> Cpu {
    let mut cpu = Cpu::new();
    cpu.set_acc(0x12);
    cpu.set_x(0x34);
    cpu.set_y(0x56);
    cpu.set_sp(0x01F0);
    cpu.set_status(Status {
        sign: true,
        overflow: false,
        breakpoint: false,
        decimal: true,
        interrupt: false,
        zero: true,
        carry: true,
    });
    cpu.memory_mut().write(0x0080, 0x80);
    cpu
}

fn assert_unchanged(cpu: &Cpu, opcode: u8) {
    let reference = setup_cpu();

    assert_eq!(cpu.acc(), reference.acc(), "acc after {:02X}", opcode);
    assert_eq!(cpu.x(), reference.x(), "x after {:02X}", opcode);
    assert_eq!(cpu.y(), reference.y(), "y after {:02X}", opcode);
    assert_eq!(cpu.sp(), reference.sp(), "sp after {:02X}", opcode);
    assert_eq!(cpu.pc(), reference.pc(), "pc after {:02X}", opcode);
    assert_eq!(cpu.status(), reference.status(), "status after {:02X}", opcode);
    assert_eq!(
        cpu.memory().as_slice(),
        reference.memory().as_slice(),
        "memory after {:02X}",
        opcode
    );
}

// ========== Control Flow ==========

#[test]
fn test_branches_never_taken() {
    for opcode in [0x10, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
        let mut cpu = setup_cpu();

        assert_eq!(cpu.execute(&[opcode, 0xFE]), 2, "length of {:02X}", opcode);

        assert_unchanged(&cpu, opcode);
    }
}

#[test]
fn test_jmp_absolute_does_not_redirect() {
    let mut cpu = setup_cpu();

    assert_eq!(cpu.execute(&[0x4C, 0x00, 0x10]), 3);

    assert_unchanged(&cpu, 0x4C);
}

#[test]
fn test_jmp_indirect_reports_two_bytes() {
    let mut cpu = setup_cpu();

    assert_eq!(cpu.execute(&[0x6C, 0x00, 0x10]), 2);

    assert_unchanged(&cpu, 0x6C);
}

#[test]
fn test_jsr_rts_leave_stack_alone() {
    let mut cpu = setup_cpu();

    assert_eq!(cpu.execute(&[0x20, 0x00, 0x10]), 3);
    assert_unchanged(&cpu, 0x20);

    assert_eq!(cpu.execute(&[0x60]), 1);
    assert_unchanged(&cpu, 0x60);
}

#[test]
fn test_brk_rti_are_inert() {
    let mut cpu = setup_cpu();

    assert_eq!(cpu.execute(&[0x00]), 1);
    assert_unchanged(&cpu, 0x00);

    assert_eq!(cpu.execute(&[0x40]), 1);
    assert_unchanged(&cpu, 0x40);
}

#[test]
fn test_nop() {
    let mut cpu = setup_cpu();

    assert_eq!(cpu.execute(&[0xEA]), 1);

    assert_unchanged(&cpu, 0xEA);
}

// ========== Comparisons ==========

#[test]
fn test_compare_family_is_inert() {
    let cases: [(&[u8], u8); 14] = [
        (&[0xC9, 0x12], 2),
        (&[0xC5, 0x80], 2),
        (&[0xD5, 0x00], 2),
        (&[0xCD, 0x80, 0x00], 3),
        (&[0xDD, 0x00, 0x00], 3),
        (&[0xD9, 0x00, 0x00], 3),
        (&[0xC1, 0x00], 2),
        (&[0xD1, 0x00], 2),
        (&[0xE0, 0x34], 2),
        (&[0xE4, 0x80], 3),
        (&[0xEC, 0x80, 0x00], 3),
        (&[0xC0, 0x56], 2),
        (&[0xC4, 0x80], 2),
        (&[0xCC, 0x80, 0x00], 3),
    ];

    for (stream, len) in cases {
        let mut cpu = setup_cpu();

        assert_eq!(cpu.execute(stream), len, "length of {:02X}", stream[0]);

        assert_unchanged(&cpu, stream[0]);
    }
}

#[test]
fn test_bit_is_inert() {
    let mut cpu = setup_cpu();

    assert_eq!(cpu.execute(&[0x24, 0x80]), 2);
    assert_unchanged(&cpu, 0x24);

    assert_eq!(cpu.execute(&[0x2C, 0x80, 0x00]), 3);
    assert_unchanged(&cpu, 0x2C);
}
