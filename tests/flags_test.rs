//! Tests for the flag instructions.
//!
//! Each of CLC, SEC, CLI, SEI, CLD, SED, CLV must change exactly one flag.

use lib6507::{Cpu, Status};

/// Helper function to create an initialized CPU
fn setup_cpu() -> Cpu {
    Cpu::new()
}

fn all_set() -> Status {
    Status {
        sign: true,
        overflow: true,
        breakpoint: true,
        decimal: true,
        interrupt: true,
        zero: true,
        carry: true,
    }
}

#[test]
fn test_clear_instructions_touch_one_flag() {
    let cases: [(u8, fn(&mut Status)); 4] = [
        (0x18, |s| s.carry = false),
        (0x58, |s| s.interrupt = false),
        (0xD8, |s| s.decimal = false),
        (0xB8, |s| s.overflow = false),
    ];

    for (opcode, expect) in cases {
        let mut cpu = setup_cpu();
        cpu.set_status(all_set());

        assert_eq!(cpu.execute(&[opcode]), 1);

        let mut expected = all_set();
        expect(&mut expected);
        assert_eq!(cpu.status(), expected, "opcode {:02X}", opcode);
    }
}

#[test]
fn test_set_instructions_touch_one_flag() {
    let cases: [(u8, fn(&mut Status)); 3] = [
        (0x38, |s| s.carry = true),
        (0x78, |s| s.interrupt = true),
        (0xF8, |s| s.decimal = true),
    ];

    for (opcode, expect) in cases {
        let mut cpu = setup_cpu();

        assert_eq!(cpu.execute(&[opcode]), 1);

        let mut expected = Status::default();
        expect(&mut expected);
        assert_eq!(cpu.status(), expected, "opcode {:02X}", opcode);
    }
}

#[test]
fn test_flag_instructions_leave_registers() {
    let mut cpu = setup_cpu();
    cpu.set_acc(0x12);
    cpu.set_x(0x34);
    cpu.set_y(0x56);

    for opcode in [0x18, 0x38, 0x58, 0x78, 0xB8, 0xD8, 0xF8] {
        cpu.execute(&[opcode]);
    }

    assert_eq!(cpu.acc(), 0x12);
    assert_eq!(cpu.x(), 0x34);
    assert_eq!(cpu.y(), 0x56);
    assert_eq!(cpu.sp(), 0x01FF);
}
