//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary CPU state and data memory, then executes one instruction
//! from an arbitrary (possibly truncated) stream. The engine must never panic
//! and must always report a length of 1 to 3 bytes.

#![no_main]

use arbitrary::Arbitrary;
use lib6507::{Cpu, MemoryBus, Status, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    acc: u8,
    x: u8,
    y: u8,
    /// Full 16-bit stack pointer, deliberately not confined to page 1
    sp: u16,
    pc: u16,
    status_byte: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    stream: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = Cpu::new();

    for (i, &byte) in input.zero_page.iter().enumerate() {
        cpu.memory_mut().write(i as u16, byte);
    }
    for (i, &byte) in input.stack_page.iter().enumerate() {
        cpu.memory_mut().write(0x0100 + i as u16, byte);
    }

    cpu.set_acc(input.cpu_state.acc);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_status(Status::from_stack_byte(input.cpu_state.status_byte));

    let opcode = input
        .stream
        .get(input.cpu_state.pc as usize)
        .copied()
        .unwrap_or(0x00);

    let len = cpu.execute(&input.stream);

    assert!((1..=3).contains(&len));
    assert_eq!(len, OPCODE_TABLE[opcode as usize].size_bytes);
    assert_eq!(cpu.pc(), input.cpu_state.pc);
});
