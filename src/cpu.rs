//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the processor state and
//! the decode/execute entry point.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (`acc`), index registers (`x`, `y`)
//! - **Program counter** (`pc`): 16-bit index into the instruction stream
//! - **Stack pointer** (`sp`): 16-bit address, starts at 0x01FF and grows downward
//! - **Status flags**: see [`Status`]
//! - **Memory**: 8 KiB data memory behind the [`MemoryBus`] trait
//!
//! ## Execution Model
//!
//! Code and data are separate. The program is an immutable byte slice indexed
//! by `pc`; memory holds the data the instructions load, store and push.
//!
//! - `execute()`: decode and execute one instruction, return its length. Does not
//!   touch `pc`.
//! - `step()`: `execute()` and advance `pc` by the returned length
//! - `run()` / `run_with()`: step until `pc` runs off the end of the program
//!
//! Branches, jumps, calls, returns and interrupts are decoded for their length
//! only. Execution is strictly linear.

use log::{debug, trace};

use crate::instructions::{alu, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::memory::STACK_START;
use crate::{ExecutionError, Memory, MemoryBus, OpcodeMetadata, Status, OPCODE_TABLE};

/// Largest program the 16-bit program counter can walk.
const MAX_PROGRAM_LEN: usize = 0x1_0000;

/// CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait; the default
/// is the 8 KiB [`Memory`].
///
/// # Examples
///
/// ```
/// use lib6507::Cpu;
///
/// let mut cpu = Cpu::new();
/// assert_eq!(cpu.sp(), 0x01FF);
///
/// // LDA #$05; LDA #$FF
/// let program = [0xA9, 0x05, 0xA9, 0xFF];
/// assert_eq!(cpu.step(&program), 2);
/// assert_eq!(cpu.step(&program), 2);
///
/// assert_eq!(cpu.acc(), 0xFF);
/// assert!(cpu.status().sign);
/// assert_eq!(cpu.pc(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Cpu<M: MemoryBus = Memory> {
    /// Accumulator register
    pub(crate) acc: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Status flags
    pub(crate) status: Status,

    /// Stack pointer (full address, not an offset into page 1)
    pub(crate) sp: u16,

    /// Program counter (index into the instruction stream)
    pub(crate) pc: u16,

    /// Data memory
    pub(crate) memory: M,
}

impl Cpu<Memory> {
    /// Creates an initialized CPU with zeroed 8 KiB memory.
    ///
    /// All registers, flags and the program counter are zero; the stack pointer
    /// is 0x01FF.
    pub fn new() -> Self {
        Self::with_memory(Memory::new())
    }
}

impl Default for Cpu<Memory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates an initialized CPU on top of the given memory.
    ///
    /// The memory is cleared, so the state is the same as `Cpu::new()`.
    pub fn with_memory(mut memory: M) -> Self {
        memory.clear();

        Self {
            acc: 0x00,
            x: 0x00,
            y: 0x00,
            status: Status::default(),
            sp: STACK_START,
            pc: 0x0000,
            memory,
        }
    }

    /// Returns the CPU to its initial state, clearing memory.
    pub fn reset(&mut self) {
        self.acc = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.status = Status::default();
        self.sp = STACK_START;
        self.pc = 0x0000;
        self.memory.clear();
    }

    /// Decodes and executes the instruction at `pc` in `stream`.
    ///
    /// Returns the instruction length in bytes (1, 2 or 3). The program counter
    /// is left alone; advancing it is the caller's job (see [`Cpu::step`]).
    ///
    /// Never fails. Opcodes the engine does not implement leave every register,
    /// flag and memory cell untouched and report a length of 1. Bytes past the
    /// end of `stream` read as 0x00.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6507::Cpu;
    ///
    /// let mut cpu = Cpu::new();
    ///
    /// // STA $1234
    /// cpu.set_acc(0x42);
    /// assert_eq!(cpu.execute(&[0x8D, 0x34, 0x12]), 3);
    /// assert_eq!(cpu.read_memory(0x1234), 0x42);
    ///
    /// // Undocumented opcode: no-op, 1 byte
    /// assert_eq!(cpu.execute(&[0x02]), 1);
    /// ```
    pub fn execute(&mut self, stream: &[u8]) -> u8 {
        let opcode = self.stream_byte(stream, 0);
        let metadata = &OPCODE_TABLE[opcode as usize];

        if !metadata.implemented {
            trace!(
                "{:04X}  {:02X}  {} not implemented, skipping 1 byte",
                self.pc,
                opcode,
                metadata.mnemonic
            );
            return 1;
        }

        trace!(
            "{:04X}  {:02X}  {} {:?} ({} bytes)",
            self.pc,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode,
            metadata.size_bytes
        );

        self.dispatch(metadata, stream, opcode);

        metadata.size_bytes
    }

    fn dispatch(&mut self, metadata: &OpcodeMetadata, stream: &[u8], opcode: u8) {
        match metadata.mnemonic {
            // Load/store
            "LDA" => load_store::execute_lda(self, stream, opcode),
            "LDX" => load_store::execute_ldx(self, stream, opcode),
            "LDY" => load_store::execute_ldy(self, stream, opcode),
            "STA" => load_store::execute_sta(self, stream, opcode),
            "STX" => load_store::execute_stx(self, stream, opcode),
            "STY" => load_store::execute_sty(self, stream, opcode),

            // Arithmetic and logic
            "ORA" => alu::execute_ora(self, stream, opcode),
            "AND" => alu::execute_and(self, stream, opcode),
            "EOR" => alu::execute_eor(self, stream, opcode),
            "ADC" => alu::execute_adc(self, stream, opcode),
            "SBC" => alu::execute_sbc(self, stream, opcode),
            "CMP" | "CPX" | "CPY" | "BIT" => alu::execute_compare(self, stream, opcode),

            // Shifts and rotates
            "ASL" => shifts::execute_asl(self, stream, opcode),
            "LSR" => shifts::execute_lsr(self, stream, opcode),
            "ROL" => shifts::execute_rol(self, stream, opcode),
            "ROR" => shifts::execute_ror(self, stream, opcode),

            // Increment/decrement
            "INC" => inc_dec::execute_inc(self, stream, opcode),
            "DEC" => inc_dec::execute_dec(self, stream, opcode),
            "INX" => inc_dec::execute_inx(self),
            "INY" => inc_dec::execute_iny(self),
            "DEX" => inc_dec::execute_dex(self),
            "DEY" => inc_dec::execute_dey(self),

            // Register transfers
            "TAX" => transfer::execute_tax(self),
            "TAY" => transfer::execute_tay(self),
            "TXA" => transfer::execute_txa(self),
            "TYA" => transfer::execute_tya(self),
            "TSX" => transfer::execute_tsx(self),
            "TXS" => transfer::execute_txs(self),

            // Stack
            "PHA" => stack::execute_pha(self),
            "PLA" => stack::execute_pla(self),
            "PHP" => stack::execute_php(self),
            "PLP" => stack::execute_plp(self),

            // Flags
            "CLC" => flags::execute_clc(self),
            "SEC" => flags::execute_sec(self),
            "CLI" => flags::execute_cli(self),
            "SEI" => flags::execute_sei(self),
            "CLD" => flags::execute_cld(self),
            "SED" => flags::execute_sed(self),
            "CLV" => flags::execute_clv(self),

            // Control flow, decoded for length only
            _ => control::execute_control(self, opcode),
        }
    }

    /// Executes one instruction and advances `pc` by its length.
    ///
    /// Returns the length.
    pub fn step(&mut self, stream: &[u8]) -> u8 {
        let len = self.execute(stream);
        self.pc = self.pc.wrapping_add(len as u16);
        len
    }

    /// Steps through `stream` from the current `pc` until `pc` reaches or passes
    /// the end of the stream.
    ///
    /// Returns the number of instructions executed.
    ///
    /// # Errors
    ///
    /// `ExecutionError::ProgramTooLarge` if `stream` is longer than the 16-bit
    /// program counter can address. Nothing is executed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6507::Cpu;
    ///
    /// let mut cpu = Cpu::new();
    ///
    /// // LDX #$03; DEX; DEX
    /// let count = cpu.run(&[0xA2, 0x03, 0xCA, 0xCA]).unwrap();
    ///
    /// assert_eq!(count, 3);
    /// assert_eq!(cpu.x(), 0x01);
    /// assert_eq!(cpu.pc(), 4);
    /// ```
    pub fn run(&mut self, stream: &[u8]) -> Result<usize, ExecutionError> {
        self.run_with(stream, |_, _| {})
    }

    /// Like [`Cpu::run`], calling `on_step` with the program counter and opcode
    /// metadata before each instruction executes.
    ///
    /// This is the hook for tracing or disassembly listings; the engine itself
    /// produces no output.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6507::Cpu;
    ///
    /// let mut cpu = Cpu::new();
    /// let mut listing = Vec::new();
    ///
    /// cpu.run_with(&[0xA9, 0x01, 0xAA], |pc, op| {
    ///     listing.push(format!("{:04X} {}", pc, op.mnemonic));
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(listing, ["0000 LDA", "0002 TAX"]);
    /// ```
    pub fn run_with<F>(&mut self, stream: &[u8], mut on_step: F) -> Result<usize, ExecutionError>
    where
        F: FnMut(u16, &OpcodeMetadata),
    {
        if stream.len() > MAX_PROGRAM_LEN {
            return Err(ExecutionError::ProgramTooLarge(stream.len()));
        }

        debug!("running {} byte program from {:04X}", stream.len(), self.pc);

        let mut count = 0;
        while (self.pc as usize) < stream.len() {
            let opcode = stream[self.pc as usize];
            on_step(self.pc, &OPCODE_TABLE[opcode as usize]);

            let len = self.execute(stream);
            count += 1;

            // Stepping past 0xFFFF would wrap pc back into a full-size program
            let next = self.pc as usize + len as usize;
            if next >= MAX_PROGRAM_LEN {
                self.pc = self.pc.wrapping_add(len as u16);
                break;
            }
            self.pc = next as u16;
        }

        debug!("executed {} instructions, pc = {:04X}", count, self.pc);

        Ok(count)
    }

    // ========== Stack Helpers ==========

    /// Writes `value` at `sp`, then decrements `sp`.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(self.sp, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments `sp`, then reads the byte at `sp`.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(self.sp)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn acc(&self) -> u8 {
        self.acc
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns a copy of the status flags.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the status flags for modification.
    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Returns the status flags packed the way `PHP` pushes them.
    pub fn packed_status(&self) -> u8 {
        self.status.to_byte()
    }

    /// Returns the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the memory bus for modification.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Reads a byte of data memory.
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte of data memory.
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    // ========== Register Setters ==========

    /// Sets the accumulator.
    pub fn set_acc(&mut self, value: u8) {
        self.acc = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    /// Replaces all status flags.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
