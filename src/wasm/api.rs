//! WASM API for the 6507 engine.
//!
//! Provides JavaScript-callable interfaces for program loading, stepping and
//! state inspection.

use crate::{Cpu, MemoryBus};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6507 {
    cpu: Cpu,
    program: Vec<u8>,
}

#[wasm_bindgen]
impl Emulator6507 {
    /// Create a new emulator with an empty program
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6507 {
            cpu: Cpu::new(),
            program: Vec::new(),
        }
    }

    /// Load a program and rewind the program counter to its start
    pub fn load_program(&mut self, program: &[u8]) {
        self.program = program.to_vec();
        self.cpu.set_pc(0);
    }

    /// Execute a single instruction and return its length in bytes
    pub fn step(&mut self) -> u8 {
        self.cpu.step(&self.program)
    }

    /// Run the loaded program to its end and return the instruction count
    pub fn run(&mut self) -> Result<u32, JsError> {
        self.cpu
            .run(&self.program)
            .map(|count| count as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Run the loaded program, calling `on_step(pc, mnemonic)` before each
    /// instruction
    pub fn run_traced(&mut self, on_step: js_sys::Function) -> Result<u32, JsError> {
        self.cpu
            .run_with(&self.program, |pc, metadata| {
                let _ = on_step.call2(
                    &JsValue::NULL,
                    &JsValue::from(pc),
                    &JsValue::from_str(metadata.mnemonic),
                );
            })
            .map(|count| count as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Reset the CPU to its initial state (the loaded program is kept)
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn acc(&self) -> u8 {
        self.cpu.acc()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    /// Status flags packed the way PHP pushes them
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.packed_status()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_sign(&self) -> bool {
        self.cpu.status().sign
    }

    #[wasm_bindgen(getter)]
    pub fn flag_overflow(&self) -> bool {
        self.cpu.status().overflow
    }

    #[wasm_bindgen(getter)]
    pub fn flag_decimal(&self) -> bool {
        self.cpu.status().decimal
    }

    #[wasm_bindgen(getter)]
    pub fn flag_interrupt(&self) -> bool {
        self.cpu.status().interrupt
    }

    #[wasm_bindgen(getter)]
    pub fn flag_zero(&self) -> bool {
        self.cpu.status().zero
    }

    #[wasm_bindgen(getter)]
    pub fn flag_carry(&self) -> bool {
        self.cpu.status().carry
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from data memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to data memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from data memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.cpu.memory().read(start + i)).collect()
    }

    /// Length of the loaded program in bytes
    #[wasm_bindgen(getter)]
    pub fn program_len(&self) -> u32 {
        self.program.len() as u32
    }
}

impl Default for Emulator6507 {
    fn default() -> Self {
        Self::new()
    }
}
