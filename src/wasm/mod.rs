//! WebAssembly bindings for the lib6507 engine.
//!
//! This module provides JavaScript-callable interfaces to the engine, enabling
//! browser-based stepping through 6507 programs.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6507;
