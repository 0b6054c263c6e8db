//! WebAssembly bindings for the 6502 core.
//!
//! This module provides JavaScript-callable interfaces to the CPU, enabling
//! browser-based stepping and state inspection.

pub mod api;

pub use api::Emulator6502;
