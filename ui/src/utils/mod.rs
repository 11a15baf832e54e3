//! Utility Macros and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output,
//!   routed to `tracing` on native targets
//!
//! The macros work the same on server-side and WASM deployment targets.

pub mod console_macros;
