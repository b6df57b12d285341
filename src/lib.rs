//! Compile-time architecture identification for fat binaries.
//!
//! A fat binary carries separately compiled code for several CPU
//! architectures, and its loader runs the section matching the host. This
//! library tells code inside a section which architecture it was built as, so
//! architecture-specific paths (JIT backends, calling conventions, encoders)
//! can be selected without probing the CPU.
//!
//! The whole library is gated behind the default `cosmo` feature.

#[cfg(feature = "cosmo")]
pub mod arch;
#[cfg(feature = "cosmo")]
pub mod cli;
#[cfg(feature = "cosmo")]
pub mod error;

// Re-export commonly used types
#[cfg(feature = "cosmo")]
pub use arch::{
    Architecture, CURRENT, RiscvPolicy, RiscvSignals, TargetSignals, classify, classify_triple,
    detect, is_supported, name, require_supported,
};
#[cfg(feature = "cosmo")]
pub use error::{Error, Result};
