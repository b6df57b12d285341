//! Architecture identification for fat-binary code sections.
//!
//! Every section of a multi-architecture executable is compiled for exactly
//! one target, so the architecture a section runs as is known at compile time.
//! [`detect`] resolves it from the compiler's target information with no
//! runtime probing, and [`CURRENT`] holds the result as a constant.
//!
//! Resolution goes through [`classify`], a pure function over a
//! [`TargetSignals`] table. The same function classifies other sections from
//! their target triples via [`classify_triple`].
//!
//! # Examples
//!
//! ```
//! use cosmo_arch::{classify_triple, Architecture, RiscvPolicy};
//!
//! let arch = classify_triple("aarch64-unknown-linux-gnu", RiscvPolicy::Strict);
//! assert_eq!(arch, Architecture::AArch64);
//! assert_eq!(arch.name(), "aarch64");
//! ```

mod architecture;
mod policy;
mod signals;

pub use architecture::Architecture;
pub use policy::RiscvPolicy;
pub use signals::{RiscvSignals, TargetSignals};

use crate::error::Result;

/// Architecture of the running section, resolved at compile time.
pub const CURRENT: Architecture = detect();

/// Returns the architecture this unit was compiled for.
///
/// Unrecognized targets, and RISC-V targets rejected by
/// [`RiscvPolicy::ACTIVE`], report [`Architecture::Unknown`].
pub const fn detect() -> Architecture {
    classify(&TargetSignals::current(), RiscvPolicy::ACTIVE)
}

/// Maps a signal table to an architecture.
///
/// Families are tried in order (x86_64, AArch64, PPC64, S390x, RISC-V) and the
/// first marker set wins. A RISC-V target must be 64-bit, and under
/// [`RiscvPolicy::Strict`] must also meet the rv64imafdc baseline.
pub const fn classify(signals: &TargetSignals, policy: RiscvPolicy) -> Architecture {
    if signals.x86_64 {
        Architecture::X86_64
    } else if signals.aarch64 {
        Architecture::AArch64
    } else if signals.powerpc64 {
        Architecture::Ppc64
    } else if signals.s390x {
        Architecture::S390x
    } else if let Some(riscv) = &signals.riscv {
        let accepted = match policy {
            RiscvPolicy::Strict => riscv.has_rv64imafdc_baseline(),
            RiscvPolicy::Lenient => riscv.is_64_bit(),
        };
        if accepted {
            Architecture::Riscv64
        } else {
            Architecture::Unknown
        }
    } else {
        Architecture::Unknown
    }
}

/// Classifies a target triple such as `"x86_64-unknown-linux-gnu"`.
pub fn classify_triple(triple: &str, policy: RiscvPolicy) -> Architecture {
    classify(&TargetSignals::from_triple(triple), policy)
}

/// Returns the lowercase identifier of `arch`.
pub const fn name(arch: Architecture) -> &'static str {
    arch.name()
}

/// Returns `true` unless the running section is [`Architecture::Unknown`].
pub const fn is_supported() -> bool {
    detect().is_supported()
}

/// Returns the running section's architecture, or an error if it is unknown.
pub fn require_supported() -> Result<Architecture> {
    detect().require_supported(std::env::consts::ARCH)
}
