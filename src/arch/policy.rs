//! RISC-V acceptance policy.

use std::fmt;

/// How strictly a 64-bit RISC-V target is matched.
///
/// A minimal `rv64i` target classifies as [`Riscv64`] under `Lenient` and as
/// [`Unknown`] under `Strict`.
///
/// [`Riscv64`]: crate::Architecture::Riscv64
/// [`Unknown`]: crate::Architecture::Unknown
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RiscvPolicy {
    /// Require the rv64imafdc baseline: 64-bit float registers, the
    /// double-float ABI, multiply/divide and compressed instructions.
    #[default]
    Strict,
    /// Accept any 64-bit RISC-V target.
    Lenient,
}

impl RiscvPolicy {
    /// Policy this build was compiled with. Fixed by the `riscv-lenient` feature.
    pub const ACTIVE: RiscvPolicy = if cfg!(feature = "riscv-lenient") {
        RiscvPolicy::Lenient
    } else {
        RiscvPolicy::Strict
    };

    /// Lowercase name of the policy.
    pub const fn name(self) -> &'static str {
        match self {
            RiscvPolicy::Strict => "strict",
            RiscvPolicy::Lenient => "lenient",
        }
    }
}

impl fmt::Display for RiscvPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
