//! Target capability table.
//!
//! [`TargetSignals`] holds the markers a toolchain exposes for the target of a
//! compilation unit: which architecture family it belongs to and, on RISC-V,
//! which base extensions are present. It is filled in from the compiler's
//! `cfg` values for the running section, or parsed from a target triple when
//! classifying some other section.

/// RISC-V register widths and extension-presence signals.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RiscvSignals {
    /// Integer register width in bits (32 or 64).
    pub xlen: u32,
    /// Floating-point register width in bits; 0 without the F extension.
    pub flen: u32,
    /// Floating-point arguments are passed in double-precision registers.
    pub float_abi_double: bool,
    /// Integer multiplication instructions are present.
    pub mul: bool,
    /// Integer division instructions are present.
    pub div: bool,
    /// Compressed (16-bit) instruction encodings are present.
    pub compressed: bool,
}

impl RiscvSignals {
    /// Signals for the RISC-V target this unit is compiled for.
    ///
    /// Rust has no `cfg` for the float ABI name. Every RISC-V target that
    /// enables `d` uses the `lp64d`/`ilp32d` ABI and every target without it
    /// uses a soft or single-float ABI, so `d` stands in for the ABI marker.
    pub const fn current() -> Self {
        let xlen = if cfg!(target_arch = "riscv64") {
            64
        } else if cfg!(target_arch = "riscv32") {
            32
        } else {
            0
        };
        let flen = if cfg!(target_feature = "d") {
            64
        } else if cfg!(target_feature = "f") {
            32
        } else {
            0
        };

        Self {
            xlen,
            flen,
            float_abi_double: cfg!(target_feature = "d"),
            mul: cfg!(target_feature = "m"),
            div: cfg!(target_feature = "m"),
            compressed: cfg!(target_feature = "c"),
        }
    }

    /// Parses the ISA part of a triple's architecture component, e.g. `64gc`
    /// from `riscv64gc` or `32imac` from `riscv32imac`.
    ///
    /// A bare width with no extension letters (`riscv64-linux-android`) gets
    /// the hosted `gc` baseline the toolchain enables for those targets.
    ///
    /// Returns `None` if the register width is not 32 or 64.
    fn from_isa(isa: &str) -> Option<Self> {
        let (xlen, extensions) = if let Some(rest) = isa.strip_prefix("64") {
            (64, rest)
        } else if let Some(rest) = isa.strip_prefix("32") {
            (32, rest)
        } else {
            return None;
        };

        // RVA23 application profile mandates the G and C extensions
        let (profile_gc, extensions) = match extensions.strip_prefix("a23") {
            Some(rest) => (true, rest),
            None => (extensions.is_empty(), extensions),
        };

        let (mut m, mut f, mut d, mut c) = (profile_gc, profile_gc, profile_gc, profile_gc);
        for ext in extensions.chars().take_while(char::is_ascii_lowercase) {
            match ext {
                'g' => {
                    m = true;
                    f = true;
                    d = true;
                }
                'm' => m = true,
                'f' => f = true,
                'd' => {
                    f = true;
                    d = true;
                }
                'c' => c = true,
                _ => {}
            }
        }

        Some(Self {
            xlen,
            flen: if d {
                64
            } else if f {
                32
            } else {
                0
            },
            float_abi_double: d,
            mul: m,
            div: m,
            compressed: c,
        })
    }

    /// Returns `true` for a 64-bit RISC-V target.
    pub const fn is_64_bit(&self) -> bool {
        self.xlen == 64
    }

    /// Returns `true` if the target meets the rv64imafdc baseline: 64-bit
    /// integer and float registers, the double-float ABI, multiply/divide and
    /// compressed instructions.
    pub const fn has_rv64imafdc_baseline(&self) -> bool {
        self.is_64_bit()
            && self.flen >= 64
            && self.float_abi_double
            && self.mul
            && self.div
            && self.compressed
    }
}

/// Architecture-family markers for one compilation unit.
///
/// A correctly configured single-architecture unit sets at most one family
/// marker. Hand-built values may set several; classification then takes the
/// first in priority order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct TargetSignals {
    /// 64-bit x86.
    pub x86_64: bool,
    /// 64-bit ARM, either endianness.
    pub aarch64: bool,
    /// 64-bit PowerPC, either endianness.
    pub powerpc64: bool,
    /// IBM Z.
    pub s390x: bool,
    /// Any RISC-V target, with its extension signals.
    pub riscv: Option<RiscvSignals>,
}

impl TargetSignals {
    /// Signals with no family marker set.
    pub const NONE: TargetSignals = TargetSignals {
        x86_64: false,
        aarch64: false,
        powerpc64: false,
        s390x: false,
        riscv: None,
    };

    /// Signals for the target this unit is compiled for.
    pub const fn current() -> Self {
        Self {
            x86_64: cfg!(target_arch = "x86_64"),
            aarch64: cfg!(target_arch = "aarch64"),
            powerpc64: cfg!(target_arch = "powerpc64"),
            s390x: cfg!(target_arch = "s390x"),
            riscv: if cfg!(any(target_arch = "riscv64", target_arch = "riscv32")) {
                Some(RiscvSignals::current())
            } else {
                None
            },
        }
    }

    /// Derives signals from a target triple (e.g. `"riscv64gc-unknown-linux-gnu"`).
    ///
    /// Only the architecture component is inspected. Unrecognized components
    /// yield [`TargetSignals::NONE`].
    pub fn from_triple(triple: &str) -> Self {
        let arch = triple.trim().split('-').next().unwrap_or_default();

        match arch {
            "x86_64" | "x86_64h" | "amd64" => Self {
                x86_64: true,
                ..Self::NONE
            },
            "aarch64" | "aarch64_be" | "arm64" | "arm64e" => Self {
                aarch64: true,
                ..Self::NONE
            },
            "powerpc64" | "powerpc64le" | "ppc64" | "ppc64le" => Self {
                powerpc64: true,
                ..Self::NONE
            },
            "s390x" => Self {
                s390x: true,
                ..Self::NONE
            },
            _ => match arch.strip_prefix("riscv").and_then(RiscvSignals::from_isa) {
                Some(riscv) => Self {
                    riscv: Some(riscv),
                    ..Self::NONE
                },
                None => Self::NONE,
            },
        }
    }
}
