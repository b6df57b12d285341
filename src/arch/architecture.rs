//! CPU architecture types and utilities.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// CPU architecture of a fat-binary code section.
///
/// Each section of a multi-architecture executable is compiled separately, and
/// the loader only ever runs the section matching the host CPU. The variant a
/// section reports is therefore the architecture the process is running on.
///
/// # Examples
///
/// ```
/// use cosmo_arch::Architecture;
///
/// let arch: Architecture = "aarch64".parse().unwrap();
/// assert_eq!(arch, Architecture::AArch64);
/// assert_eq!(arch.to_string(), "aarch64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// AArch64 / ARM64 (64-bit), either endianness
    AArch64,
    /// PowerPC (64-bit), either endianness
    Ppc64,
    /// IBM Z (64-bit)
    S390x,
    /// RISC-V (64-bit)
    Riscv64,
    /// Target that could not be mapped to any of the above
    Unknown,
}

impl Architecture {
    /// Every variant, in classification priority order with `Unknown` last.
    pub const ALL: [Architecture; 6] = [
        Architecture::X86_64,
        Architecture::AArch64,
        Architecture::Ppc64,
        Architecture::S390x,
        Architecture::Riscv64,
        Architecture::Unknown,
    ];

    /// Returns the fixed lowercase identifier for this architecture.
    pub const fn name(self) -> &'static str {
        match self {
            Architecture::X86_64 => "x86_64",
            Architecture::AArch64 => "aarch64",
            Architecture::Ppc64 => "ppc64",
            Architecture::S390x => "s390x",
            Architecture::Riscv64 => "riscv64",
            Architecture::Unknown => "unknown",
        }
    }

    /// Returns `true` for every variant except [`Architecture::Unknown`].
    pub const fn is_supported(self) -> bool {
        !matches!(self, Architecture::Unknown)
    }

    /// Returns `self` if supported, otherwise an
    /// [`Error::UnsupportedArchitecture`] naming `target`.
    ///
    /// For callers that must refuse to start on an unrecognized target rather
    /// than fall back to a generic path.
    pub fn require_supported(self, target: &str) -> Result<Self> {
        if self.is_supported() {
            Ok(self)
        } else {
            Err(Error::UnsupportedArchitecture {
                target: target.to_string(),
            })
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Architecture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Architecture::ALL
            .into_iter()
            .find(|arch| arch.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownArchitectureName {
                name: s.to_string(),
                expected: Architecture::ALL.map(Architecture::name).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_distinct_lowercase_and_non_empty() {
        let names: HashSet<&str> = Architecture::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names.len(), Architecture::ALL.len());
        for name in names {
            assert!(!name.is_empty());
            assert_eq!(name, name.to_ascii_lowercase());
        }
        assert_eq!(Architecture::Unknown.name(), "unknown");
    }

    #[test]
    fn only_unknown_is_unsupported() {
        for arch in Architecture::ALL {
            assert_eq!(arch.is_supported(), arch != Architecture::Unknown);
        }
    }

    #[test]
    fn parses_canonical_names_case_insensitively() {
        for arch in Architecture::ALL {
            assert_eq!(arch.name().parse::<Architecture>().unwrap(), arch);
            assert_eq!(
                arch.name().to_uppercase().parse::<Architecture>().unwrap(),
                arch
            );
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "mips64".parse::<Architecture>().unwrap_err();
        assert!(matches!(err, Error::UnknownArchitectureName { ref name, .. } if name == "mips64"));
        assert!(err.to_string().contains("riscv64"));
    }

    #[test]
    fn require_supported_rejects_unknown() {
        assert!(Architecture::S390x.require_supported("s390x").is_ok());
        let err = Architecture::Unknown
            .require_supported("mips64-unknown-linux-gnuabi64")
            .unwrap_err();
        assert!(err.to_string().contains("mips64-unknown-linux-gnuabi64"));
    }

    #[test]
    fn serde_uses_canonical_names() {
        for arch in Architecture::ALL {
            let json = serde_json::to_string(&arch).unwrap();
            assert_eq!(json, format!("\"{}\"", arch.name()));
            assert_eq!(serde_json::from_str::<Architecture>(&json).unwrap(), arch);
        }
    }
}
