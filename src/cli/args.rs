//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with a validation
//! step for combinations clap cannot express.

use crate::arch::RiscvPolicy;
use clap::{Parser, ValueEnum};

/// Report the architecture of a fat-binary code section
#[derive(Parser, Debug)]
#[command(
    name = "cosmo-arch",
    version,
    about = "Report the architecture of a fat-binary code section",
    long_about = "Reports which architecture this section of a fat binary was compiled for.

With --triple, classifies a Rust target triple instead, using the same rules.

Usage:
  cosmo-arch
  cosmo-arch --format json
  cosmo-arch --triple riscv64imac-unknown-none-elf --policy lenient
  cosmo-arch --require-supported

Exit code 0 = architecture reported (and supported, with --require-supported)."
)]
pub struct Args {
    /// Target triple to classify instead of the running section
    #[arg(short, long, value_name = "TRIPLE")]
    pub triple: Option<String>,

    /// RISC-V policy for --triple (defaults to the policy this build uses)
    #[arg(short, long, value_enum, value_name = "POLICY")]
    pub policy: Option<RiscvPolicy>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail with exit code 1 if the architecture is unknown
    #[arg(long)]
    pub require_supported: bool,

    /// List every architecture name and exit
    #[arg(long, conflicts_with_all = ["triple", "policy", "require_supported"])]
    pub list: bool,
}

/// Output format for the report
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Architecture name only
    #[default]
    Text,
    /// Full report as JSON
    Json,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.triple.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err("Triple cannot be empty".to_string());
        }

        // The running section's answer is fixed when it is compiled
        if self.policy.is_some() && self.triple.is_none() {
            return Err(format!(
                "--policy only applies with --triple; this build uses the {} policy",
                RiscvPolicy::ACTIVE
            ));
        }

        Ok(())
    }

    /// RISC-V policy to classify with.
    pub fn effective_policy(&self) -> RiscvPolicy {
        self.policy.unwrap_or(RiscvPolicy::ACTIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cosmo-arch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&[]);
        assert!(args.triple.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.effective_policy(), RiscvPolicy::ACTIVE);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn policy_requires_triple() {
        assert!(parse(&["--policy", "lenient"]).validate().is_err());
        let args = parse(&["--triple", "riscv64imac-unknown-none-elf", "--policy", "lenient"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.effective_policy(), RiscvPolicy::Lenient);
    }

    #[test]
    fn empty_triple_is_rejected() {
        assert!(parse(&["--triple", " "]).validate().is_err());
    }

    #[test]
    fn list_conflicts_with_triple() {
        let result = Args::try_parse_from([
            "cosmo-arch",
            "--list",
            "--triple",
            "s390x-unknown-linux-gnu",
        ]);
        assert!(result.is_err());
    }
}
