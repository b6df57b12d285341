//! Command line interface for cosmo-arch.
//!
//! Parses arguments, classifies either the running section or a target
//! triple, and writes the report in the requested format.

mod args;

pub use args::{Args, OutputFormat};

use crate::arch::{self, Architecture, RiscvPolicy};
use crate::error::{Error, Result};
use std::io::Write;

/// Where a report's answer came from
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Compile-time detection of the running section
    Build,
    /// Classification of an explicit target triple
    Triple,
}

/// Identification result printed by the CLI
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Report {
    /// Classified architecture
    pub architecture: Architecture,
    /// Whether the architecture is anything but unknown
    pub supported: bool,
    /// RISC-V policy the classification used
    pub policy: RiscvPolicy,
    /// Where the answer came from
    pub source: Source,
    /// Triple that was classified, or the running section's arch string
    pub target: String,
}

impl Report {
    /// Report for the running section.
    pub fn current() -> Self {
        Self::new(
            arch::detect(),
            RiscvPolicy::ACTIVE,
            Source::Build,
            std::env::consts::ARCH,
        )
    }

    /// Report for an explicit target triple.
    pub fn for_triple(triple: &str, policy: RiscvPolicy) -> Self {
        let triple = triple.trim();
        Self::new(
            arch::classify_triple(triple, policy),
            policy,
            Source::Triple,
            triple,
        )
    }

    fn new(architecture: Architecture, policy: RiscvPolicy, source: Source, target: &str) -> Self {
        Self {
            architecture,
            supported: architecture.is_supported(),
            policy,
            source,
            target: target.to_string(),
        }
    }
}

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    let stdout = std::io::stdout();
    execute(&args, &mut stdout.lock())
}

/// Execute parsed arguments, writing output to `out`.
pub fn execute<W: Write>(args: &Args, out: &mut W) -> Result<i32> {
    args.validate()
        .map_err(|reason| Error::InvalidArguments { reason })?;

    if args.list {
        for arch in Architecture::ALL {
            writeln!(out, "{arch}")?;
        }
        return Ok(0);
    }

    let report = match &args.triple {
        Some(triple) => Report::for_triple(triple, args.effective_policy()),
        None => Report::current(),
    };
    log::debug!(
        "Classified {:?} target {} as {} ({} RISC-V policy)",
        report.source,
        report.target,
        report.architecture,
        report.policy
    );

    match args.format {
        OutputFormat::Text => writeln!(out, "{}", report.architecture)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    if args.require_supported {
        report.architecture.require_supported(&report.target)?;
    }

    Ok(0)
}
