#![cfg(feature = "cosmo")]

use assert_cmd::Command;
use predicates::prelude::*;

fn cosmo_arch() -> Command {
    Command::cargo_bin("cosmo-arch").unwrap()
}

#[test]
fn reports_running_section() {
    let expected = format!("{}\n", cosmo_arch::detect());
    cosmo_arch()
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn classifies_triples() {
    cosmo_arch()
        .args(["--triple", "aarch64-unknown-linux-gnu"])
        .assert()
        .success()
        .stdout("aarch64\n");

    cosmo_arch()
        .args(["--triple", "s390x-unknown-linux-gnu", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"architecture\": \"s390x\""))
        .stdout(predicate::str::contains("\"source\": \"triple\""));
}

#[test]
fn require_supported_exits_nonzero_for_unknown() {
    cosmo_arch()
        .args(["--triple", "mips64-unknown-linux-gnuabi64", "--require-supported"])
        .assert()
        .code(1)
        .stdout("unknown\n")
        .stderr(predicate::str::contains("Unsupported architecture"));
}

#[test]
fn strict_policy_rejects_riscv_without_compressed() {
    cosmo_arch()
        .args(["--triple", "riscv64imafd-unknown-linux-gnu", "--policy", "strict"])
        .assert()
        .success()
        .stdout("unknown\n");

    cosmo_arch()
        .args(["--triple", "riscv64imafd-unknown-linux-gnu", "--policy", "lenient"])
        .assert()
        .success()
        .stdout("riscv64\n");
}

#[test]
fn policy_without_triple_is_an_error() {
    cosmo_arch()
        .args(["--policy", "lenient"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--policy only applies with --triple"));
}

#[test]
fn lists_architectures() {
    cosmo_arch()
        .arg("--list")
        .assert()
        .success()
        .stdout("x86_64\naarch64\nppc64\ns390x\nriscv64\nunknown\n");
}
