//! cosmo-arch - report the architecture a fat-binary section was built as.
//!
//! Prints the identification of the running section, or of a target triple,
//! in text or JSON form.

use std::process;

fn main() {
    env_logger::init();

    let exit_code = match cosmo_arch::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
