//! rnd CLI - print one secure random integer between 1 and N.
//!
//! # Usage
//!
//! ```bash
//! # Roll a six-sided die
//! rnd 6
//!
//! # Pick a value between 1 and 10000
//! rnd 10000
//! ```
//!
//! Randomness comes from the operating system's secure generator. If that
//! generator cannot be initialized, the program reports an error and exits
//! non-zero; it never falls back to a weaker source.

use std::process::ExitCode;

use rnd::EntropySource;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [] => {
            eprintln!("Usage: rnd <upper-bound>");
            eprintln!("Run 'rnd --help' for details");
            ExitCode::FAILURE
        }
        [flag] if flag == "--help" || flag == "-h" || flag == "help" => {
            print_help();
            ExitCode::SUCCESS
        }
        [flag] if flag == "--version" || flag == "-V" => {
            println!("rnd {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        [bound] => cmd_roll(bound),
        _ => {
            eprintln!("Error: expected exactly one upper bound");
            eprintln!("Run 'rnd --help' for usage");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!(
        r#"rnd - fail-closed secure random integer generator

Prints one uniformly distributed integer between 1 and <upper-bound>
(inclusive), drawn from the operating system's secure random generator.

USAGE:
    rnd <upper-bound>

ARGS:
    <upper-bound>    Decimal integer; the largest value that can be printed.
                     Bounds 0 and 1 always produce 1.

OPTIONS:
    -h, --help       Show help
    -V, --version    Show version

EXAMPLES:
    rnd 6            One die roll: 1, 2, 3, 4, 5 or 6
    rnd 100          One value between 1 and 100"#
    );
}

fn cmd_roll(arg: &str) -> ExitCode {
    let upper_bound = match rnd::parse_upper_bound(arg) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let source = match EntropySource::init() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match source.roll(upper_bound) {
        Ok(n) => {
            println!("{n}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
