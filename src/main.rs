//! Bitprobe demonstration harness.
//!
//! Walks a fixed set of sample inputs through the library and prints
//! the resulting report lines. The interesting logic lives in the
//! library; this binary is a loop over literals.

use anyhow::Result;
use bitprobe::{int, report};
use clap::{Parser, ValueEnum};
use num_bigint::BigInt;
use tracing::info;

#[derive(Parser)]
#[command(name = "bitprobe", version, about = "Numeric representation inspector demos")]
struct Cli {
    /// Demo section to print; all sections when omitted
    #[arg(value_enum)]
    section: Option<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    /// Signed/unsigned readings around i32::MAX and zero
    Ints,
    /// Arithmetic versus logical right shift
    Shifts,
    /// Signed zeros, infinities and NaN patterns
    Floats,
    /// Minimal encodings of arbitrary precision values
    Bigints,
}

fn main() -> Result<()> {
    let log_level = std::env::var("BITPROBE_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let cli = Cli::parse();

    println!("Bitprobe v{}", env!("CARGO_PKG_VERSION"));

    let run_all = cli.section.is_none();
    let selected = |section| run_all || cli.section == Some(section);

    if selected(Section::Ints) {
        print_int_representations();
    }
    if selected(Section::Shifts) {
        print_shifts();
    }
    if selected(Section::Floats) {
        print_floats();
    }
    if selected(Section::Bigints) {
        print_bigints();
    }

    info!("All requested sections printed");
    Ok(())
}

/// Patterns around the wraparound point, then around zero.
fn print_int_representations() {
    println!("--- 32-bit representations ---");
    for offset in -2..=2 {
        let value = int::wrapping_add32(i32::MAX, offset);
        println!("{}", report::int_representation_line(value));
    }
    println!("...");
    for value in -2..=2 {
        println!("{}", report::int_representation_line(value));
    }
}

fn print_shifts() {
    println!("--- right shifts ---");
    for value in [-32, 32] {
        for line in report::shift_report_lines(value, 1) {
            println!("{line}");
        }
    }
}

fn print_floats() {
    println!("--- doubles ---");
    println!("{}", report::zero_comparison_line());
    for (label, pattern) in report::special_value_reports() {
        println!("{pattern}  {label}");
    }
}

fn print_bigints() {
    println!("--- arbitrary precision ---");
    let max = BigInt::from(i64::MAX);
    println!("{}", report::bigint_report_line(&max));
    println!("{}", report::bigint_report_line(&(&max * 4)));
}
