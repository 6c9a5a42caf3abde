//! Demo Suite
//!
//! This crate packages the reference 2×2 tomography scenario together
//! with console helpers for the demo binaries:
//!
//! - **ART**: classical algebraic reconstruction, sweep by sweep
//! - **HHL**: ideal statevector simulation of the quantum linear solver
//!
//! Both solvers consume the same [`tomoq_types::LinearSystem`], so the
//! demos can print their outputs side by side.

pub mod scenario;

use console::style;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Format a pixel vector as a 2×2 grid, one row per line.
pub fn format_grid(pixels: &[f64]) -> String {
    let mut out = String::new();
    for row in pixels.chunks(2) {
        out.push_str("  ");
        for value in row {
            out.push_str(&format!("{value:>12.6}"));
        }
        out.push('\n');
    }
    out
}
