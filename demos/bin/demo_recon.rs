//! ART vs HHL Reconstruction Demo
//!
//! Reconstructs the reference 2×2 phantom from its 0°/90° ray sums,
//! once with the classical ART solver and once with the ideal HHL
//! statevector simulation, and prints the two side by side.

use clap::Parser;

use tomoq_art::Art;
use tomoq_demos::scenario::{normalized_phantom, reference_scenario, PHANTOM};
use tomoq_demos::{
    format_grid, print_header, print_info, print_result, print_section, print_success,
};
use tomoq_hhl::{HhlConfig, HhlPipeline};

#[derive(Parser, Debug)]
#[command(name = "demo-recon")]
#[command(about = "Compare ART and simulated HHL on the 2×2 phantom")]
struct Args {
    /// Number of ART sweeps
    #[arg(short, long, default_value = "10")]
    sweeps: usize,

    /// ART relaxation factor, in (0, 2]
    #[arg(short, long, default_value = "1.0")]
    relaxation: f64,

    /// Override the clock (phase) register width; the calibration table
    /// must fit in it
    #[arg(short = 'k', long)]
    clock_qubits: Option<usize>,

    /// Path to a JSON HHL configuration (defaults to the built-in
    /// reference calibration)
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    print_header("ART vs HHL Reconstruction Demo");

    let system = reference_scenario();

    print_section("Problem Setup");
    print_result("Pixels", system.num_pixels());
    print_result("Rays", system.num_rays());
    print_result(
        "Measurements",
        format!("{:?}", system.measurements().to_vec()),
    );
    println!();
    println!("  Ground-truth phantom:");
    print!("{}", format_grid(&PHANTOM));

    print_section("Classical ART");
    let art = Art::new(args.sweeps, args.relaxation)?;
    let art_pixels = art.solve(&system);
    print_result("Sweeps", args.sweeps);
    print_result("Relaxation", args.relaxation);
    println!();
    print!("{}", format_grid(art_pixels.as_slice().unwrap_or(&[])));

    print_section("Simulated HHL");
    let mut config = match &args.config {
        Some(path) => {
            print_info(&format!("Loading configuration from {}", path.display()));
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        }
        None => HhlConfig::default(),
    };
    if let Some(k) = args.clock_qubits {
        config.clock_qubits = k;
    }
    print_result("Clock qubits", config.clock_qubits);
    print_result("Table entries", config.eigenvalue_table.len());
    let outcome = HhlPipeline::new(config).run(&system)?;
    print_result(
        "Postselection probability",
        format!("{:.6}", outcome.postselect_probability),
    );
    println!();
    println!("  Unit-norm reconstruction:");
    print!("{}", format_grid(&outcome.pixels));
    println!("  Normalized phantom for reference:");
    print!("{}", format_grid(&normalized_phantom()));

    println!();
    print_success("Reconstruction demo complete!");
    Ok(())
}
