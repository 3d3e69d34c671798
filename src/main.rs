//! Liberty - cell/pin capacitance lookup
//!
//! Reads a Liberty library, finds a cell and one of its pins, and prints the
//! pin's capacitance attributes.
//!
//! # Usage
//!
//! ```bash
//! liberty asap7sc7p5t_AO_LVT_TT_nldm_211120.lib A2O1A1Ixp33_ASAP7_75t_L A1 --attr max_transition
//! ```
//!
//! Exit codes: 1 unreadable or malformed file, 2 root is not a `library`,
//! 3 cell not found, 4 pin not found, 5 `capacitance` missing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use liberty_core::{
    error::Result,
    liberty,
    lookup::{self, PinCapacitance},
};
use log::info;

/// Liberty cell-library pin capacitance lookup
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the Liberty library file (.lib)
    #[arg(value_name = "LIB_FILE")]
    lib_file: PathBuf,

    /// Cell name, e.g. A2O1A1Ixp33_ASAP7_75t_L
    #[arg(value_name = "CELL")]
    cell: String,

    /// Pin name within the cell, e.g. A1
    #[arg(value_name = "PIN")]
    pin: String,

    /// Additional numeric pin attribute to report (repeatable)
    #[arg(short, long = "attr", value_name = "NAME")]
    attrs: Vec<String>,
}

fn run(args: &Args) -> Result<PinCapacitance> {
    let library = liberty::parse_file(&args.lib_file)?;
    info!(
        "loaded library '{}' from {}",
        library.name(),
        args.lib_file.display()
    );

    let extra: Vec<&str> = args.attrs.iter().map(String::as_str).collect();
    lookup::pin_capacitance(&library, &args.cell, &args.pin, &extra)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            println!("lib_file: {}", args.lib_file.display());
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
