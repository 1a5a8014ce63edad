//! Overcheck - Static override-consistency checker for declared class hierarchies
//!
//! # Usage
//!
//! ```bash
//! # Check a JSON declaration file
//! overcheck check decls.json
//!
//! # Colored output, verbose logging
//! overcheck check --color --verbose decls.json
//! ```
//!
//! The declaration file is a JSON array of class declarations:
//!
//! ```json
//! [
//!   {"name": "Animal", "methods": ["make_sound"]},
//!   {"name": "Cat", "parent": "Animal",
//!    "methods": ["make_noise"], "claimed_overrides": ["make_noise"]}
//! ]
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process;

use checker::{logging, ClassDecl};
use diagnostics::ErrorFormatter;

#[derive(Parser)]
#[command(name = "overcheck")]
#[command(version = "0.1.0")]
#[command(about = "Static override-consistency checker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a declaration file for override inconsistencies
    Check {
        /// Path to the JSON declaration file
        file: PathBuf,

        /// Use colored output
        #[arg(long)]
        color: bool,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            file,
            color,
            verbose,
        } => {
            if verbose {
                logging::init_with_level(log::LevelFilter::Debug);
            } else {
                logging::init_from_env();
            }

            let exit_code = run_check(&file, color);
            process::exit(exit_code);
        }
    }
}

/// Load declarations, run the checker, print diagnostics.
///
/// Exit codes: 0 clean, 1 diagnostics reported, 2 configuration or input error.
fn run_check(file: &PathBuf, color: bool) -> i32 {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: cannot read '{}': {}", file.display(), err);
            return 2;
        }
    };

    let decls: Vec<ClassDecl> = match serde_json::from_str(&content) {
        Ok(decls) => decls,
        Err(err) => {
            eprintln!("error: invalid declaration file '{}': {}", file.display(), err);
            return 2;
        }
    };

    let diagnostics = match checker::check(decls) {
        Ok(diagnostics) => diagnostics,
        Err(err) => {
            eprintln!("error: {}", err);
            return 2;
        }
    };

    if diagnostics.is_empty() {
        println!("no override inconsistencies found");
        return 0;
    }

    let formatter = if color {
        ErrorFormatter::with_colors()
    } else {
        ErrorFormatter::new()
    };
    print!("{}", formatter.format_diagnostics(&diagnostics));
    eprintln!(
        "\nfound {} override inconsistenc{}",
        diagnostics.len(),
        if diagnostics.len() == 1 { "y" } else { "ies" }
    );

    1
}
