use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use covmark::{parse_cobertura, write_report};

#[derive(Parser)]
#[command(name = "covmark")]
#[command(about = "Convert a Cobertura XML coverage report into a Markdown summary")]
#[command(version)]
struct Cli {
    /// Path to the Cobertura XML coverage report
    input: PathBuf,

    /// Path for the generated Markdown file
    output: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Bad arguments exit 1; --help and --version keep clap's exit 0.
            if e.use_stderr() {
                let _ = e.print();
                std::process::exit(1);
            }
            e.exit();
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.input.exists() {
        bail!("coverage report not found at '{}'", cli.input.display());
    }

    let data = parse_cobertura(&cli.input)?;
    write_report(&data, &cli.output)?;

    println!(
        "{} Report written: {}",
        "📊".cyan(),
        cli.output.display().to_string().green()
    );

    Ok(())
}
