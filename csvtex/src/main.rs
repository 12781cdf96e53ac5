//! # csvtex
//!
//! Render the function status table as a LaTeX long table.
//!
//! ## Overview
//!
//! csvtex is built on top of csvtexlib. It reads `tables/functions.csv`,
//! which lists every function with its priority and implementation status,
//! and writes `tables/functions.tex` for inclusion in the typeset report.
//!
//! ## Usage
//!
//! ```bash
//! # Regenerate tables/functions.tex from tables/functions.csv
//! csvtex
//!
//! # Read and write other files
//! csvtex path/to/input.csv path/to/output.tex
//!
//! # Show what is being done
//! RUST_LOG=debug csvtex
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgMatches, Command};
use console::style;
use csvtexlib::render;

const CAPTION: &str = "List of all functions and their priority and implementation status.";

/// Directory holding the default input and output, next to this crate
const TABLES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tables");
const INPUT_FILE: &str = "functions.csv";
const OUTPUT_FILE: &str = "functions.tex";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("csvtex")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render the function status table as a LaTeX longtable")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .value_parser(value_parser!(PathBuf))
                .help("CSV file to read (defaults to tables/functions.csv)"),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .value_parser(value_parser!(PathBuf))
                .help("LaTeX file to write (defaults to tables/functions.tex)"),
        )
}

/// Resolve a path argument, falling back to the tables directory
fn path_arg(matches: &ArgMatches, name: &str, default_file: &str) -> PathBuf {
    matches
        .get_one::<PathBuf>(name)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(TABLES_DIR).join(default_file))
}

fn run(matches: &ArgMatches) -> Result<PathBuf, anyhow::Error> {
    let input = path_arg(matches, "input", INPUT_FILE);
    let output = path_arg(matches, "output", OUTPUT_FILE);

    log::debug!("input: {}, output: {}", input.display(), output.display());
    render(&input, &output, CAPTION)?;
    Ok(output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            println!("Wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold().for_stderr());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_usage_names_positionals() {
        let usage = build_command().render_usage().to_string();
        assert!(usage.contains("[INPUT] [OUTPUT]"), "usage: {usage}");
    }

    #[test]
    fn test_default_paths() {
        let matches = build_command().get_matches_from(["csvtex"]);
        assert_eq!(
            path_arg(&matches, "input", INPUT_FILE),
            PathBuf::from(TABLES_DIR).join("functions.csv")
        );
        assert_eq!(
            path_arg(&matches, "output", OUTPUT_FILE),
            PathBuf::from(TABLES_DIR).join("functions.tex")
        );
    }

    #[test]
    fn test_explicit_paths() {
        let matches = build_command().get_matches_from(["csvtex", "in.csv", "out.tex"]);
        assert_eq!(path_arg(&matches, "input", INPUT_FILE), PathBuf::from("in.csv"));
        assert_eq!(path_arg(&matches, "output", OUTPUT_FILE), PathBuf::from("out.tex"));
    }

    #[test]
    fn test_too_many_arguments_rejected() {
        let result = build_command().try_get_matches_from(["csvtex", "a", "b", "c"]);
        assert!(result.is_err());
    }
}
