//! cssmin binary: reads CSS from a file or standard input, minifies it, and
//! writes the result to a file or standard output. Writing to a file also
//! prints a human-readable size report.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use humansize::{format_size, BINARY};

use cssmin::cli::Cli;
use cssmin::minify;

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "cssmin", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let Some(input) = cli.input else {
        let mut cmd = Cli::command();
        let _ = cmd.write_help(&mut io::stderr());
        return ExitCode::from(1);
    };

    match run(&input, cli.output.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run(input: &str, output: Option<&Path>) -> Result<()> {
    let css = read_input(input)?;
    let minified = minify(&css);

    match output {
        Some(path) => {
            fs::write(path, &minified)
                .with_context(|| format!("failed to write {}", path.display()))?;
            report_savings(css.len(), minified.len());
        }
        None => {
            io::stdout()
                .write_all(minified.as_bytes())
                .context("failed to write to standard output")?;
        }
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("reading CSS from terminal; finish with Ctrl-D");
        }
        let mut css = String::new();
        io::stdin()
            .read_to_string(&mut css)
            .context("failed to read standard input")?;
        Ok(css)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}

fn report_savings(original: usize, minified: usize) {
    let saved = if original == 0 {
        0.0
    } else {
        (1.0 - minified as f64 / original as f64) * 100.0
    };
    println!(
        "Minified: {} -> {} ({:.1}% smaller)",
        format_size(original, BINARY),
        format_size(minified, BINARY),
        saved
    );
}
