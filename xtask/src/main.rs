//! Developer task runner for cssmin.
//!
//! Invoked as `cargo run -p xtask -- <task>`. Currently generates the
//! `cssmin.1` man page and shell completions from the library's CLI
//! definition, so packaging never drifts from the actual command surface.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use clap_mangen::Man;

use cssmin::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "Developer tasks for cssmin")]
enum Task {
    /// Generate the cssmin.1 man page
    Man {
        /// Directory the man page is written to
        #[arg(long, default_value = "target/dist")]
        out_dir: PathBuf,
    },
    /// Generate shell completions for all supported shells
    Completions {
        /// Directory the completion scripts are written to
        #[arg(long, default_value = "target/dist/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Task::parse() {
        Task::Man { out_dir } => generate_man(&out_dir),
        Task::Completions { out_dir } => generate_completions(&out_dir),
    }
}

fn generate_man(out_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    let man = Man::new(cmd);
    let mut buf: Vec<u8> = Vec::new();
    man.render(&mut buf).context("failed to render man page")?;

    let path = out_dir.join("cssmin.1");
    fs::write(&path, buf).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Generated {}", path.display());
    Ok(())
}

fn generate_completions(out_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let shells = [Shell::Bash, Shell::Zsh, Shell::Fish];
    for shell in shells {
        let mut cmd = Cli::command();
        let mut buf: Vec<u8> = Vec::new();
        clap_complete::generate(shell, &mut cmd, "cssmin", &mut buf);

        let path = out_dir.join(format!("cssmin.{shell}"));
        let mut file = fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(&buf)?;
        println!("Generated {}", path.display());
    }
    Ok(())
}
