//! Build helpers for seoscore.
//!
//! ```text
//! cargo xtask man          # man pages into target/dist/man
//! cargo xtask completions  # shell completions into target/dist/completions
//! cargo xtask dist         # both
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for seoscore")]
struct Xtask {
    #[command(subcommand)]
    task: Task,

    /// Output directory (default: target/dist)
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and every subcommand
    Man,
    /// Generate shell completion scripts
    Completions {
        /// Only generate for this shell
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
    /// Generate man pages and completions
    Dist,
}

fn main() -> anyhow::Result<()> {
    let xtask = Xtask::parse();
    let out_dir = xtask.out_dir.unwrap_or_else(default_out_dir);

    match xtask.task {
        Task::Man => man(&out_dir.join("man")),
        Task::Completions { shell } => completions(&out_dir.join("completions"), shell),
        Task::Dist => {
            man(&out_dir.join("man"))?;
            completions(&out_dir.join("completions"), None)
        }
    }
}

fn default_out_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("target")
        .join("dist")
}

fn man(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let cmd = seoscore::command();
    clap_mangen::generate_to(cmd, dir)
        .with_context(|| format!("failed to write man pages to {}", dir.display()))?;
    println!("man pages: {}", dir.display());
    Ok(())
}

fn completions(dir: &Path, only: Option<Shell>) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let shells = only.map_or_else(|| Shell::value_variants().to_vec(), |s| vec![s]);
    for shell in shells {
        let mut cmd = seoscore::command();
        let path = clap_complete::generate_to(shell, &mut cmd, "seoscore", dir)
            .with_context(|| format!("failed to write {shell} completions"))?;
        println!("{shell}: {}", path.display());
    }
    Ok(())
}
