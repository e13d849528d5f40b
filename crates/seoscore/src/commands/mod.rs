//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use seoscore_core::input::check_size;

pub mod analyze;
#[cfg(feature = "http")]
pub mod http;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    check_size(file_len(metadata.len()), max_bytes).with_context(|| format!("rejected {path}"))?;

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// File length as `usize`, saturating where `u64` does not fit.
fn file_len(len: u64) -> usize {
    usize::try_from(len).unwrap_or(usize::MAX)
}

/// Read all of standard input, stopping one byte past the limit.
pub fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut buf = String::new();
    let stdin = std::io::stdin().lock();
    match max_bytes {
        Some(max) => {
            stdin
                .take(max as u64 + 1)
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            check_size(buf.len(), Some(max)).context("rejected standard input")?;
        }
        None => {
            let mut stdin = stdin;
            stdin
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
        }
    }
    Ok(buf)
}

/// Read from `path`, or from standard input when it is absent or `-`.
pub fn read_input(path: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_str() != "-" => read_input_file(p, max_bytes),
        _ => read_stdin(max_bytes),
    }
}
