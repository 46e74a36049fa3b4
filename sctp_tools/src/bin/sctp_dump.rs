use anyhow::{Context, Result};
use sctp_tools::{config, sample};
use std::env;
use std::fs;
use std::io::{self, Write};

fn main() -> Result<()> {
    config::init_logging();

    let input_path = config::dump_input_path(env::args().nth(1))?;
    let bytes = fs::read(&input_path).with_context(|| format!("Reading {input_path:?}"))?;
    tracing::debug!(path = ?input_path, size = bytes.len(), "dumping");

    let stdout = io::stdout();
    let mut w = stdout.lock();
    let res = sample::dump(&bytes, &mut w);
    w.flush()?;

    let count = res.with_context(|| format!("Malformed stream in {input_path:?}"))?;
    tracing::info!(count, "fields decoded");

    Ok(())
}
