use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Read by `sctp_dump` when no path argument is given.
pub const ENV_VAR_DUMP_INPUT: &str = "SCTP_DUMP_INPUT";

pub const ENV_VAR_SAMPLE_OUTPUT: &str = "SCTP_SAMPLE_OUTPUT";

pub const ENV_VAR_ENCODER_CAPACITY: &str = "SCTP_ENCODER_CAPACITY";

pub const DEFAULT_ENCODER_CAPACITY: usize = 256;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn default_sample_path() -> PathBuf {
    env::temp_dir().join("sctp").join("sample.sctp")
}

pub fn sample_output_path() -> PathBuf {
    env::var(ENV_VAR_SAMPLE_OUTPUT).map_or_else(|_| default_sample_path(), PathBuf::from)
}

pub fn dump_input_path(arg: Option<String>) -> Result<PathBuf> {
    arg.or_else(|| env::var(ENV_VAR_DUMP_INPUT).ok())
        .map(PathBuf::from)
        .ok_or(anyhow!(
            "No input. Pass a path or set {ENV_VAR_DUMP_INPUT}."
        ))
}

pub fn encoder_capacity() -> Result<usize> {
    parse_capacity(env::var(ENV_VAR_ENCODER_CAPACITY).ok())
}

fn parse_capacity(var: Option<String>) -> Result<usize> {
    match var {
        None => Ok(DEFAULT_ENCODER_CAPACITY),
        Some(s) => s
            .trim()
            .parse()
            .with_context(|| format!("{ENV_VAR_ENCODER_CAPACITY}={s:?} is not a byte count")),
    }
}
