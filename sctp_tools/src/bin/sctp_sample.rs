use anyhow::Result;
use sctp_tools::{config, sample};
use std::fs;

fn main() -> Result<()> {
    config::init_logging();

    let capacity = config::encoder_capacity()?;
    let output_path = config::sample_output_path();

    let enc = sample::encode_sample(capacity)?;

    if let Some(parent_dir) = output_path.parent() {
        fs::create_dir_all(parent_dir)?;
    }
    fs::write(&output_path, enc.data())?;
    tracing::info!(capacity, size = enc.size(), "sample encoded");

    println!("Wrote {} bytes to {}", enc.size(), output_path.display());

    Ok(())
}
