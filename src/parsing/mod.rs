pub mod config;

use config::{Config, TOMLConfig};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Parse and validate a config from TOML text.
pub fn parse_config(input: &str) -> anyhow::Result<Config> {
    let data: TOMLConfig = toml::from_str(input).context("failed to parse config")?;
    let config = Config::from(data);
    config.validate()?;
    Ok(config)
}

pub fn get_settings<P: AsRef<Path>>(filepath: P) -> anyhow::Result<Config> {
    let filepath = filepath.as_ref();
    let mut input = String::new();
    info!("loading file, {}", filepath.display());
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read {}", filepath.display()))?;
    info!("done: {} bytes", read_count);
    parse_config(&input).with_context(|| format!("in {}", filepath.display()))
}
