//! CLI subcommands.

pub mod config;
pub mod parse;

use std::path::{Path, PathBuf};

use cadastro_core::CadastroConfig;

/// `<config dir>/cadastro/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cadastro")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CadastroConfig> {
    if let Some(path) = config_path {
        return Ok(CadastroConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(CadastroConfig::from_file(&default_path)?)
    } else {
        Ok(CadastroConfig::default())
    }
}
