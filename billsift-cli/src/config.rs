use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{default_store_path, ensure_billsift_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    /// SQLite vendor directory (default: ~/.billsift/vendors.db)
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSection {
    /// CSV written by `billsift parse`
    pub path: PathBuf,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("transactions.csv"),
        }
    }
}

impl Config {
    /// `--db` beats config.toml beats the default under ~/.billsift
    pub fn store_path(&self, flag: Option<&Path>) -> Result<PathBuf> {
        match flag.or(self.store.path.as_deref()) {
            Some(p) => Ok(p.to_path_buf()),
            None => {
                ensure_billsift_home()?;
                default_store_path()
            }
        }
    }

    pub fn export_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.unwrap_or(&self.export.path).to_path_buf()
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_billsift_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
