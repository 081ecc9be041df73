use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn billsift_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".billsift"))
}

pub fn ensure_billsift_home() -> Result<PathBuf> {
    let dir = billsift_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn default_store_path() -> Result<PathBuf> {
    Ok(billsift_home()?.join("vendors.db"))
}
