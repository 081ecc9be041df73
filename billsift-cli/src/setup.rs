use anyhow::{Context, Result};
use billsift_finance::SqliteVendorStore;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{config_path, load_config, save_config};

fn prompt(label: &str, default: &str) -> Result<String> {
    print!("{} [{}]: ", label, default);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    let s = s.trim();
    Ok(if s.is_empty() { default.to_string() } else { s.to_string() })
}

pub fn run_setup() -> Result<()> {
    println!("billsift setup\n");

    let mut cfg = load_config()?;
    let store_default = cfg.store_path(None)?;
    let store = prompt("Vendor database", &store_default.display().to_string())?;
    let export = prompt("CSV export path", &cfg.export.path.display().to_string())?;

    cfg.store.path = Some(PathBuf::from(&store));
    cfg.export.path = PathBuf::from(export);
    save_config(&cfg)?;

    let db = SqliteVendorStore::open(&store)
        .with_context(|| format!("initialize vendor database {}", store))?;
    let tables = db.tables()?;

    println!("\nWrote:");
    println!("- {}", config_path()?.display());
    println!("- {} (tables: {})", store, tables.join(", "));
    println!("\nNext: billsift parse <statement.txt> <bank>");
    Ok(())
}
