//! Stamps `billsift --version` with the commit it was built from.

use std::path::Path;
use std::process::Command;

const SHA_VAR: &str = "BILLSIFT_BUILD_SHA";

fn git(repo: &Path, args: &[&str]) -> Option<String> {
    let out = Command::new("git").arg("-C").arg(repo).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    Some(String::from_utf8(out.stdout).ok()?.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-env-changed={SHA_VAR}");

    // packaged builds have no .git; let them pass the commit in
    let sha = std::env::var(SHA_VAR).ok().filter(|s| !s.is_empty()).or_else(|| {
        let repo = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
        println!("cargo:rerun-if-changed={}", repo.join(".git/HEAD").display());

        let sha = git(&repo, &["rev-parse", "--short", "HEAD"]).filter(|s| !s.is_empty())?;
        let dirty = git(&repo, &["status", "--porcelain", "--untracked-files=no"])
            .is_some_and(|s| !s.is_empty());
        Some(if dirty { format!("{sha}-dirty") } else { sha })
    });

    println!("cargo:rustc-env={SHA_VAR}={}", sha.as_deref().unwrap_or("unknown"));
}
