//! Custom cargo commands for fastsearch.
//!
//! Usage:
//!   cargo xtask verify      - Run full verification suite
//!   cargo xtask test        - Run all tests
//!   cargo xtask check       - Quick check (tests + clippy)
//!   cargo xtask build-wasm  - Build the browser package with wasm-pack
//!   cargo xtask bench       - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("build-wasm") => build_wasm()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify      Run full verification suite (tests, clippy, wasm build)
  test        Run all Rust tests
  check       Quick check (cargo test + clippy)
  build-wasm  Build pkg/ for the browser with wasm-pack
  bench       Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("fastsearch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/4] Checking the wasm binding compiles...");
    run_cargo(&[
        "check",
        "--quiet",
        "--lib",
        "--no-default-features",
        "--features",
        "wasm",
        "--target",
        "wasm32-unknown-unknown",
    ])?;
    println!("✓ wasm32 check passed\n");

    println!("[4/4] Building the browser package...");
    build_wasm()?;
    println!("✓ pkg/ built\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick check...\n");

    println!("[1/2] Running tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Tests passed\n");

    println!("[2/2] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("✓ Quick check passed");
    Ok(())
}

fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--target",
            "web",
            "--release",
            "--",
            "--no-default-features",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack. Is it installed?")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
