//! Custom cargo commands for glimmer.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask wasm      - Check the browser build
//!   cargo xtask check     - Quick check (no wasm)
//!   cargo xtask fuzz <t>  - Run one fuzz target for a minute

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("wasm") => wasm()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref().unwrap_or("search_queries"))?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + wasm + score table)
  test      Run all Rust tests
  wasm      Check the wasm32 build with browser bindings
  check     Quick check (cargo test + clippy, no wasm)
  bench     Run benchmarks
  fuzz <t>  Run a fuzz target for 60 seconds (default: search_queries)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("glimmer Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking score table ordering...");
    verify_score_order()?;
    println!("✓ Title awards outrank content awards\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Checking wasm build...");
    wasm()?;
    println!("✓ wasm build checks\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn wasm() -> Result<()> {
    run_cargo(&[
        "check",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--no-default-features",
        "--features",
        "wasm",
    ])
}

/// Quick check (no wasm)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz(target: &str) -> Result<()> {
    let root = project_root()?;
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

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

/// Read the award constants from source and check that the weakest title
/// award still beats the strongest content award.
fn verify_score_order() -> Result<()> {
    let root = project_root()?;
    let source = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;

    let get = |name: &str| -> Result<u32> {
        extract_const(&source, name).with_context(|| format!("{} not found", name))
    };
    let exact = get("TITLE_EXACT_SCORE")?;
    let contains = get("TITLE_CONTAINS_SCORE")?;
    let fuzzy = get("TITLE_FUZZY_SCORE")?;
    let content_contains = get("CONTENT_CONTAINS_SCORE")?;
    let content_fuzzy = get("CONTENT_FUZZY_SCORE")?;

    if !(exact > contains && contains > fuzzy) {
        bail!("title awards out of order: {} / {} / {}", exact, contains, fuzzy);
    }
    if fuzzy <= content_contains + content_fuzzy {
        bail!(
            "title fuzzy award {} does not beat the content maximum {}",
            fuzzy,
            content_contains + content_fuzzy
        );
    }
    Ok(())
}

fn extract_const(source: &str, name: &str) -> Option<u32> {
    // Look for "pub const NAME: u32 = 100;"
    source
        .lines()
        .find(|line| line.contains(&format!("const {}:", name)))
        .and_then(|line| line.split('=').nth(1))
        .map(|rest| rest.trim().trim_end_matches(';').trim())
        .and_then(|num| num.parse().ok())
}
