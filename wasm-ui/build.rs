//! Captures build provenance for the UI footer.
//!
//! Exposes BUILD_HOST, BUILD_COMMIT, and BUILD_TIMESTAMP to the
//! compiler.

use std::process::Command;

fn capture(cmd: &str, args: &[&str]) -> String {
    Command::new(cmd)
        .args(args)
        .output()
        .ok()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    println!("cargo:rustc-env=BUILD_HOST={}", capture("hostname", &["-s"]));
    println!(
        "cargo:rustc-env=BUILD_COMMIT={}",
        capture("git", &["rev-parse", "--short", "HEAD"])
    );
    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP={}",
        capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
    );

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
