//! Build script to inject version and git SHA at compile time.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - SPACEX_VERSION: Version string (defaults to CARGO_PKG_VERSION)
//! - SPACEX_GIT_SHA: Git commit SHA (defaults to "unknown" or git rev-parse)
//! - SPACEX_APP_CONFIG: JSON app config read by `config::load_config`

use std::process::Command;

fn main() {
    let version = std::env::var("SPACEX_VERSION").unwrap_or_else(|_| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
    });
    println!("cargo:rustc-env=SPACEX_VERSION={}", version);

    // Git SHA: prefer SPACEX_GIT_SHA, then GITHUB_SHA, then try git command
    let git_sha = std::env::var("SPACEX_GIT_SHA")
        .or_else(|_| std::env::var("GITHUB_SHA").map(|s| s.chars().take(7).collect()))
        .unwrap_or_else(|_| get_git_sha());
    println!("cargo:rustc-env=SPACEX_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-env-changed=SPACEX_VERSION");
    println!("cargo:rerun-if-env-changed=SPACEX_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
    println!("cargo:rerun-if-env-changed=SPACEX_APP_CONFIG");
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into())
}
