//! Build script stamping the package version with the git commit it was built from.
//!
//! `CMIS_VERSION` is the short form shown by `cmis -V`: the package version,
//! plus semver build metadata (`+<commit>[.dirty]`) when built from a git
//! checkout. `CMIS_COMMIT` and `CMIS_TARGET` feed the longer `cmis --version`.
//!
//! Packagers building outside git can pin the short form with
//! `CMIS_BUILD_VERSION`.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=CMIS_BUILD_VERSION");

    let package = env!("CARGO_PKG_VERSION");
    let commit = git(&["rev-parse", "--short=8", "HEAD"]);
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"]).is_some();

    let version = match env::var("CMIS_BUILD_VERSION") {
        Ok(pinned) if !pinned.trim().is_empty() => pinned.trim().to_string(),
        _ => short_version(package, commit.as_deref(), dirty),
    };

    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=CMIS_VERSION={version}");
    println!(
        "cargo:rustc-env=CMIS_COMMIT={}",
        commit.as_deref().unwrap_or("unknown")
    );
    println!("cargo:rustc-env=CMIS_TARGET={target}");
}

fn short_version(package: &str, commit: Option<&str>, dirty: bool) -> String {
    match (commit, dirty) {
        (Some(commit), true) => format!("{package}+{commit}.dirty"),
        (Some(commit), false) => format!("{package}+{commit}"),
        (None, _) => package.to_string(),
    }
}

/// Trimmed stdout of a successful, non-empty git command.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let stdout = stdout.trim();
    (!stdout.is_empty()).then(|| stdout.to_string())
}
