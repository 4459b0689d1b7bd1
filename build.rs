use std::{env, process::Command};

const SHA_VAR: &str = "STOREFRONT_GIT_SHA";

/// Short commit of the working tree, if git is available.
fn short_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;

    let sha = String::from_utf8(output.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed={SHA_VAR}");

    // Release pipelines build from tarballs without .git and pass the commit in.
    let sha = env::var(SHA_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(short_head)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={SHA_VAR}={sha}");
}
