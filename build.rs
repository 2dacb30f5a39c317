use std::process::Command;

/// Exposes `git describe` output to the crate as `COW_MARKETPLACE_BUILD`,
/// so the footer can name the exact build. Outside a checkout nothing is set.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");

    let describe = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    if let Some(build) = describe {
        println!("cargo:rustc-env=COW_MARKETPLACE_BUILD={build}");
    }
}
