use std::process::Command;

fn main() {
    // abbreviated commit SHA, shown by `lazyseq --version`
    let sha = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok());
    let sha = sha.map_or_else(|| "unknown".to_owned(), |s| s.trim().to_owned());
    println!("cargo:rustc-env=COMMIT_SHA={sha}");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
