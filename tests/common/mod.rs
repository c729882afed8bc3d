#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn caltrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("caltrack").unwrap();
    cmd.env_remove("CALTRACK_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `caltrack init` in `dir`
pub fn init_tracker(dir: &Path) {
    caltrack_cmd().arg("init").arg(dir).assert().success();
}

/// Add one entry to the tracker at `dir`
pub fn add_entry(dir: &Path, date: &str, intake: &str, burned: &str, description: &str) {
    caltrack_cmd()
        .current_dir(dir)
        .args([
            "add",
            "--date",
            date,
            "--intake",
            intake,
            "--burned",
            burned,
            "--description",
            description,
        ])
        .assert()
        .success();
}
