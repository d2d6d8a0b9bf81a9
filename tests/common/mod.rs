#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];
pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

pub fn shelf_cmd() -> Command {
    let mut cmd = Command::cargo_bin("snapshelf").unwrap();
    cmd.env_remove("SNAPSHELF_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write an image fixture and return its path
pub fn write_image(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Ids printed by `list`, in shelf order
pub fn listed_ids(root: &Path) -> Vec<String> {
    let output = shelf_cmd()
        .current_dir(root)
        .arg("list")
        .output()
        .unwrap();
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .filter_map(|line| line.split_whitespace().nth(3).map(str::to_string))
        .collect()
}
