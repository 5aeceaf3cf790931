//! Temporary workspaces holding network and session files for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use farewise_core::NetworkSnapshot;
use farewise_core::test_support::five_location_network;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents);
        path
    }

    pub(super) fn write_network(&self, name: &str, network: &NetworkSnapshot) -> Utf8PathBuf {
        let payload = serde_json::to_vec_pretty(network).expect("serialise network");
        self.write(name, &payload)
    }

    pub(super) fn write_five_location_network(&self) -> Utf8PathBuf {
        self.write_network("network.json", &five_location_network())
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, contents).expect("write test file");
}

pub(super) fn parse_output(buffer: &[u8]) -> Value {
    serde_json::from_slice(buffer).expect("output should be JSON")
}
