use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory removed on drop; the prefix shows up in leftover names when debugging.
#[derive(Debug)]
pub struct TempDir {
    inner: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempDir {
    pub fn new(prefix: &str, namespace: &str) -> Self {
        let inner = tempfile::Builder::new()
            .prefix(&format!("{namespace}_{prefix}_"))
            .tempdir()
            .expect("create temp dir");
        Self { inner }
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap()
    }
}
