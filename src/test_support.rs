use crate::names::NameComposer;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tempfile::TempDir;

/// Composer with a fixed seed so generated names are reproducible.
pub(crate) fn seeded_composer(seed: u64) -> NameComposer<StdRng> {
    NameComposer::seeded(seed)
}

/// Write `contents` to `name` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for as long as the file is used.
pub(crate) fn write_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
