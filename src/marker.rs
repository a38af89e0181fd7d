//! Boot-scoped "display already initialised" marker
//!
//! The wake sequence (sleep-out, settle, display-on) only needs to run once
//! per boot, and the settle delay is the slowest part of the whole program.
//! A zero-length file on a tmpfs records that a previous invocation in this
//! boot already issued it; only the file's existence matters, never its
//! content. The check-then-create window against a concurrent invocation is
//! left open: two wakes in a row are harmless.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Default marker location; `/run` is cleared on every boot.
pub const DEFAULT_PATH: &str = "/run/lcd.init";

/// Handle to the marker file. The path is injected so tests (and unusual
/// deployments) can point it somewhere else.
pub struct InitMarker {
    path: PathBuf,
}

impl InitMarker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InitMarker { path: path.into() }
    }

    /// Marker at the standard boot-runtime location.
    pub fn at_default_path() -> Self {
        Self::new(DEFAULT_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a previous invocation this boot already ran the wake sequence.
    pub fn is_set(&self) -> bool {
        self.path.exists()
    }

    /// Record that the wake sequence has been issued.
    pub fn set(&self) -> io::Result<()> {
        File::create(&self.path).map(|_| ())
    }
}
