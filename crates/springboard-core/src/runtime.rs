use crate::paths::{file_exists, java_binary_rel};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One bundled JRE install root. Availability is decided by probing for
/// the java binary underneath it; nothing validates that the binary is
/// runnable or that its width matches the directory name.
#[derive(Debug, Clone)]
pub struct RuntimeHome {
    dir: PathBuf,
}

impl RuntimeHome {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the java binary this runtime would be launched with.
    pub fn java_binary(&self) -> PathBuf {
        self.dir.join(java_binary_rel())
    }

    /// Point-in-time existence check.
    pub fn check(&self) -> bool {
        let probe = self.java_binary();
        debug!(path = %probe.display(), "looking for bundled runtime");
        file_exists(&probe)
    }
}
