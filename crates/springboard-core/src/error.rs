use thiserror::Error;

/// Conditions that abort the launch before a child process is spawned.
/// Each maps to its own process exit code so wrapper scripts can tell
/// the failure modes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("no bundled Java runtime was found; please reinstall the application")]
    NoRuntime,

    #[error("no 32-bit runtime is available for this 32-bit machine; please reinstall the 32-bit build")]
    MissingX32Runtime,
}

impl LaunchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::NoRuntime => 10,
            LaunchError::MissingX32Runtime => 11,
        }
    }
}
