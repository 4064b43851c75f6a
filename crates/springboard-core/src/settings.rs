use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed runtime configuration: where the bundled JREs and the entry jar
/// live relative to the install root, and which JVM arguments every
/// launch carries. Built once at startup and never mutated. All fields
/// fall back to the shipped layout, so a partial override file only
/// replaces the keys it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    /// JVM arguments prepended to every launch, in order.
    pub jvm_args: Vec<String>,
    /// Root of the 32-bit runtime, relative to the install directory.
    pub runtime_x32: PathBuf,
    /// Root of the 64-bit runtime, relative to the install directory.
    pub runtime_x64: PathBuf,
    /// Working directory the child process is started in.
    pub working_dir: PathBuf,
    /// The jar handed to `java -jar`.
    pub entry_jar: PathBuf,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            jvm_args: vec!["-Dprism.vsync=false".to_string()],
            runtime_x32: PathBuf::from("runtime/x32"),
            runtime_x64: PathBuf::from("runtime/x64"),
            working_dir: PathBuf::from("bin"),
            entry_jar: PathBuf::from("bin/launcher.jar"),
        }
    }
}
