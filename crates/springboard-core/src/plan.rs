use crate::runtime::RuntimeHome;
use crate::settings::RuntimeSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The fully resolved child invocation. Building a plan has no side
/// effects; spawning it is the binary's concern.
///
/// Argument order is a contract: fixed JVM arguments, then the
/// `-jar <entry jar>` pair, then whatever user arguments survived
/// filtering. Nothing may rearrange it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub executable: PathBuf,
    pub working_dir: PathBuf,
    pub args: Vec<String>,
    pub show_console: bool,
}

impl LaunchPlan {
    pub fn build(
        settings: &RuntimeSettings,
        base_dir: &Path,
        runtime: &RuntimeHome,
        user_args: &[String],
        show_console: bool,
    ) -> Self {
        let mut args = settings.jvm_args.clone();
        args.push("-jar".to_string());
        args.push(
            base_dir
                .join(&settings.entry_jar)
                .to_string_lossy()
                .into_owned(),
        );
        if !user_args.is_empty() {
            args.extend(user_args.iter().cloned());
        }

        Self {
            executable: runtime.java_binary(),
            working_dir: base_dir.join(&settings.working_dir),
            args,
            show_console,
        }
    }
}
