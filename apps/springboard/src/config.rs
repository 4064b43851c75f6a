use springboard_core::{FileTree, RuntimeSettings};
use std::path::Path;
use tracing::warn;

/// Optional per-install override for the built-in runtime settings.
pub const SETTINGS_FILE: &str = "springboard.toml";

/// Shipped defaults, optionally overridden key-by-key from
/// `springboard.toml` next to the launcher. A missing file is the normal
/// case; a malformed one is reported and ignored so the launch can still
/// go ahead on the defaults.
pub fn load_settings(base_dir: &Path) -> RuntimeSettings {
    let path = base_dir.join(SETTINGS_FILE);
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return RuntimeSettings::default();
    };
    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("ignoring malformed {}: {err}", path.display());
            RuntimeSettings::default()
        }
    }
}

/// Files the installer is expected to have placed next to the launcher.
/// Checked once at startup; missing entries are reported but never block
/// the launch.
pub fn core_file_tree() -> FileTree {
    let mut tree = FileTree::new("bin");
    tree.add(tree.root(), "launcher.jar");
    tree.add(tree.root(), "app.jar");
    let config = tree.add(tree.root(), "config");
    tree.add(config, "logging.xml");
    tree
}
