use serde::{Deserialize, Serialize};

/// A CPU/runtime width, or "no explicit choice made".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chipset {
    X32,
    X64,
    Undetermined,
}

impl std::fmt::Display for Chipset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Chipset::X32 => "x32",
            Chipset::X64 => "x64",
            Chipset::Undetermined => "undetermined",
        };
        f.write_str(label)
    }
}
