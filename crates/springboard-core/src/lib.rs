//! Decision logic for the springboard bootstrap launcher: which bundled
//! runtime to use, whether the install looks intact, and what the child
//! process invocation should be. Nothing in here spawns processes or
//! talks to the user; the binary wires those collaborators up.

pub mod args;
mod chipset;
mod error;
pub mod paths;
mod plan;
mod resolve;
mod runtime;
mod settings;
pub mod structure;

pub use crate::chipset::Chipset;
pub use crate::error::LaunchError;
pub use crate::plan::LaunchPlan;
pub use crate::resolve::{Resolution, ResolveWarning, resolve};
pub use crate::runtime::RuntimeHome;
pub use crate::settings::RuntimeSettings;
pub use crate::structure::{FileTree, NodeId, VerifyReport};
