//! Command-line handling for the launcher's own flags. Everything the
//! launcher does not recognize is forwarded to the child untouched, so
//! matching here is a permissive case-insensitive prefix test on whole
//! argument tokens rather than a strict parser.

use crate::chipset::Chipset;

/// Selects the runtime width, e.g. `--architecture=x64`.
pub const ARCHITECTURE_FLAG: &str = "--architecture";

/// Requests a visible console window for the child process.
pub const SHELL_FLAG: &str = "--shell";

const RESERVED_PREFIXES: [&str; 2] = [ARCHITECTURE_FLAG, SHELL_FLAG];

fn has_prefix_ignore_case(arg: &str, prefix: &str) -> bool {
    arg.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Scans for an explicit `--architecture` selection. The value may be
/// glued to the flag, separated by `=`, or separated by a space inside
/// the same token; `x64`/`64` and `x32`/`32` are accepted in any case.
/// The first argument carrying a recognizable value wins; an argument
/// with an unrecognized remainder is skipped, not an error.
pub fn chipset_override(args: &[String]) -> Chipset {
    for arg in args {
        if !has_prefix_ignore_case(arg, ARCHITECTURE_FLAG) {
            continue;
        }
        let value: String = arg[ARCHITECTURE_FLAG.len()..]
            .chars()
            .filter(|c| *c != '=' && *c != ' ')
            .collect();
        match value.to_ascii_lowercase().as_str() {
            "x64" | "64" => return Chipset::X64,
            "x32" | "32" => return Chipset::X32,
            _ => {}
        }
    }
    Chipset::Undetermined
}

/// True when any argument asks for a visible console. The flag is
/// detected, not consumed; [`filter_reserved`] strips it later.
pub fn wants_console(args: &[String]) -> bool {
    args.iter()
        .any(|arg| has_prefix_ignore_case(arg, SHELL_FLAG))
}

/// Drops every launcher-only argument. Order and duplicates of the
/// remaining arguments survive; the input is left untouched.
pub fn filter_reserved(args: &[String]) -> Vec<String> {
    args.iter()
        .filter(|arg| {
            !RESERVED_PREFIXES
                .iter()
                .any(|prefix| has_prefix_ignore_case(arg, prefix))
        })
        .cloned()
        .collect()
}
