use crate::chipset::Chipset;
use crate::error::LaunchError;

/// Non-fatal conditions the user should hear about before the launch
/// goes ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveWarning {
    /// A 64-bit host is falling back to the 32-bit runtime.
    ThirtyTwoBitFallback,
}

/// Outcome of a successful resolution: the chipset is always X32 or X64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub chipset: Chipset,
    pub warnings: Vec<ResolveWarning>,
}

/// Picks the runtime width to launch with.
///
/// The rules, in order:
/// 1. neither runtime present: fatal, nothing to launch;
/// 2. 64-bit host without a 64-bit runtime: warn, keep going;
/// 3. 32-bit host without a 32-bit runtime: fatal, the 64-bit runtime
///    cannot run there;
/// 4. both present: an explicit command-line choice wins, otherwise the
///    host width decides;
/// 5. one present: use it.
pub fn resolve(
    has_x32: bool,
    has_x64: bool,
    host_is_64bit: bool,
    explicit: Chipset,
) -> Result<Resolution, LaunchError> {
    if !has_x32 && !has_x64 {
        return Err(LaunchError::NoRuntime);
    }

    let mut warnings = Vec::new();
    if host_is_64bit && !has_x64 {
        warnings.push(ResolveWarning::ThirtyTwoBitFallback);
    }
    if !host_is_64bit && !has_x32 {
        return Err(LaunchError::MissingX32Runtime);
    }

    let chipset = if has_x32 && has_x64 {
        match explicit {
            Chipset::X32 | Chipset::X64 => explicit,
            Chipset::Undetermined => {
                if host_is_64bit {
                    Chipset::X64
                } else {
                    Chipset::X32
                }
            }
        }
    } else if has_x32 {
        Chipset::X32
    } else {
        Chipset::X64
    };

    Ok(Resolution { chipset, warnings })
}

#[cfg(test)]
mod tests {
    use super::{Resolution, ResolveWarning, resolve};
    use crate::chipset::Chipset;
    use crate::error::LaunchError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Expected {
        Use(Chipset),
        NoRuntime,
        Missing32,
    }

    // (has_x32, has_x64, host_is_64bit, explicit) for every combination.
    const TABLE: [(bool, bool, bool, Chipset, Expected); 24] = [
        (false, false, false, Chipset::Undetermined, Expected::NoRuntime),
        (false, false, false, Chipset::X32, Expected::NoRuntime),
        (false, false, false, Chipset::X64, Expected::NoRuntime),
        (false, false, true, Chipset::Undetermined, Expected::NoRuntime),
        (false, false, true, Chipset::X32, Expected::NoRuntime),
        (false, false, true, Chipset::X64, Expected::NoRuntime),
        (false, true, false, Chipset::Undetermined, Expected::Missing32),
        (false, true, false, Chipset::X32, Expected::Missing32),
        (false, true, false, Chipset::X64, Expected::Missing32),
        (false, true, true, Chipset::Undetermined, Expected::Use(Chipset::X64)),
        (false, true, true, Chipset::X32, Expected::Use(Chipset::X64)),
        (false, true, true, Chipset::X64, Expected::Use(Chipset::X64)),
        (true, false, false, Chipset::Undetermined, Expected::Use(Chipset::X32)),
        (true, false, false, Chipset::X32, Expected::Use(Chipset::X32)),
        (true, false, false, Chipset::X64, Expected::Use(Chipset::X32)),
        (true, false, true, Chipset::Undetermined, Expected::Use(Chipset::X32)),
        (true, false, true, Chipset::X32, Expected::Use(Chipset::X32)),
        (true, false, true, Chipset::X64, Expected::Use(Chipset::X32)),
        (true, true, false, Chipset::Undetermined, Expected::Use(Chipset::X32)),
        (true, true, false, Chipset::X32, Expected::Use(Chipset::X32)),
        (true, true, false, Chipset::X64, Expected::Use(Chipset::X64)),
        (true, true, true, Chipset::Undetermined, Expected::Use(Chipset::X64)),
        (true, true, true, Chipset::X32, Expected::Use(Chipset::X32)),
        (true, true, true, Chipset::X64, Expected::Use(Chipset::X64)),
    ];

    #[test]
    fn every_input_combination_matches_the_documented_rules() {
        for (has_x32, has_x64, host_is_64bit, explicit, expected) in TABLE {
            let outcome = resolve(has_x32, has_x64, host_is_64bit, explicit);
            let case = format!(
                "has_x32={has_x32} has_x64={has_x64} host64={host_is_64bit} explicit={explicit}"
            );
            match expected {
                Expected::Use(chipset) => {
                    let resolution = outcome.unwrap_or_else(|err| {
                        panic!("unexpected fatal {err:?} for {case}")
                    });
                    assert_eq!(resolution.chipset, chipset, "{case}");
                }
                Expected::NoRuntime => {
                    assert_eq!(outcome, Err(LaunchError::NoRuntime), "{case}");
                }
                Expected::Missing32 => {
                    assert_eq!(outcome, Err(LaunchError::MissingX32Runtime), "{case}");
                }
            }
        }
    }

    #[test]
    fn falling_back_to_x32_on_a_64bit_host_warns() {
        let resolution = resolve(true, false, true, Chipset::Undetermined).unwrap();
        assert_eq!(
            resolution,
            Resolution {
                chipset: Chipset::X32,
                warnings: vec![ResolveWarning::ThirtyTwoBitFallback],
            }
        );
    }

    #[test]
    fn no_warning_when_the_host_width_is_served() {
        for (has_x32, has_x64, host_is_64bit, explicit) in [
            (true, true, true, Chipset::Undetermined),
            (true, true, false, Chipset::X64),
            (true, false, false, Chipset::Undetermined),
            (false, true, true, Chipset::X32),
        ] {
            let resolution = resolve(has_x32, has_x64, host_is_64bit, explicit).unwrap();
            assert!(resolution.warnings.is_empty());
        }
    }

    // Asymmetry the resolver must keep: an explicit choice only applies
    // when both runtimes are present, never to force a missing one.
    #[test]
    fn explicit_choice_cannot_select_an_absent_runtime() {
        let resolution = resolve(true, false, true, Chipset::X64).unwrap();
        assert_eq!(resolution.chipset, Chipset::X32);
    }
}
