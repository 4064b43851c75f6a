/// Host CPU width. A 32-bit build running under WOW64 still reports a
/// 64-bit host; Windows exposes that through the architew6432 variable.
pub fn is_64bit() -> bool {
    if cfg!(target_pointer_width = "64") {
        return true;
    }
    if cfg!(target_os = "windows") {
        return std::env::var("PROCESSOR_ARCHITEW6432")
            .map(|arch| arch.eq_ignore_ascii_case("amd64") || arch.eq_ignore_ascii_case("arm64"))
            .unwrap_or(false);
    }
    false
}
