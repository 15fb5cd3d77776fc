use std::path::{Path, PathBuf};

/// Resolve the base directory for input, output and config paths.
///
/// Priority:
/// 1. `--root` flag / `MTGEN_ROOT` env var (passed in as `explicit`)
/// 2. The current working directory
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
