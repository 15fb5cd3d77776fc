use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File name constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "mtgen.yaml";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

pub const PERMISSION_SET_FILE: &str = "MicroTriggers_Integration_User_E.permissionset-meta.xml";
pub const PACKAGE_MANIFEST_FILE: &str = "package.xml";

const CUSTOM_METADATA_SUFFIX: &str = ".md-meta.xml";
const CUSTOM_PERMISSION_SUFFIX: &str = ".customPermission-meta.xml";

// ---------------------------------------------------------------------------
// File name helpers
// ---------------------------------------------------------------------------

/// `Microtrigger.<DeveloperName>.md-meta.xml`
pub fn custom_metadata_file(member_name: &str) -> String {
    format!("{member_name}{CUSTOM_METADATA_SUFFIX}")
}

/// `<PermissionName>.customPermission-meta.xml`
pub fn custom_permission_file(permission_name: &str) -> String {
    format!("{permission_name}{CUSTOM_PERMISSION_SUFFIX}")
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve `path` against `root` unless it is already absolute.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(
            custom_metadata_file("Microtrigger.AccountBeforeInsert"),
            "Microtrigger.AccountBeforeInsert.md-meta.xml"
        );
        assert_eq!(
            custom_permission_file("A_AX_BP_AccountBeforeInsert"),
            "A_AX_BP_AccountBeforeInsert.customPermission-meta.xml"
        );
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            resolve(root, Path::new("input.csv")),
            PathBuf::from("/tmp/proj/input.csv")
        );
        assert_eq!(
            resolve(root, Path::new("/data/input.csv")),
            PathBuf::from("/data/input.csv")
        );
    }
}
