use crate::config::GenConfig;
use crate::error::{GenError, Result};
use crate::row::InputRow;
use crate::{manifest, microtrigger, permission, permission_set};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Everything one run wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub rows: usize,
    pub microtriggers: Vec<String>,
    pub permissions: Vec<String>,
    pub files: Vec<PathBuf>,
}

/// Fail on the first repeated `DeveloperName`. Every derived file and member
/// name is keyed on it, so a repeat would silently overwrite output.
pub fn check_unique(rows: &[InputRow]) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        let name = row.developer_name()?;
        if let Some(&first) = seen.get(name) {
            return Err(GenError::DuplicateDeveloperName {
                name: name.to_string(),
                first,
                second: row.index,
            });
        }
        seen.insert(name, row.index);
    }
    Ok(())
}

/// Run every generator over `rows`, writing into `out_dir`.
///
/// Stops at the first error. Files written before the failure are left in
/// place.
pub fn generate(rows: &[InputRow], config: &GenConfig, out_dir: &Path) -> Result<RunSummary> {
    check_unique(rows)?;

    let microtriggers = microtrigger::generate(rows, config, out_dir)?;
    let permissions = permission::generate(rows, config, out_dir)?;
    let permission_set_file = permission_set::generate(rows, config, out_dir)?;
    let manifest_file = manifest::generate(
        &microtriggers.members,
        &permissions.members,
        config,
        out_dir,
    )?;

    tracing::warn!(
        file = %permission_set_file.display(),
        "permission set is not listed in package.xml; add it manually before deploying"
    );

    let mut files = microtriggers.files;
    files.extend(permissions.files);
    files.push(permission_set_file);
    files.push(manifest_file);

    tracing::info!(
        rows = rows.len(),
        files = files.len(),
        out = %out_dir.display(),
        "generation complete"
    );

    Ok(RunSummary {
        output_dir: out_dir.to_path_buf(),
        rows: rows.len(),
        microtriggers: microtriggers.members,
        permissions: permissions.members,
        files,
    })
}
