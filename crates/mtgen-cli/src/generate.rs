use crate::output::{print_json, print_table};
use anyhow::Context;
use mtgen_core::{paths, pipeline, read_rows, GenConfig};
use std::path::Path;

pub struct GenerateArgs<'a> {
    pub file: &'a Path,
    pub out: Option<&'a Path>,
    pub config: Option<&'a Path>,
    pub json: bool,
}

pub fn run(root: &Path, args: GenerateArgs<'_>) -> anyhow::Result<()> {
    let mut config = match args.config {
        Some(p) => {
            let p = paths::resolve(root, p);
            GenConfig::load(&p).with_context(|| format!("failed to load config {}", p.display()))?
        }
        None => GenConfig::load_or_default(root).context("failed to load mtgen.yaml")?,
    };
    if let Some(out) = args.out {
        config.output_dir = out.to_path_buf();
    }

    let input = paths::resolve(root, args.file);
    let rows = read_rows(&input).with_context(|| format!("failed to read {}", input.display()))?;

    let out_dir = config.output_path(root);
    let summary = pipeline::generate(&rows, &config, &out_dir)
        .with_context(|| format!("failed to generate metadata into {}", out_dir.display()))?;

    if args.json {
        return print_json(&summary);
    }

    let table: Vec<Vec<String>> = summary
        .files
        .iter()
        .map(|f| {
            let name = f
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            vec![kind_of(&name).to_string(), name]
        })
        .collect();
    print_table(&["KIND", "FILE"], &table);
    println!(
        "\n{} rows -> {} files in {}",
        summary.rows,
        summary.files.len(),
        summary.output_dir.display()
    );
    Ok(())
}

fn kind_of(file_name: &str) -> &'static str {
    if file_name.ends_with(".md-meta.xml") {
        "CustomMetadata"
    } else if file_name.ends_with(".customPermission-meta.xml") {
        "CustomPermission"
    } else if file_name.ends_with(".permissionset-meta.xml") {
        "PermissionSet"
    } else {
        "Package"
    }
}
