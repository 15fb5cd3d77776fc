//! The aggregate permission set granting every bypass permission.

use crate::config::GenConfig;
use crate::error::Result;
use crate::io;
use crate::naming::derive_permission_name;
use crate::paths;
use crate::row::InputRow;
use crate::xml::{Element, XmlDocument, METADATA_NS};
use std::path::{Path, PathBuf};

pub fn build_document(rows: &[InputRow], config: &GenConfig) -> Result<XmlDocument> {
    let mut root = Element::new("PermissionSet").attr("xmlns", METADATA_NS);
    for row in rows {
        root = root.child(
            Element::new("customPermissions")
                .child(Element::leaf("enabled", "true"))
                .child(Element::leaf(
                    "name",
                    derive_permission_name(row.developer_name()?),
                )),
        );
    }
    let root = root.child(Element::leaf("label", config.permission_set_label.as_str()));
    Ok(XmlDocument::new(root))
}

/// Write the single permission set file. Its name is not fed to the
/// package manifest.
pub fn generate(rows: &[InputRow], config: &GenConfig, out_dir: &Path) -> Result<PathBuf> {
    let xml = build_document(rows, config)?.to_xml_string()?;
    io::write_file(out_dir, paths::PERMISSION_SET_FILE, &xml)
}
