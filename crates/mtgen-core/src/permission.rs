//! Custom permissions (`A_AX_BP_<Name>.customPermission-meta.xml`), one per row.

use crate::config::GenConfig;
use crate::error::Result;
use crate::io;
use crate::naming::derive_permission_name;
use crate::output::Generated;
use crate::paths;
use crate::row::InputRow;
use crate::xml::{Element, XmlDocument, METADATA_NS};
use std::path::Path;

pub fn build_document(row: &InputRow, config: &GenConfig) -> Result<XmlDocument> {
    let permission = derive_permission_name(row.developer_name()?);
    let description = format!("{}{}", config.description_prefix, row.label()?);
    let root = Element::new("CustomPermission")
        .attr("xmlns", METADATA_NS)
        .child(Element::leaf("description", description))
        .child(Element::leaf("isLicensed", "false"))
        .child(Element::leaf("label", permission));
    Ok(XmlDocument::new(root))
}

/// Write one custom permission per row. Returns permission names in row order.
pub fn generate(rows: &[InputRow], config: &GenConfig, out_dir: &Path) -> Result<Generated> {
    let mut out = Generated::default();
    for row in rows {
        let permission = derive_permission_name(row.developer_name()?);
        let xml = build_document(row, config)?.to_xml_string()?;
        let file = io::write_file(out_dir, &paths::custom_permission_file(&permission), &xml)?;
        out.push(permission, file);
    }
    tracing::debug!(count = out.members.len(), "generated custom permissions");
    Ok(out)
}
