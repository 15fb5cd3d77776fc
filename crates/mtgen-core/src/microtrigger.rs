//! Custom metadata records (`Microtrigger.<Name>.md-meta.xml`), one per row.

use crate::config::GenConfig;
use crate::error::Result;
use crate::io;
use crate::naming::{derive_permission_name, microtrigger_member_name};
use crate::output::Generated;
use crate::paths;
use crate::row::{InputRow, DEVELOPER_NAME, LABEL};
use crate::xml::{Element, XmlDocument, METADATA_NS, XSD_NS, XSI_NS};
use std::path::Path;

/// Column linking a microtrigger to its bypass permission.
pub const CUSTOM_PERMISSIONS_FIELD: &str = "Custom_Permissions__c";
/// Column selecting run or bypass behaviour.
pub const RUN_OR_BYPASS_FIELD: &str = "Run_Or_Bypass__c";
pub const BYPASS: &str = "Bypass";

/// Field/value pairs for a row: every column except `DeveloperName` and
/// `Label`, with the permission and run-mode columns overridden. Overridden
/// columns keep their source position; absent ones are appended. A column
/// named twice collapses to one entry at its first position holding the
/// last value.
pub fn field_values(row: &InputRow) -> Result<Vec<(String, String)>> {
    let permission = derive_permission_name(row.developer_name()?);
    let mut fields: Vec<(String, String)> = Vec::new();
    for (k, v) in &row.columns {
        if k == DEVELOPER_NAME || k == LABEL {
            continue;
        }
        match fields.iter_mut().find(|(seen, _)| seen == k) {
            Some(slot) => slot.1 = v.clone(),
            None => fields.push((k.clone(), v.clone())),
        }
    }

    for (column, value) in [
        (CUSTOM_PERMISSIONS_FIELD, permission.as_str()),
        (RUN_OR_BYPASS_FIELD, BYPASS),
    ] {
        match fields.iter_mut().find(|(k, _)| k == column) {
            Some(slot) => slot.1 = value.to_string(),
            None => fields.push((column.to_string(), value.to_string())),
        }
    }
    Ok(fields)
}

pub fn build_document(row: &InputRow, config: &GenConfig) -> Result<XmlDocument> {
    let values = field_values(row)?.into_iter().map(|(field, value)| {
        let value_el = if value.is_empty() && config.nil_empty_values {
            Element::new("value").attr("xsi:nil", "true")
        } else {
            Element::leaf("value", value)
        };
        Element::new("values")
            .child(Element::leaf("field", field))
            .child(value_el)
    });

    let root = Element::new("CustomMetadata")
        .attr("xmlns", METADATA_NS)
        .attr("xmlns:xsi", XSI_NS)
        .attr("xmlns:xsd", XSD_NS)
        .child(Element::leaf("label", row.label()?))
        .child(Element::leaf("protected", "false"))
        .children(values);
    Ok(XmlDocument::new(root))
}

/// Write one record per row. Returns `Microtrigger.<DeveloperName>` member
/// names in row order.
pub fn generate(rows: &[InputRow], config: &GenConfig, out_dir: &Path) -> Result<Generated> {
    let mut out = Generated::default();
    for row in rows {
        let member = microtrigger_member_name(row.developer_name()?);
        let xml = build_document(row, config)?.to_xml_string()?;
        let file = io::write_file(out_dir, &paths::custom_metadata_file(&member), &xml)?;
        out.push(member, file);
    }
    tracing::debug!(count = out.members.len(), "generated microtrigger records");
    Ok(out)
}
