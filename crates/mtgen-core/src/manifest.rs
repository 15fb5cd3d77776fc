//! `package.xml` deployment manifest.

use crate::config::GenConfig;
use crate::error::Result;
use crate::io;
use crate::paths;
use crate::xml::{Element, XmlDocument, METADATA_NS};
use std::path::{Path, PathBuf};

pub const CUSTOM_METADATA_TYPE: &str = "CustomMetadata";
pub const CUSTOM_PERMISSION_TYPE: &str = "CustomPermission";

fn types_block(members: &[String], type_name: &str) -> Element {
    Element::new("types")
        .children(members.iter().map(|m| Element::leaf("members", m.as_str())))
        .child(Element::leaf("name", type_name))
}

pub fn build_document(
    metadata_members: &[String],
    permission_members: &[String],
    config: &GenConfig,
) -> XmlDocument {
    let root = Element::new("Package")
        .attr("xmlns", METADATA_NS)
        .child(types_block(metadata_members, CUSTOM_METADATA_TYPE))
        .child(types_block(permission_members, CUSTOM_PERMISSION_TYPE))
        .child(Element::leaf("version", config.api_version.as_str()));
    XmlDocument::new(root).standalone()
}

pub fn generate(
    metadata_members: &[String],
    permission_members: &[String],
    config: &GenConfig,
    out_dir: &Path,
) -> Result<PathBuf> {
    let xml = build_document(metadata_members, permission_members, config).to_xml_string()?;
    io::write_file(out_dir, paths::PACKAGE_MANIFEST_FILE, &xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn two_type_blocks_then_version() {
        let doc = build_document(
            &strings(&["Microtrigger.X", "Microtrigger.Y"]),
            &strings(&["A_AX_BP_X", "A_AX_BP_Y"]),
            &GenConfig::default(),
        );
        assert!(doc.standalone);
        let names: Vec<&str> = doc.root.child_elements().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["types", "types", "version"]);

        let xml = doc.to_xml_string().unwrap();
        let expected = "<Package xmlns=\"http://soap.sforce.com/2006/04/metadata\">\n\
\x20   <types>\n\
\x20       <members>Microtrigger.X</members>\n\
\x20       <members>Microtrigger.Y</members>\n\
\x20       <name>CustomMetadata</name>\n\
\x20   </types>\n\
\x20   <types>\n\
\x20       <members>A_AX_BP_X</members>\n\
\x20       <members>A_AX_BP_Y</members>\n\
\x20       <name>CustomPermission</name>\n\
\x20   </types>\n\
\x20   <version>58.0</version>\n\
</Package>\n";
        assert!(xml.ends_with(expected), "unexpected manifest:\n{xml}");
    }

    #[test]
    fn permission_set_is_not_listed() {
        let xml = build_document(&strings(&["Microtrigger.X"]), &strings(&["A_AX_BP_X"]), &GenConfig::default())
            .to_xml_string()
            .unwrap();
        assert!(!xml.contains("PermissionSet"));
    }
}
