//! Naming conventions shared by every generator.

/// Prefix of every microtrigger bypass permission.
pub const PERMISSION_PREFIX: &str = "A_AX_BP_";

/// Custom metadata type that microtrigger records belong to.
pub const MICROTRIGGER_TYPE: &str = "Microtrigger";

/// Canonical custom permission name for a microtrigger developer name.
pub fn derive_permission_name(developer_name: &str) -> String {
    format!("{PERMISSION_PREFIX}{developer_name}")
}

/// Qualified custom metadata member name, as listed in `package.xml`.
pub fn microtrigger_member_name(developer_name: &str) -> String {
    format!("{MICROTRIGGER_TYPE}.{developer_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_name_is_prefixed() {
        for name in ["AccountBeforeInsert", "X", "", "Opp_After_Update"] {
            assert_eq!(derive_permission_name(name), format!("A_AX_BP_{name}"));
        }
    }

    #[test]
    fn member_name_is_qualified() {
        assert_eq!(
            microtrigger_member_name("AccountBeforeInsert"),
            "Microtrigger.AccountBeforeInsert"
        );
    }
}
