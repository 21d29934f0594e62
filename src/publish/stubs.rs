//! Embedded component stubs shipped with the installer.
//!
//! Stubs are embedded at compile time so the binary carries everything it
//! publishes. Groups are addressed by tag; the publisher resolves a tag
//! here before writing anything.

/// Tag of the signature handler component group.
pub const SIGNATURE_HANDLER_TAG: &str = "signature-handler-stubs";

mod signature_stubs {
    pub const SIGNATURE_PAD_VUE: &str =
        include_str!("../../resources/stubs/signature/SignaturePad.vue");
    pub const SIGNATURE_FIELD_VUE: &str =
        include_str!("../../resources/stubs/signature/SignatureField.vue");
    pub const INDEX_TS: &str = include_str!("../../resources/stubs/signature/index.ts");
}

/// One publishable file inside a stub group.
#[derive(Debug, Clone, Copy)]
pub struct StubFile {
    /// Path relative to the publish destination
    pub relative_path: &'static str,
    pub contents: &'static str,
}

const SIGNATURE_GROUP: &[StubFile] = &[
    StubFile {
        relative_path: "signature/SignaturePad.vue",
        contents: signature_stubs::SIGNATURE_PAD_VUE,
    },
    StubFile {
        relative_path: "signature/SignatureField.vue",
        contents: signature_stubs::SIGNATURE_FIELD_VUE,
    },
    StubFile {
        relative_path: "signature/index.ts",
        contents: signature_stubs::INDEX_TS,
    },
];

const GROUPS: &[(&str, &[StubFile])] = &[(SIGNATURE_HANDLER_TAG, SIGNATURE_GROUP)];

/// Look up the files registered under a tag.
pub fn group(tag: &str) -> Option<&'static [StubFile]> {
    GROUPS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, files)| *files)
}

/// All registered stub groups.
pub fn groups() -> &'static [(&'static str, &'static [StubFile])] {
    GROUPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_stubs_compile() {
        // Just verify stubs are embedded correctly
        assert!(!signature_stubs::SIGNATURE_PAD_VUE.is_empty());
        assert!(!signature_stubs::SIGNATURE_FIELD_VUE.is_empty());
        assert!(!signature_stubs::INDEX_TS.is_empty());
    }

    #[test]
    fn test_group_lookup_by_tag() {
        let files = group(SIGNATURE_HANDLER_TAG).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files
            .iter()
            .any(|stub| stub.relative_path == "signature/SignaturePad.vue"));
    }

    #[test]
    fn test_unregistered_tag_has_no_group() {
        assert!(group("no-such-stubs").is_none());
    }
}
