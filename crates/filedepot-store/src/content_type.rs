//! Deterministic content-type resolution.
//!
//! Content types are derived from the storage key's file-extension suffix,
//! never stored. Resolution is a pure, total function: unknown or missing
//! extensions fall back to `application/octet-stream`.

/// Fallback for unknown or missing extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Resolve the MIME content type for a file name.
///
/// Matches on the final extension, case-insensitively: `"a.b.PDF"` resolves
/// to `application/pdf`, `"noext"` to `application/octet-stream`.
pub fn resolve_content_type(file_name: &str) -> &'static str {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => return OCTET_STREAM,
    };
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "txt" => "text/plain",
        "zip" => "application/zip",
        "rar" => "application/x-rar-compressed",
        _ => OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_extensions_resolve() {
        assert_eq!(resolve_content_type("report.pdf"), "application/pdf");
        assert_eq!(resolve_content_type("notes.txt"), "text/plain");
        assert_eq!(resolve_content_type("photo.png"), "image/png");
        assert_eq!(resolve_content_type("archive.zip"), "application/zip");
        assert_eq!(
            resolve_content_type("sheet.xlsx"),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
    }

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!(resolve_content_type("x.JPG"), "image/jpeg");
        assert_eq!(resolve_content_type("x.Jpeg"), "image/jpeg");
        assert_eq!(resolve_content_type("SCAN.GIF"), "image/gif");
    }

    #[test]
    fn only_the_final_extension_counts() {
        assert_eq!(resolve_content_type("a.b.PDF"), "application/pdf");
        assert_eq!(resolve_content_type("backup.tar.zip"), "application/zip");
    }

    #[test]
    fn missing_or_empty_extension_falls_back() {
        assert_eq!(resolve_content_type("noext"), OCTET_STREAM);
        assert_eq!(resolve_content_type("trailing."), OCTET_STREAM);
        assert_eq!(resolve_content_type(""), OCTET_STREAM);
        assert_eq!(resolve_content_type("file.xyz"), OCTET_STREAM);
    }

    proptest! {
        /// Resolution never panics and always yields a non-empty MIME string.
        #[test]
        fn resolution_is_total(name in ".*") {
            let ct = resolve_content_type(&name);
            prop_assert!(ct.contains('/'));
        }
    }
}
