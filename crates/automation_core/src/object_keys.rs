/// Final path segment of an object key. Both `/` and `\` count as
/// separators, so keys uploaded with Windows-style paths lose their
/// directories too.
pub fn base_name(key: &str) -> &str {
    key.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(key)
}

/// Destination key for a copied object: the configured prefix followed by
/// the source file name. The prefix is used verbatim, so a directory-style
/// prefix must carry its own trailing `/`.
pub fn target_object_key(prefix: &str, source_key: &str) -> String {
    format!("{prefix}{}", base_name(source_key))
}

/// `CopySource` value for a copy request.
pub fn copy_source(bucket: &str, key: &str) -> String {
    format!("{bucket}/{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_key_strips_source_directories() {
        assert_eq!(
            target_object_key("archive/encrypted/", "inbound/2024/report.csv"),
            "archive/encrypted/report.csv"
        );
    }

    #[test]
    fn key_without_directory_is_kept() {
        assert_eq!(base_name("report.csv"), "report.csv");
        assert_eq!(target_object_key("", "report.csv"), "report.csv");
    }

    #[test]
    fn trailing_slash_yields_empty_base_name() {
        assert_eq!(base_name("inbound/2024/"), "");
    }

    #[test]
    fn backslash_directories_are_stripped() {
        assert_eq!(base_name("inbound\\2024\\report.csv"), "report.csv");
        assert_eq!(
            target_object_key("encrypted/", "inbound/2024\\report.csv"),
            "encrypted/report.csv"
        );
    }

    #[test]
    fn copy_source_joins_bucket_and_key() {
        assert_eq!(
            copy_source("src-bucket", "path/to/file.txt"),
            "src-bucket/path/to/file.txt"
        );
    }
}
