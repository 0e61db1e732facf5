/// Lexically normalize an index `file` reference into a relative path.
///
/// Empty and `.` segments are dropped and `..` pops the previous segment.
/// A `..` with nothing left to pop is discarded, so the result never climbs
/// above the documents root. A leading `/` is ignored. The result uses `/`
/// separators and is `.` when nothing remains.
///
/// The same string feeds both the local join and the remote URL join.
pub fn normalize_file_ref(file_ref: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in file_ref.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_file_ref;

    #[test]
    fn parent_segments_collapse() {
        assert_eq!(normalize_file_ref("a/../b.md"), "b.md");
        assert_eq!(normalize_file_ref("a/b/../../c/d.md"), "c/d.md");
    }

    #[test]
    fn redundant_separators_and_dots_are_removed() {
        assert_eq!(normalize_file_ref("./guides//setup.md"), "guides/setup.md");
        assert_eq!(normalize_file_ref("guides/./setup.md/"), "guides/setup.md");
    }

    #[test]
    fn traversal_is_clamped_to_root() {
        assert_eq!(normalize_file_ref("../../etc/passwd"), "etc/passwd");
        assert_eq!(normalize_file_ref("/etc/passwd"), "etc/passwd");
        assert_eq!(normalize_file_ref("a/../../b.md"), "b.md");
    }

    #[test]
    fn empty_result_is_current_dir() {
        assert_eq!(normalize_file_ref(""), ".");
        assert_eq!(normalize_file_ref("a/.."), ".");
        assert_eq!(normalize_file_ref("./"), ".");
    }

    #[test]
    fn plain_paths_are_unchanged() {
        assert_eq!(normalize_file_ref("overview.md"), "overview.md");
        assert_eq!(normalize_file_ref("api/v1/spec.yaml"), "api/v1/spec.yaml");
    }
}
