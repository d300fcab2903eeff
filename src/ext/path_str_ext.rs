use std::str::Split;

pub const SEGMENT_SEPARATOR: char = '/';
const EXTENSION_MARKER: char = '.';

/// Slash-delimited path helpers on plain strings.
///
/// Paths are never normalized here: separators and segments are taken
/// literally, so `"a//b"` has an empty middle segment.
pub trait PathStrExt {
    /// Whether the string carries a `.` anywhere, which is what marks a file.
    fn looks_like_file(&self) -> bool;
    fn segments(&self) -> Split<'_, char>;
    /// Equivalent to `self.starts_with(&format!("{parent}/"))` without allocating.
    fn is_nested_under(&self, parent: &str) -> bool;
}

impl PathStrExt for str {
    fn looks_like_file(&self) -> bool {
        self.contains(EXTENSION_MARKER)
    }

    fn segments(&self) -> Split<'_, char> {
        self.split(SEGMENT_SEPARATOR)
    }

    fn is_nested_under(&self, parent: &str) -> bool {
        self.strip_prefix(parent)
            .is_some_and(|rest| rest.starts_with(SEGMENT_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("bw.png", true)]
    #[case("marvel/bw.png", true)]
    #[case("marvel", false)]
    #[case("v1.2/notes", true)]
    #[case("", false)]
    fn test_looks_like_file(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(path.looks_like_file(), expected);
    }

    #[test]
    fn test_segments_are_literal() {
        let segments = "a//b/".segments().collect::<Vec<_>>();
        assert_eq!(segments, vec!["a", "", "b", ""]);
    }

    #[rstest]
    #[case("dc/aquaman/x.png", "dc/aquaman", true)]
    #[case("dc/aquaman/x.png", "dc", true)]
    #[case("dc/aquaman/x.png", "dc/aqua", false)]
    #[case("dc/aquaman", "dc/aquaman", false)]
    #[case("/root.txt", "", true)]
    #[case("root.txt", "", false)]
    fn test_is_nested_under(#[case] path: &str, #[case] parent: &str, #[case] expected: bool) {
        assert_eq!(path.is_nested_under(parent), expected);
    }
}
