use derive_more::Display;

use crate::ext::PathStrExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PathKind {
    #[display("file")]
    File,
    #[display("directory")]
    Directory,
}

impl PathKind {
    /// Anything containing a `.` is a file, everything else a directory.
    ///
    /// Applied to a whole candidate path when checking conflicts and to a
    /// single segment key when rendering.
    pub fn classify(path: &str) -> Self {
        if path.looks_like_file() {
            PathKind::File
        } else {
            PathKind::Directory
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("fact_marvel_beats_dc.txt", PathKind::File)]
    #[case("marvel/black_widow", PathKind::Directory)]
    #[case("release-1.0/bin", PathKind::File)]
    #[case("Makefile", PathKind::Directory)]
    fn test_classify(#[case] path: &str, #[case] expected: PathKind) {
        assert_eq!(PathKind::classify(path), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(PathKind::File.to_string(), "file");
        assert_eq!(PathKind::Directory.to_string(), "directory");
    }
}
