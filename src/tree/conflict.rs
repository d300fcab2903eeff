use crate::ext::PathStrExt;
use crate::tree::PathKind;

/// Decides whether `candidate` may be added next to `existing`.
///
/// A directory candidate (no `.` anywhere) conflicts with any existing path
/// nested below it. A file candidate conflicts only with an identical path.
/// The rules are deliberately asymmetric: a dot-less candidate equal to an
/// existing dot-less path is accepted, and a file candidate is never matched
/// by prefix.
pub fn has_conflict<S: AsRef<str>>(existing: &[S], candidate: &str) -> bool {
    match PathKind::classify(candidate) {
        PathKind::Directory => existing
            .iter()
            .any(|path| path.as_ref().is_nested_under(candidate)),
        PathKind::File => existing.iter().any(|path| path.as_ref() == candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(&["dc/aquaman/x.png"], "dc/aquaman", true)]
    #[case(&["dc/aquaman/x.png"], "dc", true)]
    #[case(&["dc/aquaman/x.png"], "dc/aqua", false)]
    #[case(&["dc/aquaman/x.png"], "dc/aquaman/x", false)]
    #[case(&["Makefile"], "Makefile", false)]
    #[case(&["a/b.png"], "a/c.png", false)]
    #[case(&["a/b.png"], "a/b.png", true)]
    #[case(&["a/b.png/c"], "a/b.png", false)]
    #[case(&["a/b.png"], "a", true)]
    #[case(&[], "anything", false)]
    #[case(&[], "any.thing", false)]
    fn test_has_conflict(
        #[case] existing: &[&str],
        #[case] candidate: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(has_conflict(existing, candidate), expected);
    }

    #[test]
    fn test_has_conflict_accepts_owned_strings() {
        let existing = vec!["dc/character_list.txt".to_string()];
        assert!(has_conflict(&existing, "dc"));
        assert!(has_conflict(&existing, "dc/character_list.txt"));
    }
}
