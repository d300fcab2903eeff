use hashlink::LinkedHashMap;

use crate::ext::PathStrExt;

/// Nested mapping from segment name to child node.
///
/// A node without children is either a file or an empty directory; the tree
/// itself does not distinguish the two. Siblings keep the order in which
/// their first path was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    children: LinkedHashMap<String, PathTree>,
}

impl PathTree {
    /// Builds the tree for a flat list of paths.
    ///
    /// Every path is split on `/` and walked from the root, creating missing
    /// nodes on the way, so paths with a common prefix share its nodes.
    /// Segments are taken literally, empty ones included.
    pub fn build<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths.into_iter().fold(Self::default(), |mut root, path| {
            root.insert_path(path.as_ref());
            root
        })
    }

    // `entry()` would move an existing segment to the back of its siblings.
    fn insert_path(&mut self, path: &str) {
        let mut current = self;
        for segment in path.segments() {
            let (_, child) = current
                .children
                .raw_entry_mut()
                .from_key(segment)
                .or_insert_with(|| (segment.to_string(), PathTree::default()));
            current = child;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn get(&self, segment: &str) -> Option<&PathTree> {
        self.children.get(segment)
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &PathTree)> {
        self.children
            .iter()
            .map(|(segment, child)| (segment.as_str(), child))
    }

    /// Looks up the node reached by walking `path` segment by segment.
    pub fn node_at(&self, path: &str) -> Option<&PathTree> {
        path.segments()
            .try_fold(self, |current, segment| current.get(segment))
    }

    /// Number of childless nodes below this one.
    pub fn leaf_count(&self) -> usize {
        self.children
            .values()
            .map(|child| {
                if child.is_empty() {
                    1
                } else {
                    child.leaf_count()
                }
            })
            .sum()
    }
}
