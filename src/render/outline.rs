use std::collections::HashSet;

use colored::Colorize;

use crate::ext::SEGMENT_SEPARATOR;
use crate::tree::{PathKind, PathTree};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const GAP: &str = "    ";
const FILE_ACTIONS: &str = "[edit] [delete]";
const COLLAPSED_MARKER: &str = "+";
const EMPTY_HINT: &str = "(empty)";

/// Renders `tree` as an indented outline, one entry per line.
///
/// Keys containing a `.` are shown as files with their actions, everything
/// else as a directory. Directories whose slash path is in `collapsed` hide
/// their children.
pub fn render_outline(tree: &PathTree, collapsed: &HashSet<String>, color: bool) -> Vec<String> {
    if tree.is_empty() {
        return vec![EMPTY_HINT.to_string()];
    }

    let mut lines = Vec::new();
    let mut renderer = OutlineRenderer {
        collapsed,
        color,
        lines: &mut lines,
    };
    renderer.render_children(tree, "", "");
    lines
}

struct OutlineRenderer<'a> {
    collapsed: &'a HashSet<String>,
    color: bool,
    lines: &'a mut Vec<String>,
}

impl OutlineRenderer<'_> {
    fn render_children(&mut self, node: &PathTree, parent_path: &str, prefix: &str) {
        let count = node.len();
        for (index, (segment, child)) in node.children().enumerate() {
            let is_last = index + 1 == count;
            let path = if parent_path.is_empty() {
                segment.to_string()
            } else {
                format!("{parent_path}{SEGMENT_SEPARATOR}{segment}")
            };
            let connector = if is_last { LAST_BRANCH } else { BRANCH };

            let (label, expanded) = match PathKind::classify(segment) {
                PathKind::File => (self.file_label(segment), true),
                PathKind::Directory => {
                    let is_collapsed = self.collapsed.contains(&path) && !child.is_empty();
                    (self.directory_label(segment, is_collapsed), !is_collapsed)
                }
            };
            self.lines.push(format!("{prefix}{connector}{label}"));

            if expanded && !child.is_empty() {
                let child_prefix = format!("{prefix}{}", if is_last { GAP } else { PIPE });
                self.render_children(child, &path, &child_prefix);
            }
        }
    }

    fn file_label(&self, segment: &str) -> String {
        if self.color {
            format!("{} {}", segment, FILE_ACTIONS.dimmed())
        } else {
            format!("{segment} {FILE_ACTIONS}")
        }
    }

    fn directory_label(&self, segment: &str, is_collapsed: bool) -> String {
        let name = format!("{segment}{SEGMENT_SEPARATOR}");
        match (self.color, is_collapsed) {
            (true, true) => format!("{} {}", name.blue().bold(), COLLAPSED_MARKER.yellow()),
            (true, false) => name.blue().bold().to_string(),
            (false, true) => format!("{name} {COLLAPSED_MARKER}"),
            (false, false) => name,
        }
    }
}
