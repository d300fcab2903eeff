use tracing::{debug, error, info, warn};

use crate::editor::EditorUi;
use crate::tree::{Mutation, PathList, PathListError, PathTree};

const EDIT_PROMPT: &str = "Enter new file path";

/// Owns the path list, the tree derived from it, and the UI showing it.
///
/// The list only changes through [`Editor::add`], [`Editor::edit`] and
/// [`Editor::delete`]. After each change the tree is rebuilt from the whole
/// list and handed to the UI, so `tree()` always equals `PathTree::build(paths())`.
pub struct Editor<U: EditorUi> {
    paths: PathList,
    tree: PathTree,
    ui: U,
}

impl<U: EditorUi> Editor<U> {
    pub fn new(paths: PathList, mut ui: U) -> Self {
        let tree = PathTree::build(&paths);
        ui.redraw(&tree);
        Self { paths, tree, ui }
    }

    pub fn paths(&self) -> &PathList {
        &self.paths
    }

    pub fn tree(&self) -> &PathTree {
        &self.tree
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn into_ui(self) -> U {
        self.ui
    }

    /// Access for UI-only state such as collapsed directories. Call
    /// [`Editor::refresh`] afterwards to show the effect.
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Redraws the current tree without touching the list.
    pub fn refresh(&mut self) {
        self.ui.redraw(&self.tree);
    }

    pub fn add(&mut self, raw: &str) -> Mutation {
        match self.paths.add(raw) {
            Ok(mutation) => self.apply(mutation),
            Err(err) => {
                if let PathListError::PathConflict { path } = &err {
                    info!("Rejected '{}': conflicts with an existing path", path);
                }
                self.ui.alert(&err.to_string());
                Mutation::Unchanged
            }
        }
    }

    /// Renames the path `suffix` resolves to, asking the UI for the new name.
    pub fn edit(&mut self, suffix: &str) -> Mutation {
        let matched = match self.paths.resolve(suffix) {
            Ok(matched) => matched.to_string(),
            Err(err) => {
                error!("{}", err);
                return Mutation::Unchanged;
            }
        };

        let answer = self.ui.prompt(EDIT_PROMPT, &matched);
        match self.paths.rename(suffix, answer.as_deref()) {
            Ok(mutation) => self.apply(mutation),
            Err(err @ PathListError::InvalidAppend { .. }) => {
                self.ui.alert(&err.to_string());
                Mutation::Unchanged
            }
            Err(err) => {
                warn!("Rename of '{}' failed: {}", suffix, err);
                Mutation::Unchanged
            }
        }
    }

    pub fn delete(&mut self, suffix: &str) -> Mutation {
        match self.paths.delete(suffix) {
            0 => Mutation::Unchanged,
            _ => self.apply(Mutation::Changed),
        }
    }

    fn apply(&mut self, mutation: Mutation) -> Mutation {
        if mutation == Mutation::Changed {
            self.tree = PathTree::build(&self.paths);
            debug!(
                "Rebuilt tree from {} path(s), {} leaf node(s)",
                self.paths.len(),
                self.tree.leaf_count()
            );
            self.ui.redraw(&self.tree);
        }
        mutation
    }
}
