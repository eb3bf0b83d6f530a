use termtree::Tree;

use crate::engine::model::ScaffoldReport;

/// Builds a string representation of the scaffolded tree for display.
pub fn build_tree_view(report: &ScaffoldReport) -> String {
    let mut root_tree = Tree::new(report.day_name.to_string());

    for e in &report.entries {
        let mut cur = &mut root_tree;
        for comp in e.path.components() {
            let s = comp.as_os_str().to_string_lossy().into_owned();
            let pos = match cur.leaves.iter().position(|t| t.root == s) {
                Some(pos) => pos,
                None => {
                    cur.leaves.push(Tree::new(s));
                    cur.leaves.len() - 1
                }
            };
            cur = &mut cur.leaves[pos];
        }
    }
    root_tree.to_string()
}
