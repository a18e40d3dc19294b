use std::collections::BTreeSet;

use super::{Branch, Node};

/// Applies `f` to every non-branch node, carrying the dotted key path from
/// the root. The callback does not need to care whether a leaf is plain,
/// annotated or opaque.
pub fn visit<F>(tree: &Branch, f: &mut F)
where
    F: FnMut(&str, &Node),
{
    visit_branch(tree, "", f);
}

/// Collects the key path of every leaf position in the tree.
pub fn flatten(tree: &Branch) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    visit(tree, &mut |path, _| {
        paths.insert(path.to_string());
    });
    paths
}

fn visit_branch<F>(branch: &Branch, prefix: &str, f: &mut F)
where
    F: FnMut(&str, &Node),
{
    for (key, node) in branch {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            Node::Branch(child) => visit_branch(child, &path, f),
            leaf => f(&path, leaf),
        }
    }
}
