use crate::store::LocaleStore;
use crate::tree::{Branch, Node, flatten};

/// Per-language result of a workspace sync.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    pub language: String,
    pub added: usize,
}

/// Deep-merges the baseline into the target, filling only absent keys.
/// An existing target value is never overwritten, whatever its shape.
/// When the two trees disagree on whether a key is a branch or a leaf,
/// the target value wins and a warning names the path.
pub fn merge_missing(target: &Branch, baseline: &Branch) -> Branch {
    merge_branch(target, baseline, "")
}

fn merge_branch(target: &Branch, baseline: &Branch, prefix: &str) -> Branch {
    let mut merged = target.clone();
    for (key, base_node) in baseline {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match base_node {
            Node::Branch(base_child) => {
                let existing = merged.get(key).cloned();
                match existing {
                    None => {
                        let filled = merge_branch(&Branch::new(), base_child, &path);
                        merged.insert(key.clone(), Node::Branch(filled));
                    }
                    Some(Node::Branch(existing)) => {
                        let filled = merge_branch(&existing, base_child, &path);
                        merged.insert(key.clone(), Node::Branch(filled));
                    }
                    Some(_) => {
                        log::warn!(
                            "\"{}\" is a branch in the baseline but a leaf in the target, keeping the target value",
                            path
                        );
                    }
                }
            }
            leaf => {
                if let Some(existing) = merged.get(key) {
                    if existing.is_branch() {
                        log::warn!(
                            "\"{}\" is a leaf in the baseline but a branch in the target, keeping the target value",
                            path
                        );
                    }
                } else {
                    merged.insert(key.clone(), leaf.clone());
                }
            }
        }
    }
    merged
}

/// Fills gaps in every discovered language from the baseline tree.
///
/// A baseline that cannot be loaded aborts the run. A language that cannot
/// be loaded is logged and skipped. A language is only written back when
/// the merge actually added keys.
pub fn sync_workspace(store: &LocaleStore) -> crate::Result<Vec<SyncOutcome>> {
    let baseline = store.load_baseline()?;
    let mut outcomes = Vec::new();

    for language in store.discover_languages()? {
        if language == store.baseline() {
            continue;
        }
        let target = match store.load_tree(&language) {
            Ok(tree) => tree,
            Err(err) => {
                log::warn!("skipping \"{}\": {}", language, err);
                continue;
            }
        };

        let before = flatten(&target).len();
        let merged = merge_missing(&target, &baseline);
        let added = flatten(&merged).len() - before;

        if added > 0 {
            store.save_tree(&language, &merged)?;
            log::info!("\"{}\": added {} missing keys", language, added);
        } else {
            log::info!("\"{}\": already complete", language);
        }
        outcomes.push(SyncOutcome { language, added });
    }

    Ok(outcomes)
}
