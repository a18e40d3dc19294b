mod walk;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use walk::{flatten, visit};

/// A grouping node: translation keys mapped to sub-trees or leaves.
/// Insertion order is kept so that serialized files stay diff-friendly.
pub type Branch = IndexMap<String, Node>;

/// One node of a locale tree.
///
/// Variant order matters for untagged deserialization: an object with
/// exactly the `text`/`humanVerified` fields must become an [`Entry`]
/// before the branch variant gets a chance to swallow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Annotated leaf, the current on-disk form.
    Entry(Entry),
    /// Plain-string leaf, the legacy on-disk form.
    Text(String),
    /// Nested grouping of keys.
    Branch(Branch),
    /// Any other JSON value (array, number, boolean). Passed through
    /// unchanged by every transform.
    Opaque(Value),
}

/// Annotated translation leaf: the text plus whether a human translator
/// confirmed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Entry {
    pub text: String,
    pub human_verified: bool,
}

impl Node {
    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Node::Branch(branch) => Some(branch),
            _ => None,
        }
    }
}
