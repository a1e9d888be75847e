// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::{Result, Error};

use indexmap::IndexMap;
use serde_json::Value;

/// A terminal value in a [`Tree`].
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    /// A plain translation string.
    Text(String),
    /// Any other scalar found in the input (number, boolean, null). Kept
    /// around so the serializer can mark it in the output instead of failing.
    Other(Value),
}

/// A child of a [`Tree`]: either another level of nesting or a terminal value.
///
/// Nesting only ever produces `Node::Tree` children; `Node::Leaf` appears when
/// collapsing replaces a node by its own value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Leaf),
    Tree(Tree),
}

/// Nested representation of a flat translation table.
///
/// `value` holds the value attached directly at this node's path, for dotted
/// keys that are also prefixes of longer keys (`"a"` when `"a.b"` exists too).
/// `children` keeps first-insertion order, so the serialized document lists
/// siblings in the order the flat table introduced them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    pub value: Option<Leaf>,
    pub children: IndexMap<String, Node>,
}

/// Nest a flat table of dotted keys into a [`Tree`].
///
/// E.g. `foo.bar.baz: Hello` will convert to
///
/// ```yaml
/// foo:
///   bar:
///     baz: Hello
/// ```
///
/// String values become the self-value of the node their key walks to. Object
/// values are descended into, so a partially nested input still ends up in the
/// same tree. List values are refused. Anything else (numbers, booleans,
/// nulls) is kept as a non-string leaf for the serializer to mark.
///
/// Two keys walking to the same node (e.g. `"a.b"` next to `{"a": {"b": ...}}`)
/// keep the value of whichever came last.
///
/// # Example
///
/// ```
///         let data = serde_json::from_str(r#"
/// {
///     "menu.title": "My menu",
///     "menu.quit": "Quit"
/// }
/// "#)?;
///         let tree = yamlang::nest(&data)?;
///         let menu = &tree.children["menu"];
///         assert!(matches!(menu, yamlang::Node::Tree(t) if t.children.len() == 2));
/// # Ok::<(), yamlang::Error>(())
/// ```
pub fn nest(data: &serde_json::Map<String, Value>) -> Result<Tree> {
    let mut root = Tree::default();
    for (key, value) in data {
        attach(&mut root, key, value)?;
    }
    Ok(root)
}

/// Walk the tree one level per key segment, creating empty nodes on the way,
/// and attach the value at the node the full key designates.
fn attach(tree: &mut Tree, key: &str, value: &Value) -> Result<()> {
    let mut entry = tree;
    for step in key.split('.') {
        let node = entry
            .children
            .entry(step.to_owned())
            .or_insert_with(|| Node::Tree(Tree::default()));
        entry = match node {
            Node::Tree(inner) => inner,
            // Leaves only appear once collapsing has run, on a finished tree
            Node::Leaf(_) => unreachable!(),
        };
    }
    match value {
        Value::String(s) => entry.value = Some(Leaf::Text(s.clone())),
        Value::Object(m) => {
            for (k, v) in m {
                attach(entry, k, v)?;
            }
        }
        Value::Array(_) => return Err(Error::Nest(format!("list entries are not allowed (key '{key}')"))),
        other => entry.value = Some(Leaf::Other(other.clone())),
    }
    Ok(())
}

impl Tree {
    /// Collapse nodes that hold only a self-value into that value, bottom-up.
    ///
    /// A node created for a dotted key that turned out not to be the prefix of
    /// any longer key has a self-value and no children; keeping it as a node
    /// would serialize as a spurious level of nesting. A node with both a
    /// self-value and real children is left alone.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlang::{Leaf, Node};
    ///
    /// let data = serde_json::from_str(r#"{"a.b": "hello"}"#)?;
    /// let tree = yamlang::nest(&data)?.collapse();
    /// let a = match &tree.children["a"] {
    ///     Node::Tree(t) => t,
    ///     _ => unreachable!(),
    /// };
    /// assert_eq!(a.children["b"], Node::Leaf(Leaf::Text("hello".to_owned())));
    /// # Ok::<(), yamlang::Error>(())
    /// ```
    pub fn collapse(mut self) -> Self {
        self.children = self
            .children
            .into_iter()
            .map(|(key, node)| (key, node.collapse()))
            .collect();
        self
    }
}

impl Node {
    fn collapse(self) -> Self {
        match self {
            Node::Tree(tree) => {
                let mut tree = tree.collapse();
                match tree.value.take() {
                    Some(leaf) if tree.children.is_empty() => Node::Leaf(leaf),
                    value => {
                        tree.value = value;
                        Node::Tree(tree)
                    }
                }
            }
            leaf => leaf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(s: &str) -> serde_json::Map<String, Value> {
        serde_json::from_str(s).unwrap()
    }

    fn subtree<'t>(tree: &'t Tree, key: &str) -> &'t Tree {
        match &tree.children[key] {
            Node::Tree(inner) => inner,
            other => panic!("expected a tree under '{key}', got {other:?}"),
        }
    }

    #[test]
    fn nest_simple() {
        let tree = nest(&table(r#"{"a.b": "hello"}"#)).unwrap();
        let a = subtree(&tree, "a");
        assert_eq!(a.value, None);
        let b = subtree(a, "b");
        assert_eq!(b.value, Some(Leaf::Text("hello".to_owned())));
        assert!(b.children.is_empty());
    }

    #[test]
    fn nest_value_and_prefix() {
        let tree = nest(&table(r#"{"a": "x", "a.b": "y"}"#)).unwrap();
        let a = subtree(&tree, "a");
        assert_eq!(a.value, Some(Leaf::Text("x".to_owned())));
        assert_eq!(a.children.len(), 1);
        let b = subtree(a, "b");
        assert_eq!(b.value, Some(Leaf::Text("y".to_owned())));
    }

    #[test]
    fn nest_object_value() {
        // A partially nested input walks to the same nodes as its dotted form
        let dotted = nest(&table(r#"{"a.b": "x", "a.c": "y"}"#)).unwrap();
        let nested = nest(&table(r#"{"a": {"b": "x", "c": "y"}}"#)).unwrap();
        assert_eq!(dotted, nested);
    }

    #[test]
    fn nest_collision_last_wins() {
        let tree = nest(&table(r#"{"a": {"b": "old"}, "a.b": "new"}"#)).unwrap();
        let b = subtree(subtree(&tree, "a"), "b");
        assert_eq!(b.value, Some(Leaf::Text("new".to_owned())));
    }

    #[test]
    fn nest_refuses_lists() {
        let res = nest(&table(r#"{"a.b": ["x", "y"]}"#));
        assert!(res.is_err());
    }

    #[test]
    fn nest_keeps_other_scalars() {
        let tree = nest(&table(r#"{"a": 5}"#)).unwrap();
        let a = subtree(&tree, "a");
        assert_eq!(a.value, Some(Leaf::Other(Value::from(5))));
    }

    #[test]
    fn nest_keeps_insertion_order() {
        let tree = nest(&table(r#"{"b": "1", "a": "2", "c": "3"}"#)).unwrap();
        let keys: Vec<&str> = tree.children.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn collapse_simple() {
        let tree = nest(&table(r#"{"a.b": "hello"}"#)).unwrap().collapse();
        let a = subtree(&tree, "a");
        assert_eq!(a.children["b"], Node::Leaf(Leaf::Text("hello".to_owned())));
    }

    #[test]
    fn collapse_keeps_value_and_prefix() {
        let tree = nest(&table(r#"{"a": "x", "a.b": "y"}"#)).unwrap().collapse();
        let a = subtree(&tree, "a");
        assert_eq!(a.value, Some(Leaf::Text("x".to_owned())));
        assert_eq!(a.children["b"], Node::Leaf(Leaf::Text("y".to_owned())));
    }

    #[test]
    fn collapse_never_replaces_root() {
        let tree = nest(&table(r#"{"a": "x"}"#)).unwrap().collapse();
        assert_eq!(tree.value, None);
        assert_eq!(tree.children["a"], Node::Leaf(Leaf::Text("x".to_owned())));
    }

    #[test]
    fn collapse_non_string_self_value() {
        let tree = nest(&table(r#"{"a": true}"#)).unwrap().collapse();
        assert_eq!(tree.children["a"], Node::Leaf(Leaf::Other(Value::from(true))));
    }
}
