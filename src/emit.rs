// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Result;
use crate::nest::{nest, Leaf, Node, Tree};

/// Serialize a [`Tree`] to YAML lines, wrapping long values.
///
/// Values containing line breaks come out as literal blocks (`|-`), single
/// lines longer than the configured width as folded blocks (`>-`) wrapped at
/// word boundaries, everything else inline:
///
/// ```yaml
/// story:
///   intro: |-
///     Deep in the forest,
///     something stirs.
///   outro: >-
///     A rather long single line of text that would be unpleasant to scroll
///     past in an editor.
///   the_end: That's all!
/// ```
///
/// A node's own value, when it survives collapsing because the node also has
/// real children, is written first under the literal key `.`.
///
/// This struct mainly stores the options so they are easier to set/pass than
/// arguments threaded through every recursive call.
pub struct Emitter<'e> {
    width: usize,
    indent: &'e str,
}

impl<'e> Emitter<'e> {
    /// Creates a new Emitter with default values (width 80, two-space indent)
    pub fn new() -> Self {
        Emitter {
            width: 80,
            indent: "  ",
        }
    }

    /// Change the width above which single-line values are folded. Default: 80.
    ///
    /// The width is counted in characters, and also bounds the wrapped lines
    /// themselves, except for a single word longer than the whole width, which
    /// is left unbroken.
    ///
    /// # Example
    ///
    /// ```
    /// let e = yamlang::Emitter::new()
    ///     .width(60);
    /// ```
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Change the indent. Default: 2 spaces.
    ///
    /// Used both for nesting levels and for the content of block scalars.
    ///
    /// # Example
    ///
    /// ```
    /// let e = yamlang::Emitter::new()
    ///     .indent("    ");
    /// ```
    pub fn indent(mut self, indent: &'e str) -> Self {
        self.indent = indent;
        self
    }

    /// Serialize a (collapsed) tree to an ordered sequence of lines.
    ///
    /// # Example
    ///
    /// ```
    /// let data = serde_json::from_str(r#"{"menu.quit": "Quit"}"#)?;
    /// let tree = yamlang::nest(&data)?.collapse();
    /// let lines = yamlang::Emitter::new().apply(&tree);
    /// assert_eq!(lines, vec!["menu:", "  quit: Quit"]);
    /// # Ok::<(), yamlang::Error>(())
    /// ```
    pub fn apply(self: &Self, tree: &Tree) -> Vec<String> {
        let mut lines = vec![];
        self.emit_tree(tree, "", &mut lines);
        lines
    }

    /// Run the whole conversion on a flat JSON table: nest the dotted keys,
    /// collapse, serialize, and join the lines (no trailing newline).
    ///
    /// # Example
    ///
    /// ```
    ///         let s = r#"
    /// {
    ///     "block.example.oak": "Oak",
    ///     "block.example.oak.hint": "It grows"
    /// }
    /// "#;
    ///         let expected = r#"block:
    ///   example:
    ///     oak:
    ///       .: Oak
    ///       hint: It grows"#;
    ///         let actual = yamlang::Emitter::new().apply_str(s)?;
    ///         assert_eq!(actual, expected);
    /// # Ok::<(), yamlang::Error>(())
    /// ```
    pub fn apply_str(self: &Self, s: &str) -> Result<String> {
        let data: serde_json::Map<String, serde_json::Value> = serde_json::from_str(s)?;
        let tree = nest(&data)?.collapse();
        Ok(self.apply(&tree).join("\n"))
    }

    fn emit_tree(&self, tree: &Tree, indent: &str, lines: &mut Vec<String>) {
        if let Some(ref leaf) = tree.value {
            self.emit_leaf(".", leaf, indent, lines);
        }
        for (key, node) in &tree.children {
            match node {
                Node::Leaf(leaf) => self.emit_leaf(key, leaf, indent, lines),
                Node::Tree(inner) => {
                    lines.push(format!("{indent}{key}:"));
                    self.emit_tree(inner, &format!("{indent}{}", self.indent), lines);
                }
            }
        }
    }

    fn emit_leaf(&self, key: &str, leaf: &Leaf, indent: &str, lines: &mut Vec<String>) {
        let value = match leaf {
            // Not a string: keep it visible in the output rather than fail
            Leaf::Other(value) => {
                lines.push(format!("{indent}{key}: ${value}"));
                return;
            }
            Leaf::Text(value) => value,
        };
        let split: Vec<&str> = value.lines().collect();
        if split.len() > 1 {
            lines.push(format!("{indent}{key}: |-"));
            for line in split {
                lines.push(format!("{indent}{}{line}", self.indent));
            }
        } else if value.chars().count() > self.width {
            lines.push(format!("{indent}{key}: >-"));
            for line in wrap(value, self.width) {
                lines.push(format!("{indent}{}{line}", self.indent));
            }
        } else {
            lines.push(format!("{indent}{key}: {value}"));
        }
    }
}

/// Greedy word-wrap: break only at whitespace, except that a single word
/// longer than `width` gets a line of its own, unbroken.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![];
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
