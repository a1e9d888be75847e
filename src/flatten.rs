// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::{Result, Error};

use serde_yaml::Mapping;
use serde_yaml::Value;

/// Flatten a nested YAML map back into a flat table of dotted keys.
///
/// E.g.
///
/// ```yaml
/// foo:
///     bar:
///         baz: Hello
/// ```
///
/// will convert to `foo.bar.baz: Hello`. A `.` key attaches its value to the
/// parent's own path, undoing what [`Emitter`](crate::Emitter) writes for keys
/// that are also prefixes of longer keys:
///
/// ```yaml
/// wand:
///     .: Magic Wand
///     tooltip: Does nothing
/// ```
///
/// gives the two entries `wand` and `wand.tooltip`.
///
/// # Example
///
/// ```
///         let yaml = r#"
/// menu:
///     title: My Mod
///     quit: Quit
/// "#;
///         let flat = yamlang::Flattener::new()
///             .from_str(yaml)?;
///         assert_eq!(flat, r#"{"menu.title":"My Mod","menu.quit":"Quit"}"#);
/// # Ok::<(), yamlang::Error>(())
/// ```
///
/// This struct mainly stores the options so they are easier to set/pass than
/// tons of arguments to a single function
pub struct Flattener {
    allow_lists: bool,
    allow_duplicates: bool,
    pretty: bool,
}

impl Flattener {
    /// Creates a new Flattener with default values
    pub fn new() -> Self {
        Flattener {
            allow_lists: false,
            allow_duplicates: false,
            pretty: false,
        }
    }

    /// Set to `true` to keep list values as JSON arrays in the flat table
    /// (default is `false`, which refuses them).
    ///
    /// Plain translation tables have no business containing lists, but some
    /// rich-text extensions do use them, so it's an option.
    ///
    /// # Example
    ///
    /// ```
    /// let flattener = yamlang::Flattener::new()
    ///     .allow_lists(true);
    /// ```
    pub fn allow_lists(mut self, allow_lists: bool) -> Self {
        self.allow_lists = allow_lists;
        self
    }

    /// Set to `true` to let two nested entries resolving to the same flat key
    /// overwrite each other, last one winning (default is `false`, which
    /// refuses the second one).
    ///
    /// # Example
    ///
    /// ```
    /// let flattener = yamlang::Flattener::new()
    ///     .allow_duplicates(true);
    /// ```
    pub fn allow_duplicates(mut self, allow_duplicates: bool) -> Self {
        self.allow_duplicates = allow_duplicates;
        self
    }

    /// Set to `true` to indent the JSON produced by [`from_str`](Self::from_str)
    /// (default is `false`: compact output).
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Flatten an already-parsed YAML value into a flat JSON map.
    ///
    /// # Example
    ///
    /// ```
    /// let value: serde_yaml::Value = serde_yaml::from_str("a:\n  b: hello")?;
    /// let flat = yamlang::Flattener::new()
    ///     .apply_to_value(&value)?;
    /// assert_eq!(flat["a.b"], "hello");
    /// # Ok::<(), yamlang::Error>(())
    /// ```
    pub fn apply_to_value(self: &Self, value: &Value) -> Result<serde_json::Map<String, serde_json::Value>> {
        let m = value.as_mapping()
            .ok_or(Error::Flatten("not a mapping".into()))?;
        let mut flat = serde_json::Map::new();
        self.flatten_mapping(m, &mut flat, "")?;
        Ok(flat)
    }

    /// Deserialize the string as YAML, flatten it, and serialize the flat
    /// table as JSON.
    pub fn from_str(self: &Self, s: &str) -> Result<String> {
        let value = serde_yaml::from_str(s)?;
        let flat = self.apply_to_value(&value)?;
        let json = if self.pretty {
            serde_json::to_string_pretty(&flat)?
        } else {
            serde_json::to_string(&flat)?
        };
        Ok(json)
    }

    fn flatten_mapping(&self, m: &Mapping, flat: &mut serde_json::Map<String, serde_json::Value>, prefix: &str) -> Result<()> {
        for (key, value) in m {
            let key = key.as_str()
                .ok_or_else(|| Error::Flatten(format!("non-string key under '{prefix}'")))?;
            let full = if prefix.is_empty() {
                key.to_owned()
            } else if key == "." {
                // The value belongs to the prefix itself
                prefix.to_owned()
            } else {
                format!("{prefix}.{key}")
            };
            match value {
                Value::Mapping(inner) => self.flatten_mapping(inner, flat, &full)?,
                Value::String(_) | Value::Bool(_) | Value::Number(_) => {
                    self.insert(flat, full, serde_json::to_value(value)?)?;
                }
                Value::Sequence(_) if self.allow_lists => {
                    self.insert(flat, full, serde_json::to_value(value)?)?;
                }
                Value::Sequence(_) => {
                    return Err(Error::Flatten(format!("list entries are not allowed (key '{full}')")));
                }
                Value::Null => {
                    return Err(Error::Flatten(format!("null entries are not allowed (key '{full}')")));
                }
                Value::Tagged(_) => {
                    return Err(Error::Flatten(format!("tagged entries are not allowed (key '{full}')")));
                }
            }
        }
        Ok(())
    }

    fn insert(&self, flat: &mut serde_json::Map<String, serde_json::Value>, key: String, value: serde_json::Value) -> Result<()> {
        if !self.allow_duplicates && flat.contains_key(&key) {
            return Err(Error::Flatten(format!("duplicate key '{key}'")));
        }
        flat.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::Emitter;
    use pretty_assertions::assert_eq;

    fn flat(s: &str) -> serde_json::Map<String, serde_json::Value> {
        let value: Value = serde_yaml::from_str(s).unwrap();
        Flattener::new().apply_to_value(&value).unwrap()
    }

    #[test]
    fn flatten_simple() {
        let s = r#"
foo:
    bar:
        baz: hello
"#;
        let m = flat(s);
        assert_eq!(m.len(), 1);
        assert_eq!(m["foo.bar.baz"], "hello");
    }

    #[test]
    fn flatten_self_key() {
        let s = r#"
wand:
    .: Magic Wand
    tooltip: Does nothing
"#;
        let m = flat(s);
        assert_eq!(m["wand"], "Magic Wand");
        assert_eq!(m["wand.tooltip"], "Does nothing");
    }

    #[test]
    fn flatten_keeps_scalars() {
        let m = flat("a: 5\nb: true");
        assert_eq!(m["a"], 5);
        assert_eq!(m["b"], true);
    }

    #[test]
    fn duplicates_are_refused() {
        let s = r#"
a:
    b: old
a.b: new
"#;
        let value: Value = serde_yaml::from_str(s).unwrap();
        let res = Flattener::new().apply_to_value(&value);
        assert!(res.is_err());
    }

    #[test]
    fn duplicates_can_overwrite() {
        let s = r#"
a:
    b: old
a.b: new
"#;
        let value: Value = serde_yaml::from_str(s).unwrap();
        let m = Flattener::new()
            .allow_duplicates(true)
            .apply_to_value(&value)
            .unwrap();
        assert_eq!(m["a.b"], "new");
    }

    #[test]
    fn lists_are_refused() {
        let value: Value = serde_yaml::from_str("a:\n  - one\n  - two").unwrap();
        let res = Flattener::new().apply_to_value(&value);
        assert!(res.is_err());
    }

    #[test]
    fn lists_can_be_kept() {
        let value: Value = serde_yaml::from_str("a:\n  - one\n  - two").unwrap();
        let m = Flattener::new()
            .allow_lists(true)
            .apply_to_value(&value)
            .unwrap();
        assert_eq!(m["a"], serde_json::json!(["one", "two"]));
    }

    #[test]
    fn nulls_are_refused() {
        let value: Value = serde_yaml::from_str("a:").unwrap();
        let res = Flattener::new().apply_to_value(&value);
        assert!(res.is_err());
    }

    #[test]
    fn non_string_keys_are_refused() {
        let value: Value = serde_yaml::from_str("1: one").unwrap();
        let res = Flattener::new().apply_to_value(&value);
        assert!(res.is_err());
    }

    #[test]
    fn pretty_output() {
        let json = Flattener::new()
            .pretty(true)
            .from_str("a: hello")
            .unwrap();
        assert_eq!(json, "{\n  \"a\": \"hello\"\n}");
    }

    #[test]
    fn round_trip() {
        let long = vec!["spark"; 20].join(" ");
        let table = format!(
            r#"
{{
    "itemGroup.example": "Example Mod",
    "item.example.wand": "Magic Wand",
    "item.example.wand.tooltip": "{long}",
    "item.example.manual": "Chapter one.\nIn which nothing happens."
}}
"#
        );
        let yaml = Emitter::new().apply_str(&table).unwrap();
        let value: Value = serde_yaml::from_str(&yaml).unwrap();
        let actual = Flattener::new().apply_to_value(&value).unwrap();
        let expected: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&table).unwrap();
        assert_eq!(actual, expected);
    }
}
