// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.


//! Convert flat translation tables to nested YAML, and back.
//!
//! Minecraft-style translation files are flat JSON tables where every key
//! spells out its whole dotted path:
//!
//! ```json
//! {
//!     "item.example.wand": "Magic Wand",
//!     "item.example.wand.tooltip": "Almost certainly does nothing"
//! }
//! ```
//!
//! Past a few dozen entries this gets tedious to maintain (well, it did for
//! me, hence this crate). The same table reads much better nested:
//!
//! ```yaml
//! item:
//!   example:
//!     wand:
//!       .: Magic Wand
//!       tooltip: Almost certainly does nothing
//! ```
//!
//! (The `.` key holds the value of a key that is also the prefix of longer
//! keys.)
//!
//! The [`Emitter`] methods do this conversion, putting long and multi-line
//! values in YAML block scalars on the way:
//!
//! ```
//! let s = r#"{"menu.title": "My Mod", "menu.quit": "Quit"}"#;
//! let yaml = yamlang::Emitter::new().apply_str(s)?;
//! assert_eq!(yaml, "menu:\n  title: My Mod\n  quit: Quit");
//! # Ok::<(), yamlang::Error>(())
//! ```
//!
//! The [`Flattener`] methods undo it, so the nested files can be turned back
//! into the flat tables the game actually wants:
//!
//! ```
//! let yaml = "menu:\n  title: My Mod\n  quit: Quit";
//! let flat = yamlang::Flattener::new().from_str(yaml)?;
//! assert_eq!(flat, r#"{"menu.title":"My Mod","menu.quit":"Quit"}"#);
//! # Ok::<(), yamlang::Error>(())
//! ```
//!
//! The intermediate tree is public too, if you need to run the steps
//! separately: see [`nest`] and [`Tree::collapse`].


mod error;
mod nest;
mod emit;
mod flatten;

pub use error::{Result, Error};
pub use nest::{nest, Leaf, Node, Tree};
pub use emit::Emitter;
pub use flatten::Flattener;
