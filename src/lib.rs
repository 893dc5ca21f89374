//! # jsonic
//!
//! A self-contained value library for a lenient JSON-superset grammar.
//!
//! ## What does "lenient" mean?
//!
//! The grammar accepts everything standard JSON does, plus the forms people
//! actually type into config files and saved documents:
//!
//! - `#`, `//`, and `/* ... */` comments anywhere between tokens
//! - single- or double-quoted strings
//! - case-insensitive `true`, `false`, `null`
//!
//! ## Key Features
//!
//! - **Precise diagnostics**: every parse error carries the line and column
//!   at which it was detected
//! - **Exact round-trips**: `parse(&to_string(&v)).unwrap() == v` for every
//!   constructible finite [`Value`]
//! - **Declarative object mapping**: record types declare compile-time
//!   field-to-key bindings instead of relying on runtime reflection
//! - **Serde interop**: [`Value`] implements `Serialize`/`Deserialize`, so
//!   parsed documents can cross into any serde format
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonic::{parse, to_string, Value};
//!
//! let value = parse(
//!     "{
//!         // per-user settings
//!         'theme': 'dark',
//!         'retries': 3
//!     /* end */}",
//! )
//! .unwrap();
//!
//! let settings = value.as_object().unwrap();
//! assert_eq!(settings.get("retries"), Some(&Value::Integer(3)));
//!
//! // Writing is always compact, double-quoted standard JSON.
//! assert_eq!(to_string(&value), r#"{"theme":"dark","retries":3}"#);
//! ```
//!
//! ### Mapping application records
//!
//! Types implement [`Mappable`] to convert to and from namespaced object
//! values; see the [`mapper`] module for a full example.
//!
//! ```rust
//! use jsonic::{jsonic, load_new, parse, save, to_string};
//! # use jsonic::{FieldBinding, Mappable, Value};
//! # #[derive(Clone, Default, PartialEq, Debug)]
//! # struct Item { name: String }
//! # impl Mappable for Item {
//! #     const TYPE_NAME: &'static str = "Item";
//! #     fn bindings() -> Vec<FieldBinding<Self>> {
//! #         vec![FieldBinding::new(
//! #             "Name",
//! #             |i| Value::from(i.name.clone()),
//! #             |i, v| { i.name = v.as_string()?.to_string(); Ok(()) },
//! #         )]
//! #     }
//! # }
//!
//! let item = Item { name: "Coffee".to_string() };
//! let text = to_string(&save(&item));
//! let restored: Item = load_new(&parse(&text).unwrap()).unwrap();
//! assert_eq!(item, restored);
//! ```
//!
//! ## Scope
//!
//! The library is pure computation over in-memory text and values: no I/O,
//! no logging, no concurrency, no schema validation beyond the grammar.
//! Callers hand in a decoded string and receive a [`Value`] or an [`Error`];
//! the reverse path produces a `String` the caller stores wherever it likes.

pub mod error;
pub mod macros;
pub mod map;
pub mod mapper;
pub mod parse;
pub mod value;
pub mod write;

pub use error::{Error, Result};
pub use map::JsonMap;
pub use mapper::{load, load_new, save, save_into, FieldBinding, Mappable};
pub use parse::{parse, Parser, MAX_DEPTH};
pub use value::{Kind, Value};
pub use write::to_string;
