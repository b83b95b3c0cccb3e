//! Bind environment variables to struct fields
//!
//! `envbind` reads the environment once, at startup, and populates a typed
//! configuration struct from it. Each field declares the variable it comes
//! from, whether it is mandatory, and an optional default in a single
//! annotation:
//!
//! ```text
//! #[env("<name>;<mandatory|optional>;<default>")]
//! ```
//!
//! Trailing segments may be omitted. A missing mode means `optional`; a
//! missing or empty default means there is none.
//!
//! # Resolution
//!
//! For every annotated field, in declaration order:
//!
//! 1. The environment value of `application_name + separator + name`, if set
//!    and not empty
//! 2. Otherwise the declared default
//! 3. Otherwise an error for `mandatory` fields, or no change for `optional` ones
//!
//! Values are converted to the field's type before anything is written. If any
//! field fails, the whole call fails and the struct is left as it was.
//!
//! # Supported field types
//!
//! - Integers (`i8` to `i128`, `u8` to `u128`, `isize`, `usize`), base 10
//! - `String`, verbatim
//! - `bool`, `true` or `false`
//! - `Option<T>` of any of the above
//!
//! Annotating a field of any other type is a compile error.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use envbind::{Binder, EnvBind};
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     #[env("PORT;mandatory")]
//!     pub port: u16,
//!
//!     #[env("HOST;optional;localhost")]
//!     pub host: String,
//!
//!     // Not annotated: never touched
//!     pub started_at: Option<u64>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = HashMap::from([("demo_PORT".to_string(), "9090".to_string())]);
//!
//! let mut binder = Binder::with_source(env);
//! binder.set_application_name("demo").set_separator("_");
//!
//! let mut config = Config::default();
//! binder.map(&mut config)?;
//! assert_eq!(config.port, 9090);
//! assert_eq!(config.host, "localhost");
//! # Ok(())
//! # }
//! ```
//!
//! `Binder::new()` reads the process environment. The derive also adds a
//! `bind_env(&mut self)` shortcut for that case.

#![deny(missing_docs)]

mod binder;
mod error;
mod resolve;
mod source;
mod tag;
mod value;

pub use binder::{Bind, Binder, NamingConfig};
pub use envbind_derive::EnvBind;
pub use error::{BindError, TagError};
pub use source::{EnvRecords, EnvSnapshot, EnvSource, ProcessEnv};
pub use tag::{parse_tag, FieldTag};
pub use value::{EnvValue, FieldKind, FieldSlot};
