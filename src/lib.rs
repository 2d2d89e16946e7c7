//! # serde_props
//!
//! A Serde data format for the classic line-oriented `.properties` shape:
//! one `KEY=VALUE` pair per line, `#` comments, and dotted keys expressing
//! hierarchy.
//!
//! ## Key Features
//!
//! - **Hierarchical keys**: nested structs flatten to dotted keys
//!   (`server.host=localhost`), maps to one line per entry, sequences to
//!   indexed or comma-joined lines
//! - **Serde Compatible**: works with existing Rust types via
//!   `#[derive(Serialize, Deserialize)]`
//! - **Field tags**: name overrides, `omitempty`, and a `-` skip marker ride
//!   in `#[serde(rename = "...")]`, the way `.properties` binders in other
//!   ecosystems use struct tags
//! - **Forward compatible**: unknown keys are ignored on decode by default,
//!   with an opt-in strict mode
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_props = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_props::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     name: String,
//!     age: u32,
//!     active: bool,
//! }
//!
//! let user = User {
//!     name: "John Doe".to_string(),
//!     age: 30,
//!     active: true,
//! };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "name=John Doe\nage=30\nactive=true\n");
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Nested Records and Mappings
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_props::from_str;
//! use std::collections::HashMap;
//!
//! #[derive(Deserialize, Debug)]
//! struct Config {
//!     server: Server,
//!     #[serde(default)]
//!     props: HashMap<String, String>,
//! }
//!
//! #[derive(Deserialize, Debug)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let config: Config = from_str(
//!     "# deployment config\n\
//!      server.host=10.0.0.1\n\
//!      server.port=8080\n\
//!      props.editor=vscode\n",
//! )
//! .unwrap();
//!
//! assert_eq!(config.server.port, 8080);
//! assert_eq!(config.props["editor"], "vscode");
//! ```
//!
//! ### Dynamic Values with the props! Macro
//!
//! ```rust
//! use serde_props::{props, to_string, Value};
//!
//! let data = props!({
//!     "name": "Alice",
//!     "tags": ["rust", "serde"]
//! });
//!
//! assert!(data.is_record());
//! assert_eq!(to_string(&data).unwrap(), "name=Alice\ntags[0]=rust\ntags[1]=serde\n");
//! ```
//!
//! ## Format
//!
//! See the [`format`] module for the full text format specification,
//! including the sequence wire forms and the field tag grammar.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Proper error propagation with `Result` types
//! - No panics in public API (except for logic errors that indicate bugs)

pub mod de;
pub mod error;
pub mod field;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use field::FieldTag;
pub use map::PropMap;
pub use options::{PropsOptions, SequenceStyle};
pub use ser::{Serializer, ValueSerializer};
pub use value::{Number, Value};

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to properties text.
///
/// The root value must be a record (struct) or a string-keyed map.
///
/// # Examples
///
/// ```rust
/// use serde_props::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "x=1\ny=2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g., unsupported
/// leaf types, or a scalar at the root).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, PropsOptions::default())
}

/// Serialize any `T: Serialize` to properties text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_props::{to_string_with_options, PropsOptions, SequenceStyle};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Data { tags: Vec<String> }
///
/// let data = Data { tags: vec!["a".into(), "b".into()] };
/// let options = PropsOptions::new().with_sequence_style(SequenceStyle::CommaJoined);
/// assert_eq!(to_string_with_options(&data, options).unwrap(), "tags=a,b\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: PropsOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` to a properties byte vector.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    Ok(to_string(value)?.into_bytes())
}

/// Convert any `T: Serialize` to a [`Value`] tree.
///
/// Useful for working with property data dynamically when the structure
/// isn't known at compile time. Field tags (renames, `omitempty`, skip
/// markers) are already applied in the returned tree.
///
/// # Examples
///
/// ```rust
/// use serde_props::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_record());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer as properties text.
///
/// # Examples
///
/// ```rust
/// use serde_props::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x=1\ny=2\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, PropsOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: PropsOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from properties text.
///
/// # Examples
///
/// ```rust
/// use serde_props::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x=1\ny=2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error on malformed lines, values that cannot be parsed into
/// the target scalar type, or key paths that disagree with the target's
/// shape. Unknown top-level keys are ignored, not errors.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_str_with_options(s, PropsOptions::default())
}

/// Deserialize an instance of type `T` from properties text with custom
/// options.
///
/// # Examples
///
/// ```rust
/// use serde_props::{from_str_with_options, Error, PropsOptions};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug)]
/// struct Point { x: i32 }
///
/// let options = PropsOptions::new().with_deny_unknown_keys(true);
/// let result: Result<Point, Error> = from_str_with_options("x=1\nz=3", options);
/// assert!(matches!(result, Err(Error::UnknownKey { .. })));
/// ```
///
/// # Errors
///
/// As [`from_str`], plus unknown-key errors when strict mode is enabled.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: PropsOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str_with_options(s, options);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from properties bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or cannot be decoded
/// into `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an I/O stream of properties
/// text.
///
/// # Examples
///
/// ```rust
/// use serde_props::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x=1\ny=2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the data cannot be decoded into
/// `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}
