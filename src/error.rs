//! Error types for properties serialization and deserialization.
//!
//! ## Error Categories
//!
//! - **Invalid lines**: a non-comment line with no `=` separator
//! - **Invalid values**: text that cannot be parsed into the target scalar
//! - **Shape mismatches**: a key path that disagrees with the field's shape
//!   (a dotted path into a scalar, or a bare key for a nested record)
//! - **Unsupported types**: leaves outside the scalar universe, or roots
//!   that are not records
//! - **I/O errors**: reader/writer failures from the `to_writer`/`from_reader`
//!   adapters
//!
//! Unknown top-level keys are *not* errors by default; see
//! [`PropsOptions::with_deny_unknown_keys`](crate::PropsOptions::with_deny_unknown_keys)
//! for the strict mode.
//!
//! ## Examples
//!
//! ```rust
//! use serde_props::{from_str, Error};
//!
//! #[derive(serde::Deserialize, Debug)]
//! struct Config { port: u16 }
//!
//! let result: Result<Config, Error> = from_str("port=not-a-number");
//! assert!(matches!(result, Err(Error::InvalidValue { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding or decoding
/// properties text.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A non-empty, non-comment line with no `=` separator
    #[error("invalid line {line}: missing '=' separator in {content:?}")]
    InvalidLine { line: usize, content: String },

    /// A value that could not be parsed into the target scalar type
    #[error("invalid value for key {key:?}: cannot parse {value:?} as {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },

    /// A key path whose shape disagrees with the field it resolves to
    #[error("shape mismatch at key {key:?}: {detail}")]
    ShapeMismatch { key: String, detail: String },

    /// A top-level key that matches no field, in strict mode only
    #[error("unknown key {key:?}")]
    UnknownKey { key: String },

    /// A value whose type is outside the properties universe
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error, raised by serde or by custom hook implementations
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid-line error for a line without a `=` separator.
    ///
    /// Line numbers are 1-based and count every input line, including blank
    /// and comment lines.
    pub fn invalid_line(line: usize, content: &str) -> Self {
        Error::InvalidLine {
            line,
            content: content.to_string(),
        }
    }

    /// Creates an invalid-value error identifying the key and the offending
    /// text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::Error;
    ///
    /// let err = Error::invalid_value("age", "abc", "integer");
    /// assert!(err.to_string().contains("age"));
    /// assert!(err.to_string().contains("abc"));
    /// ```
    pub fn invalid_value(key: &str, value: &str, expected: &str) -> Self {
        Error::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Creates a shape-mismatch error for a key path that disagrees with the
    /// target field's shape.
    pub fn shape_mismatch(key: &str, detail: &str) -> Self {
        Error::ShapeMismatch {
            key: key.to_string(),
            detail: detail.to_string(),
        }
    }

    /// Creates an unknown-key error (strict mode).
    pub fn unknown_key(key: &str) -> Self {
        Error::UnknownKey {
            key: key.to_string(),
        }
    }

    /// Creates an unsupported-type error for values outside the scalar
    /// universe (or invalid roots).
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
