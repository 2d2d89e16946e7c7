//! Field descriptor resolution.
//!
//! Serde hands a data format exactly one string per struct field: the field
//! name, after any `#[serde(rename = "...")]` has been applied. This crate
//! reads that string as an opaque tag carrying the field's properties
//! metadata, the same comma-separated grammar the classic `.properties`
//! binders use:
//!
//! - the first token, when non-empty, is the effective key segment;
//! - `omitempty` elides the field on encode when its value is empty;
//! - a first token of exactly `-` makes the field invisible in both
//!   directions;
//! - unknown option tokens are ignored for forward compatibility.
//!
//! A field without a rename carries no options and keeps its declared name.
//!
//! ## Examples
//!
//! ```rust
//! use serde_props::to_string;
//!
//! #[derive(serde::Serialize)]
//! struct Config {
//!     #[serde(rename = "serverName")]
//!     name: String,
//!     #[serde(rename = "retries,omitempty")]
//!     retries: u32,
//!     #[serde(rename = "-")]
//!     secret: String,
//! }
//!
//! let config = Config {
//!     name: "alpha".into(),
//!     retries: 0,
//!     secret: "hunter2".into(),
//! };
//! assert_eq!(to_string(&config).unwrap(), "serverName=alpha\n");
//! ```

/// The parsed form of a field's tag string.
///
/// `name` is the effective key segment: the override when the tag supplies
/// one, else the declared field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag<'a> {
    pub name: &'a str,
    pub omit_empty: bool,
    pub skip: bool,
}

impl<'a> FieldTag<'a> {
    /// Parses a raw field name as a properties tag.
    ///
    /// The parse is pure and stateless; unknown options are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::FieldTag;
    ///
    /// let tag = FieldTag::parse("port,omitempty");
    /// assert_eq!(tag.name, "port");
    /// assert!(tag.omit_empty);
    /// assert!(!tag.skip);
    ///
    /// assert!(FieldTag::parse("-").skip);
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let mut tokens = raw.split(',');
        let first = tokens.next().unwrap_or("");

        if first == "-" {
            return FieldTag {
                name: first,
                omit_empty: false,
                skip: true,
            };
        }

        let mut omit_empty = false;
        for token in tokens {
            // Unknown options fall through untouched.
            if token == "omitempty" {
                omit_empty = true;
            }
        }

        FieldTag {
            name: first,
            omit_empty,
            skip: false,
        }
    }
}

/// Resolves a struct's static field list into `(raw, tag)` pairs, dropping
/// skipped fields.
///
/// The raw string is kept alongside the parsed tag because serde's derived
/// `Deserialize` impls match map keys against the raw field string, not the
/// effective name.
pub(crate) fn resolve_fields(
    fields: &'static [&'static str],
) -> Vec<(&'static str, FieldTag<'static>)> {
    fields
        .iter()
        .map(|raw| (*raw, FieldTag::parse(raw)))
        .filter(|(_, tag)| !tag.skip)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let tag = FieldTag::parse("name");
        assert_eq!(tag.name, "name");
        assert!(!tag.omit_empty);
        assert!(!tag.skip);
    }

    #[test]
    fn test_rename_with_omitempty() {
        let tag = FieldTag::parse("userName,omitempty");
        assert_eq!(tag.name, "userName");
        assert!(tag.omit_empty);
    }

    #[test]
    fn test_omitempty_without_rename() {
        // An empty first token leaves the override unset.
        let tag = FieldTag::parse(",omitempty");
        assert_eq!(tag.name, "");
        assert!(tag.omit_empty);
    }

    #[test]
    fn test_skip_marker() {
        assert!(FieldTag::parse("-").skip);
        // Only a tag that is exactly "-" in its first token skips.
        assert!(!FieldTag::parse("-x").skip);
    }

    #[test]
    fn test_unknown_options_ignored() {
        let tag = FieldTag::parse("key,frobnicate,omitempty,whatever");
        assert_eq!(tag.name, "key");
        assert!(tag.omit_empty);
    }

    #[test]
    fn test_resolve_drops_skipped() {
        let resolved = resolve_fields(&["a", "-", "b,omitempty"]);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].1.name, "a");
        assert_eq!(resolved[1].0, "b,omitempty");
        assert_eq!(resolved[1].1.name, "b");
    }
}
