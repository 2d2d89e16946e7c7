//! Configuration options for properties encoding and decoding.
//!
//! This module provides:
//!
//! - [`PropsOptions`]: the main configuration struct
//! - [`SequenceStyle`]: choice of wire form for sequence fields
//!
//! ## Examples
//!
//! ```rust
//! use serde_props::{to_string_with_options, PropsOptions, SequenceStyle};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { tags: Vec<String> }
//!
//! let data = Data { tags: vec!["a".into(), "b".into()] };
//!
//! let options = PropsOptions::new().with_sequence_style(SequenceStyle::CommaJoined);
//! let text = to_string_with_options(&data, options).unwrap();
//! assert_eq!(text, "tags=a,b\n");
//! ```

/// Wire form for sequence fields on encode.
///
/// The decoder accepts both forms regardless of this setting.
///
/// # Examples
///
/// ```rust
/// use serde_props::SequenceStyle;
///
/// assert_eq!(SequenceStyle::default(), SequenceStyle::Indexed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SequenceStyle {
    /// One line per element with an indexed key: `tags[0]=a`, `tags[1]=b`.
    #[default]
    Indexed,
    /// A single comma-joined line: `tags=a,b`.
    CommaJoined,
}

/// Configuration options for encoding and decoding.
///
/// # Examples
///
/// ```rust
/// use serde_props::{PropsOptions, SequenceStyle};
///
/// // Defaults: indexed sequences, unknown keys ignored
/// let options = PropsOptions::new();
///
/// // Custom configuration
/// let options = PropsOptions::new()
///     .with_sequence_style(SequenceStyle::CommaJoined)
///     .with_deny_unknown_keys(true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PropsOptions {
    pub sequence_style: SequenceStyle,
    pub deny_unknown_keys: bool,
}

impl PropsOptions {
    /// Creates the default options: indexed sequence lines on encode,
    /// unknown top-level keys ignored on decode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wire form used for sequence fields on encode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::{PropsOptions, SequenceStyle};
    ///
    /// let options = PropsOptions::new().with_sequence_style(SequenceStyle::CommaJoined);
    /// assert_eq!(options.sequence_style, SequenceStyle::CommaJoined);
    /// ```
    #[must_use]
    pub fn with_sequence_style(mut self, style: SequenceStyle) -> Self {
        self.sequence_style = style;
        self
    }

    /// Makes the decoder reject top-level keys that match no field.
    ///
    /// The default policy silently ignores unknown keys so that consumers
    /// stay forward compatible with inputs written by newer producers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::PropsOptions;
    ///
    /// let options = PropsOptions::new().with_deny_unknown_keys(true);
    /// assert!(options.deny_unknown_keys);
    /// ```
    #[must_use]
    pub fn with_deny_unknown_keys(mut self, deny: bool) -> Self {
        self.deny_unknown_keys = deny;
        self
    }
}
